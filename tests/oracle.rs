//! Cross-checks against the `crc` crate's catalogue.

use crc::Algorithm as Reference;
use crc_engine::{catalog, Algorithm, Crc, Params, Width};
use proptest::prelude::*;

fn params_of<W: Width + crc::Width>(reference: &Reference<W>) -> Params<W> {
    Params::new(
        reference.poly,
        reference.init,
        reference.refin,
        reference.refout,
        reference.xorout,
    )
}

fn assert_same_params<W: Width + crc::Width>(ours: &Algorithm<W>, reference: &Reference<W>) {
    assert_eq!(ours.params, params_of(reference), "{}", ours.name);
    assert_eq!(ours.check, reference.check, "{}", ours.name);
}

#[test]
fn presets_match_reference_catalogue() {
    assert_same_params(&catalog::CRC_8, &crc::CRC_8_SMBUS);
    assert_same_params(&catalog::CRC_8_MAXIM, &crc::CRC_8_MAXIM_DOW);
    assert_same_params(&catalog::CRC_8_ROHC, &crc::CRC_8_ROHC);
    assert_same_params(&catalog::CRC_16_CCITT_FALSE, &crc::CRC_16_IBM_3740);
    assert_same_params(&catalog::CRC_16_ARC, &crc::CRC_16_ARC);
    assert_same_params(&catalog::CRC_16_KERMIT, &crc::CRC_16_KERMIT);
    assert_same_params(&catalog::CRC_16_MODBUS, &crc::CRC_16_MODBUS);
    assert_same_params(&catalog::CRC_16_USB, &crc::CRC_16_USB);
    assert_same_params(&catalog::CRC_16_XMODEM, &crc::CRC_16_XMODEM);
    assert_same_params(&catalog::CRC_32, &crc::CRC_32_ISO_HDLC);
    assert_same_params(&catalog::CRC_32_BZIP2, &crc::CRC_32_BZIP2);
    assert_same_params(&catalog::CRC_32_C, &crc::CRC_32_ISCSI);
    assert_same_params(&catalog::CRC_32_JAMCRC, &crc::CRC_32_JAMCRC);
    assert_same_params(&catalog::CRC_32_MPEG_2, &crc::CRC_32_MPEG_2);
    assert_same_params(&catalog::CRC_32_POSIX, &crc::CRC_32_CKSUM);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn crc8_agrees_with_reference(
        data in proptest::collection::vec(any::<u8>(), 0..=1024),
        use_table in any::<bool>(),
    ) {
        for reference in [&crc::CRC_8_SMBUS, &crc::CRC_8_MAXIM_DOW, &crc::CRC_8_ROHC] {
            let expected = crc::Crc::<u8>::new(reference).checksum(&data);
            let crc = Crc::new(params_of(reference), use_table);
            prop_assert_eq!(crc.calculate(&data), expected);
        }
    }

    #[test]
    fn crc16_agrees_with_reference(
        data in proptest::collection::vec(any::<u8>(), 0..=1024),
        use_table in any::<bool>(),
    ) {
        for reference in [
            &crc::CRC_16_IBM_3740,
            &crc::CRC_16_ARC,
            &crc::CRC_16_KERMIT,
            &crc::CRC_16_MODBUS,
            &crc::CRC_16_XMODEM,
        ] {
            let expected = crc::Crc::<u16>::new(reference).checksum(&data);
            let crc = Crc::new(params_of(reference), use_table);
            prop_assert_eq!(crc.calculate(&data), expected);
        }
    }

    #[test]
    fn crc32_agrees_with_reference(
        data in proptest::collection::vec(any::<u8>(), 0..=1024),
        use_table in any::<bool>(),
    ) {
        for reference in [
            &crc::CRC_32_ISO_HDLC,
            &crc::CRC_32_BZIP2,
            &crc::CRC_32_ISCSI,
            &crc::CRC_32_MPEG_2,
        ] {
            let expected = crc::Crc::<u32>::new(reference).checksum(&data);
            let crc = Crc::new(params_of(reference), use_table);
            prop_assert_eq!(crc.calculate(&data), expected);
        }
    }
}
