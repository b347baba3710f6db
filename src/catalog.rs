//! Published CRC variants.
//!
//! Every entry carries its check value: the checksum of the ASCII string
//! `"123456789"`.

use crate::engine::Params;

/// A named set of CRC parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Algorithm<W: 'static> {
    pub name: &'static str,
    pub params: Params<W>,
    pub check: W,
}

macro_rules! algorithm {
    ($ident:ident: $ty:ty = $name:literal, $poly:expr, $init:expr, $refin:expr, $refout:expr, $xorout:expr, check = $check:expr) => {
        pub const $ident: Algorithm<$ty> = Algorithm {
            name: $name,
            params: Params::new($poly, $init, $refin, $refout, $xorout),
            check: $check,
        };
    };
}

algorithm!(CRC_8: u8 = "CRC-8", 0x07, 0x00, false, false, 0x00, check = 0xF4);
algorithm!(CRC_8_CDMA2000: u8 = "CRC-8/CDMA2000", 0x9B, 0xFF, false, false, 0x00, check = 0xDA);
algorithm!(CRC_8_DARC: u8 = "CRC-8/DARC", 0x39, 0x00, true, true, 0x00, check = 0x15);
algorithm!(CRC_8_DVB_S2: u8 = "CRC-8/DVB-S2", 0xD5, 0x00, false, false, 0x00, check = 0xBC);
algorithm!(CRC_8_EBU: u8 = "CRC-8/EBU", 0x1D, 0xFF, true, true, 0x00, check = 0x97);
algorithm!(CRC_8_I_CODE: u8 = "CRC-8/I-CODE", 0x1D, 0xFD, false, false, 0x00, check = 0x7E);
algorithm!(CRC_8_ITU: u8 = "CRC-8/ITU", 0x07, 0x00, false, false, 0x55, check = 0xA1);
algorithm!(CRC_8_MAXIM: u8 = "CRC-8/MAXIM", 0x31, 0x00, true, true, 0x00, check = 0xA1);
algorithm!(CRC_8_ROHC: u8 = "CRC-8/ROHC", 0x07, 0xFF, true, true, 0x00, check = 0xD0);
algorithm!(CRC_8_WCDMA: u8 = "CRC-8/WCDMA", 0x9B, 0x00, true, true, 0x00, check = 0x25);

algorithm!(CRC_16: u16 = "CRC-16", 0x1021, 0x0000, false, false, 0x0000, check = 0x31C3);
algorithm!(CRC_16_CCITT_FALSE: u16 = "CRC-16/CCITT-FALSE", 0x1021, 0xFFFF, false, false, 0x0000, check = 0x29B1);
algorithm!(CRC_16_ARC: u16 = "CRC-16/ARC", 0x8005, 0x0000, true, true, 0x0000, check = 0xBB3D);
algorithm!(CRC_16_AUG_CCITT: u16 = "CRC-16/AUG-CCITT", 0x1021, 0x1D0F, false, false, 0x0000, check = 0xE5CC);
algorithm!(CRC_16_BUYPASS: u16 = "CRC-16/BUYPASS", 0x8005, 0x0000, false, false, 0x0000, check = 0xFEE8);
algorithm!(CRC_16_CDMA2000: u16 = "CRC-16/CDMA2000", 0xC867, 0xFFFF, false, false, 0x0000, check = 0x4C06);
algorithm!(CRC_16_DDS_110: u16 = "CRC-16/DDS-110", 0x8005, 0x800D, false, false, 0x0000, check = 0x9ECF);
algorithm!(CRC_16_DECT_R: u16 = "CRC-16/DECT-R", 0x0589, 0x0000, false, false, 0x0001, check = 0x007E);
algorithm!(CRC_16_DECT_X: u16 = "CRC-16/DECT-X", 0x0589, 0x0000, false, false, 0x0000, check = 0x007F);
algorithm!(CRC_16_DNP: u16 = "CRC-16/DNP", 0x3D65, 0x0000, true, true, 0xFFFF, check = 0xEA82);
algorithm!(CRC_16_EN_13757: u16 = "CRC-16/EN-13757", 0x3D65, 0x0000, false, false, 0xFFFF, check = 0xC2B7);
algorithm!(CRC_16_GENIBUS: u16 = "CRC-16/GENIBUS", 0x1021, 0xFFFF, false, false, 0xFFFF, check = 0xD64E);
algorithm!(CRC_16_MAXIM: u16 = "CRC-16/MAXIM", 0x8005, 0x0000, true, true, 0xFFFF, check = 0x44C2);
algorithm!(CRC_16_MCRF4XX: u16 = "CRC-16/MCRF4XX", 0x1021, 0xFFFF, true, true, 0x0000, check = 0x6F91);
algorithm!(CRC_16_RIELLO: u16 = "CRC-16/RIELLO", 0x1021, 0xB2AA, true, true, 0x0000, check = 0x63D0);
algorithm!(CRC_16_T10_DIF: u16 = "CRC-16/T10-DIF", 0x8BB7, 0x0000, false, false, 0x0000, check = 0xD0DB);
algorithm!(CRC_16_TELEDISK: u16 = "CRC-16/TELEDISK", 0xA097, 0x0000, false, false, 0x0000, check = 0x0FB3);
algorithm!(CRC_16_TMS37157: u16 = "CRC-16/TMS37157", 0x1021, 0x89EC, true, true, 0x0000, check = 0x26B1);
algorithm!(CRC_16_USB: u16 = "CRC-16/USB", 0x8005, 0xFFFF, true, true, 0xFFFF, check = 0xB4C8);
algorithm!(CRC_A: u16 = "CRC-A", 0x1021, 0xC6C6, true, true, 0x0000, check = 0xBF05);
algorithm!(CRC_16_KERMIT: u16 = "CRC-16/KERMIT", 0x1021, 0x0000, true, true, 0x0000, check = 0x2189);
algorithm!(CRC_16_MODBUS: u16 = "CRC-16/MODBUS", 0x8005, 0xFFFF, true, true, 0x0000, check = 0x4B37);
algorithm!(CRC_16_X_25: u16 = "CRC-16/X-25", 0x1021, 0xFFFF, true, true, 0xFFFF, check = 0x906E);
algorithm!(CRC_16_XMODEM: u16 = "CRC-16/XMODEM", 0x1021, 0x0000, false, false, 0x0000, check = 0x31C3);

algorithm!(CRC_32: u32 = "CRC-32", 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, check = 0xCBF4_3926);
algorithm!(CRC_32_BZIP2: u32 = "CRC-32/BZIP2", 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0xFFFF_FFFF, check = 0xFC89_1918);
algorithm!(CRC_32_C: u32 = "CRC-32C", 0x1EDC_6F41, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, check = 0xE306_9283);
algorithm!(CRC_32_D: u32 = "CRC-32D", 0xA833_982B, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, check = 0x8731_5576);
algorithm!(CRC_32_JAMCRC: u32 = "CRC-32/JAMCRC", 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0x0000_0000, check = 0x340B_C6D9);
algorithm!(CRC_32_MPEG_2: u32 = "CRC-32/MPEG-2", 0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0x0000_0000, check = 0x0376_E6E7);
algorithm!(CRC_32_POSIX: u32 = "CRC-32/POSIX", 0x04C1_1DB7, 0x0000_0000, false, false, 0xFFFF_FFFF, check = 0x765E_7680);
algorithm!(CRC_32_Q: u32 = "CRC-32Q", 0x8141_41AB, 0x0000_0000, false, false, 0x0000_0000, check = 0x3010_BF7F);
algorithm!(CRC_32_XFER: u32 = "CRC-32/XFER", 0x0000_00AF, 0x0000_0000, false, false, 0x0000_0000, check = 0xBD0B_E338);

pub static ALGORITHMS_8: &[&Algorithm<u8>] = &[
    &CRC_8,
    &CRC_8_CDMA2000,
    &CRC_8_DARC,
    &CRC_8_DVB_S2,
    &CRC_8_EBU,
    &CRC_8_I_CODE,
    &CRC_8_ITU,
    &CRC_8_MAXIM,
    &CRC_8_ROHC,
    &CRC_8_WCDMA,
];

pub static ALGORITHMS_16: &[&Algorithm<u16>] = &[
    &CRC_16,
    &CRC_16_CCITT_FALSE,
    &CRC_16_ARC,
    &CRC_16_AUG_CCITT,
    &CRC_16_BUYPASS,
    &CRC_16_CDMA2000,
    &CRC_16_DDS_110,
    &CRC_16_DECT_R,
    &CRC_16_DECT_X,
    &CRC_16_DNP,
    &CRC_16_EN_13757,
    &CRC_16_GENIBUS,
    &CRC_16_MAXIM,
    &CRC_16_MCRF4XX,
    &CRC_16_RIELLO,
    &CRC_16_T10_DIF,
    &CRC_16_TELEDISK,
    &CRC_16_TMS37157,
    &CRC_16_USB,
    &CRC_A,
    &CRC_16_KERMIT,
    &CRC_16_MODBUS,
    &CRC_16_X_25,
    &CRC_16_XMODEM,
];

pub static ALGORITHMS_32: &[&Algorithm<u32>] = &[
    &CRC_32,
    &CRC_32_BZIP2,
    &CRC_32_C,
    &CRC_32_D,
    &CRC_32_JAMCRC,
    &CRC_32_MPEG_2,
    &CRC_32_POSIX,
    &CRC_32_Q,
    &CRC_32_XFER,
];
