//! Engines whose width is chosen at run time.

use std::fmt;

use crate::catalog::{Algorithm, ALGORITHMS_16, ALGORITHMS_32, ALGORITHMS_8};
use crate::engine::{Crc, Params};
use crate::error::{Error, Result};
use crate::width::Width;

/// A catalogue entry of any width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyAlgorithm {
    Crc8(&'static Algorithm<u8>),
    Crc16(&'static Algorithm<u16>),
    Crc32(&'static Algorithm<u32>),
}

impl AnyAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Crc8(a) => a.name,
            Self::Crc16(a) => a.name,
            Self::Crc32(a) => a.name,
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            Self::Crc8(_) => u8::BITS,
            Self::Crc16(_) => u16::BITS,
            Self::Crc32(_) => u32::BITS,
        }
    }

    pub fn check(&self) -> u32 {
        match self {
            Self::Crc8(a) => a.check.into(),
            Self::Crc16(a) => a.check.into(),
            Self::Crc32(a) => a.check,
        }
    }

    pub fn engine(&self, use_table: bool) -> AnyCrc {
        match self {
            Self::Crc8(a) => AnyCrc::Crc8(Crc::from_algorithm(a, use_table)),
            Self::Crc16(a) => AnyCrc::Crc16(Crc::from_algorithm(a, use_table)),
            Self::Crc32(a) => AnyCrc::Crc32(Crc::from_algorithm(a, use_table)),
        }
    }
}

/// Every preset, narrowest width first.
pub fn all_algorithms() -> impl Iterator<Item = AnyAlgorithm> {
    ALGORITHMS_8
        .iter()
        .map(|&a| AnyAlgorithm::Crc8(a))
        .chain(ALGORITHMS_16.iter().map(|&a| AnyAlgorithm::Crc16(a)))
        .chain(ALGORITHMS_32.iter().map(|&a| AnyAlgorithm::Crc32(a)))
}

/// Look a preset up by name, ignoring ASCII case.
pub fn find_algorithm(name: &str) -> Result<AnyAlgorithm> {
    all_algorithms()
        .find(|a| a.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| Error::UnknownAlgorithm(name.to_string()))
}

#[derive(Debug, Clone)]
pub enum AnyCrc {
    Crc8(Crc<u8>),
    Crc16(Crc<u16>),
    Crc32(Crc<u32>),
}

impl AnyCrc {
    /// Build an engine from raw parameters, truncating each value to `width`
    /// bits.
    pub fn custom(
        width: u32,
        polynomial: u32,
        init: u32,
        reflect_input: bool,
        reflect_output: bool,
        xor_output: u32,
        use_table: bool,
    ) -> Result<Self> {
        let params = (polynomial, init, xor_output);
        Ok(match width {
            8 => Self::Crc8(Crc::new(
                truncated(params, reflect_input, reflect_output),
                use_table,
            )),
            16 => Self::Crc16(Crc::new(
                truncated(params, reflect_input, reflect_output),
                use_table,
            )),
            32 => Self::Crc32(Crc::new(
                truncated(params, reflect_input, reflect_output),
                use_table,
            )),
            other => return Err(Error::UnsupportedWidth(other)),
        })
    }

    pub fn width(&self) -> u32 {
        match self {
            Self::Crc8(_) => u8::BITS,
            Self::Crc16(_) => u16::BITS,
            Self::Crc32(_) => u32::BITS,
        }
    }

    pub fn use_table(&self) -> bool {
        match self {
            Self::Crc8(crc) => crc.use_table(),
            Self::Crc16(crc) => crc.use_table(),
            Self::Crc32(crc) => crc.use_table(),
        }
    }

    /// Checksum of `data`, widened to `u32`.
    pub fn calculate(&self, data: impl AsRef<[u8]>) -> u32 {
        match self {
            Self::Crc8(crc) => crc.calculate(data).into(),
            Self::Crc16(crc) => crc.calculate(data).into(),
            Self::Crc32(crc) => crc.calculate(data),
        }
    }

    /// Format `value` as hex, zero-padded to this engine's width.
    pub fn format_value(&self, value: u32) -> String {
        format!("0x{:0width$X}", value, width = (self.width() / 4) as usize)
    }
}

fn truncated<W: Width>(
    (polynomial, init, xor_output): (u32, u32, u32),
    reflect_input: bool,
    reflect_output: bool,
) -> Params<W> {
    Params::new(
        W::truncate(polynomial),
        W::truncate(init),
        reflect_input,
        reflect_output,
        W::truncate(xor_output),
    )
}

impl fmt::Display for AnyCrc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Crc8(crc) => fmt::Display::fmt(crc, f),
            Self::Crc16(crc) => fmt::Display::fmt(crc, f),
            Self::Crc32(crc) => fmt::Display::fmt(crc, f),
        }
    }
}
