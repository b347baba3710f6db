use std::ffi::CStr;
use std::fmt;

use tracing::debug;

use crate::catalog::Algorithm;
use crate::reflect::{reflect, REFLECT_BYTE};
use crate::table::{build_table, divide_byte};
use crate::width::Width;

/// Parameters of a CRC algorithm in the Rocksoft model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Params<W> {
    pub polynomial: W,
    pub init: W,
    pub reflect_input: bool,
    pub reflect_output: bool,
    pub xor_output: W,
}

impl<W> Params<W> {
    pub const fn new(
        polynomial: W,
        init: W,
        reflect_input: bool,
        reflect_output: bool,
        xor_output: W,
    ) -> Self {
        Self {
            polynomial,
            init,
            reflect_input,
            reflect_output,
            xor_output,
        }
    }
}

#[derive(Clone)]
enum Division<W> {
    Direct,
    Table(Box<[W; 256]>),
}

/// A CRC engine of register width `W`.
///
/// Parameters are fixed at construction. In table mode the lookup table is
/// built by the constructor and never touched again, so `calculate` only
/// needs `&self` and an engine can be shared between threads freely.
#[derive(Clone)]
pub struct Crc<W: Width> {
    name: &'static str,
    params: Params<W>,
    division: Division<W>,
}

impl<W: Width> Crc<W> {
    pub fn new(params: Params<W>, use_table: bool) -> Self {
        Self::named(W::CUSTOM_NAME, params, use_table)
    }

    /// Engine with the width's plain parameters (CRC-8, CRC-16 or CRC-32).
    pub fn with_defaults(use_table: bool) -> Self {
        Self::named(W::DEFAULT_NAME, W::DEFAULT, use_table)
    }

    pub fn from_algorithm(algorithm: &Algorithm<W>, use_table: bool) -> Self {
        Self::named(algorithm.name, algorithm.params, use_table)
    }

    fn named(name: &'static str, params: Params<W>, use_table: bool) -> Self {
        let division = if use_table {
            debug!(
                name,
                width = W::BITS,
                polynomial = %Hex(params.polynomial),
                "building lookup table"
            );
            Division::Table(Box::new(build_table(params.polynomial)))
        } else {
            Division::Direct
        };
        Self {
            name,
            params,
            division,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn params(&self) -> &Params<W> {
        &self.params
    }

    pub fn use_table(&self) -> bool {
        matches!(self.division, Division::Table(_))
    }

    /// The lookup table, present only in table mode.
    pub fn table(&self) -> Option<&[W; 256]> {
        match &self.division {
            Division::Table(table) => Some(table),
            Division::Direct => None,
        }
    }

    /// Checksum of `data`. Text is taken as its UTF-8 bytes.
    pub fn calculate(&self, data: impl AsRef<[u8]>) -> W {
        self.calculate_iter(data.as_ref().iter().copied())
    }

    /// Checksum of a NUL-terminated string, excluding the terminator.
    pub fn calculate_cstr(&self, data: &CStr) -> W {
        self.calculate(data.to_bytes())
    }

    pub fn calculate_iter(&self, data: impl IntoIterator<Item = u8>) -> W {
        let params = &self.params;
        let bytes = data.into_iter().map(|byte| {
            if params.reflect_input {
                REFLECT_BYTE[byte as usize]
            } else {
                byte
            }
        });

        let crc = match &self.division {
            Division::Table(table) => bytes.fold(params.init, |crc, byte| {
                crc.shl8() ^ table[(crc.top_byte() ^ byte) as usize]
            }),
            Division::Direct => bytes.fold(params.init, |crc, byte| {
                divide_byte(params.polynomial, crc ^ W::from_top_byte(byte))
            }),
        };

        self.finalize(crc)
    }

    fn finalize(&self, crc: W) -> W {
        let crc = if self.params.reflect_output {
            reflect(crc)
        } else {
            crc
        };
        crc ^ self.params.xor_output
    }
}

impl<W: Width> Default for Crc<W> {
    fn default() -> Self {
        Self::with_defaults(false)
    }
}

struct Hex<W>(W);

impl<W: Width> fmt::Display for Hex<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:0width$X}", self.0, width = (W::BITS / 4) as usize)
    }
}

impl<W: Width> fmt::Display for Crc<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{} : Poly({}), Init({}), Ref_In({}), Ref_Out({}), XorOut({}), LUT({})>",
            self.name,
            Hex(self.params.polynomial),
            Hex(self.params.init),
            self.params.reflect_input,
            self.params.reflect_output,
            Hex(self.params.xor_output),
            self.use_table()
        )
    }
}

impl<W: Width> fmt::Debug for Crc<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Crc")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("use_table", &self.use_table())
            .finish()
    }
}
