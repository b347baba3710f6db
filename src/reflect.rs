//! Bit reflection.
//!
//! Input bytes are always eight bits wide, whatever the register width, so
//! they are reflected through one shared table. The final register is
//! reflected over exactly the engine's width.

use crate::width::Width;

/// `REFLECT_BYTE[b]` is `b` with its bit order reversed.
pub static REFLECT_BYTE: [u8; 256] = make_reflect_table();

const fn reflect_byte(byte: u8) -> u8 {
    let mut value = byte;
    let mut reflected = 0u8;
    let mut bit = 0;
    while bit < 8 {
        reflected = (reflected << 1) | (value & 1);
        value >>= 1;
        bit += 1;
    }
    reflected
}

const fn make_reflect_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = reflect_byte(i as u8);
        i += 1;
    }
    table
}

/// Reverse the low `W::BITS` bits of `value`.
#[inline]
pub fn reflect<W: Width>(value: W) -> W {
    value.reverse()
}
