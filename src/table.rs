use crate::width::Width;

/// Run eight rounds of polynomial division over `register`.
#[inline]
pub(crate) fn divide_byte<W: Width>(polynomial: W, mut register: W) -> W {
    for _ in 0..8 {
        register = if register.top_bit() {
            register.shl1() ^ polynomial
        } else {
            register.shl1()
        };
    }
    register
}

/// Build the 256-entry lookup table for `polynomial`.
///
/// Entry `b` is the byte `b`, placed in the register's most-significant
/// byte, divided bit by bit through the polynomial.
pub fn build_table<W: Width>(polynomial: W) -> [W; 256] {
    let mut table = [W::ZERO; 256];
    for (i, entry) in table.iter_mut().enumerate() {
        *entry = divide_byte(polynomial, W::from_top_byte(i as u8));
    }
    table
}
