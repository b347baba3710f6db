use std::fmt;
use std::ops::BitXor;

use crate::engine::Params;

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// Register width of a CRC engine.
///
/// Implemented for `u8`, `u16` and `u32` only. All register arithmetic is
/// done in the implementing type, so results never carry bits above
/// `BITS`.
pub trait Width:
    sealed::Sealed
    + Copy
    + Eq
    + Default
    + fmt::Debug
    + fmt::UpperHex
    + BitXor<Output = Self>
    + Into<u32>
    + Send
    + Sync
    + 'static
{
    const BITS: u32;
    const ZERO: Self;
    const MAX: Self;
    /// Parameters of the width's plain CRC (CRC-8, CRC-16, CRC-32).
    const DEFAULT: Params<Self>;
    const DEFAULT_NAME: &'static str;
    const CUSTOM_NAME: &'static str;

    /// Place `byte` in the most-significant byte of an otherwise zero register.
    fn from_top_byte(byte: u8) -> Self;
    fn top_byte(self) -> u8;
    fn top_bit(self) -> bool;
    fn shl1(self) -> Self;
    /// Shift left by a whole byte. Zero for an 8-bit register.
    fn shl8(self) -> Self;
    fn reverse(self) -> Self;
    /// Truncate a `u32` to this width.
    fn truncate(value: u32) -> Self;
}

macro_rules! impl_width {
    ($ty:ty, $default:expr, $default_name:literal, $custom_name:literal) => {
        impl Width for $ty {
            const BITS: u32 = <$ty>::BITS;
            const ZERO: Self = 0;
            const MAX: Self = <$ty>::MAX;
            const DEFAULT: Params<Self> = $default;
            const DEFAULT_NAME: &'static str = $default_name;
            const CUSTOM_NAME: &'static str = $custom_name;

            #[inline]
            fn from_top_byte(byte: u8) -> Self {
                (byte as $ty) << (<$ty>::BITS - 8)
            }

            #[inline]
            fn top_byte(self) -> u8 {
                (self >> (<$ty>::BITS - 8)) as u8
            }

            #[inline]
            fn top_bit(self) -> bool {
                (self & (1 << (<$ty>::BITS - 1))) != 0
            }

            #[inline]
            fn shl1(self) -> Self {
                self << 1
            }

            #[inline]
            fn shl8(self) -> Self {
                self.checked_shl(8).unwrap_or(0)
            }

            #[inline]
            fn reverse(self) -> Self {
                self.reverse_bits()
            }

            #[inline]
            fn truncate(value: u32) -> Self {
                value as $ty
            }
        }
    };
}

impl_width!(u8, Params::new(0x07, 0x00, false, false, 0x00), "CRC-8", "CRC-8/CUSTOM");
impl_width!(
    u16,
    Params::new(0x1021, 0x0000, false, false, 0x0000),
    "CRC-16",
    "CRC-16/CUSTOM"
);
impl_width!(
    u32,
    Params::new(0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF),
    "CRC-32",
    "CRC-32/CUSTOM"
);
