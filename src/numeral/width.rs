//! Fixed-width unsigned integer adapters
//!
//! Every conversion algorithm works on `BigUint`; fixed-width types only need
//! to widen into it and narrow back out of it.

use std::fmt;

use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// A native unsigned integer type usable with the numeral converter.
pub trait FixedWidth: Copy + fmt::Binary + fmt::LowerHex {
    /// Width of the type in bits
    const BITS: u32;

    /// Narrow an arbitrary-width value, or `None` if it does not fit.
    fn from_big(value: &BigUint) -> Option<Self>;
}

macro_rules! impl_fixed_width {
    ($($ty:ty => $narrow:ident),* $(,)?) => {
        $(
            impl FixedWidth for $ty {
                const BITS: u32 = <$ty>::BITS;

                fn from_big(value: &BigUint) -> Option<Self> {
                    value.$narrow()
                }
            }
        )*
    };
}

impl_fixed_width! {
    u8 => to_u8,
    u16 => to_u16,
    u32 => to_u32,
    u64 => to_u64,
    u128 => to_u128,
}
