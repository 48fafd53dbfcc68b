//! Bit-level views of IEEE-754 values.

use std::fmt;
use std::mem;
use std::ops::Sub;

/// A floating-point type whose storage can be reinterpreted as an unsigned
/// integer of identical width.
///
/// Implementations exist only for pairs of equal width, so a mismatched
/// reinterpretation is rejected at compile time.
pub trait BitView: Copy + PartialOrd {
    type Bits: Copy + Ord + Sub<Output = Self::Bits> + fmt::LowerHex;

    /// Width of the significand field, excluding the implicit bit.
    const MANTISSA_BITS: u32;

    /// Width of the exponent field.
    const EXPONENT_BITS: u32;

    /// Exponent bias.
    const BIAS: i32;

    const ZERO_BITS: Self::Bits;

    fn to_bits(self) -> Self::Bits;

    fn from_bits(bits: Self::Bits) -> Self;

    fn is_nan(self) -> bool;
}

macro_rules! impl_bit_view {
    ($float:ty, $bits:ty, $mantissa:expr, $exponent:expr) => {
        const _: () = assert!(
            mem::size_of::<$float>() == mem::size_of::<$bits>(),
            "size mismatch"
        );

        impl BitView for $float {
            type Bits = $bits;

            const MANTISSA_BITS: u32 = $mantissa;
            const EXPONENT_BITS: u32 = $exponent;
            const BIAS: i32 = (1 << ($exponent - 1)) - 1;
            const ZERO_BITS: $bits = 0;

            #[inline]
            fn to_bits(self) -> $bits {
                <$float>::to_bits(self)
            }

            #[inline]
            fn from_bits(bits: $bits) -> $float {
                <$float>::from_bits(bits)
            }

            #[inline]
            fn is_nan(self) -> bool {
                <$float>::is_nan(self)
            }
        }
    };
}

impl_bit_view!(f32, u32, 23, 8);
impl_bit_view!(f64, u64, 52, 11);

/// Reinterprets the storage of `value` without any numeric conversion.
///
/// # Examples
///
/// ```
/// # use fastmath::float::bits::bit_cast;
/// #
/// assert_eq!(bit_cast(1.0f32), 0x3f800000);
/// assert_eq!(bit_cast(-2.0f64), 0xc000000000000000);
/// ```
#[inline]
pub fn bit_cast<F: BitView>(value: F) -> F::Bits {
    value.to_bits()
}

/// Inverse of [`bit_cast`].
#[inline]
pub fn from_bit_pattern<F: BitView>(bits: F::Bits) -> F {
    F::from_bits(bits)
}

/// Returns `true` if the exponent field of `x` is all ones, which covers both
/// the NaN encodings and the infinities.
#[inline]
pub fn exponent_saturated(x: f32) -> bool {
    let mask = (1u32 << f32::EXPONENT_BITS) - 1;

    (bit_cast(x) >> f32::MANTISSA_BITS) & mask == mask
}

/// Positive infinity.
pub const INF_F32: u32 = 0x7f800000;

/// Negative infinity.
pub const NEG_INF_F32: u32 = 0xff800000;

/// The quiet NaN returned for logarithms of negative numbers.
pub const NEG_QNAN_F32: u32 = 0xffc00000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reinterpretation_is_lossless() {
        for bits in [
            0u32, 0x80000000, 0x00000001, 0x007fffff, 0x3f800000, INF_F32,
            NEG_INF_F32, NEG_QNAN_F32, 0x7fc00001, 0xffffffff,
        ] {
            assert_eq!(bit_cast(from_bit_pattern::<f32>(bits)), bits);
        }

        for bits in [0u64, 0x8000000000000000, 0x7ff8000000000123, 1] {
            assert_eq!(bit_cast(from_bit_pattern::<f64>(bits)), bits);
        }
    }

    #[test]
    fn field_layout() {
        assert_eq!(<f32 as BitView>::BIAS, 127);
        assert_eq!(<f64 as BitView>::BIAS, 1023);
        assert_eq!(f32::EXPONENT_BITS + f32::MANTISSA_BITS, 31);
        assert_eq!(f64::EXPONENT_BITS + f64::MANTISSA_BITS, 63);
    }

    #[test]
    fn saturated_exponent() {
        assert!(exponent_saturated(f32::NAN));
        assert!(exponent_saturated(f32::INFINITY));
        assert!(exponent_saturated(f32::NEG_INFINITY));
        assert!(exponent_saturated(f32::from_bits(0xff812345)));
        assert!(!exponent_saturated(f32::MAX));
        assert!(!exponent_saturated(0.0));
    }
}
