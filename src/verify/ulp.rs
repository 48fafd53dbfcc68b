//! Distance between floats in units of the last place.

use crate::float::bits::{bit_cast, BitView};

/// Returns the distance between the bit patterns of `a` and `b`.
///
/// Two NaNs are considered equal regardless of payload. The patterns are
/// compared as plain unsigned integers, so a change of sign yields a large
/// distance.
///
/// # Examples
///
/// ```
/// # use fastmath::verify::ulp_difference;
/// #
/// assert_eq!(ulp_difference(1.0f32, 1.0f32), 0);
/// assert_eq!(ulp_difference(1.0f32, f32::from_bits(0x3f800003)), 3);
/// assert_eq!(ulp_difference(f32::NAN, -f32::NAN), 0);
/// assert_eq!(ulp_difference(0.0f32, -0.0f32), 0x80000000);
/// ```
pub fn ulp_difference<F: BitView>(a: F, b: F) -> F::Bits {
    let a_bits = bit_cast(a);
    let b_bits = bit_cast(b);

    if a_bits == b_bits || (a.is_nan() && b.is_nan()) {
        return F::ZERO_BITS;
    }

    if a_bits > b_bits {
        a_bits - b_bits
    } else {
        b_bits - a_bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_patterns() {
        for bits in [0u32, 1, 0x3f800000, 0x7f800000, 0x7fc00000, 0xffffffff] {
            let x = f32::from_bits(bits);
            assert_eq!(ulp_difference(x, x), 0);
        }
    }

    #[test]
    fn nan_payloads_are_equal() {
        let a = f32::from_bits(0x7fc00001);
        let b = f32::from_bits(0xff812345);
        assert_eq!(ulp_difference(a, b), 0);

        assert_ne!(ulp_difference(a, f32::INFINITY), 0);
    }

    #[test]
    fn symmetric() {
        let samples = [0.0f32, -0.0, 1.0, -1.0, 1.5e-40, f32::MAX, 3.25];

        for a in samples {
            for b in samples {
                assert_eq!(ulp_difference(a, b), ulp_difference(b, a));
            }
        }
    }

    #[test]
    fn adjacent_values() {
        let x = 1.0f32;
        let next = f32::from_bits(x.to_bits() + 1);
        assert_eq!(ulp_difference(x, next), 1);

        assert_eq!(ulp_difference(f32::MAX, f32::INFINITY), 1);
        assert_eq!(ulp_difference(1.0f64, 1.0 + f64::EPSILON), 1);
    }
}
