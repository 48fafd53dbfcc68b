//! Splitting floats into a normalized mantissa and a power-of-two exponent.

use super::bits::{bit_cast, from_bit_pattern, BitView};

/// 2^32, used to lift f32 subnormals into the normal range.
const F32_SUBNORMAL_SCALE: f32 = 4294967296.0;

/// 2^64, used to lift f64 subnormals into the normal range.
const F64_SUBNORMAL_SCALE: f64 = 18446744073709551616.0;

/// Returns `(m, e)` with `m * 2^e == x` and `|m|` in `[1, 2)`.
///
/// This differs from C's `frexp`, whose mantissa lies in `[0.5, 1)`. Zero is
/// returned as is with an exponent of zero, keeping its sign. Subnormal inputs
/// are rescaled by 2^32 before their fields are extracted.
///
/// Infinities and NaNs are not meaningful inputs: their mantissa field is
/// returned with the bias of `[1, 2)` and an exponent of 128.
///
/// # Examples
///
/// ```
/// # use fastmath::float::decompose::reduce_f32;
/// #
/// assert_eq!(reduce_f32(4.5), (1.125, 2));
/// assert_eq!(reduce_f32(-10.0), (-1.25, 3));
/// assert_eq!(reduce_f32(0.0), (0.0, 0));
/// ```
pub fn reduce_f32(x: f32) -> (f32, i32) {
    if x == 0.0 {
        return (x, 0);
    }

    let bits = bit_cast(x);

    let mantissa = bits & ((1u32 << f32::MANTISSA_BITS) - 1);
    let exponent = bits >> f32::MANTISSA_BITS;
    let biased = exponent & ((1u32 << f32::EXPONENT_BITS) - 1);

    if biased == 0 {
        let (m, e) = reduce_f32(x * F32_SUBNORMAL_SCALE);
        return (m, e - 32);
    }

    let sign = bits & (1u32 << (f32::MANTISSA_BITS + f32::EXPONENT_BITS));
    let bias = (f32::BIAS as u32) << f32::MANTISSA_BITS;
    let frac = from_bit_pattern::<f32>(sign | bias | mantissa);

    (frac, biased as i32 - f32::BIAS)
}

/// Returns `(m, e)` with `m * 2^e == x` and `|m|` in `[0.5, 1)`, following the
/// convention of C's `frexp`.
///
/// # Examples
///
/// ```
/// # use fastmath::float::decompose::frexp_f64;
/// #
/// assert_eq!(frexp_f64(4.5), (0.5625, 3));
/// assert_eq!(frexp_f64(65536.0), (0.5, 17));
/// ```
pub fn frexp_f64(x: f64) -> (f64, i32) {
    if x == 0.0 {
        return (x, 0);
    }

    let bits = bit_cast(x);

    let mantissa = bits & ((1u64 << f64::MANTISSA_BITS) - 1);
    let exponent = bits >> f64::MANTISSA_BITS;
    let biased = exponent & ((1u64 << f64::EXPONENT_BITS) - 1);

    if biased == 0 {
        let (m, e) = frexp_f64(x * F64_SUBNORMAL_SCALE);
        return (m, e - 64);
    }

    // One below the bias places the mantissa in [0.5, 1).
    let sign = bits & (1u64 << (f64::MANTISSA_BITS + f64::EXPONENT_BITS));
    let bias = ((f64::BIAS - 1) as u64) << f64::MANTISSA_BITS;
    let frac = from_bit_pattern::<f64>(sign | bias | mantissa);

    (frac, biased as i32 - f64::BIAS + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(m: f32, e: i32) -> f64 {
        f64::from(m) * 2f64.powi(e)
    }

    #[test]
    fn frexp_reference_values() {
        assert_eq!(frexp_f64(4.5), (0.5625, 3));
        assert_eq!(frexp_f64(3.2), (0.8, 2));
        assert_eq!(frexp_f64(-10.0), (-0.625, 4));
        assert_eq!(frexp_f64(65536.0), (0.5, 17));
    }

    #[test]
    fn frexp_zero_and_subnormal() {
        assert_eq!(frexp_f64(0.0), (0.0, 0));

        let tiny = f64::from_bits(1);
        assert_eq!(frexp_f64(tiny), (0.5, -1073));

        let (m, e) = frexp_f64(3.0e-310);
        assert!((0.5..1.0).contains(&m));
        assert_eq!(m * 2f64.powi(e + 64) / F64_SUBNORMAL_SCALE, 3.0e-310);
    }

    #[test]
    fn reduce_zero() {
        assert_eq!(reduce_f32(0.0), (0.0, 0));

        let (m, e) = reduce_f32(-0.0);
        assert_eq!((m, e), (0.0, 0));
        assert!(m.is_sign_negative());
    }

    #[test]
    fn reduce_normal_range() {
        let samples = (0..(1u64 << 32))
            .step_by(65521)
            .map(|bits| f32::from_bits(bits as u32))
            .filter(|x| x.is_normal());

        for x in samples {
            let (m, e) = reduce_f32(x);

            assert!((1.0..2.0).contains(&m.abs()), "{x:e} -> {m}");
            assert_eq!(reconstruct(m, e), f64::from(x), "{x:e}");
        }
    }

    #[test]
    fn reduce_subnormal() {
        let x = 1.5e-40f32;
        assert!(x.is_subnormal());

        let (m, e) = reduce_f32(x);
        let (scaled_m, scaled_e) = reduce_f32(x * 4294967296.0);

        assert_eq!(m, scaled_m);
        assert_eq!(e, scaled_e - 32);
        assert!((1.0..2.0).contains(&m));
        assert_eq!(reconstruct(m, e), f64::from(x));

        let smallest = f32::from_bits(1);
        assert_eq!(reduce_f32(smallest), (1.0, -149));
        assert_eq!(reduce_f32(-smallest), (-1.0, -149));
    }
}
