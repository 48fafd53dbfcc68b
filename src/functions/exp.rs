//! The natural exponential.

use super::poly::{EXP_NEAR_ZERO, EXP_UNIT};
use super::tables::{self, EXP_FRAC_STEPS};
use crate::float::bits::{exponent_saturated, from_bit_pattern, INF_F32};

/// Magnitude beyond which the integer table no longer applies.
const LIMIT: f32 = 710.0;

/// Approximates `e^x` in single precision.
///
/// The input is split as `x = i + j / 256 + r` with integers `i` and `j`
/// (truncated toward zero) and `|r| < 1 / 256`, so that
/// `e^x = e^i * e^(j / 256) * e^r`. The first two factors come from tables,
/// the last from a degree-5 minimax polynomial. Products are formed in double
/// precision and rounded once.
pub fn fast_exp(x: f32) -> f32 {
    if x >= LIMIT {
        return from_bit_pattern(INF_F32);
    } else if x <= -LIMIT {
        return 0.0;
    } else if exponent_saturated(x) {
        return x;
    }

    let int1 = x as i32;
    let x = x - int1 as f32;
    let int2 = (x * EXP_FRAC_STEPS as f32) as i32;
    let x = x - int2 as f32 / EXP_FRAC_STEPS as f32;

    let res = EXP_NEAR_ZERO.eval(f64::from(x))
        * tables::exp_int(int1)
        * tables::exp_frac(int2);

    res as f32
}

/// Approximates `e^x` with a single table level and a cubic over `[0, 1)`.
///
/// Several ULPs less accurate than [`fast_exp`], but cheaper. Negative inputs
/// are evaluated through the reciprocal so that the polynomial is only used
/// over the interval it was fitted on.
pub fn fast_exp_approx(x: f64) -> f64 {
    if x >= f64::from(LIMIT) {
        return f64::INFINITY;
    } else if x <= -f64::from(LIMIT) {
        return 0.0;
    } else if x.is_nan() {
        return x;
    }

    if x < 0.0 {
        return 1.0 / exp_unit_split(-x);
    }

    exp_unit_split(x)
}

fn exp_unit_split(x: f64) -> f64 {
    let integer = x.trunc();

    EXP_UNIT.eval(x - integer) * tables::exp_int(integer as i32)
}

/// Reference exponential: the double-precision libm result, rounded once.
pub fn reference_exp(x: f32) -> f32 {
    f64::from(x).exp() as f32
}

/// Single-precision libm exponential, for throughput comparisons.
pub fn libm_exp(x: f32) -> f32 {
    x.exp()
}

/// Single-precision wrapper around [`fast_exp_approx`].
pub fn fast_exp_approx_f32(x: f32) -> f32 {
    fast_exp_approx(f64::from(x)) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::ulp_difference;

    #[test]
    fn special_values() {
        assert_eq!(fast_exp(710.0).to_bits(), INF_F32);
        assert_eq!(fast_exp(1.0e30).to_bits(), INF_F32);
        assert_eq!(fast_exp(f32::INFINITY).to_bits(), INF_F32);

        assert_eq!(fast_exp(-710.0), 0.0);
        assert_eq!(fast_exp(-1.0e30), 0.0);
        assert_eq!(fast_exp(f32::NEG_INFINITY), 0.0);

        let nan = f32::from_bits(0x7fc01234);
        assert_eq!(fast_exp(nan).to_bits(), nan.to_bits());
        assert_eq!(fast_exp(-nan).to_bits(), (-nan).to_bits());
    }

    #[test]
    fn exact_points() {
        assert_eq!(fast_exp(0.0), 1.0);
        assert_eq!(fast_exp(-0.0), 1.0);
        assert_eq!(fast_exp(1.0), std::f32::consts::E);
    }

    #[test]
    fn saturates_like_reference() {
        assert_eq!(fast_exp(89.0), f32::INFINITY);
        assert_eq!(fast_exp(-105.0), 0.0);
        assert_eq!(fast_exp(709.9), f32::INFINITY);
        assert_eq!(fast_exp(-709.9), 0.0);
    }

    #[test]
    fn close_to_reference() {
        let mut x = -100.0f32;

        while x < 88.0 {
            let ulp = ulp_difference(fast_exp(x), reference_exp(x));
            assert!(ulp <= 2, "exp({x}) is {ulp} ulp away");

            x += 0.0137;
        }
    }

    #[test]
    fn approx_special_values() {
        assert_eq!(fast_exp_approx(710.0), f64::INFINITY);
        assert_eq!(fast_exp_approx(-710.0), 0.0);
        assert!(fast_exp_approx(f64::NAN).is_nan());
        assert_eq!(fast_exp_approx(-5.0), 1.0 / fast_exp_approx(5.0));
    }

    #[test]
    fn approx_relative_error() {
        for i in -400..=400 {
            let x = f64::from(i) * 0.05;
            let rel = (fast_exp_approx(x) - x.exp()).abs() / x.exp();

            assert!(rel < 1e-3, "exp({x}): relative error {rel:e}");
        }
    }
}
