//! The natural logarithm.
//!
//! Following Muller, *Handbook of Floating-Point Arithmetic*, ch. 11: write
//! `x = m * 2^e` with `m` in `[sqrt(2)/2, sqrt(2)]`, look up `r ~ 1/m` and
//! `ln(1/r)` from a table indexed by the leading bits of `m`, and evaluate
//! `ln(1 + z)` for the small residual `z = m * r - 1` with a polynomial:
//!
//! ```text
//! ln(x) = e * ln(2) + ln(1 + z) - ln(r)
//! ```
//!
//! The final sum is accumulated in double precision in both tiers.

use std::f64::consts::{LN_2, SQRT_2};

use super::poly::{LOG1P_NEAR_ZERO, LOG2_HALF_UNIT};
use super::tables::{self, log as table};
use crate::float::bits::{from_bit_pattern, NEG_INF_F32, NEG_QNAN_F32};
use crate::float::decompose::{frexp_f64, reduce_f32};

/// Maps the special inputs to their results, or `None` for a positive finite
/// input.
fn special(x: f32) -> Option<f32> {
    if x == 0.0 {
        Some(from_bit_pattern(NEG_INF_F32))
    } else if x.is_nan() {
        Some(x)
    } else if x < 0.0 {
        Some(from_bit_pattern(NEG_QNAN_F32))
    } else if x == f32::INFINITY {
        Some(x)
    } else {
        None
    }
}

/// Decomposes a positive finite `x` into `(m, e)` with `m` in
/// `[sqrt(2)/2, sqrt(2)]`.
fn reduce(x: f32) -> (f32, i32) {
    let (m, e) = reduce_f32(x);

    if f64::from(m) > SQRT_2 {
        (m / 2.0, e + 1)
    } else {
        (m, e)
    }
}

/// Approximates `ln(x)` using single-precision tables and residual.
pub fn fast_log(x: f32) -> f32 {
    if let Some(res) = special(x) {
        return res;
    }

    let (m, e) = reduce(x);
    let idx = tables::log_index(m);

    let recip: f32 = from_bit_pattern(table::RECIP_F32[idx]);
    let z = m * recip - 1.0;

    // Single precision is a few bits short for the final reduction.
    let ln_recip: f32 = from_bit_pattern(table::LOG_RECIP_F32[idx]);
    let ln_recip = f64::from(ln_recip);
    let ln_1z = LOG1P_NEAR_ZERO.eval(f64::from(z));

    (f64::from(e) * LN_2 + ln_1z - ln_recip) as f32
}

/// Approximates `ln(x)` using double-precision tables and residual.
///
/// Tighter than [`fast_log`] near 1, where the single-precision tables lose
/// most of the result to cancellation.
pub fn fast_log_f64(x: f32) -> f32 {
    if let Some(res) = special(x) {
        return res;
    }

    let (m, e) = reduce(x);
    let idx = tables::log_index(m);

    let recip: f64 = from_bit_pattern(table::RECIP_F64[idx]);
    let z = f64::from(m) * recip - 1.0;

    let ln_recip: f64 = from_bit_pattern(table::LOG_RECIP_F64[idx]);
    let ln_1z = LOG1P_NEAR_ZERO.eval(z);

    (f64::from(e) * LN_2 + ln_1z - ln_recip) as f32
}

/// Approximates `ln(x)` as `ln(2) * (e + log2(m))`, with `log2(m)` taken from
/// a cubic over `[0.5, 1]`.
///
/// Accurate to about three decimal places.
pub fn fast_log_approx(x: f64) -> f64 {
    if x == 0.0 {
        return f64::NEG_INFINITY;
    } else if x.is_nan() || x == f64::INFINITY {
        return x;
    } else if x < 0.0 {
        return f64::NAN;
    }

    let (m, pow2) = frexp_f64(x);

    LN_2 * (f64::from(pow2) + LOG2_HALF_UNIT.eval(m))
}

/// Reference logarithm: the double-precision libm result, rounded once.
pub fn reference_log(x: f32) -> f32 {
    f64::from(x).ln() as f32
}

/// Single-precision wrapper around [`fast_log_approx`].
pub fn fast_log_approx_f32(x: f32) -> f32 {
    fast_log_approx(f64::from(x)) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::ulp_difference;

    fn positive_samples(step: usize) -> impl Iterator<Item = f32> {
        (0x00000001u32..0x7f800000)
            .step_by(step)
            .map(f32::from_bits)
    }

    #[test]
    fn special_values() {
        for f in [fast_log, fast_log_f64] {
            assert_eq!(f(0.0).to_bits(), NEG_INF_F32);
            assert_eq!(f(-0.0).to_bits(), NEG_INF_F32);
            assert!(f(-1.0).is_nan());
            assert!(f(f32::NEG_INFINITY).is_nan());
            assert_eq!(f(f32::INFINITY), f32::INFINITY);

            let nan = f32::from_bits(0x7fc0beef);
            assert_eq!(f(nan).to_bits(), nan.to_bits());
        }

        assert_eq!(fast_log(-1.0).to_bits(), NEG_QNAN_F32);
        assert_eq!(fast_log_approx(0.0), f64::NEG_INFINITY);
        assert!(fast_log_approx(-3.0).is_nan());
    }

    #[test]
    fn reduction_range() {
        let within = |m: f32| {
            let m = f64::from(m);
            SQRT_2 / 2.0 <= m && m <= SQRT_2
        };

        for x in positive_samples(99991) {
            let (m, e) = reduce(x);

            assert!(within(m), "{x:e} -> {m}");
            assert_eq!(f64::from(m) * 2f64.powi(e), f64::from(x));
        }
    }

    #[test]
    fn reduction_halves_first_mantissa_above_sqrt_2() {
        let above = f32::from_bits(0x3fb504f4);
        let below = f32::from_bits(0x3fb504f3);
        assert!(f64::from(below) < SQRT_2 && f64::from(above) > SQRT_2);

        assert_eq!(reduce(above), (above / 2.0, 1));
        assert_eq!(reduce(below), (below, 0));
        assert_eq!(reduce(4.0 * above), (above / 2.0, 3));
    }

    #[test]
    fn known_values() {
        assert!(fast_log(1.0).abs() < 1e-20);
        assert!(fast_log_f64(1.0).abs() < 1e-20);
        assert_eq!(fast_log_f64(2.0), std::f32::consts::LN_2);
        assert_eq!(fast_log_f64(4.0), reference_log(4.0));
        assert_eq!(fast_log_f64(0.5), -std::f32::consts::LN_2);
    }

    #[test]
    fn double_tier_close_to_reference() {
        for x in positive_samples(4099).filter(|&x| x != 1.0) {
            let ulp = ulp_difference(fast_log_f64(x), reference_log(x));
            assert!(ulp <= 1, "log({x:e}) is {ulp} ulp away");
        }
    }

    #[test]
    fn single_tier_away_from_one() {
        let away = |x: &f32| !(0.25..4.0).contains(x);

        for x in positive_samples(4099).filter(away) {
            let ulp = ulp_difference(fast_log(x), reference_log(x));
            assert!(ulp <= 3, "log({x:e}) is {ulp} ulp away");
        }
    }

    #[test]
    fn double_tier_is_tighter_near_one() {
        let near_one = (0x3f700000u32..0x3f880000)
            .step_by(257)
            .map(f32::from_bits);

        let (single, double) = near_one
            .filter(|&x| x != 1.0)
            .map(|x| {
                let reference = reference_log(x);
                (
                    ulp_difference(fast_log(x), reference),
                    ulp_difference(fast_log_f64(x), reference),
                )
            })
            .fold((0, 0), |(s, d), (a, b)| (s.max(a), d.max(b)));

        assert!(double <= 1);
        assert!(single > double);
    }

    #[test]
    fn coarse_absolute_error() {
        for i in 1..10000 {
            let x = 20.0 * f64::from(i) / 10000.0;
            let err = (fast_log_approx(x) - x.ln()).abs();

            assert!(err < 2e-3, "log({x}): error {err:e}");
        }
    }
}
