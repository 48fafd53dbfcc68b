//! Constant lookup tables.

pub mod exp;
pub mod log;

use crate::float::bits::{bit_cast, from_bit_pattern};

/// Offset of `e^0` in [`exp::EXP_INT`].
pub const EXP_INT_OFFSET: i32 = 710;

/// Offset of `e^0` in [`exp::EXP_FRAC`].
pub const EXP_FRAC_OFFSET: i32 = 256;

/// Subdivisions per unit interval in [`exp::EXP_FRAC`].
pub const EXP_FRAC_STEPS: i32 = 256;

/// Bit pattern of the first entry of the logarithm tables.
pub const LOG_TABLE_BASE: u32 = 0x3f000000;

/// Returns `e^i` for `i` in `[-710, 710]`.
#[inline]
pub fn exp_int(i: i32) -> f64 {
    from_bit_pattern(exp::EXP_INT[(i + EXP_INT_OFFSET) as usize])
}

/// Returns `e^(j / 256)` for `j` in `[-256, 256]`.
#[inline]
pub fn exp_frac(j: i32) -> f64 {
    from_bit_pattern(exp::EXP_FRAC[(j + EXP_FRAC_OFFSET) as usize])
}

/// Index into the logarithm tables for a value in `[0.5, 2)`.
#[inline]
pub fn log_index(x: f32) -> usize {
    ((bit_cast(x) >> 16) & 0xff) as usize
}

/// The value represented by slot `i` of the logarithm tables.
#[inline]
pub fn log_slot_value(i: usize) -> f32 {
    from_bit_pattern(LOG_TABLE_BASE | ((i as u32) << 16))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exp_tables_anchor_at_one() {
        assert_eq!(exp_int(0), 1.0);
        assert_eq!(exp_frac(0), 1.0);
        assert_eq!(exp_int(1), std::f64::consts::E);
        assert_eq!(exp_frac(256), std::f64::consts::E);
        assert_eq!(exp_int(710), f64::INFINITY);
        assert!(exp_int(-710) > 0.0);
    }

    #[test]
    fn exp_tables_are_increasing() {
        assert!((-710..710).all(|i| exp_int(i) < exp_int(i + 1)));
        assert!((-256..256).all(|j| exp_frac(j) < exp_frac(j + 1)));
    }

    #[test]
    fn log_index_covers_reduced_range() {
        assert_eq!(log_index(0.5), 0);
        assert_eq!(log_index(1.0), 128);
        assert_eq!(log_index(f32::from_bits(0x3fffffff)), 255);

        let lo = log_index(std::f32::consts::FRAC_1_SQRT_2);
        let hi = log_index(std::f32::consts::SQRT_2);
        assert!(lo < 128 && hi > 128);

        for i in [0, 17, 128, 200, 255] {
            assert_eq!(log_index(log_slot_value(i)), i);
        }
    }

    #[test]
    fn log_tables_are_consistent() {
        for i in 0..256 {
            let recip = f32::from_bits(log::RECIP_F32[i]);
            let log_recip = f32::from_bits(log::LOG_RECIP_F32[i]);
            let expected = f64::from(recip).ln();

            assert!((f64::from(log_recip) - expected).abs() <= 1e-7, "{i}");

            let recip = f64::from_bits(log::RECIP_F64[i]);
            let log_recip = f64::from_bits(log::LOG_RECIP_F64[i]);

            assert!((recip * f64::from(log_slot_value(i)) - 1.0).abs() < 1e-15);
            assert!((log_recip - recip.ln()).abs() < 1e-15, "{i}");
        }
    }
}
