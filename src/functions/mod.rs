//! Implementation of elementary functions.

pub mod exp;
pub mod log;
pub mod poly;
pub mod tables;

use strum_macros::{Display, EnumIter, EnumString};

pub use exp::{fast_exp, fast_exp_approx};
pub use log::{fast_log, fast_log_approx, fast_log_f64};

/// A single-precision approximation that can be checked by the verifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Function {
    /// Two-level table exponential.
    Exp,
    /// Single-level table exponential.
    ExpApprox,
    /// Logarithm with single-precision tables.
    Log,
    /// Logarithm with double-precision tables.
    LogF64,
    /// Cubic logarithm.
    LogApprox,
}

impl Function {
    pub fn candidate(self) -> fn(f32) -> f32 {
        match self {
            Function::Exp => fast_exp,
            Function::ExpApprox => exp::fast_exp_approx_f32,
            Function::Log => fast_log,
            Function::LogF64 => fast_log_f64,
            Function::LogApprox => log::fast_log_approx_f32,
        }
    }

    pub fn reference(self) -> fn(f32) -> f32 {
        match self {
            Function::Exp | Function::ExpApprox => exp::reference_exp,
            Function::Log | Function::LogF64 | Function::LogApprox => {
                log::reference_log
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn names_round_trip() {
        assert_eq!("log-f64".parse::<Function>().unwrap(), Function::LogF64);
        assert_eq!(Function::ExpApprox.to_string(), "exp-approx");
        assert!("sin".parse::<Function>().is_err());

        for f in Function::iter() {
            assert_eq!(f.to_string().parse::<Function>().unwrap(), f);
        }
    }

    #[test]
    fn candidates_agree_with_reference_at_two() {
        for f in Function::iter() {
            let (candidate, reference) = (f.candidate(), f.reference());
            let diff = (candidate(2.0) - reference(2.0)).abs();

            assert!(diff < 1e-2, "{f}: {diff}");
        }
    }
}
