//! ULP verification harness.

pub mod histogram;
pub mod ulp;
pub mod verifier;

pub use histogram::Histogram;
pub use ulp::ulp_difference;
pub use verifier::{verify, Verifier, VerifyError};
