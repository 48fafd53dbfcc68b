//! IEEE-754 bit manipulation.

pub mod bits;
pub mod decompose;

pub use bits::BitView;
pub use decompose::{frexp_f64, reduce_f32};
