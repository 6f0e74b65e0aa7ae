//! Numeric core: rounding, validation, elementwise math, statistics and
//! small-matrix linear algebra.

#[macro_use]
pub mod debug; // gated debug logging (LITEARRAY_DEBUG=1) provides debug_log! macro
pub mod error;
pub mod precision;
pub mod matrix;
pub(crate) mod arrays;
pub mod arithmetic;
pub mod statistics;
pub mod polynomial;
pub mod linear_algebra;
pub mod advanced_linear_algebra;
