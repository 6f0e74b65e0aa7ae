//! litearray: elementwise array math, statistics and small dense matrix
//! algebra (transpose, determinant, inverse, eigenvalues) with optional
//! decimal rounding of results.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;

pub use crate::core::advanced_linear_algebra::{
    characteristic_polynomial, eigenvalues, eigenvalues_2x2, eigenvalues_2x2_complex,
    eigenvalues_nxn, eigenvalues_nxn_with, inverse,
};
pub use crate::core::error::MathError;
pub use crate::core::linear_algebra::{determinant, identity_matrix, matrix_multiply, transpose};
pub use crate::core::polynomial::{Polynomial, RootFinder};
pub use crate::core::precision::Precision;
pub use num_complex::Complex64;
