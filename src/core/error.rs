use std::fmt;

/// Every failure the numeric core can report. Operations either return a
/// complete result or one of these; nothing is partially applied.
#[derive(Debug, Clone, PartialEq)]
pub enum MathError {
    /// Empty matrix or array where at least one element is required.
    Empty { what: &'static str },
    /// A matrix row whose length differs from the first row.
    Ragged { row: usize, expected: usize, found: usize },
    /// Square-only operation given a non-square (or empty) matrix.
    NotSquare { rows: usize, cols: usize },
    /// Wrong fixed dimension, e.g. the 2x2 eigenvalue path given a 3x3.
    Dimension { required: &'static str, rows: usize, cols: usize },
    /// NaN or infinite entry in a matrix passed to a square-only operation.
    NonFinite { row: usize, col: usize },
    /// Determinant is exactly zero during inversion.
    Singular,
    /// Precision outside [-1, 10].
    PrecisionRange(i32),
    /// The polynomial root finder exhausted its iteration budget, or its
    /// result failed the residual check.
    NonConvergence { iterations: usize },
    /// Real-only 2x2 eigenvalue path hit a negative discriminant.
    ComplexEigenvalues { discriminant: f64 },
    TooFewArrays { required: usize, found: usize },
    LengthMismatch { index: usize, expected: usize, found: usize },
    DivisionByZero { index: usize },
    /// Input outside the domain of a function (log, sqrt) at `index`.
    Domain { index: usize, value: f64, reason: &'static str },
    PercentileRange(f64),
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::Empty { what } => write!(f, "{} cannot be empty", what),
            MathError::Ragged { row, expected, found } => write!(
                f,
                "all matrix rows must have the same length: row {} has {} elements, expected {}",
                row, found, expected
            ),
            MathError::NotSquare { rows, cols } if *rows == 0 || *cols == 0 => {
                write!(f, "matrix must be square and non-empty")
            }
            MathError::NotSquare { rows, cols } => {
                write!(f, "matrix must be square and non-empty (got {}x{})", rows, cols)
            }
            MathError::Dimension { required, rows: 0, .. } => {
                write!(f, "matrix must be {}", required)
            }
            MathError::Dimension { required, rows, cols } => {
                write!(f, "matrix must be {} (got {}x{})", required, rows, cols)
            }
            MathError::NonFinite { row, col } => {
                write!(f, "matrix entry ({}, {}) is not finite", row, col)
            }
            MathError::Singular => write!(f, "matrix is singular and cannot be inverted"),
            MathError::PrecisionRange(p) => {
                write!(f, "precision {} out of range; must be between -1 and 10", p)
            }
            MathError::NonConvergence { iterations } => write!(
                f,
                "eigenvalue root finder did not converge (stopped after {} iterations)",
                iterations
            ),
            MathError::ComplexEigenvalues { discriminant } => write!(
                f,
                "eigenvalues are complex (discriminant {} < 0)",
                discriminant
            ),
            MathError::TooFewArrays { required, found } => write!(
                f,
                "at least {} arrays are required, got {}",
                required, found
            ),
            MathError::LengthMismatch { index, expected, found } => write!(
                f,
                "all arrays must be of the same length: array {} has {} elements, expected {}",
                index, found, expected
            ),
            MathError::DivisionByZero { index } => write!(f, "division by zero at index {}", index),
            MathError::Domain { index, value, reason } => {
                write!(f, "{} at index {}: {}", reason, index, value)
            }
            MathError::PercentileRange(p) => {
                write!(f, "percentile {} out of range; must be between 0 and 100", p)
            }
        }
    }
}

impl std::error::Error for MathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn test_empty_matrix_message() {
        let err = MathError::Empty { what: "matrix" };
        assert_eq!(format!("{}", err), "matrix cannot be empty");
    }
    #[test] fn test_not_square_empty_message() {
        let err = MathError::NotSquare { rows: 0, cols: 0 };
        assert_eq!(format!("{}", err), "matrix must be square and non-empty");
    }
    #[test] fn test_not_square_reports_shape() {
        let err = MathError::NotSquare { rows: 2, cols: 3 };
        assert_eq!(format!("{}", err), "matrix must be square and non-empty (got 2x3)");
    }
    #[test] fn test_dimension_message() {
        let err = MathError::Dimension { required: "2x2", rows: 0, cols: 0 };
        assert_eq!(format!("{}", err), "matrix must be 2x2");
        let err = MathError::Dimension { required: "2x2", rows: 3, cols: 3 };
        assert_eq!(format!("{}", err), "matrix must be 2x2 (got 3x3)");
    }
    #[test] fn test_non_finite_message() {
        let err = MathError::NonFinite { row: 1, col: 0 };
        assert_eq!(format!("{}", err), "matrix entry (1, 0) is not finite");
    }
    #[test] fn test_division_by_zero_message() {
        let err = MathError::DivisionByZero { index: 2 };
        assert_eq!(format!("{}", err), "division by zero at index 2");
    }
}
