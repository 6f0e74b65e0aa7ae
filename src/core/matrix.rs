//! Shape checks run before every matrix operation.

use crate::core::error::MathError;

/// Confirm `matrix` is non-empty and rectangular; returns `(rows, cols)`.
pub fn validate(matrix: &[Vec<f64>]) -> Result<(usize, usize), MathError> {
    let cols = match matrix.first() {
        Some(row) if !row.is_empty() => row.len(),
        _ => return Err(MathError::Empty { what: "matrix" }),
    };
    check_rows(matrix, cols)?;
    Ok((matrix.len(), cols))
}

/// Like [`validate`], but also requires rows == cols and finite entries;
/// returns the order.
///
/// Empty input is reported as `NotSquare` rather than `Empty`: square-only
/// operations describe their precondition as "square and non-empty".
pub fn validate_square(matrix: &[Vec<f64>]) -> Result<usize, MathError> {
    let rows = matrix.len();
    let cols = match matrix.first() {
        Some(row) if !row.is_empty() => row.len(),
        _ => return Err(MathError::NotSquare { rows: 0, cols: 0 }),
    };
    check_rows(matrix, cols)?;
    if rows != cols {
        return Err(MathError::NotSquare { rows, cols });
    }
    check_finite(matrix)?;
    Ok(rows)
}

/// First NaN or infinite entry, in row-major order.
pub fn check_finite(matrix: &[Vec<f64>]) -> Result<(), MathError> {
    for (row, values) in matrix.iter().enumerate() {
        if let Some(col) = values.iter().position(|v| !v.is_finite()) {
            return Err(MathError::NonFinite { row, col });
        }
    }
    Ok(())
}

fn check_rows(matrix: &[Vec<f64>], expected: usize) -> Result<(), MathError> {
    match matrix.iter().position(|row| row.len() != expected) {
        Some(row) => Err(MathError::Ragged { row, expected, found: matrix[row].len() }),
        None => Ok(()),
    }
}
