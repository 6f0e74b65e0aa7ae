#![allow(clippy::needless_range_loop)]
use std::ops::{Mul, Sub};

use num_traits::{One, Zero};

use crate::core::error::MathError;
use crate::core::matrix::{validate, validate_square};
use crate::core::precision::Precision;

pub fn transpose(matrix: &[Vec<f64>], precision: i32) -> Result<Vec<Vec<f64>>, MathError> {
    // Transposes a matrix, rounding every cell when precision >= 0
    let precision = Precision::new(precision)?;
    let (rows, cols) = validate(matrix)?;

    let mut transposed = vec![vec![0.0; rows]; cols];
    for i in 0..rows {
        for j in 0..cols {
            transposed[j][i] = precision.apply(matrix[i][j]);
        }
    }

    Ok(transposed)
}

pub fn determinant(matrix: &[Vec<f64>]) -> Result<f64, MathError> {
    // Laplace expansion along the first row; smallest public order is 2x2
    let n = validate_square(matrix)?;
    if n < 2 {
        return Err(MathError::Dimension { required: "at least 2x2", rows: n, cols: n });
    }
    Ok(cofactor_expansion(matrix))
}

/// The submatrix left after deleting `skip_row` and `skip_col`.
pub fn minor<T: Clone>(matrix: &[Vec<T>], skip_row: usize, skip_col: usize) -> Vec<Vec<T>> {
    matrix
        .iter()
        .enumerate()
        .filter(|&(row, _)| row != skip_row)
        .map(|(_, row)| {
            row.iter()
                .enumerate()
                .filter(|&(col, _)| col != skip_col)
                .map(|(_, v)| v.clone())
                .collect::<Vec<T>>()
        })
        .collect::<Vec<Vec<T>>>()
}

/// Recursive cofactor expansion over any commutative ring element.
///
/// Callers must pass a square matrix. Works for `f64` (determinants) and
/// `Polynomial` (characteristic polynomials) alike.
pub(crate) fn cofactor_expansion<T>(matrix: &[Vec<T>]) -> T
where
    T: Clone + Zero + One + Sub<Output = T> + Mul<Output = T>,
{
    match matrix.len() {
        0 => T::one(),
        1 => matrix[0][0].clone(),
        2 => {
            matrix[0][0].clone() * matrix[1][1].clone()
                - matrix[0][1].clone() * matrix[1][0].clone()
        }
        _ => {
            let mut det = T::zero();
            for (col, value) in matrix[0].iter().enumerate() {
                let term = value.clone() * cofactor_expansion(&minor(matrix, 0, col));
                det = if col % 2 == 0 { det + term } else { det - term };
            }
            det
        }
    }
}

pub fn matrix_multiply(m1: &[Vec<f64>], m2: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, MathError> {
    // Multiplies two matrices
    let (result_rows, m1_cols) = validate(m1)?;
    let (m2_rows, result_cols) = validate(m2)?;
    if m1_cols != m2_rows {
        return Err(MathError::Dimension {
            required: "compatible for multiplication",
            rows: m2_rows,
            cols: result_cols,
        });
    }

    let mut result = vec![vec![0.0; result_cols]; result_rows];
    for i in 0..result_rows {
        for j in 0..result_cols {
            result[i][j] = (0..m1_cols).map(|k| m1[i][k] * m2[k][j]).sum();
        }
    }

    Ok(result)
}

pub fn identity_matrix(size: usize) -> Vec<Vec<f64>> {
    // Creates an identity matrix of the given size
    let mut identity = vec![vec![0.0; size]; size];
    for i in 0..size {
        identity[i][i] = 1.0;
    }
    identity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_rounds() {
        let m = vec![vec![1.123, 2.987], vec![3.5, 4.0]];
        let t = transpose(&m, 1).unwrap();
        assert_eq!(t, vec![vec![1.1, 3.5], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_transpose_rejects_bad_precision() {
        let m = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert_eq!(transpose(&m, 11), Err(MathError::PrecisionRange(11)));
    }

    #[test]
    fn test_determinant_2x2() {
        assert_eq!(determinant(&[vec![4.0, 6.0], vec![3.0, 8.0]]).unwrap(), 14.0);
    }

    #[test]
    fn test_determinant_4x4() {
        let m = vec![
            vec![1.0, 0.0, 2.0, -1.0],
            vec![3.0, 0.0, 0.0, 5.0],
            vec![2.0, 1.0, 4.0, -3.0],
            vec![1.0, 0.0, 5.0, 0.0],
        ];
        assert_eq!(determinant(&m).unwrap(), 30.0);
    }

    #[test]
    fn test_determinant_1x1_rejected() {
        assert!(matches!(
            determinant(&[vec![3.0]]),
            Err(MathError::Dimension { rows: 1, .. })
        ));
    }

    #[test]
    fn test_minor() {
        let m = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        assert_eq!(minor(&m, 1, 1), vec![vec![1, 3], vec![7, 9]]);
        assert_eq!(minor(&m, 0, 2), vec![vec![4, 5], vec![7, 8]]);
    }

    #[test]
    fn test_matmul_shape_mismatch() {
        let a = vec![vec![1.0, 2.0, 3.0]];
        let b = vec![vec![1.0, 2.0]];
        assert!(matches!(matrix_multiply(&a, &b), Err(MathError::Dimension { .. })));
    }

    #[test]
    fn test_identity() {
        assert_eq!(identity_matrix(2), vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    }
}
