//! Input checks shared by the elementwise and statistics operations.

use crate::core::error::MathError;

/// At least `required` arrays, all as long as the first, first non-empty.
/// Returns the common length.
pub(crate) fn check_arrays(arrays: &[&[f64]], required: usize) -> Result<usize, MathError> {
    if arrays.len() < required {
        return Err(MathError::TooFewArrays { required, found: arrays.len() });
    }
    let expected = arrays[0].len();
    for (index, array) in arrays.iter().enumerate().skip(1) {
        if array.len() != expected {
            return Err(MathError::LengthMismatch { index, expected, found: array.len() });
        }
    }
    if expected == 0 {
        return Err(MathError::Empty { what: "array" });
    }
    Ok(expected)
}

pub(crate) fn check_pair(left: &[f64], right: &[f64]) -> Result<usize, MathError> {
    check_arrays(&[left, right], 2)
}

/// Column-wise fold over equal-length arrays, seeded from the first array.
pub(crate) fn fold_columns<F>(arrays: &[&[f64]], len: usize, mut f: F) -> Vec<f64>
where
    F: FnMut(f64, f64) -> f64,
{
    let mut acc = arrays[0][..len].to_vec();
    for array in &arrays[1..] {
        for (slot, &value) in acc.iter_mut().zip(array.iter()) {
            *slot = f(*slot, value);
        }
    }
    acc
}
