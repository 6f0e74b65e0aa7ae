//! Elementwise arithmetic over equal-length arrays.
//!
//! Every function validates `precision` first, then the arrays, and rounds
//! each output value when precision >= 0.

use crate::core::arrays::{check_arrays, check_pair, fold_columns};
use crate::core::error::MathError;
use crate::core::precision::Precision;

fn rounded(precision: Precision, mut values: Vec<f64>) -> Vec<f64> {
    precision.apply_all(&mut values);
    values
}

pub fn add(precision: i32, arrays: &[&[f64]]) -> Result<Vec<f64>, MathError> {
    let precision = Precision::new(precision)?;
    let len = check_arrays(arrays, 2)?;
    Ok(rounded(precision, fold_columns(arrays, len, |a, b| a + b)))
}

/// First array minus each of the others.
pub fn subtract(precision: i32, arrays: &[&[f64]]) -> Result<Vec<f64>, MathError> {
    let precision = Precision::new(precision)?;
    let len = check_arrays(arrays, 2)?;
    Ok(rounded(precision, fold_columns(arrays, len, |a, b| a - b)))
}

pub fn multiply(precision: i32, arrays: &[&[f64]]) -> Result<Vec<f64>, MathError> {
    let precision = Precision::new(precision)?;
    let len = check_arrays(arrays, 2)?;
    Ok(rounded(precision, fold_columns(arrays, len, |a, b| a * b)))
}

/// First array divided by each of the others; any zero divisor fails.
pub fn divide(precision: i32, arrays: &[&[f64]]) -> Result<Vec<f64>, MathError> {
    let precision = Precision::new(precision)?;
    let len = check_arrays(arrays, 2)?;
    for divisor in &arrays[1..] {
        if let Some(index) = divisor.iter().position(|&v| v == 0.0) {
            return Err(MathError::DivisionByZero { index });
        }
    }
    Ok(rounded(precision, fold_columns(arrays, len, |a, b| a / b)))
}

pub fn power(precision: i32, base: &[f64], exponent: &[f64]) -> Result<Vec<f64>, MathError> {
    let precision = Precision::new(precision)?;
    check_pair(base, exponent)?;
    let values = base.iter().zip(exponent).map(|(b, e)| b.powf(*e)).collect();
    Ok(rounded(precision, values))
}

/// Remainder with the sign of the dividend (truncated division).
pub fn modulo(precision: i32, dividend: &[f64], divisor: &[f64]) -> Result<Vec<f64>, MathError> {
    let precision = Precision::new(precision)?;
    check_pair(dividend, divisor)?;
    let mut values = Vec::with_capacity(dividend.len());
    for (index, (a, b)) in dividend.iter().zip(divisor).enumerate() {
        if *b == 0.0 {
            return Err(MathError::DivisionByZero { index });
        }
        values.push(a % b);
    }
    Ok(rounded(precision, values))
}

/// log_base(value) for each pair.
pub fn log(precision: i32, base: &[f64], value: &[f64]) -> Result<Vec<f64>, MathError> {
    let precision = Precision::new(precision)?;
    check_pair(base, value)?;
    let mut values = Vec::with_capacity(base.len());
    for (index, (&b, &v)) in base.iter().zip(value).enumerate() {
        if b <= 0.0 || v <= 0.0 {
            let bad = if b <= 0.0 { b } else { v };
            return Err(MathError::Domain {
                index,
                value: bad,
                reason: "logarithm undefined for non-positive values",
            });
        }
        if b == 1.0 {
            return Err(MathError::Domain { index, value: b, reason: "logarithm base cannot be 1" });
        }
        values.push(v.ln() / b.ln());
    }
    Ok(rounded(precision, values))
}

/// Square root of the elementwise sum.
pub fn sqrt(precision: i32, arrays: &[&[f64]]) -> Result<Vec<f64>, MathError> {
    let precision = Precision::new(precision)?;
    let len = check_arrays(arrays, 2)?;
    let sums = fold_columns(arrays, len, |a, b| a + b);
    if let Some(index) = sums.iter().position(|&v| v < 0.0) {
        return Err(MathError::Domain {
            index,
            value: sums[index],
            reason: "cannot calculate square root of a negative value",
        });
    }
    Ok(rounded(precision, sums.into_iter().map(f64::sqrt).collect()))
}

/// Absolute value of the elementwise sum.
pub fn abs(precision: i32, arrays: &[&[f64]]) -> Result<Vec<f64>, MathError> {
    let precision = Precision::new(precision)?;
    let len = check_arrays(arrays, 2)?;
    let sums = fold_columns(arrays, len, |a, b| a + b);
    Ok(rounded(precision, sums.into_iter().map(f64::abs).collect()))
}
