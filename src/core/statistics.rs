//! Statistical reducers over equal-length arrays.
//!
//! Most reducers work column-wise (one output per element position); `median`
//! collapses the column means to one value, `mode` pools every array, and
//! `percentile` reduces each array on its own.

use std::collections::HashMap;

use crate::core::arrays::{check_arrays, fold_columns};
use crate::core::error::MathError;
use crate::core::precision::Precision;

fn rounded(precision: Precision, mut values: Vec<f64>) -> Vec<f64> {
    precision.apply_all(&mut values);
    values
}

fn column_means(arrays: &[&[f64]], len: usize) -> Vec<f64> {
    let count = arrays.len() as f64;
    fold_columns(arrays, len, |a, b| a + b)
        .into_iter()
        .map(|sum| sum / count)
        .collect()
}

fn sort_floats(data: &mut [f64]) {
    data.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
}

/// Elementwise mean across arrays.
pub fn mean(precision: i32, arrays: &[&[f64]]) -> Result<Vec<f64>, MathError> {
    let precision = Precision::new(precision)?;
    let len = check_arrays(arrays, 2)?;
    Ok(rounded(precision, column_means(arrays, len)))
}

/// Median of the elementwise means, returned as a single-element vector.
pub fn median(precision: i32, arrays: &[&[f64]]) -> Result<Vec<f64>, MathError> {
    let precision = Precision::new(precision)?;
    let len = check_arrays(arrays, 2)?;
    let mut means = column_means(arrays, len);
    sort_floats(&mut means);
    let mid = len / 2;
    let median = if len % 2 == 0 {
        (means[mid - 1] + means[mid]) / 2.0
    } else {
        means[mid]
    };
    Ok(vec![precision.apply(median)])
}

/// Most frequent value(s) over all arrays pooled together, ascending.
pub fn mode(precision: i32, arrays: &[&[f64]]) -> Result<Vec<f64>, MathError> {
    let precision = Precision::new(precision)?;
    if arrays.iter().all(|a| a.is_empty()) {
        return Err(MathError::Empty { what: "array" });
    }

    // Keyed on the bit pattern; `+ 0.0` folds -0.0 into 0.0.
    let mut frequency: HashMap<u64, usize> = HashMap::new();
    for &value in arrays.iter().flat_map(|a| a.iter()) {
        *frequency.entry((value + 0.0).to_bits()).or_insert(0) += 1;
    }
    let max_count = frequency.values().copied().max().unwrap_or(0);
    let mut modes: Vec<f64> = frequency
        .into_iter()
        .filter(|&(_, count)| count == max_count)
        .map(|(bits, _)| f64::from_bits(bits))
        .collect();
    sort_floats(&mut modes);
    Ok(rounded(precision, modes))
}

fn column_variance(arrays: &[&[f64]], len: usize) -> Vec<f64> {
    let count = arrays.len() as f64;
    let means = column_means(arrays, len);
    let mut variance = vec![0.0; len];
    for array in arrays {
        for ((slot, &value), mean) in variance.iter_mut().zip(array.iter()).zip(&means) {
            let diff = value - mean;
            *slot += diff * diff;
        }
    }
    variance.into_iter().map(|v| v / count).collect()
}

/// Elementwise population variance across arrays.
pub fn variance(precision: i32, arrays: &[&[f64]]) -> Result<Vec<f64>, MathError> {
    let precision = Precision::new(precision)?;
    let len = check_arrays(arrays, 2)?;
    Ok(rounded(precision, column_variance(arrays, len)))
}

pub fn standard_deviation(precision: i32, arrays: &[&[f64]]) -> Result<Vec<f64>, MathError> {
    let precision = Precision::new(precision)?;
    let len = check_arrays(arrays, 2)?;
    let std_dev = column_variance(arrays, len).into_iter().map(f64::sqrt).collect();
    Ok(rounded(precision, std_dev))
}

pub fn min(precision: i32, arrays: &[&[f64]]) -> Result<Vec<f64>, MathError> {
    let precision = Precision::new(precision)?;
    let len = check_arrays(arrays, 2)?;
    Ok(rounded(precision, fold_columns(arrays, len, f64::min)))
}

pub fn max(precision: i32, arrays: &[&[f64]]) -> Result<Vec<f64>, MathError> {
    let precision = Precision::new(precision)?;
    let len = check_arrays(arrays, 2)?;
    Ok(rounded(precision, fold_columns(arrays, len, f64::max)))
}

/// Elementwise max - min.
pub fn range(precision: i32, arrays: &[&[f64]]) -> Result<Vec<f64>, MathError> {
    let precision = Precision::new(precision)?;
    let len = check_arrays(arrays, 2)?;
    let lows = fold_columns(arrays, len, f64::min);
    let highs = fold_columns(arrays, len, f64::max);
    let spread = highs.iter().zip(&lows).map(|(h, l)| h - l).collect();
    Ok(rounded(precision, spread))
}

/// The `p`-th percentile of each array (linear interpolation between ranks).
pub fn percentile(precision: i32, p: f64, arrays: &[&[f64]]) -> Result<Vec<f64>, MathError> {
    let precision = Precision::new(precision)?;
    if !(0.0..=100.0).contains(&p) {
        return Err(MathError::PercentileRange(p));
    }
    check_arrays(arrays, 1)?;

    let mut result = Vec::with_capacity(arrays.len());
    for array in arrays {
        let mut data = array.to_vec();
        sort_floats(&mut data);
        let rank = (p / 100.0) * (data.len() as f64 - 1.0);
        let lower = rank.floor() as usize;
        let upper = rank.ceil() as usize;
        let value = if lower == upper {
            data[lower]
        } else {
            let f = rank - lower as f64;
            (1.0 - f) * data[lower] + f * data[upper]
        };
        result.push(value);
    }
    Ok(rounded(precision, result))
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: [f64; 3] = [1.0, 2.0, 3.0];
    const B: [f64; 3] = [4.0, 5.0, 6.0];
    const C: [f64; 3] = [7.0, 8.0, 9.0];

    #[test]
    fn test_mean() {
        assert_eq!(mean(2, &[&A, &B]).unwrap(), vec![2.5, 3.5, 4.5]);
    }

    #[test]
    fn test_median() {
        assert_eq!(median(2, &[&A, &B]).unwrap(), vec![3.5]);
        assert_eq!(median(-1, &[&[1.0, 3.0], &[3.0, 5.0]]).unwrap(), vec![3.0]);
    }

    #[test]
    fn test_mode() {
        let arrays: [&[f64]; 3] = [&[1.0, 2.0, 3.0], &[4.0, 2.0, 2.0], &[8.0, 2.0, 2.0]];
        assert_eq!(mode(2, &arrays).unwrap(), vec![2.0]);
        assert_eq!(mode(-1, &[&[3.0, 1.0]]).unwrap(), vec![1.0, 3.0]);
        assert_eq!(mode(2, &[&[]]), Err(MathError::Empty { what: "array" }));
    }

    #[test]
    fn test_variance_and_std_dev() {
        assert_eq!(variance(2, &[&A, &B, &C]).unwrap(), vec![6.0, 6.0, 6.0]);
        assert_eq!(standard_deviation(2, &[&A, &B, &C]).unwrap(), vec![2.45, 2.45, 2.45]);
        let raw = standard_deviation(-1, &[&A, &B, &C]).unwrap();
        assert!((raw[0] - 2.449489742783178).abs() < 1e-12);
    }

    #[test]
    fn test_min_max_range() {
        assert_eq!(min(2, &[&A, &B, &C]).unwrap(), vec![1.0, 2.0, 3.0]);
        assert_eq!(max(2, &[&A, &B, &C]).unwrap(), vec![7.0, 8.0, 9.0]);
        let arrays: [&[f64]; 3] = [&[1.5, 2.3, 3.7], &[0.9, 2.8, 3.1], &[1.2, 1.9, 4.0]];
        assert_eq!(range(2, &arrays).unwrap(), vec![0.6, 0.9, 0.9]);
    }

    #[test]
    fn test_percentile() {
        assert_eq!(percentile(2, 50.0, &[&A, &B, &C]).unwrap(), vec![2.0, 5.0, 8.0]);
        assert_eq!(percentile(-1, 25.0, &[&[1.0, 2.0, 3.0, 4.0, 5.0]]).unwrap(), vec![2.0]);
        assert_eq!(percentile(-1, 101.0, &[&A]), Err(MathError::PercentileRange(101.0)));
        assert!(matches!(
            percentile(2, 50.0, &[&[1.0], &[1.0, 2.0]]),
            Err(MathError::LengthMismatch { .. })
        ));
    }
}
