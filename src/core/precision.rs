//! Decimal rounding shared by every operation that takes a precision.
//!
//! Precision `-1` disables rounding; `0..=10` keeps that many decimal digits.
//! Ties round half away from zero (`f64::round`).

use crate::core::error::MathError;

pub const NO_ROUNDING: i32 = -1;
pub const MAX_PRECISION: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Precision(Option<u32>);

impl Precision {
    pub const NONE: Precision = Precision(None);

    pub fn new(digits: i32) -> Result<Self, MathError> {
        match digits {
            NO_ROUNDING => Ok(Self::NONE),
            0..=MAX_PRECISION => Ok(Precision(Some(digits as u32))),
            other => Err(MathError::PrecisionRange(other)),
        }
    }

    pub fn digits(self) -> Option<u32> {
        self.0
    }

    pub fn apply(self, value: f64) -> f64 {
        match self.0 {
            Some(digits) => round_to(value, digits),
            None => value,
        }
    }

    pub fn apply_all(self, values: &mut [f64]) {
        if self.0.is_some() {
            for v in values.iter_mut() {
                *v = self.apply(*v);
            }
        }
    }
}

impl TryFrom<i32> for Precision {
    type Error = MathError;

    fn try_from(digits: i32) -> Result<Self, Self::Error> {
        Precision::new(digits)
    }
}

/// Round `value` to `digits` decimal places.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    // Values too large to scale already carry no fractional digits.
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Precision::new(11), Err(MathError::PrecisionRange(11)));
        assert_eq!(Precision::new(-2), Err(MathError::PrecisionRange(-2)));
        assert!(Precision::new(-1).is_ok());
        assert!(Precision::new(10).is_ok());
    }

    #[test]
    fn rounds_to_digits() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(1.005_000_1, 2), 1.01);
    }

    #[test]
    fn none_leaves_value_alone() {
        assert_eq!(Precision::NONE.apply(1.23456789), 1.23456789);
    }

    #[test]
    fn rounding_is_idempotent() {
        let p = Precision::new(3).unwrap();
        for &v in &[0.1234567, -9.87654, 1e6 + 0.0005, 2.0 / 3.0] {
            let once = p.apply(v);
            assert_eq!(p.apply(once), once);
        }
    }

    #[test]
    fn huge_values_pass_through() {
        assert_eq!(round_to(f64::MAX, 10), f64::MAX);
        assert!(round_to(f64::NAN, 2).is_nan());
    }
}
