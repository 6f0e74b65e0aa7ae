//! `litearray array <op>`: elementwise arithmetic and statistics.

use anyhow::{bail, Result};

use super::Report;
use crate::cli::ArrayOp;
use crate::core::{arithmetic, statistics};
use crate::io::input::parse_array;

pub fn run(op: ArrayOp, args: &[String], precision: i32, p: f64) -> Result<Report> {
    let owned = args
        .iter()
        .map(|a| parse_array(a))
        .collect::<Result<Vec<Vec<f64>>>>()?;
    let arrays: Vec<&[f64]> = owned.iter().map(Vec::as_slice).collect();

    let values = match op {
        ArrayOp::Add => arithmetic::add(precision, &arrays)?,
        ArrayOp::Subtract => arithmetic::subtract(precision, &arrays)?,
        ArrayOp::Multiply => arithmetic::multiply(precision, &arrays)?,
        ArrayOp::Divide => arithmetic::divide(precision, &arrays)?,
        ArrayOp::Power | ArrayOp::Modulo | ArrayOp::Log => {
            let (left, right) = match arrays.as_slice() {
                [left, right] => (*left, *right),
                _ => bail!("{:?} takes exactly two arrays, got {}", op, arrays.len()),
            };
            match op {
                ArrayOp::Power => arithmetic::power(precision, left, right)?,
                ArrayOp::Modulo => arithmetic::modulo(precision, left, right)?,
                _ => arithmetic::log(precision, left, right)?,
            }
        }
        ArrayOp::Sqrt => arithmetic::sqrt(precision, &arrays)?,
        ArrayOp::Abs => arithmetic::abs(precision, &arrays)?,
        ArrayOp::Mean => statistics::mean(precision, &arrays)?,
        ArrayOp::Median => statistics::median(precision, &arrays)?,
        ArrayOp::Mode => statistics::mode(precision, &arrays)?,
        ArrayOp::Variance => statistics::variance(precision, &arrays)?,
        ArrayOp::StdDev => statistics::standard_deviation(precision, &arrays)?,
        ArrayOp::Min => statistics::min(precision, &arrays)?,
        ArrayOp::Max => statistics::max(precision, &arrays)?,
        ArrayOp::Range => statistics::range(precision, &arrays)?,
        ArrayOp::Percentile => statistics::percentile(precision, p, &arrays)?,
    };
    Ok(Report::Vector(values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn dispatches_variadic_ops() {
        let r = run(ArrayOp::Add, &args(&["[1,2]", "[3,4]", "[5,6]"]), -1, 50.0).unwrap();
        assert_eq!(r, Report::Vector(vec![9.0, 12.0]));
    }

    #[test]
    fn binary_ops_need_two_arrays() {
        assert!(run(ArrayOp::Power, &args(&["[2]"]), -1, 50.0).is_err());
        let r = run(ArrayOp::Power, &args(&["[2]", "[10]"]), -1, 50.0).unwrap();
        assert_eq!(r, Report::Vector(vec![1024.0]));
    }

    #[test]
    fn percentile_uses_p() {
        let r = run(ArrayOp::Percentile, &args(&["[1,2,3,4,5]"]), -1, 100.0).unwrap();
        assert_eq!(r, Report::Vector(vec![5.0]));
    }
}
