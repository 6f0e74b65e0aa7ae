//! Matrix subcommands: parse the JSON argument, call the core, wrap the result.

use anyhow::Result;

use super::Report;
use crate::core::advanced_linear_algebra as ala;
use crate::core::linear_algebra as la;
use crate::core::polynomial::RootFinder;
use crate::io::input::parse_matrix;

pub fn transpose(arg: &str, precision: i32) -> Result<Report> {
    let m = parse_matrix(arg)?;
    Ok(Report::Matrix(la::transpose(&m, precision)?))
}

pub fn determinant(arg: &str) -> Result<Report> {
    let m = parse_matrix(arg)?;
    Ok(Report::Scalar(la::determinant(&m)?))
}

pub fn inverse(arg: &str) -> Result<Report> {
    let m = parse_matrix(arg)?;
    Ok(Report::Matrix(ala::inverse(&m)?))
}

pub fn eigenvalues(arg: &str, finder: &RootFinder) -> Result<Report> {
    let m = parse_matrix(arg)?;
    Ok(Report::Complex(ala::eigenvalues(&m, finder)?))
}

pub fn eigenvalues_2x2(arg: &str) -> Result<Report> {
    let m = parse_matrix(arg)?;
    Ok(Report::Vector(ala::eigenvalues_2x2(&m)?.to_vec()))
}
