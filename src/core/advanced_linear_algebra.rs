//! Inversion and eigenvalues for small dense matrices.

use num_complex::Complex64;

use crate::core::error::MathError;
use crate::core::linear_algebra::{cofactor_expansion, minor};
use crate::core::matrix::{check_finite, validate_square};
use crate::core::polynomial::{Polynomial, RootFinder};

/// Imaginary parts below this (relative to max(1, |z|)) are reported as real.
const REAL_SNAP: f64 = 1e-10;

/// Inverse via the adjugate: transpose of the cofactor matrix over det(A).
///
/// Singularity is the exact test `det == 0.0`; near-singular input is
/// inverted as-is. No precision argument: callers round the result if needed.
pub fn inverse(matrix: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, MathError> {
    let n = validate_square(matrix)?;
    if n < 2 {
        return Err(MathError::Dimension { required: "at least 2x2", rows: n, cols: n });
    }

    let det = cofactor_expansion(matrix);
    if det == 0.0 {
        return Err(MathError::Singular);
    }

    if n == 2 {
        let (a, b) = (matrix[0][0], matrix[0][1]);
        let (c, d) = (matrix[1][0], matrix[1][1]);
        return Ok(vec![vec![d / det, -b / det], vec![-c / det, a / det]]);
    }

    let mut inverse = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in 0..n {
            let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
            // cofactor (i, j) lands at (j, i): adjugate is the transpose
            inverse[j][i] = sign * cofactor_expansion(&minor(matrix, i, j)) / det;
        }
    }
    Ok(inverse)
}

/// Trace, determinant and discriminant of a 2x2 matrix.
fn quadratic_terms(matrix: &[Vec<f64>]) -> Result<(f64, f64, f64), MathError> {
    if matrix.len() != 2 || matrix.iter().any(|row| row.len() != 2) {
        return Err(MathError::Dimension {
            required: "2x2",
            rows: matrix.len(),
            cols: matrix.first().map_or(0, Vec::len),
        });
    }
    check_finite(matrix)?;
    let trace = matrix[0][0] + matrix[1][1];
    let det = matrix[0][0] * matrix[1][1] - matrix[0][1] * matrix[1][0];
    Ok((trace, det, trace * trace - 4.0 * det))
}

/// Real eigenvalues of a 2x2 matrix, larger root first.
///
/// A negative discriminant is an error here; use
/// [`eigenvalues_2x2_complex`] to get the conjugate pair instead.
pub fn eigenvalues_2x2(matrix: &[Vec<f64>]) -> Result<[f64; 2], MathError> {
    let (trace, _, discriminant) = quadratic_terms(matrix)?;
    if discriminant < 0.0 {
        return Err(MathError::ComplexEigenvalues { discriminant });
    }
    let root = discriminant.sqrt();
    Ok([(trace + root) / 2.0, (trace - root) / 2.0])
}

/// Both eigenvalues of a 2x2 matrix, real or a conjugate pair (+i first).
pub fn eigenvalues_2x2_complex(matrix: &[Vec<f64>]) -> Result<[Complex64; 2], MathError> {
    let (trace, _, discriminant) = quadratic_terms(matrix)?;
    let half = trace / 2.0;
    if discriminant >= 0.0 {
        let root = discriminant.sqrt() / 2.0;
        Ok([Complex64::new(half + root, 0.0), Complex64::new(half - root, 0.0)])
    } else {
        let root = (-discriminant).sqrt() / 2.0;
        Ok([Complex64::new(half, root), Complex64::new(half, -root)])
    }
}

/// det(A - λI) as a polynomial in λ, ascending coefficients.
pub fn characteristic_polynomial(matrix: &[Vec<f64>]) -> Result<Polynomial, MathError> {
    validate_square(matrix)?;
    let shifted: Vec<Vec<Polynomial>> = matrix
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(|(j, &value)| {
                    if i == j {
                        Polynomial::shifted(value)
                    } else {
                        Polynomial::constant(value)
                    }
                })
                .collect()
        })
        .collect();
    Ok(cofactor_expansion(&shifted))
}

pub fn eigenvalues_nxn(matrix: &[Vec<f64>]) -> Result<Vec<Complex64>, MathError> {
    eigenvalues_nxn_with(matrix, &RootFinder::default())
}

/// Eigenvalues of an N x N matrix (N >= 3) as roots of its characteristic
/// polynomial, with multiplicity.
///
/// Output order: descending real part, then descending imaginary part.
pub fn eigenvalues_nxn_with(
    matrix: &[Vec<f64>],
    finder: &RootFinder,
) -> Result<Vec<Complex64>, MathError> {
    let n = validate_square(matrix)?;
    if n < 3 {
        return Err(MathError::Dimension { required: "at least 3x3", rows: n, cols: n });
    }
    let poly = characteristic_polynomial(matrix)?;
    let mut roots = finder.roots(&poly)?;
    tidy_roots(&mut roots);
    Ok(roots)
}

/// Route by order: closed form for 2x2, root finding for 3x3 and up.
pub fn eigenvalues(matrix: &[Vec<f64>], finder: &RootFinder) -> Result<Vec<Complex64>, MathError> {
    let n = validate_square(matrix)?;
    match n {
        1 => Err(MathError::Dimension { required: "at least 2x2", rows: 1, cols: 1 }),
        2 => Ok(eigenvalues_2x2_complex(matrix)?.to_vec()),
        _ => eigenvalues_nxn_with(matrix, finder),
    }
}

/// Snap near-real roots onto the axis, make conjugate pairs exact, sort.
///
/// The characteristic polynomial has real coefficients, so the output is
/// always real values and exact conjugate pairs.
fn tidy_roots(roots: &mut [Complex64]) {
    for r in roots.iter_mut() {
        if r.im.abs() <= REAL_SNAP * r.norm().max(1.0) {
            r.im = 0.0;
        }
    }

    // Real coefficients: every root above the axis has a partner below it.
    let mut paired = vec![false; roots.len()];
    for i in 0..roots.len() {
        if roots[i].im <= 0.0 || paired[i] {
            continue;
        }
        let target = roots[i].conj();
        let partner = (0..roots.len())
            .filter(|&j| !paired[j] && roots[j].im < 0.0)
            .min_by(|&a, &b| (roots[a] - target).norm().total_cmp(&(roots[b] - target).norm()))
            .filter(|&j| (roots[j] - target).norm() <= roots[i].im);
        if let Some(j) = partner {
            let re = (roots[i].re + roots[j].re) / 2.0;
            let im = (roots[i].im - roots[j].im) / 2.0;
            roots[i] = Complex64::new(re, im);
            roots[j] = Complex64::new(re, -im);
            paired[i] = true;
            paired[j] = true;
        }
    }
    // a root left without a partner is a real root split by rounding
    for (root, &done) in roots.iter_mut().zip(&paired) {
        if !done {
            root.im = 0.0;
        }
    }

    roots.sort_by(|a, b| b.re.total_cmp(&a.re).then(b.im.total_cmp(&a.im)));
}
