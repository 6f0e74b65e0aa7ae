//! Real-coefficient polynomials and a bounded Durand–Kerner root finder.
//!
//! `Polynomial` implements the ring operations the cofactor expansion needs,
//! so the same recursion that evaluates a determinant also builds the
//! characteristic polynomial det(A - λI).

use std::collections::BTreeMap;
use std::f64::consts::TAU;
use std::ops::{Add, Mul, Sub};

use num_complex::Complex64;
use num_traits::{One, Zero};
use serde::Deserialize;

use crate::core::error::MathError;

/// Coefficients in ascending powers: `coeffs[k]` multiplies `x^k`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    pub fn new(coeffs: Vec<f64>) -> Self {
        if coeffs.is_empty() {
            return Self::zero();
        }
        Self { coeffs }
    }

    pub fn constant(value: f64) -> Self {
        Self { coeffs: vec![value] }
    }

    /// `value - x`, the diagonal entry of A - λI.
    pub fn shifted(value: f64) -> Self {
        Self { coeffs: vec![value, -1.0] }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Index of the highest non-zero coefficient (0 for constants and zero).
    pub fn degree(&self) -> usize {
        self.coeffs.iter().rposition(|&c| c != 0.0).unwrap_or(0)
    }

    pub fn eval(&self, z: Complex64) -> Complex64 {
        self.coeffs
            .iter()
            .rev()
            .fold(Complex64::zero(), |acc, &c| acc * z + c)
    }

    pub fn derivative(&self) -> Polynomial {
        if self.coeffs.len() < 2 {
            return Polynomial::zero();
        }
        let coeffs = self.coeffs.iter().enumerate().skip(1).map(|(k, c)| c * k as f64).collect();
        Polynomial { coeffs }
    }

    /// p(s·x) / s^n for a monic p of degree n: still monic, roots divided by `s`.
    fn rescaled(&self, s: f64) -> Polynomial {
        let n = self.degree() as i32;
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .map(|(k, c)| c * s.powi(k as i32 - n))
            .collect();
        Polynomial { coeffs }
    }

    /// Σ|a_k| r^k: bounds the rounding error of `eval` at |z| = r.
    fn eval_magnitude(&self, r: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * r + c.abs())
    }

    /// Divide through by the leading coefficient and drop zero high terms.
    fn monic(&self) -> Polynomial {
        let degree = self.degree();
        let lead = self.coeffs[degree];
        Polynomial {
            coeffs: self.coeffs[..=degree].iter().map(|c| c / lead).collect(),
        }
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        let (mut long, short) = if self.coeffs.len() >= rhs.coeffs.len() {
            (self.coeffs, rhs.coeffs)
        } else {
            (rhs.coeffs, self.coeffs)
        };
        for (slot, c) in long.iter_mut().zip(short) {
            *slot += c;
        }
        Polynomial { coeffs: long }
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let mut coeffs = self.coeffs;
        coeffs.resize(len, 0.0);
        for (slot, c) in coeffs.iter_mut().zip(rhs.coeffs) {
            *slot -= c;
        }
        Polynomial { coeffs }
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        let mut coeffs = vec![0.0; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0.0 {
                continue;
            }
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Polynomial { coeffs }
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::constant(0.0)
    }

    fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0.0)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial::constant(1.0)
    }
}

// Residual threshold in units of machine epsilon times the evaluation bound.
const RESIDUAL_ULPS: f64 = 64.0;
// Newton steps spent polishing the centre of a root cluster.
const POLISH_STEPS: usize = 50;

/// Simultaneous (Durand–Kerner) iteration for all roots of a polynomial.
///
/// The polynomial is first rescaled by Fujiwara's root bound so every
/// root lies in the unit disk; the iteration then runs on numbers of order
/// one whatever the size of the coefficients. An approximation stops moving
/// once its step is below `tolerance` (relative to max(1, |z|)) or its
/// residual is indistinguishable from rounding noise. The second rule lets
/// clusters of repeated roots terminate, since those converge only linearly;
/// such clusters are then collapsed onto a single polished multiple root.
///
/// Results are checked before they are returned: every root must evaluate
/// to a small residual and the roots must sum to -a_{n-1}. Failing either
/// check is `NonConvergence`, never a partial answer.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RootFinder {
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for RootFinder {
    fn default() -> Self {
        Self { max_iterations: 500, tolerance: 1e-12 }
    }
}

impl RootFinder {
    pub fn new(max_iterations: usize, tolerance: f64) -> Self {
        Self { max_iterations, tolerance }
    }

    /// All `degree()` roots of `poly`, with multiplicity, in no particular order.
    pub fn roots(&self, poly: &Polynomial) -> Result<Vec<Complex64>, MathError> {
        if poly.degree() == 0 {
            return Ok(Vec::new());
        }
        let monic = poly.monic();

        // each vanishing low-order coefficient is an exact root at zero
        let zeros = monic.coeffs.iter().take_while(|&&c| c == 0.0).count();
        let reduced = Polynomial { coeffs: monic.coeffs[zeros..].to_vec() };
        let mut roots = vec![Complex64::zero(); zeros];
        match reduced.degree() {
            0 => {}
            1 => roots.push(Complex64::new(-reduced.coeffs[0], 0.0)),
            _ => roots.extend(self.nonzero_roots(&reduced)?),
        }
        Ok(roots)
    }

    /// Roots of a monic polynomial of degree >= 2 with a non-zero constant term.
    fn nonzero_roots(&self, monic: &Polynomial) -> Result<Vec<Complex64>, MathError> {
        let scale = fujiwara_bound(monic);
        if !(scale.is_finite() && scale > 0.0) {
            debug_log!("root finder: unusable root bound {}", scale);
            return Err(MathError::NonConvergence { iterations: 0 });
        }
        let unit = monic.rescaled(scale);

        let (mut roots, iterations) = self.iterate(&unit)?;
        let radii = inclusion_radii(&unit, &roots);
        merge_clusters(&unit, &mut roots, &radii);
        self.verify(&unit, &roots, &radii, iterations)?;
        Ok(roots.into_iter().map(|z| z * scale).collect())
    }

    /// Gauss-Seidel Durand–Kerner sweeps from points on a circle.
    fn iterate(&self, monic: &Polynomial) -> Result<(Vec<Complex64>, usize), MathError> {
        let degree = monic.degree();
        let mut roots = initial_guesses(monic, degree);
        for iteration in 1..=self.max_iterations {
            let mut settled = true;
            for i in 0..degree {
                let z = roots[i];
                let value = monic.eval(z);
                if value.norm() <= RESIDUAL_ULPS * f64::EPSILON * monic.eval_magnitude(z.norm()) {
                    continue;
                }
                let step = weierstrass(monic, &roots, i);
                roots[i] = z - step;
                if step.norm() > self.tolerance * z.norm().max(1.0) {
                    settled = false;
                }
            }
            if roots.iter().any(|r| !r.re.is_finite() || !r.im.is_finite()) {
                debug_log!("root finder diverged at iteration {}", iteration);
                return Err(MathError::NonConvergence { iterations: iteration });
            }
            if settled {
                debug_log!("root finder converged: degree {} in {} iterations", degree, iteration);
                return Ok((roots, iteration));
            }
        }
        debug_log!(
            "root finder gave up: degree {} after {} iterations",
            degree,
            self.max_iterations
        );
        Err(MathError::NonConvergence { iterations: self.max_iterations })
    }

    fn verify(
        &self,
        monic: &Polynomial,
        roots: &[Complex64],
        radii: &[f64],
        iterations: usize,
    ) -> Result<(), MathError> {
        let n = roots.len() as f64;
        for z in roots {
            let r = z.norm().max(1.0);
            let limit = monic.eval_magnitude(r) * (4.0 * n * self.tolerance * r).max(f64::EPSILON.sqrt());
            let residual = monic.eval(*z).norm();
            if residual > limit {
                debug_log!("root finder: residual {:e} at {} exceeds {:e}", residual, z, limit);
                return Err(MathError::NonConvergence { iterations });
            }
        }

        // Vieta: the roots of a monic polynomial sum to -a_{n-1}
        let sum: Complex64 = roots.iter().sum();
        let total: f64 = roots.iter().map(|z| z.norm()).sum();
        let slack = (f64::EPSILON.sqrt() * total.max(1.0)).max(2.0 * n * radii.iter().sum::<f64>());
        let drift = (sum + monic.coeffs[roots.len() - 1]).norm();
        if drift > slack {
            debug_log!("root finder: root sum off by {:e} (allowed {:e})", drift, slack);
            return Err(MathError::NonConvergence { iterations });
        }
        Ok(())
    }
}

/// 2·max |a_{n-k}|^{1/k} (halving a_0): every root of `monic` lies within.
/// Unlike the Cauchy bound it grows like the roots, not like their product.
fn fujiwara_bound(monic: &Polynomial) -> f64 {
    let n = monic.degree();
    let largest = (1..=n)
        .map(|k| {
            let a = monic.coeffs[n - k].abs();
            let a = if k == n { a / 2.0 } else { a };
            a.powf(1.0 / k as f64)
        })
        .fold(0.0f64, f64::max);
    2.0 * largest
}

/// Durand–Kerner correction for `roots[i]`: p(z_i) / Π_{j≠i} (z_i - z_j).
fn weierstrass(monic: &Polynomial, roots: &[Complex64], i: usize) -> Complex64 {
    let z = roots[i];
    let mut denom = Complex64::one();
    for (j, &other) in roots.iter().enumerate() {
        if j != i {
            let gap = z - other;
            denom *= if gap.is_zero() {
                Complex64::new(f64::EPSILON, f64::EPSILON)
            } else {
                gap
            };
        }
    }
    monic.eval(z) / denom
}

/// n·|W_i|: the disks of these radii around the approximations contain all
/// roots, and a connected group of k disks holds exactly k of them.
fn inclusion_radii(monic: &Polynomial, roots: &[Complex64]) -> Vec<f64> {
    let n = roots.len() as f64;
    (0..roots.len())
        .map(|i| n * weierstrass(monic, roots, i).norm())
        .collect()
}

/// Collapse each group of approximations whose inclusion disks overlap onto
/// one multiple root, when the polished centre really is a root.
fn merge_clusters(monic: &Polynomial, roots: &mut [Complex64], radii: &[f64]) {
    let n = roots.len();
    let mut parent: Vec<usize> = (0..n).collect();
    for i in 0..n {
        for j in i + 1..n {
            if (roots[i] - roots[j]).norm() <= radii[i] + radii[j] {
                let (a, b) = (find(&parent, i), find(&parent, j));
                if a != b {
                    parent[b] = a;
                }
            }
        }
    }

    let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for i in 0..n {
        groups.entry(find(&parent, i)).or_default().push(i);
    }
    for members in groups.values().filter(|members| members.len() > 1) {
        if let Some(centre) = polish_cluster(monic, roots, radii, members) {
            debug_log!("root finder: {} roots merged at {}", members.len(), centre);
            for &i in members {
                roots[i] = centre;
            }
        }
    }
}

fn find(parent: &[usize], mut i: usize) -> usize {
    while parent[i] != i {
        i = parent[i];
    }
    i
}

/// A root of multiplicity m is a simple root of p^(m-1), so Newton on that
/// derivative converges quadratically where the plain iteration stalls.
fn polish_cluster(
    monic: &Polynomial,
    roots: &[Complex64],
    radii: &[f64],
    members: &[usize],
) -> Option<Complex64> {
    let m = members.len();
    let mean = members.iter().map(|&i| roots[i]).sum::<Complex64>() / m as f64;

    let mut target = monic.clone();
    for _ in 1..m {
        target = target.derivative();
    }
    let slope = target.derivative();

    let mut centre = mean;
    for _ in 0..POLISH_STEPS {
        let d = slope.eval(centre);
        if d.is_zero() {
            break;
        }
        let step = target.eval(centre) / d;
        centre -= step;
        if step.norm() <= 4.0 * f64::EPSILON * centre.norm().max(1.0) {
            break;
        }
    }
    if !(centre.re.is_finite() && centre.im.is_finite()) {
        return None;
    }

    let spread = members
        .iter()
        .map(|&i| (roots[i] - mean).norm() + radii[i])
        .fold(0.0, f64::max);
    let worst = members
        .iter()
        .map(|&i| monic.eval(roots[i]).norm())
        .fold(0.0, f64::max);
    let residual = monic.eval(centre).norm();
    let is_root = residual <= RESIDUAL_ULPS * f64::EPSILON * monic.eval_magnitude(centre.norm())
        || residual <= worst;
    ((centre - mean).norm() <= spread && is_root).then_some(centre)
}

/// Points on a circle around the root centroid, radius from the root bound,
/// rotated off the real axis so conjugate pairs can separate.
fn initial_guesses(monic: &Polynomial, degree: usize) -> Vec<Complex64> {
    let center = -monic.coeffs[degree - 1] / degree as f64;
    let radius = fujiwara_bound(monic);
    (0..degree)
        .map(|k| {
            let angle = TAU * k as f64 / degree as f64 + 0.4;
            Complex64::new(center, 0.0) + Complex64::from_polar(radius, angle)
        })
        .collect()
}
