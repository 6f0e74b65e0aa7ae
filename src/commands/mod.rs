//! Subcommand handlers and result rendering for the `litearray` binary.

pub mod array;
pub mod matrix;

use anyhow::{Context, Result};
use num_complex::Complex64;
use serde_json::{json, Value};

use crate::cli::{Command, LitearrayCli};
use crate::config::Config;
use crate::core::precision::Precision;
use crate::debug_log;
use crate::io::atomic::atomic_write;

/// What a subcommand produced, before formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Scalar(f64),
    Vector(Vec<f64>),
    Matrix(Vec<Vec<f64>>),
    Complex(Vec<Complex64>),
}

impl Report {
    /// Round for display. Operations that already rounded are unaffected.
    pub fn rounded(self, precision: Precision) -> Self {
        match self {
            Report::Scalar(v) => Report::Scalar(precision.apply(v)),
            Report::Vector(mut vs) => {
                precision.apply_all(&mut vs);
                Report::Vector(vs)
            }
            Report::Matrix(mut rows) => {
                for row in rows.iter_mut() {
                    precision.apply_all(row);
                }
                Report::Matrix(rows)
            }
            Report::Complex(zs) => Report::Complex(
                zs.into_iter()
                    .map(|z| Complex64::new(precision.apply(z.re), precision.apply(z.im)))
                    .collect(),
            ),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Report::Scalar(v) => json!(v),
            Report::Vector(vs) => json!(vs),
            Report::Matrix(rows) => json!(rows),
            Report::Complex(zs) => {
                Value::Array(zs.iter().map(|z| json!({ "re": z.re, "im": z.im })).collect())
            }
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            Report::Scalar(v) => v.to_string(),
            Report::Vector(vs) => join(vs.iter().map(f64::to_string), " "),
            Report::Matrix(rows) => join(
                rows.iter().map(|row| join(row.iter().map(f64::to_string), " ")),
                "\n",
            ),
            Report::Complex(zs) => join(zs.iter().map(|z| format_complex(*z)), "\n"),
        }
    }
}

fn join(parts: impl Iterator<Item = String>, sep: &str) -> String {
    parts.collect::<Vec<_>>().join(sep)
}

fn format_complex(z: Complex64) -> String {
    if z.im == 0.0 {
        z.re.to_string()
    } else if z.im < 0.0 {
        format!("{}-{}i", z.re, -z.im)
    } else {
        format!("{}+{}i", z.re, z.im)
    }
}

pub fn run(args: LitearrayCli) -> Result<()> {
    if args.debug {
        crate::core::debug::enable();
    }
    let cfg = Config::load(&args.config)?;
    let digits = args.precision.unwrap_or(cfg.precision);
    let precision = Precision::new(digits).context("invalid --precision")?;
    debug_log!("precision {:?}, root finder {:?}", precision.digits(), cfg.root_finder);

    let report = match args.cmd {
        Command::Transpose { matrix } => matrix::transpose(&matrix, digits)?,
        Command::Det { matrix } => matrix::determinant(&matrix)?.rounded(precision),
        Command::Inverse { matrix } => matrix::inverse(&matrix)?.rounded(precision),
        Command::Eigen { matrix } => {
            matrix::eigenvalues(&matrix, &cfg.root_finder)?.rounded(precision)
        }
        Command::Eigen2 { matrix } => matrix::eigenvalues_2x2(&matrix)?.rounded(precision),
        Command::Array { op, arrays, percentile } => {
            array::run(op, &arrays, digits, percentile)?
        }
    };

    let rendered = if args.json { report.to_json().to_string() } else { report.to_text() };
    match args.out {
        Some(path) => atomic_write(&path, format!("{}\n", rendered))
            .with_context(|| format!("writing {}", path.display())),
        None => {
            println!("{}", rendered);
            Ok(())
        }
    }
}
