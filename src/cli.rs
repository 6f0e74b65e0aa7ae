use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ArrayOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulo,
    Log,
    Sqrt,
    Abs,
    Mean,
    Median,
    Mode,
    Variance,
    #[clap(alias = "std")]
    StdDev,
    Min,
    Max,
    Range,
    Percentile,
}

#[derive(Debug, Parser)]
#[command(
    name = "litearray",
    about = "litearray: array arithmetic, statistics and small-matrix linear algebra",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct LitearrayCli {
    /// Global: path to config (TOML); default: ~/.litearray/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: decimal digits to keep, -1 for none (overrides config)
    #[arg(long = "precision", value_name = "N", global = true, allow_hyphen_values = true)]
    pub precision: Option<i32>,

    /// Global: print results as JSON
    #[arg(long = "json", action = ArgAction::SetTrue, global = true)]
    pub json: bool,

    /// Global: write the result to FILE instead of stdout
    #[arg(long = "out", value_name = "FILE", global = true)]
    pub out: Option<PathBuf>,

    /// Global: debug output on stderr (same as LITEARRAY_DEBUG=1)
    #[arg(long = "debug", action = ArgAction::SetTrue, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Transpose a matrix
    ///
    /// Examples:
    ///   litearray transpose '[[1,2,3],[4,5,6]]'
    ///   litearray transpose @matrix.json --precision 2
    Transpose {
        /// JSON matrix, or @FILE
        #[arg(value_name = "MATRIX")]
        matrix: String,
    },

    /// Determinant by cofactor expansion
    Det {
        #[arg(value_name = "MATRIX")]
        matrix: String,
    },

    /// Inverse via the adjugate matrix
    Inverse {
        #[arg(value_name = "MATRIX")]
        matrix: String,
    },

    /// Eigenvalues of a square matrix (complex pairs included)
    Eigen {
        #[arg(value_name = "MATRIX")]
        matrix: String,
    },

    /// Real eigenvalues of a 2x2 matrix, larger first
    Eigen2 {
        #[arg(value_name = "MATRIX")]
        matrix: String,
    },

    /// Elementwise arithmetic and statistics over arrays
    ///
    /// Examples:
    ///   litearray array add '[1,2,3]' '[4,5,6]'
    ///   litearray array percentile --p 90 '[1,2,3,4]'
    Array {
        #[arg(value_enum, value_name = "OP")]
        op: ArrayOp,

        /// JSON arrays, or @FILE each
        #[arg(value_name = "ARRAY", required = true, num_args = 1..)]
        arrays: Vec<String>,

        /// Percentile to take (percentile op only)
        #[arg(long = "p", value_name = "P", default_value_t = 50.0)]
        percentile: f64,
    },
}
