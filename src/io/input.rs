//! Matrix and array arguments: inline JSON, or `@path` naming a JSON file.

use std::fs;

use anyhow::{Context, Result};

fn read_source(arg: &str) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => fs::read_to_string(path).with_context(|| format!("reading {}", path)),
        None => Ok(arg.to_string()),
    }
}

pub fn parse_matrix(arg: &str) -> Result<Vec<Vec<f64>>> {
    let txt = read_source(arg)?;
    serde_json::from_str(txt.trim())
        .with_context(|| format!("expected a JSON matrix such as [[1,2],[3,4]], got `{}`", txt.trim()))
}

pub fn parse_array(arg: &str) -> Result<Vec<f64>> {
    let txt = read_source(arg)?;
    serde_json::from_str(txt.trim())
        .with_context(|| format!("expected a JSON array such as [1,2,3], got `{}`", txt.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_json() {
        assert_eq!(parse_matrix("[[1, 2], [3, 4.5]]").unwrap(), vec![vec![1.0, 2.0], vec![3.0, 4.5]]);
        assert_eq!(parse_array(" [-1, 0.5] ").unwrap(), vec![-1.0, 0.5]);
        assert!(parse_matrix("[1, 2]").is_err());
    }

    #[test]
    fn from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.json");
        fs::write(&path, "[[2, 0], [0, 2]]\n").unwrap();
        let arg = format!("@{}", path.display());
        assert_eq!(parse_matrix(&arg).unwrap(), vec![vec![2.0, 0.0], vec![0.0, 2.0]]);
    }
}
