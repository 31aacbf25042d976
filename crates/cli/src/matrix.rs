//! `cli matrix`: parse a row-major matrix and report determinant and inverse.

use anyhow::{bail, Context, Result};
use geomath::Matrix;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MatrixSummary {
    pub order: usize,
    pub determinant: f64,
    /// True when the inverse below is the identity fallback.
    pub singular: bool,
    pub inverse: Vec<Vec<f64>>,
}

pub fn parse_values(raw: &str) -> Result<Vec<f64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(i, s)| {
            s.parse::<f64>()
                .with_context(|| format!("value #{} ({s:?}) is not a number", i + 1))
        })
        .collect()
}

pub fn summarize(values: &[f64]) -> Result<MatrixSummary> {
    match values.len() {
        4 => summarize_order::<2>(values),
        9 => summarize_order::<3>(values),
        16 => summarize_order::<4>(values),
        n => bail!("expected 4, 9 or 16 values for a square matrix, got {n}"),
    }
}

fn summarize_order<const N: usize>(values: &[f64]) -> Result<MatrixSummary> {
    let m = Matrix::<N>::from_row_slice(values)
        .with_context(|| format!("building {N}x{N} matrix"))?;
    let singular = m.try_inverse().is_none();
    let inverse = m.inverse();
    Ok(MatrixSummary {
        order: N,
        determinant: m.determinant(),
        singular,
        inverse: inverse.rows().iter().map(|r| r.to_vec()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_inverts_two_by_two() {
        let v = parse_values("4, 7, 2, 6").unwrap();
        let s = summarize(&v).unwrap();
        assert_eq!(s.order, 2);
        assert_eq!(s.determinant, 10.0);
        assert!(!s.singular);
        assert!((s.inverse[0][0] - 0.6).abs() < 1e-12);
        assert!((s.inverse[0][1] + 0.7).abs() < 1e-12);
    }

    #[test]
    fn singular_reports_identity() {
        let s = summarize(&parse_values("1,2,3,4,5,6,7,8,9").unwrap()).unwrap();
        assert!(s.singular);
        assert_eq!(s.inverse[1], vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_values("1,x,3").is_err());
        assert!(summarize(&[1.0, 2.0, 3.0]).is_err());
    }
}
