//! Textual interchange format for matrices.
//!
//! Incidence files: a header line "N M" (vertices, edges) followed by N rows
//! of M whitespace-separated values from {-1, 0, 1}. Adjacency files: a
//! header line "N" (a redundant "N N" is also accepted) followed by N rows
//! of N non-negative values. Blank lines are skipped; an empty file is an
//! error. Tokenizing happens here — the matrix constructors only ever see
//! already-parsed integer rows.

use crate::matrix::{AdjacencyMatrix, IncidenceMatrix, MatrixError};
use log::debug;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("file is empty")]
    Empty,
    #[error("header: {0}")]
    Header(String),
    #[error("row {}: '{}' is not an integer", .row + 1, .token)]
    Cell { row: usize, token: String },
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Loads an incidence matrix from a "N M" + rows text file.
pub fn load_incidence(path: &Path) -> Result<IncidenceMatrix, LoadError> {
    let text = fs::read_to_string(path)?;
    parse_incidence_text(&text)
}

/// Loads an adjacency matrix from a "N" + rows text file.
pub fn load_adjacency(path: &Path) -> Result<AdjacencyMatrix, LoadError> {
    let text = fs::read_to_string(path)?;
    parse_adjacency_text(&text)
}

/// Parses incidence-matrix text. See the module docs for the format.
pub fn parse_incidence_text(text: &str) -> Result<IncidenceMatrix, LoadError> {
    let mut lines = non_blank_lines(text);
    let header = lines.next().ok_or(LoadError::Empty)?;

    let dims = header_tokens(header)?;
    let [vertices, edges] = dims.as_slice() else {
        return Err(LoadError::Header(format!(
            "expected two integers (vertices, edges), found {}",
            dims.len()
        )));
    };
    let (vertices, edges) = (dimension(*vertices)?, dimension(*edges)?);
    debug!("loading incidence matrix: {vertices} vertices, {edges} edges");

    let rows = parse_rows(lines)?;
    Ok(IncidenceMatrix::from_rows(vertices, edges, &rows)?)
}

/// Parses adjacency-matrix text. See the module docs for the format.
pub fn parse_adjacency_text(text: &str) -> Result<AdjacencyMatrix, LoadError> {
    let mut lines = non_blank_lines(text);
    let header = lines.next().ok_or(LoadError::Empty)?;

    let dims = header_tokens(header)?;
    let size = match dims.as_slice() {
        [n] => dimension(*n)?,
        [n, m] if n == m => dimension(*n)?,
        [n, m] => {
            return Err(LoadError::Header(format!(
                "adjacency matrix must be square, header declares {n} x {m}"
            )));
        }
        other => {
            return Err(LoadError::Header(format!(
                "expected one integer (size), found {}",
                other.len()
            )));
        }
    };
    debug!("loading adjacency matrix: {size} vertices");

    let rows = parse_rows(lines)?;
    Ok(AdjacencyMatrix::from_rows(size, &rows)?)
}

fn header_tokens(header: &str) -> Result<Vec<i64>, LoadError> {
    tokenize(header, 0)
        .map_err(|_| LoadError::Header(format!("'{header}' is not a list of integers")))
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

fn parse_rows<'a>(lines: impl Iterator<Item = &'a str>) -> Result<Vec<Vec<i64>>, LoadError> {
    lines
        .enumerate()
        .map(|(row, line)| tokenize(line, row))
        .collect()
}

fn tokenize(line: &str, row: usize) -> Result<Vec<i64>, LoadError> {
    line.split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| LoadError::Cell {
                row,
                token: token.to_string(),
            })
        })
        .collect()
}

fn dimension(value: i64) -> Result<usize, LoadError> {
    usize::try_from(value)
        .ok()
        .filter(|&n| n >= 1)
        .ok_or_else(|| LoadError::Header(format!("dimension {value} must be at least 1")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_incidence_text() {
        let m = parse_incidence_text("3 2\n1 0\n-1 1\n0 -1\n").unwrap();
        assert_eq!(m.vertices(), 3);
        assert_eq!(m.edges(), 2);
        assert_eq!(m.get(1, 1), 1);
    }

    #[test]
    fn test_parse_incidence_skips_blank_lines() {
        let m = parse_incidence_text("\n2 1\n\n1\n-1\n\n").unwrap();
        assert_eq!(m.vertices(), 2);
    }

    #[test]
    fn test_parse_incidence_empty_file() {
        assert!(matches!(parse_incidence_text("  \n \n"), Err(LoadError::Empty)));
    }

    #[test]
    fn test_parse_incidence_bad_header() {
        let err = parse_incidence_text("3\n1\n-1\n0\n").unwrap_err();
        assert!(matches!(err, LoadError::Header(_)));
    }

    #[test]
    fn test_parse_incidence_non_integer_header() {
        let err = parse_incidence_text("a b\n1\n-1\n").unwrap_err();
        assert!(matches!(err, LoadError::Header(_)));
    }

    #[test]
    fn test_parse_incidence_zero_dimension() {
        let err = parse_incidence_text("0 2\n").unwrap_err();
        assert!(matches!(err, LoadError::Header(_)));
    }

    #[test]
    fn test_parse_incidence_non_integer_cell() {
        let err = parse_incidence_text("2 1\n1\nx\n").unwrap_err();
        match err {
            LoadError::Cell { row, token } => {
                assert_eq!(row, 0);
                assert_eq!(token, "x");
            }
            other => panic!("expected Cell error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_incidence_row_count_mismatch_surfaces_matrix_error() {
        let err = parse_incidence_text("3 1\n1\n-1\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Matrix(MatrixError::RowCount {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_parse_incidence_domain_error_surfaces() {
        let err = parse_incidence_text("2 1\n1\n-2\n").unwrap_err();
        assert!(matches!(err, LoadError::Matrix(MatrixError::Domain { .. })));
    }

    #[test]
    fn test_parse_adjacency_single_size_header() {
        let m = parse_adjacency_text("2\n0 1\n0 0\n").unwrap();
        assert_eq!(m.size(), 2);
        assert_eq!(m.get(0, 1), 1);
    }

    #[test]
    fn test_parse_adjacency_accepts_square_header() {
        let m = parse_adjacency_text("2 2\n0 1\n1 0\n").unwrap();
        assert_eq!(m.size(), 2);
    }

    #[test]
    fn test_parse_adjacency_rejects_non_square_header() {
        let err = parse_adjacency_text("2 3\n0 1\n0 0\n").unwrap_err();
        assert!(matches!(err, LoadError::Header(_)));
    }

    #[test]
    fn test_parse_adjacency_ragged_row() {
        let err = parse_adjacency_text("2\n0 1\n0\n").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Matrix(MatrixError::RowLength { row: 1, .. })
        ));
    }

    #[test]
    fn test_load_reports_io_error_for_missing_file() {
        let err = load_incidence(Path::new("/nonexistent/matrix.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
