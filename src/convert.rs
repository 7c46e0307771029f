//! Incidence-to-adjacency conversion.
//!
//! Walks the incidence matrix column by column, left to right. Each column
//! must contain exactly one +1 (the edge tail) and exactly one -1 (the edge
//! head); anything else is reported as a per-column defect. A repeated
//! ordered (tail, head) pair is an error on the later column — the first
//! occurrence is the accepted edge. Duplicate pairs are rejected rather than
//! coalesced, so the resulting adjacency entries are always 0 or 1.

use crate::matrix::{AdjacencyMatrix, IncidenceMatrix};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// What is wrong with a single incidence column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EdgeDefect {
    /// No +1 entry in the column.
    NoTail,
    /// No -1 entry in the column.
    NoHead,
    /// More than one +1 entry.
    MultipleTails,
    /// More than one -1 entry.
    MultipleHeads,
    /// A cell value outside {-1, 0, 1}.
    BadValue(i8),
}

impl fmt::Display for EdgeDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeDefect::NoTail => write!(f, "no tail vertex (+1)"),
            EdgeDefect::NoHead => write!(f, "no head vertex (-1)"),
            EdgeDefect::MultipleTails => write!(f, "multiple tail vertices"),
            EdgeDefect::MultipleHeads => write!(f, "multiple head vertices"),
            EdgeDefect::BadValue(v) => write!(f, "invalid value {v}"),
        }
    }
}

/// Conversion failure. `edge`, `tail`, and `head` are 0-based; the rendered
/// messages are 1-based.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("edge {}: {}", .edge + 1, .defect)]
    InvalidEdge { edge: usize, defect: EdgeDefect },
    #[error(
        "edge {}: an edge from vertex {} to vertex {} already exists",
        .edge + 1, .tail + 1, .head + 1
    )]
    DuplicateEdge {
        edge: usize,
        tail: usize,
        head: usize,
    },
}

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// Derived adjacency matrix; every entry is 0 or 1.
    pub adjacency: AdjacencyMatrix,
    /// Successor set per vertex, ascending and duplicate-free.
    pub right_incidence: Vec<Vec<usize>>,
}

/// Derives the adjacency matrix and right-incidence sets from a validated
/// incidence matrix.
///
/// Columns are processed in order; the first structural defect or duplicate
/// edge aborts the conversion and nothing partial is returned.
pub fn convert(incidence: &IncidenceMatrix) -> Result<Conversion, ConvertError> {
    let n = incidence.vertices();
    let m = incidence.edges();

    let mut cells = vec![vec![0u32; n]; n];
    let mut right_incidence: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut seen: HashSet<(usize, usize)> = HashSet::new();

    for edge in 0..m {
        let mut tail: Option<usize> = None;
        let mut head: Option<usize> = None;

        for vertex in 0..n {
            match incidence.get(vertex, edge) {
                1 => {
                    if tail.is_some() {
                        return Err(ConvertError::InvalidEdge {
                            edge,
                            defect: EdgeDefect::MultipleTails,
                        });
                    }
                    tail = Some(vertex);
                }
                -1 => {
                    if head.is_some() {
                        return Err(ConvertError::InvalidEdge {
                            edge,
                            defect: EdgeDefect::MultipleHeads,
                        });
                    }
                    head = Some(vertex);
                }
                0 => {}
                // IncidenceMatrix construction enforces the domain, but the
                // cell type does not, so classify anything else explicitly.
                other => {
                    return Err(ConvertError::InvalidEdge {
                        edge,
                        defect: EdgeDefect::BadValue(other),
                    });
                }
            }
        }

        let tail = tail.ok_or(ConvertError::InvalidEdge {
            edge,
            defect: EdgeDefect::NoTail,
        })?;
        let head = head.ok_or(ConvertError::InvalidEdge {
            edge,
            defect: EdgeDefect::NoHead,
        })?;

        if !seen.insert((tail, head)) {
            return Err(ConvertError::DuplicateEdge { edge, tail, head });
        }

        cells[tail][head] += 1;
        right_incidence[tail].push(head);
    }

    for succs in &mut right_incidence {
        succs.sort_unstable();
    }

    Ok(Conversion {
        adjacency: AdjacencyMatrix::from_cells(n, cells),
        right_incidence,
    })
}
