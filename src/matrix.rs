//! Typed incidence and adjacency matrices with parse-time validation.
//!
//! Both matrix kinds are immutable once constructed: the only way to obtain
//! one is through a validated constructor, so every downstream algorithm can
//! assume the dimension and domain invariants hold. Vertices are indexed
//! 0-based internally; rendered output (error messages, CLI) is 1-based.

use serde::Serialize;
use thiserror::Error;

/// Validation failure while constructing a matrix from raw rows.
///
/// Row and column positions in the error messages are 1-based to match how
/// users see the matrix; the carried fields are the 0-based indices.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("matrix dimensions must be at least 1")]
    Empty,
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {} has {} values, expected {}", .row + 1, .found, .expected)]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("invalid value {} at row {}, column {}", .value, .row + 1, .column + 1)]
    Domain {
        row: usize,
        column: usize,
        value: i64,
    },
}

/// A vertex-by-edge incidence matrix for a directed graph.
///
/// Each column describes one edge: +1 marks the tail vertex, -1 the head,
/// all other entries are 0. Construction only enforces the value domain
/// {-1, 0, 1}; the one-tail/one-head shape of each column is checked by
/// [`crate::convert::convert`], which reports per-column defects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncidenceMatrix {
    vertices: usize,
    edges: usize,
    cells: Vec<Vec<i8>>,
}

impl IncidenceMatrix {
    /// Builds an incidence matrix from `vertices` rows of `edges` values each.
    ///
    /// Fails if the declared dimensions do not match the supplied rows or if
    /// any value falls outside {-1, 0, 1}. No partial matrix is ever returned.
    pub fn from_rows(
        vertices: usize,
        edges: usize,
        rows: &[Vec<i64>],
    ) -> Result<Self, MatrixError> {
        if vertices == 0 || edges == 0 {
            return Err(MatrixError::Empty);
        }
        if rows.len() != vertices {
            return Err(MatrixError::RowCount {
                expected: vertices,
                found: rows.len(),
            });
        }

        let mut cells = Vec::with_capacity(vertices);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != edges {
                return Err(MatrixError::RowLength {
                    row: i,
                    expected: edges,
                    found: row.len(),
                });
            }
            let mut out = Vec::with_capacity(edges);
            for (j, &value) in row.iter().enumerate() {
                match value {
                    -1 | 0 | 1 => out.push(value as i8),
                    _ => {
                        return Err(MatrixError::Domain {
                            row: i,
                            column: j,
                            value,
                        });
                    }
                }
            }
            cells.push(out);
        }

        Ok(Self {
            vertices,
            edges,
            cells,
        })
    }

    /// Number of vertices (rows).
    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// Number of edges (columns).
    pub fn edges(&self) -> usize {
        self.edges
    }

    /// Cell value for `vertex` in edge column `edge`.
    pub fn get(&self, vertex: usize, edge: usize) -> i8 {
        self.cells[vertex][edge]
    }
}

/// A vertex-by-vertex adjacency matrix; entry (i, j) counts edges i → j.
///
/// Matrices built by [`crate::convert::convert`] only ever hold 0/1 entries
/// (duplicate edges are rejected first); matrices parsed directly from user
/// input may carry larger counts. Diagonal entries are ignored when the edge
/// set is derived — a self-reference never participates in level, cycle, or
/// subsystem analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<Vec<u32>>,
}

impl AdjacencyMatrix {
    /// Builds an adjacency matrix from `size` rows of `size` non-negative values.
    pub fn from_rows(size: usize, rows: &[Vec<i64>]) -> Result<Self, MatrixError> {
        if size == 0 {
            return Err(MatrixError::Empty);
        }
        if rows.len() != size {
            return Err(MatrixError::RowCount {
                expected: size,
                found: rows.len(),
            });
        }

        let mut cells = Vec::with_capacity(size);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(MatrixError::RowLength {
                    row: i,
                    expected: size,
                    found: row.len(),
                });
            }
            let mut out = Vec::with_capacity(size);
            for (j, &value) in row.iter().enumerate() {
                match u32::try_from(value) {
                    Ok(v) => out.push(v),
                    Err(_) => {
                        return Err(MatrixError::Domain {
                            row: i,
                            column: j,
                            value,
                        });
                    }
                }
            }
            cells.push(out);
        }

        Ok(Self { size, cells })
    }

    /// Wraps pre-validated cells. Used by the incidence converter, which
    /// builds its counts one accepted edge at a time.
    pub(crate) fn from_cells(size: usize, cells: Vec<Vec<u32>>) -> Self {
        Self { size, cells }
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Edge count from vertex `from` to vertex `to`.
    pub fn get(&self, from: usize, to: usize) -> u32 {
        self.cells[from][to]
    }

    /// The raw rows, for rendering.
    pub fn rows(&self) -> &[Vec<u32>] {
        &self.cells
    }

    /// Sum of all entries — the total number of edge units in the matrix.
    pub fn total_edges(&self) -> u64 {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .map(|&c| u64::from(c))
            .sum()
    }

    /// The realized edge set as ordered (tail, head) pairs, in row-major
    /// order. Diagonal entries are skipped.
    pub fn edge_set(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for i in 0..self.size {
            for j in 0..self.size {
                if i != j && self.cells[i][j] > 0 {
                    edges.push((i, j));
                }
            }
        }
        edges
    }

    /// Successor list per vertex (ascending, duplicate-free, diagonal-free).
    /// This is the representation the cycle and decomposition algorithms
    /// operate on.
    pub fn adjacency_list(&self) -> Vec<Vec<usize>> {
        let mut list = vec![Vec::new(); self.size];
        for (i, j) in self.edge_set() {
            list[i].push(j);
        }
        list
    }

    /// Vertices reachable from `vertex` by one outgoing edge, ascending.
    pub fn successors(&self, vertex: usize) -> Vec<usize> {
        (0..self.size)
            .filter(|&j| j != vertex && self.cells[vertex][j] > 0)
            .collect()
    }

    /// Vertices with an edge into `vertex`, ascending.
    pub fn predecessors(&self, vertex: usize) -> Vec<usize> {
        (0..self.size)
            .filter(|&i| i != vertex && self.cells[i][vertex] > 0)
            .collect()
    }

    /// Right-incidence mapping: successor set for every vertex.
    pub fn right_incidence(&self) -> Vec<Vec<usize>> {
        (0..self.size).map(|v| self.successors(v)).collect()
    }

    /// Left-incidence mapping: predecessor set for every vertex.
    pub fn left_incidence(&self) -> Vec<Vec<usize>> {
        (0..self.size).map(|v| self.predecessors(v)).collect()
    }

    /// A copy of the matrix with rows and columns reordered so that position
    /// k refers to `order[k]` in the original. `order` must be a permutation
    /// of `0..size` — [`crate::strata::level_order`] produces one.
    pub fn permuted(&self, order: &[usize]) -> AdjacencyMatrix {
        debug_assert_eq!(order.len(), self.size);
        let cells = order
            .iter()
            .map(|&i| order.iter().map(|&j| self.cells[i][j]).collect())
            .collect();
        Self {
            size: self.size,
            cells,
        }
    }
}
