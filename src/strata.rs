//! Hierarchical level stratification of an acyclic adjacency relation.
//!
//! Kahn-style peeling: in-degree counts are computed once up front, then
//! zero-in-degree vertices are peeled off round by round using an explicit
//! frontier. Level k ends up holding exactly the vertices whose longest path
//! from a source has length k. The structure being decremented is never the
//! structure being iterated, and a round that would select nothing while
//! vertices remain fails fast instead of looping.

use crate::matrix::AdjacencyMatrix;
use serde::Serialize;
use thiserror::Error;

/// Stratification was requested on a graph containing at least one cycle.
///
/// `remaining` holds the vertices (0-based, ascending) that could never be
/// peeled because each still had an unsatisfied predecessor.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[error(
    "graph contains a cycle; {} vertices cannot be assigned a level",
    .remaining.len()
)]
pub struct CyclicGraphError {
    pub remaining: Vec<usize>,
}

/// Partitions the vertices into ordered levels.
///
/// Level 0 holds the vertices with no predecessors; each later level holds
/// the vertices whose predecessors were all peeled in earlier rounds.
/// Vertices within a level are listed in ascending index order. Diagonal
/// entries of the matrix do not count as predecessors.
pub fn stratify(adjacency: &AdjacencyMatrix) -> Result<Vec<Vec<usize>>, CyclicGraphError> {
    let n = adjacency.size();
    let list = adjacency.adjacency_list();

    let mut in_degree = vec![0usize; n];
    for succs in &list {
        for &v in succs {
            in_degree[v] += 1;
        }
    }

    // 0..n is ascending, so the first frontier needs no sort.
    let mut frontier: Vec<usize> = (0..n).filter(|&v| in_degree[v] == 0).collect();
    let mut levels: Vec<Vec<usize>> = Vec::new();
    let mut placed = 0usize;

    while !frontier.is_empty() {
        placed += frontier.len();

        let mut next = Vec::new();
        for &v in &frontier {
            for &w in &list[v] {
                in_degree[w] -= 1;
                if in_degree[w] == 0 {
                    next.push(w);
                }
            }
        }
        next.sort_unstable();

        levels.push(std::mem::replace(&mut frontier, next));
    }

    if placed < n {
        let remaining = (0..n).filter(|&v| in_degree[v] > 0).collect();
        return Err(CyclicGraphError { remaining });
    }

    Ok(levels)
}

/// Flattens levels into a vertex permutation: level order first, ascending
/// index within a level. Feeding the result to
/// [`AdjacencyMatrix::permuted`] renders the matrix in hierarchical order.
pub fn level_order(levels: &[Vec<usize>]) -> Vec<usize> {
    levels.iter().flatten().copied().collect()
}
