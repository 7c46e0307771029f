//! Subsystem decomposition and condensation of a directed graph.
//!
//! A subsystem is a maximal strongly connected vertex set; vertices on no
//! cycle (including fully isolated ones) form singleton subsystems, so the
//! subsystems always partition the vertex set exactly once. Contracting each
//! subsystem to a node yields the condensation graph, which is acyclic by
//! construction.

use crate::cycle::tarjan_scc;
use crate::matrix::AdjacencyMatrix;
use serde::Serialize;

/// A maximal strongly connected set of vertices. Members are sorted
/// ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subsystem {
    pub members: Vec<usize>,
}

impl Subsystem {
    /// The smallest member vertex; subsystems are ordered by this key.
    pub fn min_member(&self) -> usize {
        self.members[0]
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.members.binary_search(&vertex).is_ok()
    }
}

/// Partitions the vertices of `adjacency` into subsystems.
///
/// Every vertex lands in exactly one subsystem. Members are sorted ascending
/// within each subsystem and subsystems are sorted by their smallest member,
/// so the output is canonical for a given graph.
pub fn decompose(adjacency: &AdjacencyMatrix) -> Vec<Subsystem> {
    let list = adjacency.adjacency_list();
    let mut subsystems: Vec<Subsystem> = tarjan_scc(adjacency.size(), &list)
        .into_iter()
        .map(|mut members| {
            members.sort_unstable();
            Subsystem { members }
        })
        .collect();
    subsystems.sort_by_key(Subsystem::min_member);
    subsystems
}

/// Edges of the original graph with both endpoints inside `subsystem`,
/// in row-major order.
pub fn subsystem_edges(adjacency: &AdjacencyMatrix, subsystem: &Subsystem) -> Vec<(usize, usize)> {
    adjacency
        .edge_set()
        .into_iter()
        .filter(|&(u, v)| subsystem.contains(u) && subsystem.contains(v))
        .collect()
}

/// The subsystem-level directed graph: one node per subsystem, an edge i → j
/// whenever some original edge crosses from subsystem i into subsystem j.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condensation {
    pub subsystems: Vec<Subsystem>,
    /// Deduplicated subsystem index pairs, sorted ascending.
    pub edges: Vec<(usize, usize)>,
}

impl Condensation {
    /// Number of subsystem nodes.
    pub fn size(&self) -> usize {
        self.subsystems.len()
    }

    /// The condensation rendered as a K×K adjacency matrix (entries 0/1).
    /// Stratifying it always succeeds, because an SCC condensation cannot
    /// contain a cycle.
    pub fn adjacency(&self) -> AdjacencyMatrix {
        let k = self.subsystems.len();
        let mut cells = vec![vec![0u32; k]; k];
        for &(i, j) in &self.edges {
            cells[i][j] = 1;
        }
        AdjacencyMatrix::from_cells(k, cells)
    }

    /// Right-incidence sets of the condensation, indexed by subsystem.
    ///
    /// Entry j is the sorted set of subsystems with an edge into subsystem j.
    /// Note the direction: subsystem incidence is reported over incoming
    /// edges, unlike the per-vertex successor sets.
    pub fn right_incidence(&self) -> Vec<Vec<usize>> {
        let mut incoming = vec![Vec::new(); self.subsystems.len()];
        for &(i, j) in &self.edges {
            incoming[j].push(i);
        }
        // edges are sorted by (i, j), so each incoming list is already
        // ascending.
        incoming
    }
}

/// Builds the condensation graph of `adjacency` over the given subsystems.
///
/// `subsystems` must be the partition produced by [`decompose`] for the same
/// matrix. Edges inside a subsystem are dropped; crossing edges are recorded
/// once per ordered subsystem pair.
pub fn build_condensation(
    adjacency: &AdjacencyMatrix,
    subsystems: &[Subsystem],
) -> Condensation {
    let mut vertex_to_subsystem = vec![0usize; adjacency.size()];
    for (idx, subsystem) in subsystems.iter().enumerate() {
        for &v in &subsystem.members {
            vertex_to_subsystem[v] = idx;
        }
    }

    let mut edges: Vec<(usize, usize)> = adjacency
        .edge_set()
        .into_iter()
        .map(|(u, v)| (vertex_to_subsystem[u], vertex_to_subsystem[v]))
        .filter(|&(i, j)| i != j)
        .collect();
    edges.sort_unstable();
    edges.dedup();

    Condensation {
        subsystems: subsystems.to_vec(),
        edges,
    }
}
