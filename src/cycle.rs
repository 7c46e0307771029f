//! Cycle detection for directed graphs.
//!
//! Three entry points:
//!
//! 1. **`is_acyclic`** — topological feasibility via Kahn's algorithm:
//!    the graph is acyclic iff every vertex can be processed.
//! 2. **`find_simple_cycles`** — enumerates every simple directed cycle,
//!    used for diagnostic reporting when acyclicity fails. Each cycle is
//!    emitted exactly once, rooted at its smallest member, so the output is
//!    deterministic for a given graph.
//! 3. **`tarjan_scc`** — all strongly connected components in O(V+E) via an
//!    iterative Tarjan DFS (explicit frame stack, no recursion).
//!    Reference: Tarjan, "Depth-First Search and Linear Graph Algorithms,"
//!    SIAM 1972.
//!
//! All algorithms operate on the diagonal-free successor lists produced by
//! [`AdjacencyMatrix::adjacency_list`]; self-references never count as
//! cycles here.

use crate::matrix::AdjacencyMatrix;
use std::collections::VecDeque;

/// A vertex identifier, 0-based.
pub type NodeId = usize;

// ─────────────────────────────────────────────────────────────────────────────
// Acyclicity
// ─────────────────────────────────────────────────────────────────────────────

/// Whether the graph induced by the adjacency matrix is free of directed
/// cycles (diagonal entries excluded).
pub fn is_acyclic(adjacency: &AdjacencyMatrix) -> bool {
    let n = adjacency.size();
    let list = adjacency.adjacency_list();

    let mut in_degree = vec![0usize; n];
    for succs in &list {
        for &v in succs {
            in_degree[v] += 1;
        }
    }

    let mut queue: VecDeque<NodeId> = (0..n).filter(|&v| in_degree[v] == 0).collect();
    let mut processed = 0usize;

    while let Some(v) = queue.pop_front() {
        processed += 1;
        for &w in &list[v] {
            in_degree[w] -= 1;
            if in_degree[w] == 0 {
                queue.push_back(w);
            }
        }
    }

    processed == n
}

// ─────────────────────────────────────────────────────────────────────────────
// Simple cycle enumeration
// ─────────────────────────────────────────────────────────────────────────────

/// Enumerates all simple directed cycles.
///
/// Each cycle is a vertex sequence `v1, v2, …, vk` with edges v1→v2→…→vk→v1
/// and no repeated vertex, reported rooted at its smallest member. For each
/// start vertex (ascending) the search only walks vertices with a larger
/// index, so a cycle is discovered exactly once and the overall order is
/// stable across runs.
///
/// Worst-case cost is exponential in the number of cycles, which is fine for
/// the interactive-scale graphs this crate targets.
pub fn find_simple_cycles(adjacency: &AdjacencyMatrix) -> Vec<Vec<NodeId>> {
    let n = adjacency.size();
    let list = adjacency.adjacency_list();

    let mut cycles = Vec::new();
    let mut path: Vec<NodeId> = Vec::new();
    let mut on_path = vec![false; n];

    for start in 0..n {
        walk(start, start, &list, &mut path, &mut on_path, &mut cycles);
    }

    cycles
}

fn walk(
    start: NodeId,
    v: NodeId,
    list: &[Vec<NodeId>],
    path: &mut Vec<NodeId>,
    on_path: &mut [bool],
    cycles: &mut Vec<Vec<NodeId>>,
) {
    path.push(v);
    on_path[v] = true;

    for &w in &list[v] {
        if w == start {
            cycles.push(path.clone());
        } else if w > start && !on_path[w] {
            walk(start, w, list, path, on_path, cycles);
        }
    }

    path.pop();
    on_path[v] = false;
}

// ─────────────────────────────────────────────────────────────────────────────
// Tarjan's SCC algorithm (iterative)
// ─────────────────────────────────────────────────────────────────────────────

/// Finds all strongly connected components of the graph described by `adj`.
///
/// Uses an iterative DFS with an explicit frame stack instead of recursion.
/// Every vertex appears in exactly one component; vertices on no cycle form
/// singleton components. Components come out in reverse topological order of
/// the condensation; callers wanting a canonical order sort afterwards.
///
/// # Arguments
/// * `num_nodes` — total number of vertices (IDs are 0..num_nodes)
/// * `adj` — successor list: adj[u] = successors of u
pub fn tarjan_scc(num_nodes: usize, adj: &[Vec<NodeId>]) -> Vec<Vec<NodeId>> {
    const UNDEFINED: i32 = -1;
    let mut index = vec![UNDEFINED; num_nodes];
    let mut lowlink = vec![0i32; num_nodes];
    let mut on_stack = vec![false; num_nodes];

    let mut stack: Vec<NodeId> = Vec::new();
    let mut current_index: i32 = 0;
    let mut components: Vec<Vec<NodeId>> = Vec::new();

    // Each frame tracks a vertex and the position of its next unexplored
    // successor.
    struct Frame {
        node: NodeId,
        next_succ: usize,
    }

    for root in 0..num_nodes {
        if index[root] != UNDEFINED {
            continue;
        }

        index[root] = current_index;
        lowlink[root] = current_index;
        current_index += 1;
        stack.push(root);
        on_stack[root] = true;

        let mut frames: Vec<Frame> = vec![Frame {
            node: root,
            next_succ: 0,
        }];

        while let Some(frame) = frames.last_mut() {
            let v = frame.node;

            if frame.next_succ < adj[v].len() {
                let w = adj[v][frame.next_succ];
                frame.next_succ += 1;

                if index[w] == UNDEFINED {
                    // Tree edge: descend into w.
                    index[w] = current_index;
                    lowlink[w] = current_index;
                    current_index += 1;
                    stack.push(w);
                    on_stack[w] = true;
                    frames.push(Frame {
                        node: w,
                        next_succ: 0,
                    });
                } else if on_stack[w] {
                    // Back edge.
                    lowlink[v] = lowlink[v].min(index[w]);
                }
            } else {
                // All successors explored — v may close a component.
                if lowlink[v] == index[v] {
                    let mut members = Vec::new();
                    loop {
                        let w = stack.pop().expect("SCC stack holds v");
                        on_stack[w] = false;
                        members.push(w);
                        if w == v {
                            break;
                        }
                    }
                    components.push(members);
                }

                // Ascend: propagate lowlink to the parent frame.
                let finished = frames.pop().expect("frame stack not empty");
                if let Some(parent) = frames.last() {
                    let p = parent.node;
                    lowlink[p] = lowlink[p].min(lowlink[finished.node]);
                }
            }
        }
    }

    components
}
