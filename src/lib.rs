pub mod commands;
pub mod convert;
pub mod cycle;
pub mod decompose;
pub mod loader;
pub mod matrix;
pub mod strata;

pub use convert::{Conversion, ConvertError, EdgeDefect, convert};
pub use cycle::{NodeId, find_simple_cycles, is_acyclic, tarjan_scc};
pub use decompose::{Condensation, Subsystem, build_condensation, decompose, subsystem_edges};
pub use loader::{LoadError, load_adjacency, load_incidence};
pub use matrix::{AdjacencyMatrix, IncidenceMatrix, MatrixError};
pub use strata::{CyclicGraphError, level_order, stratify};
