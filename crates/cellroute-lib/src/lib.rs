//! cellroute library entry points.
//!
//! This crate loads grid-cell graphs from delimited input files, builds an
//! immutable arena-backed graph, and runs uniform-cost or A* best-first search
//! between the graph's start and destination. Higher-level consumers (the CLI)
//! should only depend on the functions exported here instead of reimplementing
//! behavior.
//!

#![deny(warnings)]

pub mod cell;
pub mod error;
pub mod graph;
pub mod loader;
pub mod output;
pub mod search;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use cell::{estimate, Cell, CELL_SIZE, GRID_DIMENSION};
pub use error::{Error, Result};
pub use graph::{
    Edge, EdgeRecord, Graph, GraphRecords, Neighbour, Node, NodeIndex, NodeRecord, VertexId,
    Weight,
};
pub use loader::{load_graph, load_records, parse_records};
pub use output::{Comparison, ReportEndpoint, SearchReport};
pub use search::{
    a_star_search, best_first_search, search, select_priority, uniform_cost_search, AStar, Cost,
    FrontierPriority, SearchAlgorithm, SearchOutcome, UniformCost,
};
