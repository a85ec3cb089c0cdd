//! Subcommand handlers. `main.rs` parses arguments and dispatches here.

mod compare;
mod inspect;
mod search;

use std::path::Path;

use anyhow::{Context, Result};
use cellroute_lib::{load_graph, Graph};

pub use compare::{handle_compare, CompareArgs};
pub use inspect::{handle_inspect, InspectArgs};
pub use search::{handle_search, AlgorithmArg, SearchArgs};

fn load_input(path: &Path) -> Result<Graph> {
    load_graph(path).with_context(|| format!("failed to load graph from {}", path.display()))
}
