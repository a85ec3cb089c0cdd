//! `search` subcommand: one strategy, one report.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::info;

use cellroute_lib::{search, SearchAlgorithm, SearchReport};

use super::load_input;
use crate::output::{render_search, OutputFormat};

/// Search strategy names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Expand nodes strictly by accumulated cost.
    UniformCost,
    /// Accumulated cost plus the cell lower bound.
    AStar,
}

impl From<AlgorithmArg> for SearchAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::UniformCost => SearchAlgorithm::UniformCost,
            AlgorithmArg::AStar => SearchAlgorithm::AStar,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchArgs {
    pub input: PathBuf,
    pub algorithm: AlgorithmArg,
    pub format: OutputFormat,
}

pub fn handle_search(args: &SearchArgs, out: &mut impl Write) -> Result<()> {
    let graph = load_input(&args.input)?;
    let algorithm = SearchAlgorithm::from(args.algorithm);

    let outcome = search(&graph, algorithm)
        .with_context(|| format!("{algorithm} search on {} failed", args.input.display()))?;
    info!(
        %algorithm,
        cost = outcome.path_cost,
        explored = outcome.explored_count(),
        "search finished"
    );

    let report = SearchReport::from_outcome(&graph, &outcome);
    render_search(out, &report, args.format)
}
