//! `compare` subcommand: every strategy against the same graph.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::warn;

use cellroute_lib::Comparison;

use super::load_input;
use crate::output::{render_comparison, OutputFormat};
use crate::terminal::ColorPalette;

#[derive(Debug, Clone)]
pub struct CompareArgs {
    pub input: PathBuf,
    pub format: OutputFormat,
}

pub fn handle_compare(args: &CompareArgs, out: &mut impl Write) -> Result<()> {
    let graph = load_input(&args.input)?;
    let comparison = Comparison::run(&graph)
        .with_context(|| format!("comparison on {} failed", args.input.display()))?;

    if !comparison.costs_agree {
        warn!(input = %args.input.display(), "search strategies returned different costs");
    }

    render_comparison(out, &comparison, args.format, ColorPalette::detect())
}
