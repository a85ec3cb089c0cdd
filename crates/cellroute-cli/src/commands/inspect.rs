//! `inspect` subcommand.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use super::load_input;
use crate::output::{render_summary, GraphSummary, OutputFormat};
use crate::terminal::ColorPalette;

#[derive(Debug, Clone)]
pub struct InspectArgs {
    pub input: PathBuf,
    pub format: OutputFormat,
}

pub fn handle_inspect(args: &InspectArgs, out: &mut impl Write) -> Result<()> {
    let graph = load_input(&args.input)?;
    let summary = GraphSummary::from_graph(&args.input, &graph);
    render_summary(out, &summary, args.format, ColorPalette::detect())
}
