//! Output formatting for search reports.
//!
//! Text output reuses the library's renderers and adds terminal styling;
//! JSON output serialises the same report structures.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use cellroute_lib::{estimate, Comparison, Graph, ReportEndpoint, SearchReport};

use crate::terminal::ColorPalette;

/// Report format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One statistic per line.
    #[default]
    Text,
    /// Pretty-printed JSON document.
    Json,
}

/// Shape and endpoints of a loaded graph.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GraphSummary {
    pub input: String,
    pub node_count: usize,
    pub edge_count: usize,
    /// Sum of all edge weights, widened so `u64::MAX` weights still add up.
    pub total_weight: u128,
    pub start: ReportEndpoint,
    pub destination: ReportEndpoint,
    /// Straight-line lower bound between the start and destination cells.
    pub lower_bound: f64,
}

impl GraphSummary {
    pub fn from_graph(input: &Path, graph: &Graph) -> Self {
        let start = graph.start();
        let destination = graph.destination();
        Self {
            input: input.display().to_string(),
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            total_weight: graph
                .edges()
                .iter()
                .map(|edge| u128::from(edge.weight()))
                .sum(),
            start: start.into(),
            destination: destination.into(),
            lower_bound: estimate(start.cell(), destination.cell()),
        }
    }
}

/// Serialise `value` as pretty JSON followed by a newline.
pub fn render_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to serialise report")?;
    writeln!(out)?;
    Ok(())
}

pub fn render_search(
    out: &mut impl Write,
    report: &SearchReport,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            out.write_all(report.render_text().as_bytes())?;
            Ok(())
        }
        OutputFormat::Json => render_json(out, report),
    }
}

/// Render both reports; in text mode the verdict line is colored by `palette`.
pub fn render_comparison(
    out: &mut impl Write,
    comparison: &Comparison,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<()> {
    if format == OutputFormat::Json {
        return render_json(out, comparison);
    }

    for report in &comparison.reports {
        writeln!(out, "{}", report.render_text())?;
    }
    let (color, verdict) = if comparison.costs_agree {
        (palette.green, "agree")
    } else {
        (palette.red, "DISAGREE")
    };
    writeln!(out, "{color}Path costs {verdict}{}", palette.reset)?;
    Ok(())
}

pub fn render_summary(
    out: &mut impl Write,
    summary: &GraphSummary,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<()> {
    if format == OutputFormat::Json {
        return render_json(out, summary);
    }

    let ColorPalette {
        white_bold,
        gray,
        reset,
        ..
    } = palette;
    writeln!(out, "{white_bold}{}{reset}", summary.input)?;
    writeln!(out, "Nodes: {}", summary.node_count)?;
    writeln!(out, "Edges: {}", summary.edge_count)?;
    writeln!(out, "Total edge weight: {}", summary.total_weight)?;
    writeln!(
        out,
        "Start: {} {gray}(cell {}){reset}",
        summary.start.id, summary.start.cell
    )?;
    writeln!(
        out,
        "Destination: {} {gray}(cell {}){reset}",
        summary.destination.id, summary.destination.cell
    )?;
    writeln!(out, "Lower bound: {:.1}", summary.lower_bound)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellroute_lib::{a_star_search, parse_records};

    const CHAIN: &str = "# Vertices\n0,0\n1,1\n2,11\n# Edges\n0,1,50\n1,2,60\n# Source and Dest\nS,0\nD,2\n";

    fn chain() -> Graph {
        let records = parse_records(CHAIN.as_bytes()).expect("chain parses");
        Graph::new(records).expect("chain is well formed")
    }

    fn rendered(write: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buffer = Vec::new();
        write(&mut buffer).expect("render succeeds");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[test]
    fn json_report_carries_statistics() {
        let graph = chain();
        let outcome = a_star_search(&graph).expect("path exists");
        let report = SearchReport::from_outcome(&graph, &outcome);
        let text = rendered(|out| render_search(out, &report, OutputFormat::Json));

        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["algorithm"], "a-star");
        assert_eq!(value["path_cost"], 110);
        assert_eq!(value["explored"], serde_json::json!([0, 1, 2]));
        assert_eq!(value["destination"]["cell"], 11);
    }

    #[test]
    fn comparison_verdict_is_colored() {
        let comparison = Comparison::run(&chain()).expect("path exists");
        let text = rendered(|out| {
            render_comparison(
                out,
                &comparison,
                OutputFormat::Text,
                ColorPalette::colored(),
            )
        });
        assert!(text.ends_with("\x1b[32mPath costs agree\x1b[0m\n"));
        assert_eq!(text.matches("Shortest path: 110").count(), 2);
    }

    #[test]
    fn summary_lists_counts() {
        let summary = GraphSummary::from_graph(Path::new("chain.txt"), &chain());
        assert_eq!(summary.total_weight, 110);
        assert_eq!(summary.lower_bound, 0.0);

        let text = rendered(|out| {
            render_summary(out, &summary, OutputFormat::Text, ColorPalette::plain())
        });
        assert!(text.starts_with("chain.txt\n"));
        assert!(text.contains("Nodes: 3\n"));
        assert!(text.contains("Edges: 2\n"));
        assert!(text.contains("Destination: 2 (cell 11)\n"));
    }
}
