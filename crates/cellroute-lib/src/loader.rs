//! Graph input loading.
//!
//! Input files are comma delimited and split into three sections, each
//! introduced by a marker row:
//!
//! ```text
//! # Vertices
//! ID,Square
//! 0,0
//! 1,11
//! # Edges
//! From,To,Distance
//! 0,1,50
//! # Source and Dest
//! S,0
//! D,1
//! ```
//!
//! The first row after the vertex and edge markers is treated as a column
//! header when it does not start with an integer. Any other row whose first
//! field starts with `#` is a comment.

use std::fmt::Display;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::graph::{EdgeRecord, Graph, GraphRecords, NodeRecord, VertexId, Weight};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Vertices,
    Edges,
    Endpoints,
}

impl Section {
    const ALL: [Section; 3] = [Section::Vertices, Section::Edges, Section::Endpoints];

    fn marker(self) -> &'static str {
        match self {
            Section::Vertices => "# Vertices",
            Section::Edges => "# Edges",
            Section::Endpoints => "# Source and Dest",
        }
    }

    fn from_marker(field: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.marker().eq_ignore_ascii_case(field))
    }

    fn has_header(self) -> bool {
        !matches!(self, Section::Endpoints)
    }
}

/// Load the graph described by the file at `path`.
pub fn load_graph(path: &Path) -> Result<Graph> {
    let records = load_records(path)?;
    Graph::new(records)
}

/// Read the node, edge and endpoint tables from the file at `path`.
pub fn load_records(path: &Path) -> Result<GraphRecords> {
    debug!(path = %path.display(), "loading graph input");
    let file = File::open(path)?;
    parse_records(file)
}

/// Read the node, edge and endpoint tables from any reader.
pub fn parse_records<R: Read>(reader: R) -> Result<GraphRecords> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut section: Option<Section> = None;
    let mut seen = Vec::with_capacity(Section::ALL.len());
    let mut at_section_start = false;

    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    let mut endpoints = Vec::new();

    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map_or(0, |position| position.line());
        let first = row.get(0).unwrap_or_default();

        if let Some(next) = Section::from_marker(first) {
            if seen.contains(&next) {
                return Err(Error::Parse {
                    line,
                    message: format!("section '{}' appears more than once", next.marker()),
                });
            }
            seen.push(next);
            section = Some(next);
            at_section_start = true;
            continue;
        }

        let first_in_section = std::mem::take(&mut at_section_start);
        if first.is_empty() || first.starts_with('#') {
            continue;
        }

        let Some(current) = section else {
            return Err(Error::Parse {
                line,
                message: "row appears before any section marker".to_string(),
            });
        };

        if first_in_section && current.has_header() && first.parse::<i64>().is_err() {
            continue;
        }

        match current {
            Section::Vertices => nodes.push(parse_node(&row, line)?),
            Section::Edges => edges.push(parse_edge(&row, line)?),
            Section::Endpoints => endpoints.push(parse_endpoint(&row, line)?),
        }
    }

    if let Some(missing) = Section::ALL.into_iter().find(|s| !seen.contains(s)) {
        return Err(Error::MissingSection {
            section: missing.marker(),
        });
    }

    let &[start, destination] = endpoints.as_slice() else {
        return Err(Error::malformed(format!(
            "expected a start row and a destination row, found {} endpoint rows",
            endpoints.len()
        )));
    };

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        start,
        destination,
        "parsed graph input"
    );

    Ok(GraphRecords {
        nodes,
        edges,
        start,
        destination,
    })
}

fn parse_node(row: &StringRecord, line: u64) -> Result<NodeRecord> {
    let vertex = field::<VertexId>(row, 0, "vertex id", line)?;
    let cell = field::<i64>(row, 1, "cell id", line)?;
    let cell = Cell::new(cell).map_err(|err| Error::Parse {
        line,
        message: err.to_string(),
    })?;
    Ok(NodeRecord { vertex, cell })
}

fn parse_edge(row: &StringRecord, line: u64) -> Result<EdgeRecord> {
    Ok(EdgeRecord {
        from: field::<VertexId>(row, 0, "edge source", line)?,
        to: field::<VertexId>(row, 1, "edge target", line)?,
        weight: field::<Weight>(row, 2, "edge weight", line)?,
    })
}

/// Endpoint rows are `label,id`; a bare `id` is accepted as well.
fn parse_endpoint(row: &StringRecord, line: u64) -> Result<VertexId> {
    let populated = row.iter().filter(|value| !value.is_empty()).count();
    let index = if populated >= 2 { 1 } else { 0 };
    field::<VertexId>(row, index, "endpoint id", line)
}

fn field<T>(row: &StringRecord, index: usize, name: &str, line: u64) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = row
        .get(index)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::Parse {
            line,
            message: format!("missing {name}"),
        })?;
    raw.parse::<T>().map_err(|err| Error::Parse {
        line,
        message: format!("invalid {name} '{raw}': {err}"),
    })
}
