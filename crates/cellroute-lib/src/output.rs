use std::fmt::Write;

use serde::Serialize;

use crate::cell::Cell;
use crate::error::Result;
use crate::graph::{Graph, Node, VertexId};
use crate::search::{search, Cost, SearchAlgorithm, SearchOutcome};

/// Endpoint of a search run.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ReportEndpoint {
    pub id: VertexId,
    pub cell: Cell,
}

impl From<&Node> for ReportEndpoint {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id(),
            cell: node.cell(),
        }
    }
}

/// Structured representation of a search run that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchReport {
    pub algorithm: SearchAlgorithm,
    pub start: ReportEndpoint,
    pub destination: ReportEndpoint,
    pub path_cost: Cost,
    pub explored: Vec<VertexId>,
    pub explored_count: usize,
    pub max_frontier: usize,
}

impl SearchReport {
    /// Combine a [`SearchOutcome`] with the endpoints of the graph it ran on.
    pub fn from_outcome(graph: &Graph, outcome: &SearchOutcome) -> Self {
        Self {
            algorithm: outcome.algorithm,
            start: graph.start().into(),
            destination: graph.destination().into(),
            path_cost: outcome.path_cost,
            explored: outcome.explored.clone(),
            explored_count: outcome.explored_count(),
            max_frontier: outcome.max_frontier,
        }
    }

    /// Plain-text rendering, one statistic per line.
    pub fn render_text(&self) -> String {
        let explored = self
            .explored
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        let mut buffer = String::new();
        let _ = writeln!(buffer, "Algorithm: {}", self.algorithm);
        let _ = writeln!(
            buffer,
            "Start: {} (cell {}) -> Destination: {} (cell {})",
            self.start.id, self.start.cell, self.destination.id, self.destination.cell
        );
        let _ = writeln!(buffer, "Shortest path: {}", self.path_cost);
        let _ = writeln!(buffer, "Nodes explored: {{{explored}}}");
        let _ = writeln!(buffer, "Number of nodes explored: {}", self.explored_count);
        let _ = writeln!(buffer, "Maximum queue size: {}", self.max_frontier);
        buffer
    }
}

/// Reports of every algorithm run against the same graph.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Comparison {
    pub reports: Vec<SearchReport>,
    /// Whether every algorithm found the same path cost.
    pub costs_agree: bool,
}

impl Comparison {
    /// Run every supported algorithm on `graph`.
    pub fn run(graph: &Graph) -> Result<Self> {
        let reports = SearchAlgorithm::ALL
            .into_iter()
            .map(|algorithm| {
                search(graph, algorithm).map(|outcome| SearchReport::from_outcome(graph, &outcome))
            })
            .collect::<Result<Vec<_>>>()?;
        let costs_agree = reports
            .windows(2)
            .all(|pair| pair[0].path_cost == pair[1].path_cost);
        Ok(Self {
            reports,
            costs_agree,
        })
    }

    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        for report in &self.reports {
            buffer.push_str(&report.render_text());
            buffer.push('\n');
        }
        let verdict = if self.costs_agree {
            "agree"
        } else {
            "DISAGREE"
        };
        let _ = writeln!(buffer, "Path costs {verdict}");
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::a_star_search;
    use crate::test_helpers::GraphRecordsBuilder;

    fn chain() -> Graph {
        GraphRecordsBuilder::new()
            .node(0, 0)
            .node(1, 1)
            .node(2, 11)
            .edge(0, 1, 50)
            .edge(1, 2, 60)
            .endpoints(0, 2)
            .build_graph()
    }

    #[test]
    fn text_report_lists_statistics() {
        let graph = chain();
        let outcome = a_star_search(&graph).expect("path exists");
        let text = SearchReport::from_outcome(&graph, &outcome).render_text();

        assert!(text.starts_with("Algorithm: a-star\n"));
        assert!(text.contains("Start: 0 (cell 0) -> Destination: 2 (cell 11)"));
        assert!(text.contains("Shortest path: 110\n"));
        assert!(text.contains("Nodes explored: {0, 1, 2}\n"));
        assert!(text.contains("Number of nodes explored: 3\n"));
        assert!(text.contains("Maximum queue size: 1\n"));
    }

    #[test]
    fn comparison_runs_every_algorithm() {
        let comparison = Comparison::run(&chain()).expect("path exists");
        let algorithms: Vec<_> = comparison.reports.iter().map(|r| r.algorithm).collect();
        assert_eq!(algorithms, SearchAlgorithm::ALL.to_vec());
        assert!(comparison.costs_agree);
        assert!(comparison.render_text().ends_with("Path costs agree\n"));
    }
}
