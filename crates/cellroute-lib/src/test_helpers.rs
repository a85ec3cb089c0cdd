// Test-only helpers for `cellroute-lib` unit tests
#![allow(dead_code)]
use crate::cell::Cell;
use crate::graph::{EdgeRecord, Graph, GraphRecords, NodeRecord, VertexId, Weight};

/// Builder to create `GraphRecords` in tests without going through the loader.
pub struct GraphRecordsBuilder {
    records: GraphRecords,
}

impl GraphRecordsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: GraphRecords {
                nodes: Vec::new(),
                edges: Vec::new(),
                start: 0,
                destination: 0,
            },
        }
    }

    pub fn node(mut self, vertex: VertexId, cell: i64) -> Self {
        self.records.nodes.push(NodeRecord {
            vertex,
            cell: Cell::new(cell).expect("test cell within grid"),
        });
        self
    }

    pub fn edge(mut self, from: VertexId, to: VertexId, weight: Weight) -> Self {
        self.records.edges.push(EdgeRecord { from, to, weight });
        self
    }

    pub fn endpoints(mut self, start: VertexId, destination: VertexId) -> Self {
        self.records.start = start;
        self.records.destination = destination;
        self
    }

    pub fn build(self) -> GraphRecords {
        self.records
    }

    pub fn build_graph(self) -> Graph {
        Graph::new(self.records).expect("test graph is well formed")
    }
}

impl Default for GraphRecordsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
