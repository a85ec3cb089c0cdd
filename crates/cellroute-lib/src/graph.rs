use std::collections::HashMap;
use std::ops::Index;

use tracing::debug;

use crate::cell::Cell;
use crate::error::{Error, Result};

/// Numeric identifier for a vertex as it appears in the input tables.
pub type VertexId = i64;

/// Non-negative edge length.
pub type Weight = u64;

/// Position of a node inside the graph's node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Position in the node arena.
    pub fn index(self) -> usize {
        self.0
    }

    #[cfg(test)]
    pub(crate) fn for_test(index: usize) -> Self {
        NodeIndex(index)
    }
}

/// Position of an edge inside the graph's edge arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeIndex(usize);

/// Raw vertex row handed over by a loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRecord {
    pub vertex: VertexId,
    pub cell: Cell,
}

/// Raw edge row handed over by a loader. Each undirected edge appears once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRecord {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

/// Everything needed to construct a [`Graph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphRecords {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
    pub start: VertexId,
    pub destination: VertexId,
}

/// A vertex together with the grid cell it lies in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    id: VertexId,
    cell: Cell,
}

impl Node {
    /// Vertex id from the input table.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Grid cell the node lies in.
    pub fn cell(&self) -> Cell {
        self.cell
    }
}

/// Undirected weighted edge, stored once for both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    endpoints: [NodeIndex; 2],
    weight: Weight,
}

impl Edge {
    /// Length of the edge.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// The endpoint opposite to `node`, or `None` when `node` is not on this edge.
    pub fn far_end(&self, node: NodeIndex) -> Option<NodeIndex> {
        match self.endpoints {
            [a, b] if a == node => Some(b),
            [a, b] if b == node => Some(a),
            _ => None,
        }
    }
}

/// One step away from a node: the far endpoint and the cost of getting there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbour {
    pub node: NodeIndex,
    pub weight: Weight,
}

/// Immutable graph used by the search engine.
///
/// Nodes and edges live in flat arenas. Each node keeps the indices of the
/// edges touching it, so adjacency queries never scan the full edge list.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    by_vertex: HashMap<VertexId, NodeIndex>,
    incidence: Vec<Vec<EdgeIndex>>,
    start: NodeIndex,
    destination: NodeIndex,
}

impl Graph {
    /// Build a graph from loader records, validating every reference.
    pub fn new(records: GraphRecords) -> Result<Self> {
        Self::from_parts(
            &records.nodes,
            &records.edges,
            records.start,
            records.destination,
        )
    }

    /// Build a graph from node and edge tables plus the two endpoint ids.
    pub fn from_parts(
        nodes: &[NodeRecord],
        edges: &[EdgeRecord],
        start: VertexId,
        destination: VertexId,
    ) -> Result<Self> {
        if nodes.is_empty() {
            return Err(Error::malformed("vertex table is empty"));
        }
        if edges.is_empty() {
            return Err(Error::malformed("edge table is empty"));
        }

        let mut by_vertex = HashMap::with_capacity(nodes.len());
        let mut arena = Vec::with_capacity(nodes.len());
        for record in nodes {
            let index = NodeIndex(arena.len());
            if by_vertex.insert(record.vertex, index).is_some() {
                return Err(Error::malformed(format!(
                    "vertex {} is defined more than once",
                    record.vertex
                )));
            }
            arena.push(Node {
                id: record.vertex,
                cell: record.cell,
            });
        }

        let resolve = |vertex: VertexId, role: &str| {
            by_vertex.get(&vertex).copied().ok_or_else(|| {
                Error::malformed(format!("{role} {vertex} does not match any vertex"))
            })
        };

        let mut incidence = vec![Vec::new(); arena.len()];
        let mut edge_arena = Vec::with_capacity(edges.len());
        for record in edges {
            let a = resolve(record.from, "edge endpoint")?;
            let b = resolve(record.to, "edge endpoint")?;
            let index = EdgeIndex(edge_arena.len());
            incidence[a.0].push(index);
            if a != b {
                incidence[b.0].push(index);
            }
            edge_arena.push(Edge {
                endpoints: [a, b],
                weight: record.weight,
            });
        }

        let start = resolve(start, "start")?;
        let destination = resolve(destination, "destination")?;

        debug!(
            nodes = arena.len(),
            edges = edge_arena.len(),
            "built graph"
        );

        Ok(Self {
            nodes: arena,
            edges: edge_arena,
            by_vertex,
            incidence,
            start,
            destination,
        })
    }

    /// Lookup the arena index of a vertex id.
    pub fn index_of(&self, vertex: VertexId) -> Option<NodeIndex> {
        self.by_vertex.get(&vertex).copied()
    }

    /// Lookup a node by its vertex id.
    pub fn node(&self, vertex: VertexId) -> Option<&Node> {
        self.index_of(vertex).map(|index| &self.nodes[index.0])
    }

    /// Every node reachable over a single edge from `node`, with the edge weight.
    ///
    /// Edges are stored once, so the far endpoint is whichever side `node` is not.
    pub fn neighbours(&self, node: NodeIndex) -> impl Iterator<Item = Neighbour> + '_ {
        self.incidence
            .get(node.0)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .filter_map(move |edge| {
                let edge = &self.edges[edge.0];
                edge.far_end(node).map(|far| Neighbour {
                    node: far,
                    weight: edge.weight,
                })
            })
    }

    /// Neighbours of a vertex addressed by id; empty when the id is unknown.
    pub fn neighbours_of(
        &self,
        vertex: VertexId,
    ) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.index_of(vertex)
            .into_iter()
            .flat_map(move |index| self.neighbours(index))
            .map(move |neighbour| (self.nodes[neighbour.node.0].id, neighbour.weight))
    }

    /// The node the search starts from.
    pub fn start(&self) -> &Node {
        &self.nodes[self.start.0]
    }

    /// The node the search is looking for.
    pub fn destination(&self) -> &Node {
        &self.nodes[self.destination.0]
    }

    /// Arena index of [`Graph::start`].
    pub fn start_index(&self) -> NodeIndex {
        self.start
    }

    /// Arena index of [`Graph::destination`].
    pub fn destination_index(&self) -> NodeIndex {
        self.destination
    }

    /// All nodes in input order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in input order, each stored once.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl Index<NodeIndex> for Graph {
    type Output = Node;

    #[track_caller]
    fn index(&self, index: NodeIndex) -> &Node {
        &self.nodes[index.0]
    }
}
