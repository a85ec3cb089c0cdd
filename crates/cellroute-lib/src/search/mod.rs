//! Best-first search over a [`Graph`].
//!
//! This module provides:
//! - [`SearchAlgorithm`] - Supported strategies (uniform-cost, A*)
//! - [`FrontierPriority`] - How a strategy orders the frontier
//! - [`SearchOutcome`] - Path cost and exploration statistics of one run
//! - [`best_first_search`] - The shared frontier exploration loop
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use cellroute_lib::{load_graph, search, SearchAlgorithm};
//!
//! let graph = load_graph(Path::new("graph.txt"))?;
//! let outcome = search(&graph, SearchAlgorithm::AStar)?;
//! println!("cost {} after {} nodes", outcome.path_cost, outcome.explored_count());
//! ```

mod priority;

pub use priority::{select_priority, AStar, FrontierPriority, UniformCost};

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeIndex, VertexId, Weight};

/// Accumulated path cost.
pub type Cost = Weight;

/// Supported search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SearchAlgorithm {
    /// Dijkstra-style search ordered by accumulated cost.
    UniformCost,
    /// Cost plus the admissible cell lower bound.
    #[default]
    AStar,
}

impl SearchAlgorithm {
    /// Every supported algorithm, in reporting order.
    pub const ALL: [SearchAlgorithm; 2] = [SearchAlgorithm::UniformCost, SearchAlgorithm::AStar];
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SearchAlgorithm::UniformCost => "uniform-cost",
            SearchAlgorithm::AStar => "a-star",
        };
        f.write_str(value)
    }
}

/// Result of a successful search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub algorithm: SearchAlgorithm,
    /// Cost of the cheapest path from start to destination.
    pub path_cost: Cost,
    /// Vertex ids in the order they were explored. The destination is last.
    pub explored: Vec<VertexId>,
    /// Largest number of entries held by the frontier at once.
    pub max_frontier: usize,
}

impl SearchOutcome {
    pub fn explored_count(&self) -> usize {
        self.explored.len()
    }
}

/// Run uniform-cost search from the graph's start to its destination.
pub fn uniform_cost_search(graph: &Graph) -> Result<SearchOutcome> {
    best_first_search(graph, &UniformCost)
}

/// Run A* search from the graph's start to its destination.
pub fn a_star_search(graph: &Graph) -> Result<SearchOutcome> {
    best_first_search(graph, &AStar::for_graph(graph))
}

/// Run the search selected by `algorithm`.
pub fn search(graph: &Graph, algorithm: SearchAlgorithm) -> Result<SearchOutcome> {
    let priority = select_priority(algorithm, graph);
    best_first_search(graph, priority.as_ref())
}

/// Explore the graph in priority order until the destination is explored.
///
/// Entries are never updated in place: a node may sit in the frontier several
/// times with different costs, and every pop after the first for that node is
/// discarded. Returns [`Error::NoPathFound`] when the frontier runs dry and
/// [`Error::CostOverflow`] when an accumulated cost exceeds [`Cost`].
pub fn best_first_search<P>(graph: &Graph, priority: &P) -> Result<SearchOutcome>
where
    P: FrontierPriority + ?Sized,
{
    let algorithm = priority.algorithm();
    let start = graph.start_index();
    let destination = graph.destination_index();
    debug!(
        %algorithm,
        start = graph.start().id(),
        destination = graph.destination().id(),
        "starting search"
    );

    let mut frontier = Frontier::with_capacity(graph.edge_count() + 1);
    let mut explored = vec![false; graph.node_count()];
    let mut explored_order = Vec::new();
    let mut max_frontier = 0;

    frontier.push(0.0, 0, start);

    loop {
        max_frontier = max_frontier.max(frontier.len());
        let Some(entry) = frontier.pop() else {
            break;
        };

        if explored[entry.node.index()] {
            continue;
        }
        explored[entry.node.index()] = true;
        explored_order.push(graph[entry.node].id());

        if entry.node == destination {
            debug!(
                %algorithm,
                path_cost = entry.cost,
                explored = explored_order.len(),
                max_frontier,
                "destination reached"
            );
            return Ok(SearchOutcome {
                algorithm,
                path_cost: entry.cost,
                explored: explored_order,
                max_frontier,
            });
        }

        for neighbour in graph.neighbours(entry.node) {
            if explored[neighbour.node.index()] {
                continue;
            }
            let cost = entry.cost.checked_add(neighbour.weight).ok_or_else(|| {
                Error::CostOverflow {
                    vertex: graph[neighbour.node].id(),
                }
            })?;
            let key = priority.priority(cost, &graph[neighbour.node]);
            trace!(
                vertex = graph[neighbour.node].id(),
                cost,
                key,
                "frontier push"
            );
            frontier.push(key, cost, neighbour.node);
        }
    }

    debug!(
        %algorithm,
        explored = explored_order.len(),
        "frontier exhausted"
    );
    Err(Error::NoPathFound {
        start: graph.start().id(),
        destination: graph.destination().id(),
    })
}

/// Min-ordered priority queue with insertion-order tie breaking.
#[derive(Debug)]
struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
}

impl Frontier {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    fn push(&mut self, priority: f64, cost: Cost, node: NodeIndex) {
        self.heap.push(FrontierEntry {
            priority: FloatOrd(priority),
            sequence: self.next_sequence,
            cost,
            node,
        });
        self.next_sequence += 1;
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct FrontierEntry {
    priority: FloatOrd,
    sequence: u64,
    cost: Cost,
    node: NodeIndex,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the lowest key, then the oldest entry.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
