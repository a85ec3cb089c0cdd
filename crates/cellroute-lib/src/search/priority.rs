//! Frontier ordering strategies.
//!
//! The search engine is the same for every algorithm; only the key used to
//! order the frontier changes. Each strategy implements [`FrontierPriority`].

use crate::cell::{estimate, Cell};
use crate::graph::{Graph, Node};

use super::{Cost, SearchAlgorithm};

/// Computes the frontier key for a node reached at a given accumulated cost.
pub trait FrontierPriority {
    /// The algorithm identifier for this strategy.
    fn algorithm(&self) -> SearchAlgorithm;

    /// Key used to order `next` in the frontier. Lower keys are expanded first.
    fn priority(&self, cost: Cost, next: &Node) -> f64;
}

/// Orders the frontier by accumulated cost alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCost;

impl FrontierPriority for UniformCost {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::UniformCost
    }

    fn priority(&self, cost: Cost, _next: &Node) -> f64 {
        cost as f64
    }
}

/// Orders the frontier by accumulated cost plus the cell lower bound to the
/// destination.
#[derive(Debug, Clone, Copy)]
pub struct AStar {
    destination: Cell,
}

impl AStar {
    /// Guide the search towards `destination`.
    pub fn towards(destination: Cell) -> Self {
        Self { destination }
    }

    /// Guide the search towards the graph's destination node.
    pub fn for_graph(graph: &Graph) -> Self {
        Self::towards(graph.destination().cell())
    }
}

impl FrontierPriority for AStar {
    fn algorithm(&self) -> SearchAlgorithm {
        SearchAlgorithm::AStar
    }

    fn priority(&self, cost: Cost, next: &Node) -> f64 {
        cost as f64 + estimate(next.cell(), self.destination)
    }
}

/// Pick the priority strategy for `algorithm` on `graph`.
pub fn select_priority(algorithm: SearchAlgorithm, graph: &Graph) -> Box<dyn FrontierPriority> {
    match algorithm {
        SearchAlgorithm::UniformCost => Box::new(UniformCost),
        SearchAlgorithm::AStar => Box::new(AStar::for_graph(graph)),
    }
}
