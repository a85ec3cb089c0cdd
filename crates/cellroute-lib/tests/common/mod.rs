#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;

use cellroute_lib::{Cell, EdgeRecord, Graph, GraphRecords, NodeRecord, VertexId, Weight};
use rand::rngs::StdRng;
use rand::Rng;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn cell(id: i64) -> Cell {
    Cell::new(id).expect("cell within grid")
}

pub fn records(
    nodes: &[(VertexId, i64)],
    edges: &[(VertexId, VertexId, Weight)],
    start: VertexId,
    destination: VertexId,
) -> GraphRecords {
    GraphRecords {
        nodes: nodes
            .iter()
            .map(|&(vertex, id)| NodeRecord {
                vertex,
                cell: cell(id),
            })
            .collect(),
        edges: edges
            .iter()
            .map(|&(from, to, weight)| EdgeRecord { from, to, weight })
            .collect(),
        start,
        destination,
    }
}

pub fn graph(
    nodes: &[(VertexId, i64)],
    edges: &[(VertexId, VertexId, Weight)],
    start: VertexId,
    destination: VertexId,
) -> Graph {
    Graph::new(records(nodes, edges, start, destination)).expect("well formed graph")
}

/// Straight-line distance between two cell centres, rounded up.
///
/// Edge weights at or above this keep the cell lower bound consistent for any
/// destination, which A* relies on to return optimal costs without reopening.
pub fn centre_distance(a: Cell, b: Cell) -> Weight {
    let rows = f64::from(a.row()) - f64::from(b.row());
    let columns = f64::from(a.column()) - f64::from(b.column());
    (cellroute_lib::CELL_SIZE * rows.hypot(columns)).ceil() as Weight
}

/// Small random graph with sparse vertex ids and centre-respecting weights.
pub fn random_records(rng: &mut StdRng) -> GraphRecords {
    let count = rng.gen_range(2..=14usize);
    let nodes: Vec<NodeRecord> = (0..count)
        .map(|i| NodeRecord {
            vertex: i as VertexId * 3 + 7,
            cell: cell(rng.gen_range(0..100)),
        })
        .collect();

    let mut edges = Vec::new();
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            if rng.gen_bool(0.3) {
                edges.push(EdgeRecord {
                    from: a.vertex,
                    to: b.vertex,
                    weight: centre_distance(a.cell, b.cell) + rng.gen_range(0..=150),
                });
            }
        }
    }
    if edges.is_empty() {
        edges.push(EdgeRecord {
            from: nodes[0].vertex,
            to: nodes[1].vertex,
            weight: centre_distance(nodes[0].cell, nodes[1].cell),
        });
    }

    let destination = nodes[rng.gen_range(0..count)].vertex;
    GraphRecords {
        start: nodes[0].vertex,
        destination,
        nodes,
        edges,
    }
}

/// Shortest distance from the start to every reachable vertex, relaxing each
/// undirected edge in both directions once per vertex.
pub fn bellman_ford(records: &GraphRecords) -> HashMap<VertexId, Weight> {
    let mut distances = HashMap::from([(records.start, 0)]);
    for _ in 0..records.nodes.len() {
        for edge in &records.edges {
            for (from, to) in [(edge.from, edge.to), (edge.to, edge.from)] {
                if let Some(&base) = distances.get(&from) {
                    let candidate = base + edge.weight;
                    let entry = distances.entry(to).or_insert(candidate);
                    if candidate < *entry {
                        *entry = candidate;
                    }
                }
            }
        }
    }
    distances
}
