use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// Lowest-cost route between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    /// Nodes from source to target, both inclusive.
    pub nodes: Vec<NodeId>,
    /// Accumulated active weight along `nodes`.
    pub length: f64,
}

impl ShortestPath {
    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Run Dijkstra's algorithm from `source` to `target` over the active edge
/// weights.
pub fn shortest_path(graph: &Graph, source: &str, target: &str) -> Result<ShortestPath> {
    for node in [source, target] {
        if !graph.has_node(node) {
            return Err(Error::NodeNotFound {
                node: node.to_string(),
            });
        }
    }

    if source == target {
        return Ok(ShortestPath {
            nodes: vec![source.to_string()],
            length: 0.0,
        });
    }

    let mut distances: HashMap<&str, f64> = HashMap::new();
    let mut parents: HashMap<&str, &str> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(source, 0.0);
    queue.push(QueueEntry::new(source, 0.0));

    while let Some(entry) = queue.pop() {
        let current_distance = match distances.get(entry.node) {
            Some(distance) if *distance < entry.cost.0 => continue,
            Some(distance) => *distance,
            None => continue,
        };

        if entry.node == target {
            let nodes = reconstruct_path(&parents, source, target);
            debug!(
                source,
                target,
                hops = nodes.len() - 1,
                length = current_distance,
                "shortest path found"
            );
            return Ok(ShortestPath {
                nodes,
                length: current_distance,
            });
        }

        for (next, weight) in graph.outgoing(entry.node) {
            let next_cost = current_distance + weight;
            if next_cost < *distances.get(next).unwrap_or(&f64::INFINITY) {
                distances.insert(next, next_cost);
                parents.insert(next, entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    Err(Error::NoPath {
        start: source.to_string(),
        goal: target.to_string(),
    })
}

fn reconstruct_path(parents: &HashMap<&str, &str>, start: &str, goal: &str) -> Vec<NodeId> {
    let mut path = vec![goal.to_string()];
    let mut current = goal;
    while current != start {
        match parents.get(current) {
            Some(&parent) => {
                path.push(parent.to_string());
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
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
struct QueueEntry<'a> {
    node: &'a str,
    cost: FloatOrd,
}

impl<'a> QueueEntry<'a> {
    fn new(node: &'a str, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
