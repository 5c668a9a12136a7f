use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::condition::{WeatherCondition, WeatherWeights};
use crate::error::{Error, Result};
use crate::records::EdgeRecord;

/// Identifier for a node (a city name in logistics datasets).
pub type NodeId = String;

/// Edge orientation supported by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphMode {
    Directed,
    #[default]
    Undirected,
}

/// Edge payload stored in the adjacency map.
///
/// `active_weight` is derived from `weights` and the owning graph's
/// condition; only [`Graph`] can change either, so the two never drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    weights: WeatherWeights,
    active_weight: f64,
}

impl Edge {
    fn new(weights: WeatherWeights, condition: WeatherCondition) -> Self {
        Self {
            weights,
            active_weight: weights.get(condition),
        }
    }

    /// Full weight vector, one slot per weather condition.
    pub fn weights(&self) -> WeatherWeights {
        self.weights
    }

    /// Weight under the graph's active condition.
    pub fn active_weight(&self) -> f64 {
        self.active_weight
    }
}

/// Read-only view of a single edge as returned by [`Graph::edges`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeView<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    pub weights: WeatherWeights,
    pub active_weight: f64,
}

/// Mutable weighted graph whose edges carry one travel time per weather
/// condition.
///
/// Nodes are created implicitly by edge insertion. The adjacency map is keyed
/// by node identifier so iteration order (and therefore every derived
/// ordering such as distance-matrix rows) is lexicographic.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    mode: GraphMode,
    condition: WeatherCondition,
    adjacency: BTreeMap<NodeId, BTreeMap<NodeId, Edge>>,
}

impl Graph {
    /// Create an empty graph with the given orientation and active condition.
    pub fn new(mode: GraphMode, condition: WeatherCondition) -> Self {
        Self {
            mode,
            condition,
            adjacency: BTreeMap::new(),
        }
    }

    /// Orientation chosen at construction.
    pub fn mode(&self) -> GraphMode {
        self.mode
    }

    /// Weather condition whose slot feeds every `active_weight`.
    pub fn condition(&self) -> WeatherCondition {
        self.condition
    }

    /// Switch the active condition and recompute every edge's active weight.
    pub fn set_condition(&mut self, condition: WeatherCondition) {
        if condition == self.condition {
            return;
        }
        debug!(from = %self.condition, to = %condition, "switching active weather condition");
        self.condition = condition;
        for edge in self.adjacency.values_mut().flat_map(BTreeMap::values_mut) {
            edge.active_weight = edge.weights.get(condition);
        }
    }

    /// Insert an edge, creating missing endpoints. Re-inserting an existing
    /// edge replaces its full weight vector; the previous vector is returned.
    pub fn add_edge(
        &mut self,
        origin: &str,
        destination: &str,
        weights: WeatherWeights,
    ) -> Result<Option<WeatherWeights>> {
        validate_node(origin)?;
        validate_node(destination)?;

        let previous = self.insert(origin, destination, weights);
        debug!(
            origin,
            destination,
            weights = %weights,
            replaced = previous.is_some(),
            "edge added"
        );
        Ok(previous)
    }

    /// Remove the edge between `origin` and `destination`. Returns `false` when
    /// no such edge existed. Endpoints stay in the graph.
    pub fn remove_edge(&mut self, origin: &str, destination: &str) -> bool {
        let removed = self
            .adjacency
            .get_mut(origin)
            .and_then(|targets| targets.remove(destination))
            .is_some();

        if removed && self.mode == GraphMode::Undirected {
            if let Some(targets) = self.adjacency.get_mut(destination) {
                targets.remove(origin);
            }
        }

        debug!(origin, destination, removed, "edge removal requested");
        removed
    }

    /// Replace the weight vector of an existing edge. Fails with
    /// [`Error::EdgeNotFound`] and leaves the graph untouched when the edge is
    /// absent.
    pub fn update_weights(
        &mut self,
        origin: &str,
        destination: &str,
        weights: WeatherWeights,
    ) -> Result<()> {
        if !self.has_edge(origin, destination) {
            return Err(Error::edge_not_found(origin, destination));
        }
        self.insert(origin, destination, weights);
        debug!(origin, destination, weights = %weights, "edge weights updated");
        Ok(())
    }

    pub fn has_node(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn has_edge(&self, origin: &str, destination: &str) -> bool {
        self.edge(origin, destination).is_some()
    }

    /// Lookup the edge record between two nodes.
    pub fn edge(&self, origin: &str, destination: &str) -> Option<&Edge> {
        self.adjacency
            .get(origin)
            .and_then(|targets| targets.get(destination))
    }

    /// Weight of an edge under the active condition.
    pub fn edge_weight(&self, origin: &str, destination: &str) -> Result<f64> {
        self.edge(origin, destination)
            .map(Edge::active_weight)
            .ok_or_else(|| Error::edge_not_found(origin, destination))
    }

    /// Full weight vector of an edge.
    pub fn edge_weights(&self, origin: &str, destination: &str) -> Result<WeatherWeights> {
        self.edge(origin, destination)
            .map(Edge::weights)
            .ok_or_else(|| Error::edge_not_found(origin, destination))
    }

    /// Nodes reachable over a single edge from `node`. Unknown nodes have no
    /// neighbours.
    pub fn neighbors<'a>(&'a self, node: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.outgoing(node).map(|(target, _)| target)
    }

    /// Outgoing edges of `node` paired with their active weight.
    pub fn outgoing<'a>(&'a self, node: &str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|targets| {
                targets
                    .iter()
                    .map(|(target, edge)| (target.as_str(), edge.active_weight))
            })
    }

    /// All node identifiers in lexicographic order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Every edge once. Undirected edges are reported with the
    /// lexicographically smaller endpoint as origin.
    pub fn edges(&self) -> impl Iterator<Item = EdgeView<'_>> + '_ {
        let mode = self.mode;
        self.adjacency.iter().flat_map(move |(origin, targets)| {
            targets
                .iter()
                .filter(move |(destination, _)| {
                    mode == GraphMode::Directed || origin.as_str() <= destination.as_str()
                })
                .map(move |(destination, edge)| EdgeView {
                    origin,
                    destination,
                    weights: edge.weights,
                    active_weight: edge.active_weight,
                })
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    fn insert(
        &mut self,
        origin: &str,
        destination: &str,
        weights: WeatherWeights,
    ) -> Option<WeatherWeights> {
        let edge = Edge::new(weights, self.condition);
        let previous = self
            .adjacency
            .entry(origin.to_string())
            .or_default()
            .insert(destination.to_string(), edge.clone());

        let reverse = self.adjacency.entry(destination.to_string()).or_default();
        if self.mode == GraphMode::Undirected {
            reverse.insert(origin.to_string(), edge);
        }

        previous.map(|edge| edge.weights)
    }
}

/// Build a graph from parsed edge records. Later records for the same pair
/// replace earlier ones.
pub fn build_graph<I>(records: I, condition: WeatherCondition, mode: GraphMode) -> Result<Graph>
where
    I: IntoIterator<Item = EdgeRecord>,
{
    let mut graph = Graph::new(mode, condition);
    for record in records {
        graph.add_edge(&record.origin, &record.destination, record.weights)?;
    }
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        condition = %condition,
        ?mode,
        "graph built from edge records"
    );
    Ok(graph)
}

fn validate_node(node: &str) -> Result<()> {
    if node.trim().is_empty() {
        return Err(Error::invalid_input("node identifier must not be empty"));
    }
    Ok(())
}
