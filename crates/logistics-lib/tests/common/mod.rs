//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use logistics_lib::{Graph, GraphMode, WeatherCondition, WeatherWeights};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Edge list describing a small regional road network.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    fixtures_dir().join("logistica.txt")
}

/// Same travel time under every weather condition.
#[allow(dead_code)]
pub fn uniform(weight: f64) -> WeatherWeights {
    WeatherWeights::new([weight; 4]).expect("valid weights")
}

#[allow(dead_code)]
pub fn weights(values: [f64; 4]) -> WeatherWeights {
    WeatherWeights::new(values).expect("valid weights")
}

/// Undirected graph under normal weather built from `(origin, destination, weight)` triples.
#[allow(dead_code)]
pub fn graph_from(edges: &[(&str, &str, f64)]) -> Graph {
    let mut graph = Graph::new(GraphMode::Undirected, WeatherCondition::Normal);
    for &(origin, destination, weight) in edges {
        graph
            .add_edge(origin, destination, uniform(weight))
            .expect("edge inserts");
    }
    graph
}
