// Test utilities used across `logistics-cli` unit tests.
// Kept under `#[cfg(test)]` so it is not part of the public crate API.
use std::io::Write;

use anyhow::Result;
use logistics_lib::{Graph, GraphMode, WeatherCondition, WeatherWeights};

/// Undirected triangle A-B:1, B-C:2, A-C:3 under normal weather.
pub fn triangle() -> Graph {
    let mut graph = Graph::new(GraphMode::Undirected, WeatherCondition::Normal);
    for (origin, destination, weight) in [("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 3.0)] {
        graph
            .add_edge(
                origin,
                destination,
                WeatherWeights::new([weight; 4]).expect("valid weights"),
            )
            .expect("edge inserts");
    }
    graph
}

/// Capture everything a renderer writes into a string.
pub fn render_to_string<F>(render: F) -> String
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let mut buffer: Vec<u8> = Vec::new();
    render(&mut buffer as &mut dyn Write).expect("render succeeds");
    String::from_utf8(buffer).expect("utf-8 output")
}
