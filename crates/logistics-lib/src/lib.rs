//! Logistics network library entry points.
//!
//! This crate models a logistics network as a graph whose edges carry one
//! travel time per weather condition. It exposes the mutable graph store,
//! the edge-list reader, and the analysis routines (all-pairs distances,
//! graph center, shortest path). Higher-level consumers (the CLI) should only
//! depend on the functions exported here and render the structured results
//! themselves.
//!

#![deny(warnings)]

pub mod analysis;
pub mod condition;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod path;
pub mod records;

pub use analysis::{
    all_pairs_shortest_distances, eccentricities, eccentricity_and_center, CenterReport,
    DistanceMatrix,
};
pub use condition::{WeatherCondition, WeatherWeights, CONDITION_COUNT, MAX_TRAVEL_TIME};
pub use dataset::{default_graph_path, load_graph, resolve_graph_path, GRAPH_PATH_ENV};
pub use error::{Error, Result};
pub use graph::{build_graph, Edge, EdgeView, Graph, GraphMode, NodeId};
pub use path::{shortest_path, ShortestPath};
pub use records::{load_edge_list, parse_edge_list, read_edge_list, EdgeRecord};
