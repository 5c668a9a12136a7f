//! Route command handler for computing the shortest path between two nodes.

use std::io::{self, Write};

use anyhow::Result;

use logistics_lib::{shortest_path, Graph};
use logistics_cli::output::Renderer;

/// Handle the route subcommand.
pub fn handle_route(graph: &Graph, renderer: &Renderer, from: &str, to: &str) -> Result<()> {
    let path = shortest_path(graph, from, to)?;
    let mut stdout = io::stdout().lock();
    renderer.route(&mut stdout, graph.condition(), from, to, &path)?;
    stdout.flush()?;
    Ok(())
}
