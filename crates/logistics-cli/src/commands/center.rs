//! Center command handler: distance matrix, eccentricity, and graph center.

use std::io::{self, Write};

use anyhow::Result;

use logistics_lib::{eccentricity_and_center, Graph};
use logistics_cli::output::Renderer;

/// Handle the center subcommand.
pub fn handle_center(graph: &Graph, renderer: &Renderer) -> Result<()> {
    let report = eccentricity_and_center(graph)?;
    let mut stdout = io::stdout().lock();
    renderer.center(&mut stdout, graph.condition(), &report)?;
    stdout.flush()?;
    Ok(())
}
