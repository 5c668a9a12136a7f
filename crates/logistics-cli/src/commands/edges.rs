use std::io::{self, Write};

use anyhow::Result;

use logistics_lib::Graph;
use logistics_cli::output::Renderer;

/// Handle the edges subcommand.
pub fn handle_edges(graph: &Graph, renderer: &Renderer) -> Result<()> {
    let mut stdout = io::stdout().lock();
    renderer.edges(&mut stdout, graph)?;
    stdout.flush()?;
    Ok(())
}
