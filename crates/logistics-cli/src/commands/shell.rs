//! Shell command handler: an interactive session over the loaded graph.

use std::io::{self, IsTerminal};

use anyhow::Result;
use tracing::info;

use logistics_lib::Graph;
use logistics_cli::output::Renderer;
use logistics_cli::session::Session;

/// Handle the shell subcommand.
///
/// Commands are read from stdin until end of input or `quit`. Prompts are
/// only printed when stdin is a terminal so piped sessions stay clean.
pub fn handle_shell(graph: Graph, renderer: Renderer) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        condition = %graph.condition(),
        "starting session"
    );

    let mut session = Session::new(graph, renderer);
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    session.run(stdin.lock(), &mut stdout, &mut stderr, interactive)
}
