// Module exports for CLI subcommands
//
// Each module handles a specific CLI subcommand. main.rs parses arguments,
// loads the graph, and dispatches to these handlers.

pub mod center;
pub mod edges;
pub mod route;
pub mod shell;
