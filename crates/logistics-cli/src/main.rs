mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use logistics_cli::output::{OutputFormat, Renderer};
use logistics_cli::terminal::ColorPalette;
use logistics_lib::{load_graph, GraphMode, WeatherCondition};

#[derive(Parser, Debug)]
#[command(author, version, about = "Weather-aware logistics network planner")]
struct Cli {
    /// Edge-list file, or a directory containing `logistica.txt`.
    /// Falls back to `LOGISTICS_GRAPH_PATH`, then `data/logistica.txt`.
    #[arg(long, global = true)]
    graph: Option<PathBuf>,

    /// Weather condition whose travel times are active (normal, rain, snow, storm or 1-4).
    #[arg(long, global = true, default_value = "normal", value_parser = parse_condition)]
    condition: WeatherCondition,

    /// Treat every record as a one-way connection.
    #[arg(long, global = true)]
    directed: bool,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Disable ANSI colors in text output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the shortest route between two nodes.
    Route {
        /// Starting node.
        #[arg(long = "from")]
        from: String,
        /// Destination node.
        #[arg(long = "to")]
        to: String,
    },
    /// Show the distance matrix and the graph center.
    Center,
    /// List nodes and edges under the active condition.
    Edges,
    /// Start an interactive session that can also modify the graph.
    Shell,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mode = if cli.directed {
        GraphMode::Directed
    } else {
        GraphMode::Undirected
    };
    let graph = load_graph(cli.graph.as_deref(), cli.condition, mode)
        .context("failed to load the logistics graph")?;

    let palette = if cli.no_color {
        ColorPalette::plain()
    } else {
        ColorPalette::detect()
    };
    let renderer = Renderer::new(cli.format, palette);

    match cli.command {
        Command::Route { from, to } => {
            commands::route::handle_route(&graph, &renderer, &from, &to)
        }
        Command::Center => commands::center::handle_center(&graph, &renderer),
        Command::Edges => commands::edges::handle_edges(&graph, &renderer),
        Command::Shell => commands::shell::handle_shell(graph, renderer),
    }
}

fn parse_condition(value: &str) -> std::result::Result<WeatherCondition, String> {
    value.parse().map_err(|err: logistics_lib::Error| err.to_string())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
