use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{debug, info};

use crate::condition::WeatherCondition;
use crate::error::{Error, Result};
use crate::graph::{build_graph, Graph, GraphMode};
use crate::records::load_edge_list;

/// Default filename for an edge list inside a data directory.
pub const GRAPH_FILENAME: &str = "logistica.txt";

/// Environment variable overriding the edge-list location.
pub const GRAPH_PATH_ENV: &str = "LOGISTICS_GRAPH_PATH";

/// Edge list looked up relative to the working directory.
const LOCAL_GRAPH_PATH: &str = "data/logistica.txt";

/// Resolve the per-user data location using platform-specific project directories.
pub fn default_graph_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "logistics", "logistics").ok_or_else(|| {
        Error::GraphFileNotFound {
            path: PathBuf::from(GRAPH_FILENAME),
        }
    })?;
    Ok(dirs.data_dir().join(GRAPH_FILENAME))
}

/// Resolve which edge list to load.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `LOGISTICS_GRAPH_PATH` environment variable.
/// 3. `data/logistica.txt` relative to the working directory, if present.
/// 4. Platform-specific project data directory.
///
/// Directories resolve to the `logistica.txt` file inside them. Fails with
/// [`Error::GraphFileNotFound`] when the resolved file does not exist.
pub fn resolve_graph_path(target: Option<&Path>) -> Result<PathBuf> {
    let resolved = if let Some(explicit) = target {
        canonical_graph_path(explicit)
    } else if let Some(env_path) = env::var_os(GRAPH_PATH_ENV) {
        debug!(variable = GRAPH_PATH_ENV, "using graph path from environment");
        canonical_graph_path(Path::new(&env_path))
    } else if Path::new(LOCAL_GRAPH_PATH).exists() {
        PathBuf::from(LOCAL_GRAPH_PATH)
    } else {
        default_graph_path()?
    };

    if !resolved.is_file() {
        return Err(Error::GraphFileNotFound { path: resolved });
    }
    Ok(resolved)
}

/// Resolve, read, and build a graph in one step.
pub fn load_graph(
    target: Option<&Path>,
    condition: WeatherCondition,
    mode: GraphMode,
) -> Result<Graph> {
    let path = resolve_graph_path(target)?;
    let records = load_edge_list(&path)?;
    let graph = build_graph(records, condition, mode)?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        condition = %condition,
        "graph loaded"
    );
    Ok(graph)
}

fn canonical_graph_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(GRAPH_FILENAME)
    } else {
        path.to_path_buf()
    }
}
