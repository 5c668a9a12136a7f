use std::collections::HashMap;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// All-pairs shortest distances over a graph snapshot.
///
/// Rows and columns follow [`DistanceMatrix::nodes`]. Unreachable pairs hold
/// `f64::INFINITY` and serialise as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceMatrix {
    nodes: Vec<NodeId>,
    #[serde(serialize_with = "serialize_rows")]
    distances: Vec<Vec<f64>>,
    #[serde(skip)]
    index: HashMap<NodeId, usize>,
}

impl DistanceMatrix {
    /// Node order shared by rows and columns.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Position of `node` in the row/column order.
    pub fn index_of(&self, node: &str) -> Option<usize> {
        self.index.get(node).copied()
    }

    /// Shortest distance from `from` to `to`, `None` if either node is unknown.
    pub fn distance(&self, from: &str, to: &str) -> Option<f64> {
        let row = self.index_of(from)?;
        let column = self.index_of(to)?;
        Some(self.distances[row][column])
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.distances
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.len();
        (0..n).all(|i| (i + 1..n).all(|j| self.distances[i][j] == self.distances[j][i]))
    }
}

/// Eccentricity of every node plus the selected center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CenterReport {
    pub center: NodeId,
    pub eccentricity: f64,
    pub eccentricities: Vec<(NodeId, f64)>,
    pub matrix: DistanceMatrix,
}

/// Compute shortest distances between every ordered pair of nodes using
/// Floyd–Warshall over the active edge weights.
pub fn all_pairs_shortest_distances(graph: &Graph) -> DistanceMatrix {
    let nodes: Vec<NodeId> = graph.nodes().map(str::to_string).collect();
    let index: HashMap<NodeId, usize> = nodes
        .iter()
        .enumerate()
        .map(|(position, node)| (node.clone(), position))
        .collect();
    let n = nodes.len();

    let mut distances = vec![vec![f64::INFINITY; n]; n];
    for (row, node) in nodes.iter().enumerate() {
        distances[row][row] = 0.0;
        for (target, weight) in graph.outgoing(node) {
            let column = index[target];
            if weight < distances[row][column] {
                distances[row][column] = weight;
            }
        }
    }

    for k in 0..n {
        for i in 0..n {
            let via = distances[i][k];
            if via.is_infinite() {
                continue;
            }
            for j in 0..n {
                let candidate = via + distances[k][j];
                if candidate < distances[i][j] {
                    distances[i][j] = candidate;
                }
            }
        }
    }

    debug!(nodes = n, "computed all-pairs shortest distances");
    DistanceMatrix {
        nodes,
        distances,
        index,
    }
}

/// Maximum shortest distance from each node to every other node, in matrix
/// order. Fails when any pair is unreachable.
pub fn eccentricities(matrix: &DistanceMatrix) -> Result<Vec<(NodeId, f64)>> {
    if matrix.is_empty() {
        return Err(Error::EmptyGraph);
    }

    matrix
        .nodes
        .iter()
        .zip(&matrix.distances)
        .map(|(node, row)| {
            if let Some(column) = row.iter().position(|distance| distance.is_infinite()) {
                return Err(Error::DisconnectedGraph {
                    from: node.clone(),
                    to: matrix.nodes[column].clone(),
                });
            }
            let eccentricity = row.iter().copied().fold(0.0, f64::max);
            Ok((node.clone(), eccentricity))
        })
        .collect()
}

/// Compute the distance matrix, every eccentricity, and the graph center.
///
/// The center is the node with minimum eccentricity; ties resolve to the
/// lexicographically smallest identifier.
pub fn eccentricity_and_center(graph: &Graph) -> Result<CenterReport> {
    let matrix = all_pairs_shortest_distances(graph);
    let eccentricities = eccentricities(&matrix)?;

    // Rows are already in lexicographic order, so a strict comparison keeps
    // the first minimum.
    let mut best = &eccentricities[0];
    for candidate in &eccentricities[1..] {
        if candidate.1 < best.1 {
            best = candidate;
        }
    }
    let (center, eccentricity) = best.clone();

    debug!(%center, eccentricity, "graph center selected");
    Ok(CenterReport {
        center,
        eccentricity,
        eccentricities,
        matrix,
    })
}

fn serialize_rows<S: Serializer>(
    rows: &[Vec<f64>],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(rows.len()))?;
    for row in rows {
        let finite: Vec<Option<f64>> = row
            .iter()
            .map(|distance| distance.is_finite().then_some(*distance))
            .collect();
        seq.serialize_element(&finite)?;
    }
    seq.end()
}
