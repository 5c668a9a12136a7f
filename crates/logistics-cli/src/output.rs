//! Output formatting for analysis results and graph modifications.
//!
//! The library returns structured values; this module turns them into either
//! human-readable text or JSON.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use logistics_lib::{
    CenterReport, DistanceMatrix, EdgeView, Graph, GraphMode, ShortestPath, WeatherCondition,
    WeatherWeights,
};

use crate::terminal::{format_weight, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Kind of structural change applied to the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModificationKind {
    Remove,
    Add,
    Update,
}

/// Result of a graph modification, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Modification {
    pub kind: ModificationKind,
    pub origin: String,
    pub destination: String,
    /// `false` only for removals of a connection that did not exist.
    pub applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<WeatherWeights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaced: Option<WeatherWeights>,
}

#[derive(Serialize)]
struct RouteOutput<'a> {
    condition: WeatherCondition,
    from: &'a str,
    to: &'a str,
    hops: usize,
    #[serde(flatten)]
    path: &'a ShortestPath,
}

#[derive(Serialize)]
struct CenterOutput<'a> {
    condition: WeatherCondition,
    #[serde(flatten)]
    report: &'a CenterReport,
}

#[derive(Serialize)]
struct EdgesOutput<'a> {
    condition: WeatherCondition,
    mode: GraphMode,
    nodes: Vec<&'a str>,
    edges: Vec<EdgeView<'a>>,
}

#[derive(Serialize)]
struct ConditionOutput {
    condition: WeatherCondition,
}

/// Renders results in the selected format.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    format: OutputFormat,
    palette: ColorPalette,
}

impl Renderer {
    pub fn new(format: OutputFormat, palette: ColorPalette) -> Self {
        Self { format, palette }
    }

    pub fn palette(&self) -> ColorPalette {
        self.palette
    }

    pub fn route(
        &self,
        out: &mut dyn Write,
        condition: WeatherCondition,
        from: &str,
        to: &str,
        path: &ShortestPath,
    ) -> Result<()> {
        if self.format == OutputFormat::Json {
            return write_json(
                out,
                &RouteOutput {
                    condition,
                    from,
                    to,
                    hops: path.hop_count(),
                    path,
                },
            );
        }

        let p = self.palette;
        writeln!(
            out,
            "{}Shortest route from {from} to {to} under {condition} weather:{} {}{}{}",
            p.cyan,
            p.reset,
            p.green,
            format_weight(path.length),
            p.reset
        )?;
        let arrow = format!(" {}->{} ", p.gray, p.reset);
        let steps: Vec<String> = path
            .nodes
            .iter()
            .map(|node| format!("{}{node}{}", p.white_bold, p.reset))
            .collect();
        writeln!(out, "  {}", steps.join(&arrow))?;
        let hops = path.hop_count();
        writeln!(out, "  {hops} {}", if hops == 1 { "hop" } else { "hops" })?;
        Ok(())
    }

    pub fn center(
        &self,
        out: &mut dyn Write,
        condition: WeatherCondition,
        report: &CenterReport,
    ) -> Result<()> {
        if self.format == OutputFormat::Json {
            return write_json(out, &CenterOutput { condition, report });
        }

        let p = self.palette;
        writeln!(
            out,
            "{}Shortest travel times between every pair of nodes ({condition}):{}",
            p.cyan, p.reset
        )?;
        self.write_matrix(out, &report.matrix)?;
        writeln!(
            out,
            "Graph center: {}{}{} (eccentricity {}{}{})",
            p.white_bold,
            report.center,
            p.reset,
            p.green,
            format_weight(report.eccentricity),
            p.reset
        )?;
        Ok(())
    }

    pub fn edges(&self, out: &mut dyn Write, graph: &Graph) -> Result<()> {
        let nodes: Vec<&str> = graph.nodes().collect();
        let edges: Vec<EdgeView<'_>> = graph.edges().collect();

        if self.format == OutputFormat::Json {
            return write_json(
                out,
                &EdgesOutput {
                    condition: graph.condition(),
                    mode: graph.mode(),
                    nodes,
                    edges,
                },
            );
        }

        let p = self.palette;
        let (mode, connector) = match graph.mode() {
            GraphMode::Directed => ("directed", "->"),
            GraphMode::Undirected => ("undirected", "--"),
        };
        writeln!(out, "{}Nodes ({}):{} {}", p.cyan, nodes.len(), p.reset, nodes.join(", "))?;
        writeln!(
            out,
            "{}Edges ({}, {mode}, {}):{}",
            p.cyan,
            edges.len(),
            graph.condition(),
            p.reset
        )?;
        for edge in &edges {
            writeln!(
                out,
                "  {} {connector} {}  {}{}{}  {}{}{}",
                edge.origin,
                edge.destination,
                p.green,
                format_weight(edge.active_weight),
                p.reset,
                p.gray,
                edge.weights,
                p.reset
            )?;
        }
        Ok(())
    }

    pub fn modification(&self, out: &mut dyn Write, change: &Modification) -> Result<()> {
        if self.format == OutputFormat::Json {
            return write_json(out, change);
        }

        let Modification {
            origin,
            destination,
            ..
        } = change;
        match (change.kind, change.applied) {
            (ModificationKind::Remove, true) => {
                writeln!(out, "Traffic interrupted between {origin} and {destination}.")?
            }
            (ModificationKind::Remove, false) => {
                writeln!(out, "No connection between {origin} and {destination}.")?
            }
            (ModificationKind::Add, _) => {
                write!(
                    out,
                    "Connected {origin} and {destination} with travel times {}",
                    describe_weights(change)
                )?;
                if let Some(previous) = change.replaced {
                    write!(out, ", replacing {previous}")?;
                }
                writeln!(out, ".")?
            }
            (ModificationKind::Update, _) => writeln!(
                out,
                "Updated travel times between {origin} and {destination} to {}.",
                describe_weights(change)
            )?,
        }
        Ok(())
    }

    pub fn condition(&self, out: &mut dyn Write, condition: WeatherCondition) -> Result<()> {
        if self.format == OutputFormat::Json {
            return write_json(out, &ConditionOutput { condition });
        }
        writeln!(out, "Active weather condition: {condition}.")?;
        Ok(())
    }

    fn write_matrix(&self, out: &mut dyn Write, matrix: &DistanceMatrix) -> Result<()> {
        let p = self.palette;
        let nodes = matrix.nodes();
        let cells: Vec<Vec<String>> = matrix
            .rows()
            .iter()
            .map(|row| row.iter().copied().map(format_weight).collect())
            .collect();

        let label_width = nodes.iter().map(String::len).max().unwrap_or(0);
        let column_width = nodes
            .iter()
            .map(String::len)
            .chain(cells.iter().flatten().map(String::len))
            .max()
            .unwrap_or(1);

        write!(out, "{:label_width$}", "")?;
        for node in nodes {
            write!(out, "  {node:>column_width$}")?;
        }
        writeln!(out)?;

        for (node, row) in nodes.iter().zip(&cells) {
            write!(out, "{}{node:<label_width$}{}", p.white_bold, p.reset)?;
            for cell in row {
                write!(out, "  {cell:>column_width$}")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

fn describe_weights(change: &Modification) -> String {
    match (change.weights, change.active_weight) {
        (Some(weights), Some(active)) => {
            format!("{weights} (active {})", format_weight(active))
        }
        (Some(weights), None) => weights.to_string(),
        _ => "[]".to_string(),
    }
}

fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use logistics_lib::{eccentricity_and_center, shortest_path};

    use super::*;
    use crate::test_helpers::{render_to_string, triangle};

    fn plain(format: OutputFormat) -> Renderer {
        Renderer::new(format, ColorPalette::plain())
    }

    #[test]
    fn route_text_lists_every_step() {
        let graph = triangle();
        let path = shortest_path(&graph, "A", "C").unwrap();
        let text = render_to_string(|out| {
            plain(OutputFormat::Text).route(out, graph.condition(), "A", "C", &path)
        });

        assert!(text.contains("Shortest route from A to C under normal weather: 3"));
        assert!(text.contains("A -> C"));
        assert!(text.contains("1 hop"));
    }

    #[test]
    fn center_text_includes_matrix_rows() {
        let report = eccentricity_and_center(&triangle()).unwrap();
        let text = render_to_string(|out| {
            plain(OutputFormat::Text).center(out, WeatherCondition::Normal, &report)
        });

        assert!(text.contains("   A  B  C"), "header row missing: {text}");
        assert!(text.contains("B  1  0  2"), "row B missing: {text}");
        assert!(text.contains("Graph center: B (eccentricity 2)"));
    }

    #[test]
    fn route_json_carries_path_fields() {
        let graph = triangle();
        let path = shortest_path(&graph, "A", "B").unwrap();
        let json = render_to_string(|out| {
            plain(OutputFormat::Json).route(out, graph.condition(), "A", "B", &path)
        });

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["nodes"], serde_json::json!(["A", "B"]));
        assert_eq!(value["length"], serde_json::json!(1.0));
        assert_eq!(value["condition"], "normal");
        assert_eq!(value["hops"], 1);
    }

    #[test]
    fn missing_removal_is_reported_without_error() {
        let change = Modification {
            kind: ModificationKind::Remove,
            origin: "A".to_string(),
            destination: "Z".to_string(),
            applied: false,
            weights: None,
            active_weight: None,
            replaced: None,
        };
        let text = render_to_string(|out| plain(OutputFormat::Text).modification(out, &change));
        assert_eq!(text, "No connection between A and Z.\n");
    }
}
