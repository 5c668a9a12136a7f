//! Interactive session over a loaded graph.
//!
//! A session reads one command per line, applies it to the in-memory graph,
//! and renders the result. A failing command is reported and the session
//! keeps going; end of input or `quit` ends it.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use tracing::debug;

use logistics_lib::{
    eccentricity_and_center, shortest_path, Graph, WeatherCondition, WeatherWeights,
};

use crate::output::{Modification, ModificationKind, Renderer};

const PROMPT: &str = "logistics> ";

const HELP: &str = "\
Commands:
  route <from> <to>                     shortest route between two nodes
  center                                graph center and distance matrix
  edges                                 list nodes and edges
  remove <from> <to>                    interrupt traffic on a connection
  add <from> <to> <normal> <rain> <snow> <storm>
                                        create or replace a connection
  update <from> <to> <normal> <rain> <snow> <storm>
                                        change travel times of a connection
  condition <normal|rain|snow|storm>    switch the active weather condition
  help                                  show this message
  quit                                  leave the session";

/// One parsed session command.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Route { from: String, to: String },
    Center,
    Edges,
    Remove { origin: String, destination: String },
    Add {
        origin: String,
        destination: String,
        weights: WeatherWeights,
    },
    Update {
        origin: String,
        destination: String,
        weights: WeatherWeights,
    },
    Condition(WeatherCondition),
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&keyword, args)) = tokens.split_first() else {
            bail!("empty command");
        };

        let command = match (keyword.to_ascii_lowercase().as_str(), args) {
            ("route" | "path", [from, to]) => SessionCommand::Route {
                from: from.to_string(),
                to: to.to_string(),
            },
            ("center" | "centre", []) => SessionCommand::Center,
            ("edges" | "show", []) => SessionCommand::Edges,
            ("remove" | "interrupt", [origin, destination]) => SessionCommand::Remove {
                origin: origin.to_string(),
                destination: destination.to_string(),
            },
            ("add" | "connect", [origin, destination, times @ ..]) => SessionCommand::Add {
                origin: origin.to_string(),
                destination: destination.to_string(),
                weights: WeatherWeights::parse(&times.join(" "))?,
            },
            ("update", [origin, destination, times @ ..]) => SessionCommand::Update {
                origin: origin.to_string(),
                destination: destination.to_string(),
                weights: WeatherWeights::parse(&times.join(" "))?,
            },
            ("condition" | "weather", [value]) => SessionCommand::Condition(value.parse()?),
            ("help" | "?", []) => SessionCommand::Help,
            ("quit" | "exit", []) => SessionCommand::Quit,
            (
                "route" | "path" | "center" | "centre" | "edges" | "show" | "remove" | "interrupt"
                | "add" | "connect" | "update" | "condition" | "weather" | "help" | "?" | "quit"
                | "exit",
                _,
            ) => bail!("wrong number of arguments for '{keyword}' (type 'help' for usage)"),
            _ => return Err(anyhow!("unknown command '{keyword}' (type 'help' for usage)")),
        };
        Ok(command)
    }
}

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Mutable graph plus the renderer used to report results.
pub struct Session {
    graph: Graph,
    renderer: Renderer,
}

impl Session {
    pub fn new(graph: Graph, renderer: Renderer) -> Self {
        Self { graph, renderer }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Apply a single command, writing its rendered result to `out`.
    pub fn execute(&mut self, command: SessionCommand, out: &mut dyn Write) -> Result<Flow> {
        debug!(?command, "executing session command");
        let condition = self.graph.condition();
        match command {
            SessionCommand::Route { from, to } => {
                let path = shortest_path(&self.graph, &from, &to)?;
                self.renderer.route(out, condition, &from, &to, &path)?;
            }
            SessionCommand::Center => {
                let report = eccentricity_and_center(&self.graph)?;
                self.renderer.center(out, condition, &report)?;
            }
            SessionCommand::Edges => self.renderer.edges(out, &self.graph)?,
            SessionCommand::Remove {
                origin,
                destination,
            } => {
                let applied = self.graph.remove_edge(&origin, &destination);
                let change = Modification {
                    kind: ModificationKind::Remove,
                    origin,
                    destination,
                    applied,
                    weights: None,
                    active_weight: None,
                    replaced: None,
                };
                self.renderer.modification(out, &change)?;
            }
            SessionCommand::Add {
                origin,
                destination,
                weights,
            } => {
                let replaced = self.graph.add_edge(&origin, &destination, weights)?;
                let change = Modification {
                    kind: ModificationKind::Add,
                    active_weight: Some(self.graph.edge_weight(&origin, &destination)?),
                    origin,
                    destination,
                    applied: true,
                    weights: Some(weights),
                    replaced,
                };
                self.renderer.modification(out, &change)?;
            }
            SessionCommand::Update {
                origin,
                destination,
                weights,
            } => {
                self.graph.update_weights(&origin, &destination, weights)?;
                let change = Modification {
                    kind: ModificationKind::Update,
                    active_weight: Some(self.graph.edge_weight(&origin, &destination)?),
                    origin,
                    destination,
                    applied: true,
                    weights: Some(weights),
                    replaced: None,
                };
                self.renderer.modification(out, &change)?;
            }
            SessionCommand::Condition(next) => {
                self.graph.set_condition(next);
                self.renderer.condition(out, next)?;
            }
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Read commands from `input` until end of input or `quit`.
    ///
    /// Command failures are written to `err` and do not end the session.
    /// When `interactive` is set a prompt is printed before each command.
    pub fn run<R: BufRead>(
        &mut self,
        input: R,
        out: &mut dyn Write,
        err: &mut dyn Write,
        interactive: bool,
    ) -> Result<()> {
        let p = self.renderer.palette();
        if interactive {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }

        for line in input.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                let outcome = line
                    .parse::<SessionCommand>()
                    .and_then(|command| self.execute(command, &mut *out));
                match outcome {
                    Ok(Flow::Quit) => break,
                    Ok(Flow::Continue) => {}
                    Err(error) => writeln!(err, "{}error:{} {error:#}", p.red, p.reset)?,
                }
            }
            if interactive {
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }
        }
        Ok(())
    }
}
