//! Line-oriented edge-list reader.
//!
//! Each non-empty line holds one record:
//!
//! ```text
//! origin destination t_normal t_rain t_snow t_storm
//! ```
//!
//! Tokens are whitespace separated. Lines starting with `#` are comments.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::condition::{WeatherWeights, CONDITION_COUNT};
use crate::error::{Error, Result};

/// One connection read from an edge list.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    pub origin: String,
    pub destination: String,
    pub weights: WeatherWeights,
}

impl EdgeRecord {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        weights: WeatherWeights,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            weights,
        }
    }

    /// Parse a single record line. `line_number` is 1-based and only used for
    /// error reporting.
    pub fn parse_line(line: &str, line_number: usize) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let expected = 2 + CONDITION_COUNT;
        if tokens.len() != expected {
            return Err(Error::InvalidRecord {
                line: line_number,
                message: format!("expected {expected} fields, found {}", tokens.len()),
            });
        }

        let mut values = [0.0; CONDITION_COUNT];
        for (slot, token) in values.iter_mut().zip(&tokens[2..]) {
            *slot = token.parse::<f64>().map_err(|_| Error::InvalidRecord {
                line: line_number,
                message: format!("travel time '{token}' is not a number"),
            })?;
        }

        let weights = WeatherWeights::new(values).map_err(|err| Error::InvalidRecord {
            line: line_number,
            message: match err {
                Error::InvalidInput { message } => message,
                other => other.to_string(),
            },
        })?;

        Ok(Self::new(tokens[0], tokens[1], weights))
    }
}

/// Parse an in-memory edge list.
pub fn parse_edge_list(input: &str) -> Result<Vec<EdgeRecord>> {
    read_edge_list(input.as_bytes())
}

/// Parse an edge list from any buffered reader.
pub fn read_edge_list<R: BufRead>(reader: R) -> Result<Vec<EdgeRecord>> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        records.push(EdgeRecord::parse_line(trimmed, index + 1)?);
    }
    Ok(records)
}

/// Load an edge list from disk.
pub fn load_edge_list(path: &Path) -> Result<Vec<EdgeRecord>> {
    if !path.is_file() {
        return Err(Error::GraphFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let records = read_edge_list(BufReader::new(file))?;
    debug!(path = %path.display(), records = records.len(), "loaded edge list");
    Ok(records)
}
