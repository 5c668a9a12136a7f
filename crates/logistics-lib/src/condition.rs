use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Number of weather slots carried by every edge.
pub const CONDITION_COUNT: usize = 4;

/// Largest travel time accepted for a single edge.
///
/// Path sums over any realistic node count stay finite, so infinity in a
/// distance matrix always means unreachable.
pub const MAX_TRAVEL_TIME: f64 = 1.0e12;

/// Weather scenario selecting which weight slot of an edge is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    #[default]
    Normal,
    Rain,
    Snow,
    Storm,
}

impl WeatherCondition {
    /// All conditions in slot order.
    pub const ALL: [WeatherCondition; CONDITION_COUNT] = [
        WeatherCondition::Normal,
        WeatherCondition::Rain,
        WeatherCondition::Snow,
        WeatherCondition::Storm,
    ];

    /// Zero-based slot index into a [`WeatherWeights`] vector.
    pub fn index(self) -> usize {
        match self {
            WeatherCondition::Normal => 0,
            WeatherCondition::Rain => 1,
            WeatherCondition::Snow => 2,
            WeatherCondition::Storm => 3,
        }
    }

    /// Inverse of [`WeatherCondition::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Lowercase name used in CLI arguments and rendered output.
    pub fn as_str(self) -> &'static str {
        match self {
            WeatherCondition::Normal => "normal",
            WeatherCondition::Rain => "rain",
            WeatherCondition::Snow => "snow",
            WeatherCondition::Storm => "storm",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeatherCondition {
    type Err = Error;

    /// Accepts a condition name (case-insensitive) or its 1-based menu number.
    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        let parsed = match trimmed.to_ascii_lowercase().as_str() {
            "normal" | "1" => Some(WeatherCondition::Normal),
            "rain" | "2" => Some(WeatherCondition::Rain),
            "snow" | "3" => Some(WeatherCondition::Snow),
            "storm" | "4" => Some(WeatherCondition::Storm),
            _ => None,
        };
        parsed.ok_or_else(|| Error::UnknownCondition {
            value: trimmed.to_string(),
        })
    }
}

/// Travel times for one edge, one slot per [`WeatherCondition`].
///
/// Every value is finite, non-negative and at most [`MAX_TRAVEL_TIME`];
/// construction rejects anything else so a store never holds a partially
/// valid vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherWeights([f64; CONDITION_COUNT]);

impl WeatherWeights {
    /// Validate and wrap a fixed-size weight vector.
    pub fn new(values: [f64; CONDITION_COUNT]) -> Result<Self> {
        for (slot, value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(Error::invalid_input(format!(
                    "{} weight must be a finite number, got {value}",
                    WeatherCondition::ALL[slot]
                )));
            }
            if *value < 0.0 {
                return Err(Error::invalid_input(format!(
                    "{} weight must be non-negative, got {value}",
                    WeatherCondition::ALL[slot]
                )));
            }
            if *value > MAX_TRAVEL_TIME {
                return Err(Error::invalid_input(format!(
                    "{} weight must not exceed {MAX_TRAVEL_TIME}, got {value}",
                    WeatherCondition::ALL[slot]
                )));
            }
        }
        Ok(Self(values))
    }

    /// Validate a slice, rejecting anything other than exactly four entries.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let array: [f64; CONDITION_COUNT] = values.try_into().map_err(|_| {
            Error::invalid_input(format!(
                "expected {CONDITION_COUNT} weights (normal rain snow storm), got {}",
                values.len()
            ))
        })?;
        Self::new(array)
    }

    /// Parse whitespace-separated travel times such as `"5 6 7 8"`.
    pub fn parse(input: &str) -> Result<Self> {
        let values = input
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| Error::invalid_input(format!("'{token}' is not a number")))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_slice(&values)
    }

    /// Weight for the given condition.
    pub fn get(&self, condition: WeatherCondition) -> f64 {
        self.0[condition.index()]
    }

    pub fn as_array(&self) -> &[f64; CONDITION_COUNT] {
        &self.0
    }
}

impl Index<WeatherCondition> for WeatherWeights {
    type Output = f64;

    fn index(&self, condition: WeatherCondition) -> &f64 {
        &self.0[condition.index()]
    }
}

impl Serialize for WeatherWeights {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for WeatherWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [normal, rain, snow, storm] = self.0;
        write!(f, "[{normal}, {rain}, {snow}, {storm}]")
    }
}
