//! Logistics CLI library.
//!
//! This crate provides the command-line front end for the logistics network
//! planner: result rendering, terminal styling, and the interactive session.

pub mod output;
pub mod session;
pub mod terminal;

#[cfg(test)]
pub(crate) mod test_helpers;
