//! Warmer CLI library
//!
//! This library provides the command-line interface for next-warmer-day
//! analysis of temperature readings.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
