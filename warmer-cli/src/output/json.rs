//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use warmer_core::SeriesResult;

/// JSON formatter - outputs all series as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    series: Vec<SeriesData>,
    pretty: bool,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SeriesData {
    /// Series label
    pub label: String,
    /// Input readings
    pub readings: Vec<i64>,
    /// Days until a warmer reading
    pub waits: Vec<usize>,
    /// Readings never followed by a warmer one
    pub unresolved: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            series: Vec::new(),
            pretty: true,
        }
    }

    /// Choose between pretty and compact JSON
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_series(&mut self, result: &SeriesResult) -> Result<()> {
        self.series.push(SeriesData {
            label: result.label.clone(),
            readings: result.readings.clone(),
            waits: result.waits.clone(),
            unresolved: result.unresolved(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.series)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.series)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
