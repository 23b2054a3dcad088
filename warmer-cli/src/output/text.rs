//! Plain text output formatter

use super::{bracketed, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use warmer_core::SeriesResult;

/// Plain text formatter - one `Temperatures: [..] -> Result: [..]` line per series
pub struct TextFormatter<W: Write> {
    writer: W,
    show_labels: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            show_labels: false,
        }
    }

    /// Prefix every line with the series label
    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_series(&mut self, result: &SeriesResult) -> Result<()> {
        if self.show_labels {
            write!(self.writer, "{}: ", result.label)?;
        }
        writeln!(
            self.writer,
            "Temperatures: {} -> Result: {}",
            bracketed(&result.readings),
            bracketed(&result.waits)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SeriesResult {
        SeriesResult {
            label: "week.txt#1".to_string(),
            readings: vec![30, 60, 90],
            waits: vec![1, 1, 0],
        }
    }

    #[test]
    fn test_text_line() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            formatter.format_series(&sample()).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Temperatures: [30, 60, 90] -> Result: [1, 1, 0]\n"
        );
    }

    #[test]
    fn test_text_line_with_label() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer).with_labels(true);
            formatter.format_series(&sample()).unwrap();
        }
        let out = String::from_utf8(buffer).unwrap();
        assert!(out.starts_with("week.txt#1: Temperatures:"));
    }
}
