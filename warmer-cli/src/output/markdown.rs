//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use warmer_core::SeriesResult;

/// Markdown formatter - one table per series
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    series_count: usize,
    reading_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            series_count: 0,
            reading_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_series(&mut self, result: &SeriesResult) -> Result<()> {
        self.series_count += 1;
        self.reading_count += result.readings.len();

        writeln!(self.writer, "### {}", result.label)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Day | Reading | Wait |")?;
        writeln!(self.writer, "|----:|--------:|-----:|")?;
        for (day, (reading, wait)) in result.readings.iter().zip(&result.waits).enumerate() {
            writeln!(self.writer, "| {day} | {reading} | {wait} |")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total series: {}, readings: {}*",
            self.series_count, self.reading_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_table_and_footer() {
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            formatter
                .format_series(&SeriesResult {
                    label: "text#1".to_string(),
                    readings: vec![30, 60],
                    waits: vec![1, 0],
                })
                .unwrap();
            formatter.finish().unwrap();
        }

        let out = String::from_utf8(buffer).unwrap();
        assert!(out.contains("### text#1"));
        assert!(out.contains("| 0 | 30 | 1 |"));
        assert!(out.contains("| 1 | 60 | 0 |"));
        assert!(out.ends_with("*Total series: 1, readings: 2*\n"));
    }
}
