//! Input sources and reading-series parsing
//!
//! Raw input is turned into labelled [`Series`] here, before anything is
//! analysed. Malformed text is rejected as a whole; the finder never sees a
//! partially parsed batch.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Upper bound on readings reserved up front from a counted header
const PREALLOC_CAP: usize = 4096;

/// Unified input abstraction for various data sources
pub enum Input {
    /// Direct text input
    Text(String),
    /// File path input
    File(PathBuf),
    /// Raw bytes input
    Bytes(Vec<u8>),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from reader
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Name used to label the series read from this input
    pub fn source_name(&self) -> String {
        match self {
            Input::Text(_) => "text".to_string(),
            Input::File(path) => path.display().to_string(),
            Input::Bytes(_) => "bytes".to_string(),
            Input::Reader(_) => "stdin".to_string(),
        }
    }

    /// Convert input to bytes
    pub(crate) fn into_bytes(self) -> Result<Vec<u8>> {
        match self {
            Input::Text(text) => Ok(text.into_bytes()),
            Input::Bytes(bytes) => Ok(bytes),
            Input::File(path) => std::fs::read(&path).map_err(|e| {
                Error::Infrastructure(format!("Failed to read file {}: {}", path.display(), e))
            }),
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer).map_err(|e| {
                    Error::Infrastructure(format!("Failed to read from reader: {}", e))
                })?;
                Ok(buffer)
            }
        }
    }

    /// Get text content from input
    pub(crate) fn into_text(self) -> Result<String> {
        let bytes = self.into_bytes()?;
        String::from_utf8(bytes)
            .map_err(|e| Error::Infrastructure(format!("Invalid UTF-8 encoding: {}", e)))
    }
}

/// Layout of reading series in input text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputFormat {
    /// One series per non-blank line, e.g. `[73, 74, 75]` or `73 74 75`
    #[default]
    Lines,
    /// Token stream of records `n r1 .. rn`, repeated to end of input
    Counted,
}

impl InputFormat {
    /// Stable name used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Lines => "lines",
            InputFormat::Counted => "counted",
        }
    }

    /// Parse `text` into series, rejecting any series longer than `limit`
    pub fn parse(&self, text: &str, source: &str, limit: usize) -> Result<Vec<Series>> {
        match self {
            InputFormat::Lines => parse_lines(text, source, limit),
            InputFormat::Counted => parse_counted(text, source, limit),
        }
    }
}

impl FromStr for InputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lines" | "list" => Ok(InputFormat::Lines),
            "counted" => Ok(InputFormat::Counted),
            other => Err(Error::Configuration(format!(
                "unknown input format '{other}' (expected 'lines' or 'counted')"
            ))),
        }
    }
}

/// A labelled sequence of readings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    /// Source name and 1-based record number, e.g. `week.txt#2`
    pub label: String,
    /// Readings in order
    pub readings: Vec<i64>,
}

impl Series {
    /// Create a series
    pub fn new(label: impl Into<String>, readings: Vec<i64>) -> Self {
        Self {
            label: label.into(),
            readings,
        }
    }
}

/// Drop a `#` comment, if any
fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(body, _)| body)
}

/// Tokens of one line, split on whitespace and commas
fn tokens(body: &str) -> impl Iterator<Item = &str> {
    body.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
}

fn parse_reading(token: &str, line: usize) -> Result<i64> {
    token.parse::<i64>().map_err(|_| Error::InvalidReading {
        line,
        token: token.to_string(),
    })
}

fn check_limit(len: usize, limit: usize) -> Result<()> {
    if len > limit {
        return Err(Error::TooManyReadings { limit, found: len });
    }
    Ok(())
}

fn parse_lines(text: &str, source: &str, limit: usize) -> Result<Vec<Series>> {
    let mut series = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let body = strip_comment(raw).trim();
        if body.is_empty() {
            continue;
        }

        let body = body
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap_or(body);

        let readings = tokens(body)
            .map(|token| parse_reading(token, line))
            .collect::<Result<Vec<_>>>()?;
        check_limit(readings.len(), limit)?;

        let label = format!("{}#{}", source, series.len() + 1);
        series.push(Series::new(label, readings));
    }

    Ok(series)
}

fn parse_counted(text: &str, source: &str, limit: usize) -> Result<Vec<Series>> {
    let mut stream = text
        .lines()
        .enumerate()
        .flat_map(|(idx, raw)| tokens(strip_comment(raw)).map(move |t| (idx + 1, t)));
    let mut series = Vec::new();

    while let Some((_, header)) = stream.next() {
        let record = series.len() + 1;
        let expected = header.parse::<usize>().map_err(|_| Error::InvalidCount {
            record,
            token: header.to_string(),
        })?;
        check_limit(expected, limit)?;

        let mut readings = Vec::with_capacity(expected.min(PREALLOC_CAP));
        for (line, token) in stream.by_ref().take(expected) {
            readings.push(parse_reading(token, line)?);
        }
        if readings.len() < expected {
            return Err(Error::MissingReadings {
                record,
                expected,
                found: readings.len(),
            });
        }

        series.push(Series::new(format!("{source}#{record}"), readings));
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_LIMIT: usize = usize::MAX;

    #[test]
    fn test_lines_accepts_brackets_commas_and_spaces() {
        let text = "[73, 74, 75, 71]\n30 40 50 60\n30,60,90\n";
        let series = InputFormat::Lines.parse(text, "t", NO_LIMIT).unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].readings, vec![73, 74, 75, 71]);
        assert_eq!(series[1].readings, vec![30, 40, 50, 60]);
        assert_eq!(series[2].readings, vec![30, 60, 90]);
        assert_eq!(series[2].label, "t#3");
    }

    #[test]
    fn test_lines_skips_blanks_and_comments() {
        let text = "# readings\n\n  -5 -10   # cold snap\n\n";
        let series = InputFormat::Lines.parse(text, "t", NO_LIMIT).unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].readings, vec![-5, -10]);
        assert_eq!(series[0].label, "t#1");
    }

    #[test]
    fn test_lines_explicit_empty_series() {
        let series = InputFormat::Lines.parse("[]\n[ ]", "t", NO_LIMIT).unwrap();
        assert_eq!(series.len(), 2);
        assert!(series.iter().all(|s| s.readings.is_empty()));
    }

    #[test]
    fn test_lines_rejects_bad_token() {
        let err = InputFormat::Lines
            .parse("1 2 3\n4 warm 6", "t", NO_LIMIT)
            .unwrap_err();
        match err {
            Error::InvalidReading { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "warm");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_lines_rejects_unbalanced_bracket() {
        let err = InputFormat::Lines.parse("[1, 2", "t", NO_LIMIT).unwrap_err();
        assert!(matches!(err, Error::InvalidReading { ref token, .. } if token == "[1"));
    }

    #[test]
    fn test_lines_rejects_overflowing_reading() {
        let err = InputFormat::Lines
            .parse("99999999999999999999", "t", NO_LIMIT)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidReading { line: 1, .. }));
    }

    #[test]
    fn test_lines_enforces_limit() {
        let err = InputFormat::Lines.parse("1 2 3", "t", 2).unwrap_err();
        assert!(matches!(err, Error::TooManyReadings { limit: 2, found: 3 }));
    }

    #[test]
    fn test_counted_records() {
        let text = "8\n73 74 75 71 69 72 76 73\n0\n1 50\n";
        let series = InputFormat::Counted.parse(text, "judge", NO_LIMIT).unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].readings.len(), 8);
        assert!(series[1].readings.is_empty());
        assert_eq!(series[2].readings, vec![50]);
        assert_eq!(series[2].label, "judge#3");
    }

    #[test]
    fn test_counted_truncated_record() {
        let err = InputFormat::Counted
            .parse("2 1 2\n4 1 2", "t", NO_LIMIT)
            .unwrap_err();
        match err {
            Error::MissingReadings {
                record,
                expected,
                found,
            } => {
                assert_eq!((record, expected, found), (2, 4, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_counted_bad_header() {
        let err = InputFormat::Counted.parse("-3 1 2 3", "t", NO_LIMIT).unwrap_err();
        assert!(matches!(err, Error::InvalidCount { record: 1, .. }));
    }

    #[test]
    fn test_counted_header_over_limit() {
        let err = InputFormat::Counted.parse("1000000 1", "t", 10).unwrap_err();
        assert!(matches!(err, Error::TooManyReadings { limit: 10, .. }));
    }

    #[test]
    fn test_counted_reports_reading_line() {
        let err = InputFormat::Counted
            .parse("3\n1\n2\nx", "t", NO_LIMIT)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidReading { line: 4, .. }));
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("lines".parse::<InputFormat>().unwrap(), InputFormat::Lines);
        assert_eq!("Counted".parse::<InputFormat>().unwrap(), InputFormat::Counted);
        assert!("csv".parse::<InputFormat>().is_err());
    }

    #[test]
    fn test_input_variants() {
        let text = Input::from_text("1 2").into_text().unwrap();
        assert_eq!(text, "1 2");

        let bytes = Input::from_bytes(b"3 4".to_vec()).into_bytes().unwrap();
        assert_eq!(bytes, b"3 4");

        let reader = Input::from_reader(std::io::Cursor::new(b"5 6".to_vec()));
        assert_eq!(reader.source_name(), "stdin");
        assert_eq!(reader.into_text().unwrap(), "5 6");
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let err = Input::from_bytes(vec![0xff, 0xfe]).into_text().unwrap_err();
        assert!(matches!(err, Error::Infrastructure(ref msg) if msg.contains("UTF-8")));
    }

    #[test]
    fn test_missing_file() {
        let err = Input::from_file("/nonexistent/readings.txt")
            .into_text()
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
