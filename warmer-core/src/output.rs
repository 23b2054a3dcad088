//! Output types

use serde::Serialize;
use std::time::Duration;

/// Processing output with metadata
#[derive(Debug, Clone, Serialize)]
pub struct Output {
    /// One result per input series, in input order
    pub series: Vec<SeriesResult>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Waits computed for one series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesResult {
    /// Label of the source series
    pub label: String,
    /// The readings analysed
    pub readings: Vec<i64>,
    /// Days until a strictly warmer reading, `0` when none follows
    pub waits: Vec<usize>,
}

impl SeriesResult {
    /// Number of readings that do see a warmer day
    pub fn resolved(&self) -> usize {
        self.waits.iter().filter(|&&w| w > 0).count()
    }

    /// Number of readings never followed by a warmer day
    pub fn unresolved(&self) -> usize {
        self.waits.len() - self.resolved()
    }

    /// Longest wait in the series
    pub fn max_wait(&self) -> usize {
        self.waits.iter().copied().max().unwrap_or(0)
    }
}

/// Metadata about the processing
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingMetadata {
    /// Total processing duration
    #[serde(serialize_with = "serialize_duration_ms")]
    pub duration: Duration,
    /// Strategy used for processing
    pub strategy_used: String,
    /// Additional statistics
    pub stats: ProcessingStats,
}

/// Batch-wide statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessingStats {
    /// Number of series analysed
    pub series_count: usize,
    /// Total readings across all series
    pub readings_processed: usize,
    /// Readings that see a warmer day
    pub resolved: usize,
    /// Readings that never do
    pub unresolved: usize,
    /// Longest wait across all series
    pub max_wait: usize,
}

impl ProcessingStats {
    pub(crate) fn collect(series: &[SeriesResult]) -> Self {
        series.iter().fold(Self::default(), |mut stats, s| {
            let resolved = s.resolved();
            stats.series_count += 1;
            stats.readings_processed += s.readings.len();
            stats.resolved += resolved;
            stats.unresolved += s.waits.len() - resolved;
            stats.max_wait = stats.max_wait.max(s.max_wait());
            stats
        })
    }
}

fn serialize_duration_ms<S: serde::Serializer>(
    duration: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64() * 1000.0)
}
