//! Configured facade over the finder
//!
//! [`WarmerDayFinder`] parses an [`Input`] according to its [`Config`],
//! analyses every series and packages the waits with batch metadata. The
//! struct only carries configuration; each series is analysed by a fresh,
//! independent call to [`days_until_warmer`].

use std::time::Instant;

use crate::config::Config;
use crate::error::Result;
use crate::finder::days_until_warmer;
use crate::input::{Input, Series};
use crate::output::{Output, ProcessingMetadata, ProcessingStats, SeriesResult};

/// Next-warmer-day processor
#[derive(Debug, Clone, Default)]
pub struct WarmerDayFinder {
    config: Config,
}

impl WarmerDayFinder {
    /// Create a new processor with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse input into series without analysing them
    pub fn parse(&self, input: Input) -> Result<Vec<Series>> {
        let source = input.source_name();
        let text = input.into_text()?;
        self.config
            .format
            .parse(&text, &source, self.config.max_readings)
    }

    /// Parse input and compute waits for every series it holds
    pub fn process(&self, input: Input) -> Result<Output> {
        let series = self.parse(input)?;
        self.process_series(series)
    }

    /// Compute waits for already parsed series
    pub fn process_series(&self, series: Vec<Series>) -> Result<Output> {
        let start = Instant::now();
        let count = series.len();

        let (results, strategy_used) = if self.use_parallel(count) {
            self.analyse_parallel(series)?
        } else {
            let results = series.into_iter().map(analyse).collect::<Vec<_>>();
            (results, "sequential".to_string())
        };

        let duration = start.elapsed();
        tracing::debug!(
            series = count,
            strategy = %strategy_used,
            elapsed_us = duration.as_micros() as u64,
            "batch analysed"
        );

        let stats = ProcessingStats::collect(&results);
        Ok(Output {
            series: results,
            metadata: ProcessingMetadata {
                duration,
                strategy_used,
                stats,
            },
        })
    }

    #[cfg(feature = "parallel")]
    fn use_parallel(&self, count: usize) -> bool {
        use crate::config::defaults;

        self.config.parallel && count >= defaults::PARALLEL_MIN_SERIES
    }

    #[cfg(not(feature = "parallel"))]
    fn use_parallel(&self, _count: usize) -> bool {
        false
    }

    /// Analyse independent series on a dedicated thread pool
    #[cfg(feature = "parallel")]
    fn analyse_parallel(&self, series: Vec<Series>) -> Result<(Vec<SeriesResult>, String)> {
        use crate::error::Error;
        use rayon::prelude::*;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.threads.unwrap_or_else(num_cpus::get))
            .thread_name(|i| format!("warmer-worker-{i}"))
            .build()
            .map_err(|e| Error::Infrastructure(format!("Failed to build thread pool: {e}")))?;

        let threads = pool.current_num_threads();
        // collect() on an indexed parallel iterator keeps input order
        let results = pool.install(|| series.into_par_iter().map(analyse).collect::<Vec<_>>());

        Ok((results, format!("parallel ({threads} threads)")))
    }

    #[cfg(not(feature = "parallel"))]
    fn analyse_parallel(&self, series: Vec<Series>) -> Result<(Vec<SeriesResult>, String)> {
        let results = series.into_iter().map(analyse).collect();
        Ok((results, "sequential".to_string()))
    }
}

fn analyse(series: Series) -> SeriesResult {
    tracing::trace!(label = %series.label, len = series.readings.len(), "analysing series");
    let waits = days_until_warmer(&series.readings);
    SeriesResult {
        label: series.label,
        readings: series.readings,
        waits,
    }
}

/// Compute waits for text input with default configuration
pub fn process_text(text: &str) -> Result<Output> {
    WarmerDayFinder::new().process(Input::from_text(text))
}

/// Compute waits for a file with default configuration
pub fn process_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    WarmerDayFinder::new().process(Input::from_file(path))
}
