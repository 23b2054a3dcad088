//! Processing configuration

use crate::error::Error;
use crate::input::InputFormat;

/// Default configuration constants
pub mod defaults {
    /// Longest series accepted by default
    pub const MAX_READINGS: usize = 10_000_000;

    /// Batches smaller than this run sequentially even when parallelism is on
    pub const PARALLEL_MIN_SERIES: usize = 2;
}

/// Processing configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) format: InputFormat,
    pub(crate) max_readings: usize,
    pub(crate) parallel: bool,
    pub(crate) threads: Option<usize>, // None = all available threads
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: InputFormat::default(),
            max_readings: defaults::MAX_READINGS,
            parallel: false,
            threads: None,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Input text layout
    pub fn format(&self) -> InputFormat {
        self.format
    }

    /// Longest accepted series
    pub fn max_readings(&self) -> usize {
        self.max_readings
    }

    /// Whether independent series may be analysed concurrently
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Worker thread count for parallel batches
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.max_readings == 0 {
            return Err(Error::Configuration(
                "max_readings must be greater than 0".into(),
            ));
        }

        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(Error::Configuration(
                    "threads must be greater than 0".into(),
                ));
            }
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    format: Option<InputFormat>,
    max_readings: Option<usize>,
    parallel: Option<bool>,
    threads: Option<usize>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input text layout
    pub fn format(mut self, format: InputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set the longest accepted series
    pub fn max_readings(mut self, limit: usize) -> Self {
        self.max_readings = Some(limit);
        self
    }

    /// Allow independent series to run on a thread pool
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = Some(enabled);
        self
    }

    /// Set the number of threads (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(format) = self.format {
            config.format = format;
        }

        if let Some(limit) = self.max_readings {
            config.max_readings = limit;
        }

        if let Some(parallel) = self.parallel {
            config.parallel = parallel;
        }

        if self.threads.is_some() {
            config.threads = self.threads;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.format(), InputFormat::Lines);
        assert_eq!(config.max_readings(), defaults::MAX_READINGS);
        assert!(!config.parallel());
        assert_eq!(config.threads(), None);
    }

    #[test]
    fn test_builder_overrides() {
        let config = Config::builder()
            .format(InputFormat::Counted)
            .max_readings(16)
            .parallel(true)
            .threads(Some(4))
            .build()
            .unwrap();

        assert_eq!(config.format(), InputFormat::Counted);
        assert_eq!(config.max_readings(), 16);
        assert!(config.parallel());
        assert_eq!(config.threads(), Some(4));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let err = Config::builder().max_readings(0).build().unwrap_err();
        assert!(err.to_string().contains("max_readings"));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let err = Config::builder().threads(Some(0)).build().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }
}
