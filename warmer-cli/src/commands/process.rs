//! Process command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use warmer_core::{Config, Input, InputFormat, WarmerDayFinder};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::resolve_patterns;
use crate::logging;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob); reads stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Readings given inline, e.g. "73 74 75 71"
    #[arg(short, long, value_name = "READINGS")]
    pub text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Read judge-style records: a count followed by that many readings
    #[arg(long)]
    pub counted: bool,

    /// Analyse independent series in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel processing
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Reject any series longer than this
    #[arg(long, value_name = "N")]
    pub max_readings: Option<usize>,

    /// Prefix text output with series labels
    #[arg(long)]
    pub labels: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `Temperatures: [..] -> Result: [..]` line per series
    Text,
    /// JSON array of series with waits
    Json,
    /// Markdown table per series
    Markdown,
}

impl OutputFormat {
    /// Parse a format name as written in a config file
    pub fn from_name(name: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(name, true)
            .map_err(|_| CliError::ConfigError(format!("unknown output format '{name}'")).into())
    }

    /// Short description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Temperatures: [..] -> Result: [..] per series",
            OutputFormat::Json => "JSON array of series with readings and waits",
            OutputFormat::Markdown => "Markdown table per series with a totals footer",
        }
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        logging::init(self.verbose, self.quiet);

        log::info!("Starting warmer-day analysis");
        log::debug!("Arguments: {:?}", self);

        let cli_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let finder = WarmerDayFinder::with_config(self.core_config(&cli_config)?)?;
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&cli_config.output.default_format)?,
        };

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = self.create_formatter(format, &cli_config, writer);

        let sources = self.sources()?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        let mut total_series = 0;
        for input in sources {
            let name = input.source_name();
            log::debug!("Processing {}", name);

            let output = finder
                .process(input)
                .with_context(|| format!("Failed to process {name}"))?;

            for result in &output.series {
                formatter.format_series(result)?;
            }
            total_series += output.series.len();

            log::info!(
                "{}: {} series, {} readings ({}, {:.3} ms)",
                name,
                output.metadata.stats.series_count,
                output.metadata.stats.readings_processed,
                output.metadata.strategy_used,
                output.metadata.duration.as_secs_f64() * 1000.0
            );
            progress.file_completed(&name);
        }

        formatter.finish()?;
        progress.finish();

        log::info!("Analysed {} series", total_series);
        Ok(())
    }

    /// Merge command-line flags over the config file
    pub fn core_config(&self, cli_config: &CliConfig) -> Result<Config> {
        let format = if self.counted {
            InputFormat::Counted
        } else {
            cli_config.input.format.parse::<InputFormat>()?
        };

        let threads = self.threads.or(match cli_config.performance.worker_threads {
            0 => None,
            n => Some(n),
        });

        let config = Config::builder()
            .format(format)
            .max_readings(self.max_readings.unwrap_or(cli_config.input.max_readings))
            .parallel(self.parallel || cli_config.performance.parallel)
            .threads(threads)
            .build()?;
        Ok(config)
    }

    /// Inline text, resolved files, or stdin, in that order of preference
    fn sources(&self) -> Result<Vec<Input>> {
        if let Some(text) = &self.text {
            return Ok(vec![Input::from_text(text.clone())]);
        }

        if self.input.is_empty() {
            log::debug!("No input given, reading stdin");
            return Ok(vec![Input::from_reader(io::stdin())]);
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to process", files.len());
        Ok(files.into_iter().map(Input::from_file).collect())
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        cli_config: &CliConfig,
        writer: Box<dyn Write + Send + Sync>,
    ) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Text => Box::new(
                TextFormatter::new(writer).with_labels(self.labels || cli_config.output.show_labels),
            ),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer).pretty(cli_config.output.pretty_json))
            }
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}
