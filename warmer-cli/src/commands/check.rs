//! Check command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use warmer_core::{verify, Config, Input, InputFormat, Series, WarmerDayFinder};

use crate::error::CliError;
use crate::input::ensure_file;
use crate::logging;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// File with the reading series
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// File with the candidate waits, one series per record
    #[arg(short, long, value_name = "FILE", required = true)]
    pub answer: PathBuf,

    /// Both files use judge-style counted records
    #[arg(long)]
    pub counted: bool,

    /// Only report failures
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Outcome of checking one series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesVerdict {
    /// Label of the reading series
    pub label: String,
    /// `None` when the answer is correct
    pub violation: Option<String>,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<()> {
        logging::init(self.verbose, false);

        ensure_file(&self.input)?;
        ensure_file(&self.answer)?;

        let verdicts = self.run()?;
        let failed = verdicts.iter().filter(|v| v.violation.is_some()).count();

        for verdict in &verdicts {
            match &verdict.violation {
                None if !self.quiet => println!("✓ {}", verdict.label),
                None => {}
                Some(reason) => println!("✗ {}: {}", verdict.label, reason),
            }
        }

        if failed > 0 {
            return Err(CliError::CheckFailed {
                failed,
                total: verdicts.len(),
            }
            .into());
        }

        if !self.quiet {
            println!("All {} series correct", verdicts.len());
        }
        Ok(())
    }

    /// Verify every answer series against its reading series
    pub fn run(&self) -> Result<Vec<SeriesVerdict>> {
        let format = if self.counted {
            InputFormat::Counted
        } else {
            InputFormat::Lines
        };
        let finder = WarmerDayFinder::with_config(Config::builder().format(format).build()?)?;

        let readings = finder
            .parse(Input::from_file(&self.input))
            .with_context(|| format!("Failed to read readings from {}", self.input.display()))?;
        let answers = finder
            .parse(Input::from_file(&self.answer))
            .with_context(|| format!("Failed to read answers from {}", self.answer.display()))?;

        if readings.len() != answers.len() {
            return Err(CliError::SeriesCountMismatch {
                readings: readings.len(),
                answers: answers.len(),
            }
            .into());
        }

        readings
            .iter()
            .zip(&answers)
            .map(|(series, answer)| -> Result<SeriesVerdict> {
                let waits = to_waits(answer)?;
                let violation = verify(&series.readings, &waits).err();
                log::debug!("{}: {:?}", series.label, violation);
                Ok(SeriesVerdict {
                    label: series.label.clone(),
                    violation: violation.map(|v| v.to_string()),
                })
            })
            .collect()
    }
}

/// Waits are distances, so a negative entry is malformed input
fn to_waits(answer: &Series) -> Result<Vec<usize>> {
    answer
        .readings
        .iter()
        .enumerate()
        .map(|(day, &value)| {
            usize::try_from(value).with_context(|| {
                format!("{}: day {} has negative wait {}", answer.label, day, value)
            })
        })
        .collect()
}
