//! CLI command implementations

use clap::Subcommand;

pub mod check;
pub mod generate_config;
pub mod process;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute days until a warmer reading for every series
    Process(process::ProcessArgs),

    /// Verify candidate answers against their readings
    Check(check::CheckArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List accepted input layouts
    InputFormats,
}

impl ListCommands {
    /// Lines printed for this listing
    pub fn lines(&self) -> Vec<String> {
        use clap::ValueEnum;
        use process::OutputFormat;

        match self {
            ListCommands::Formats => OutputFormat::value_variants()
                .iter()
                .filter_map(|f| {
                    f.to_possible_value()
                        .map(|v| format!("  {:<10} {}", v.get_name(), f.description()))
                })
                .collect(),
            ListCommands::InputFormats => vec![
                format!("  {:<10} one series per line: [73, 74, 75] or 73 74 75", "lines"),
                format!("  {:<10} records of a count followed by that many readings", "counted"),
            ],
        }
    }

    /// Execute the list command
    pub fn execute(&self) {
        match self {
            ListCommands::Formats => println!("Available output formats:"),
            ListCommands::InputFormats => println!("Accepted input layouts:"),
        }
        for line in self.lines() {
            println!("{line}");
        }
    }
}
