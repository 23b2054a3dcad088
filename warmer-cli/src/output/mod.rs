//! Output formatting module

use anyhow::Result;
use warmer_core::SeriesResult;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the waits of a single series
    fn format_series(&mut self, result: &SeriesResult) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Render a list as `[a, b, c]`
pub(crate) fn bracketed<T: std::fmt::Display>(values: &[T]) -> String {
    let items = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{items}]")
}
