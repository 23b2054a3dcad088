//! Next-warmer-day analysis with a monotonic stack
//!
//! Given an ordered sequence of temperature readings, this crate computes for
//! every position how many steps later the first strictly warmer reading
//! occurs, or `0` when none does. The computation is a single left-to-right
//! pass over the readings, keeping unresolved positions on a stack whose
//! readings never increase towards the top; it runs in linear time.
//!
//! # Layers
//!
//! - [`finder`]: the pure algorithm and its pending-index stack
//! - [`verify`]: checking a candidate answer against its readings
//! - [`input`], [`config`], [`processor`], [`output`]: parsing raw text into
//!   series, batch processing and result metadata
//!
//! # Example
//!
//! ```rust
//! use warmer_core::{Input, WarmerDayFinder};
//!
//! let finder = WarmerDayFinder::new();
//! let output = finder
//!     .process(Input::from_text("[73, 74, 75, 71, 69, 72, 76, 73]"))
//!     .unwrap();
//!
//! assert_eq!(output.series[0].waits, vec![1, 1, 4, 2, 1, 1, 0, 0]);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod finder;
pub mod input;
pub mod output;
pub mod processor;
pub mod verify;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result, Violation};
pub use finder::{days_until_warmer, PendingStack};
pub use input::{Input, InputFormat, Series};
pub use output::{Output, ProcessingMetadata, ProcessingStats, SeriesResult};
pub use processor::{process_file, process_text, WarmerDayFinder};
pub use verify::verify;
