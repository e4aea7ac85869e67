//! pk: pick fields out of delimited text lines
//!
//! Each input line is split into tokens by [`crate::core::Tokenizer`], and
//! [`crate::core::FieldPrinter`] prints the requested positions, ranges and
//! literals. [`runner::Runner`] streams input through both, configured by
//! [`config::Settings`].

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod runner;

#[cfg(any(test, debug_assertions))]
pub mod test_utils;

pub use config::Settings;
pub use error::{PkError, Result};
pub use runner::{RunSummary, Runner};
