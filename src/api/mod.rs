//! Report output formats

pub mod formatting;

pub use formatting::{format_report, CsvFormatter, JsonFormatter, OutputFormat, TextFormatter};
