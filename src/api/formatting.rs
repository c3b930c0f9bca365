//! Survey report formatting and serialization
//!
//! Formatters for turning a [`SurveyReport`] into human-readable text,
//! JSON for downstream consumers, or CSV rows for data logging.

use serde::{Deserialize, Serialize};

use crate::processing::survey::SurveyReport;

/// Available output formats for survey reports
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// Render a report in the requested format with default formatter
/// settings
pub fn format_report(
    report: &SurveyReport,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(TextFormatter::new().format_text(report)),
        OutputFormat::Json => JsonFormatter::new().format_json(report),
        OutputFormat::Csv => Ok(CsvFormatter::new().format_csv(report)),
    }
}

/// Human-readable text formatter
///
/// Renders the per-pair estimates grouped by site group, followed by
/// the mean and the mean with its uncertainty bound.
pub struct TextFormatter {
    /// Decimal places for heights
    pub precision: usize,
    /// Render everything on a single line
    pub compact: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self {
            precision: 2,
            compact: false,
        }
    }
}

impl TextFormatter {
    /// Create a text formatter with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of decimal places
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Format a survey report as text
    pub fn format_text(&self, report: &SurveyReport) -> String {
        if self.compact {
            return format!(
                "{:.*} m ({} pairs)",
                self.precision, report.result, report.pairs.len()
            );
        }

        let mut output = String::new();

        // Pair estimates, grouped in order of first appearance
        let mut seen_groups: Vec<&str> = Vec::new();
        for pair in &report.pairs {
            if !seen_groups.contains(&pair.group.as_str()) {
                seen_groups.push(&pair.group);
            }
        }
        for group in seen_groups {
            output.push_str(&format!("{}:\n", group));
            for pair in report.pairs.iter().filter(|p| p.group == group) {
                output.push_str(&format!(
                    "    {}-{}: {:.*} m\n",
                    pair.site_a, pair.site_b, self.precision, pair.height_m
                ));
            }
            output.push('\n');
        }

        output.push_str("Mean:\n");
        output.push_str(&format!("    {:.*} m\n", self.precision, report.result.value));
        output.push_str("\nMean with uncertainty:\n");
        output.push_str(&format!("    {:.*} m\n", self.precision, report.result));

        output
    }
}

/// JSON formatter for structured output
pub struct JsonFormatter {
    /// Pretty print JSON
    pub pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self { pretty: false }
    }
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pretty-printing JSON formatter
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Format a survey report as a JSON string
    pub fn format_json(&self, report: &SurveyReport) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        }
    }
}

/// CSV formatter for data logging
pub struct CsvFormatter {
    /// Include header row
    pub include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self {
            include_header: true,
        }
    }
}

impl CsvFormatter {
    /// Create a new CSV formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the CSV header
    pub fn header(&self) -> String {
        "group,site_a,site_b,height_m".to_string()
    }

    /// Format the pair estimates as CSV rows
    pub fn format_csv(&self, report: &SurveyReport) -> String {
        let mut output = String::new();
        if self.include_header {
            output.push_str(&self.header());
            output.push('\n');
        }
        for pair in &report.pairs {
            output.push_str(&format!(
                "{},{},{},{:.3}\n",
                pair.group, pair.site_a, pair.site_b, pair.height_m
            ));
        }
        output
    }
}
