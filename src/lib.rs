//! Landmark Height Estimation
//!
//! Estimates the height of a geographic landmark from pairs of
//! angle-of-inclination observations taken at surveyed sites. Each pair
//! of sites yields a closed-form height from the two tangents and the
//! geodesic distance between the sites; repeated pairs aggregate into a
//! mean with a half-range uncertainty bound.

pub mod algorithms;
pub mod api;
pub mod core;
pub mod processing;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use crate::algorithms::aggregate::aggregate;
pub use crate::algorithms::height::{estimate_height, height_from_angles};
pub use crate::api::{format_report, CsvFormatter, JsonFormatter, OutputFormat, TextFormatter};
pub use crate::core::{Measurement, Observation, DEFAULT_EYE_HEIGHT_M};
pub use crate::processing::survey::{PairEstimate, PairGroup, Survey, SurveyReport};
pub use crate::utils::config::{ConfigError, ConfigurationManager, SurveyConfig};
pub use crate::validation::data::{ObservationValidator, ValidationConfig, ValidationReport};
pub use crate::validation::error::SurveyError;
