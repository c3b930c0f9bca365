//! Input validation and error taxonomy

pub mod data;
pub mod error;

pub use data::{ObservationValidator, ValidationConfig, ValidationReport};
pub use error::SurveyError;
