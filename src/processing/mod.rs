//! Survey orchestration

pub mod survey;

pub use survey::{PairEstimate, PairGroup, Survey, SurveyReport};
