//! Core types and constants for the height survey

pub mod constants;
pub mod types;

pub use constants::*;
pub use types::*;
