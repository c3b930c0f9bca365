//! Height estimation and aggregation algorithms

pub mod aggregate;
pub mod height;

pub use aggregate::aggregate;
pub use height::{estimate_height, height_from_angles};
