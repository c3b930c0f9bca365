//! Defensive validation of observation data
//!
//! The height formula tolerates out-of-range input mathematically but
//! the "height" interpretation degrades once an angle leaves (0, pi/2).
//! This validator gives callers a configurable sweep over a site map
//! before any estimation runs.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::constants::MAX_INCLINATION_RAD;
use crate::core::types::Observation;
use crate::validation::error::SurveyError;

/// Configuration for observation validation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Exclusive lower bound for the inclination angle (radians)
    pub min_angle_rad: f64,
    /// Exclusive upper bound for the inclination angle (radians)
    pub max_angle_rad: f64,
    /// Minimum geodesic separation between paired sites (meters);
    /// zero disables the bound
    pub min_pair_separation_m: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_angle_rad: 0.0,
            max_angle_rad: MAX_INCLINATION_RAD,
            min_pair_separation_m: 0.0,
        }
    }
}

/// Outcome of validating a site map: which sites survived and which
/// were rejected, with the error that rejected them
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub valid_sites: Vec<String>,
    pub rejected: Vec<(String, SurveyError)>,
}

impl ValidationReport {
    /// True when every site passed validation
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Validates observations against coordinate and angle bounds
#[derive(Debug, Clone, Default)]
pub struct ObservationValidator {
    config: ValidationConfig,
}

impl ObservationValidator {
    /// Create a validator with default bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with custom bounds
    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a single observation
    pub fn validate(&self, observation: &Observation) -> Result<(), SurveyError> {
        let (latitude, longitude) = observation.coordinate();
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(SurveyError::InvalidLatitude {
                value_deg: latitude,
            });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(SurveyError::InvalidLongitude {
                value_deg: longitude,
            });
        }

        let angle = observation.angle();
        if !angle.is_finite() || angle <= self.config.min_angle_rad || angle >= self.config.max_angle_rad
        {
            return Err(SurveyError::InvalidAngle { value_rad: angle });
        }

        Ok(())
    }

    /// Validate every observation in a site map, splitting it into
    /// surviving and rejected sites
    pub fn validate_sites(&self, sites: &BTreeMap<String, Observation>) -> ValidationReport {
        let mut valid_sites = Vec::new();
        let mut rejected = Vec::new();

        for (name, observation) in sites {
            match self.validate(observation) {
                Ok(()) => valid_sites.push(name.clone()),
                Err(err) => rejected.push((name.clone(), err)),
            }
        }

        ValidationReport {
            valid_sites,
            rejected,
        }
    }
}
