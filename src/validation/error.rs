//! Error taxonomy for the height survey

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error classification for the height survey
///
/// Every error is synchronous and surfaced directly to the caller of the
/// failing function. A geometry error is fatal only to the estimate it
/// came from; survey-level policy decides whether the batch continues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurveyError {
    // Geometric errors
    IndeterminateGeometry {
        angle_rad: f64,
        separation_m: f64,
    },
    NonPositiveSeparation {
        distance_m: f64,
    },
    SitesTooClose {
        site_a: String,
        site_b: String,
        separation_m: f64,
        minimum_m: f64,
    },

    // Aggregation errors
    EmptyAggregation,

    // Input validation errors
    InvalidLatitude {
        value_deg: f64,
    },
    InvalidLongitude {
        value_deg: f64,
    },
    InvalidAngle {
        value_rad: f64,
    },

    // Survey composition errors
    DuplicateSite {
        name: String,
    },
    UnknownSite {
        group: String,
        name: String,
    },
    InsufficientObservations {
        group: String,
        available: usize,
        required: usize,
    },
}

impl fmt::Display for SurveyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurveyError::IndeterminateGeometry {
                angle_rad,
                separation_m,
            } => {
                write!(
                    f,
                    "Indeterminate geometry: both sites observe {:.6} rad over {:.2} m separation",
                    angle_rad, separation_m
                )
            }
            SurveyError::NonPositiveSeparation { distance_m } => {
                write!(f, "Non-positive site separation: {:.2} m", distance_m)
            }
            SurveyError::SitesTooClose {
                site_a,
                site_b,
                separation_m,
                minimum_m,
            } => {
                write!(
                    f,
                    "Sites {} and {} too close: {:.2} m separation (minimum {:.2} m)",
                    site_a, site_b, separation_m, minimum_m
                )
            }
            SurveyError::EmptyAggregation => {
                write!(f, "Cannot aggregate an empty set of estimates")
            }
            SurveyError::InvalidLatitude { value_deg } => {
                write!(
                    f,
                    "Invalid latitude {:.6}°: must be within [-90, 90]",
                    value_deg
                )
            }
            SurveyError::InvalidLongitude { value_deg } => {
                write!(
                    f,
                    "Invalid longitude {:.6}°: must be within [-180, 180]",
                    value_deg
                )
            }
            SurveyError::InvalidAngle { value_rad } => {
                write!(
                    f,
                    "Invalid inclination angle {} rad: must be within (0, pi/2)",
                    value_rad
                )
            }
            SurveyError::DuplicateSite { name } => {
                write!(f, "Duplicate site name: {}", name)
            }
            SurveyError::UnknownSite { group, name } => {
                write!(f, "Group {} references unknown site {}", group, name)
            }
            SurveyError::InsufficientObservations {
                group,
                available,
                required,
            } => {
                write!(
                    f,
                    "Group {} has {} observation(s), {} required for a height estimate",
                    group, available, required
                )
            }
        }
    }
}

impl std::error::Error for SurveyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SurveyError::IndeterminateGeometry {
            angle_rad: 0.3,
            separation_m: 850.0,
        };
        let text = err.to_string();
        assert!(text.contains("Indeterminate geometry"));
        assert!(text.contains("850.00 m"));

        assert_eq!(
            SurveyError::EmptyAggregation.to_string(),
            "Cannot aggregate an empty set of estimates"
        );

        let close = SurveyError::SitesTooClose {
            site_a: "A1".to_string(),
            site_b: "A2".to_string(),
            separation_m: 0.5,
            minimum_m: 1.0,
        };
        assert_eq!(
            close.to_string(),
            "Sites A1 and A2 too close: 0.50 m separation (minimum 1.00 m)"
        );
    }

    #[test]
    fn test_error_serialization() {
        let err = SurveyError::DuplicateSite {
            name: "A1".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: SurveyError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
