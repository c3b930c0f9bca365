//! Core data types for the height survey

use geo::{Distance, Geodesic, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::constants::MAX_INCLINATION_RAD;
use crate::validation::error::SurveyError;

/// A single angle-of-inclination measurement taken at a known site
///
/// The angle is measured from horizontal toward the top of the landmark,
/// in radians. Observations are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    latitude: f64,
    longitude: f64,
    angle: f64,
}

impl Observation {
    /// Create an observation, validating coordinate and angle ranges
    ///
    /// Latitude must lie in [-90, 90] degrees, longitude in [-180, 180]
    /// degrees, and the inclination angle in the open interval (0, pi/2)
    /// radians.
    pub fn new(latitude: f64, longitude: f64, angle: f64) -> Result<Self, SurveyError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(SurveyError::InvalidLatitude { value_deg: latitude });
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(SurveyError::InvalidLongitude { value_deg: longitude });
        }
        if !angle.is_finite() || angle <= 0.0 || angle >= MAX_INCLINATION_RAD {
            return Err(SurveyError::InvalidAngle { value_rad: angle });
        }

        Ok(Self {
            latitude,
            longitude,
            angle,
        })
    }

    /// Create an observation without range validation
    ///
    /// Matches the permissive handling of trusted field data; prefer
    /// [`Observation::new`] for anything user-supplied.
    pub fn new_unchecked(latitude: f64, longitude: f64, angle: f64) -> Self {
        Self {
            latitude,
            longitude,
            angle,
        }
    }

    /// Latitude of the observation site in decimal degrees
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude of the observation site in decimal degrees
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Observed inclination angle in radians
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The (latitude, longitude) pair of the observation site
    pub fn coordinate(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Site coordinate as a `geo` point (x = longitude, y = latitude)
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// Geodesic distance in meters between this site and another
    ///
    /// Uses the Karney geodesic on the WGS84 ellipsoid.
    pub fn distance_to(&self, other: &Observation) -> f64 {
        Geodesic::distance(self.point(), other.point())
    }
}

/// A reported value with a half-range uncertainty bound, in common units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Central (best) estimate
    pub value: f64,
    /// Half-range uncertainty bound
    pub uncertainty: f64,
}

impl Measurement {
    pub fn new(value: f64, uncertainty: f64) -> Self {
        Self { value, uncertainty }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} ± {:.*}", p, self.value, p, self.uncertainty),
            None => write!(f, "{} ± {}", self.value, self.uncertainty),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observation_construction() {
        let obs = Observation::new(-43.5225, 172.5800, 0.3).unwrap();
        assert_eq!(obs.coordinate(), (-43.5225, 172.5800));
        assert_eq!(obs.angle(), 0.3);
    }

    #[test]
    fn test_observation_rejects_bad_latitude() {
        let result = Observation::new(95.0, 172.58, 0.3);
        assert_eq!(
            result,
            Err(SurveyError::InvalidLatitude { value_deg: 95.0 })
        );
    }

    #[test]
    fn test_observation_rejects_bad_longitude() {
        let result = Observation::new(-43.5, 200.0, 0.3);
        assert_eq!(
            result,
            Err(SurveyError::InvalidLongitude { value_deg: 200.0 })
        );
    }

    #[test]
    fn test_observation_rejects_implausible_angles() {
        assert!(Observation::new(-43.5, 172.58, 0.0).is_err());
        assert!(Observation::new(-43.5, 172.58, -0.1).is_err());
        assert!(Observation::new(-43.5, 172.58, std::f64::consts::FRAC_PI_2).is_err());
        assert!(Observation::new(-43.5, 172.58, f64::NAN).is_err());
    }

    #[test]
    fn test_unchecked_construction_is_permissive() {
        let obs = Observation::new_unchecked(-43.5, 172.58, -0.2);
        assert_eq!(obs.angle(), -0.2);
    }

    #[test]
    fn test_geodesic_distance_between_sites() {
        let a = Observation::new(-43.5225, 172.5800, 0.3).unwrap();
        let b = Observation::new(-43.5230, 172.5900, 0.2).unwrap();

        let d = a.distance_to(&b);
        // 0.01 degrees of longitude at -43.5 latitude plus a small
        // latitude offset: a bit over 800 m on the WGS84 ellipsoid
        assert!(d > 750.0 && d < 900.0, "unexpected separation: {} m", d);
        // Distance is symmetric
        assert!((d - b.distance_to(&a)).abs() < 1e-9);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = Observation::new(-43.5225, 172.5800, 0.3).unwrap();
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_measurement_display() {
        let m = Measurement::new(23.1825, 0.235);
        assert_eq!(format!("{:.2}", m), "23.18 ± 0.23");
        assert_eq!(format!("{:.4}", m), "23.1825 ± 0.2350");
    }
}
