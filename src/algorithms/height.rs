//! Two-angle landmark height estimation
//!
//! Two observers sight the top of the same landmark from sites a known
//! distance apart. With the steeper angle taken at the nearer site, the
//! height above eye level follows in closed form from the two tangents
//! and the site separation.

use crate::core::constants::TAN_DENOMINATOR_FLOOR;
use crate::core::types::Observation;
use crate::validation::error::SurveyError;

/// Compute a landmark height from two inclination angles and the
/// separation between their sites
///
/// `angle1` must be the larger of the two angles (the nearer site) and
/// `angle2` the smaller; `distance` is the separation between the sites
/// in meters. Returns the height above eye level in meters.
///
/// Fails with [`SurveyError::InvalidAngle`] when either angle is not
/// finite, with [`SurveyError::NonPositiveSeparation`] when `distance`
/// is zero or negative, and with [`SurveyError::IndeterminateGeometry`]
/// when the two tangents are too close for the geometry to resolve a
/// height. Never returns an infinite or NaN height.
pub fn height_from_angles(angle1: f64, angle2: f64, distance: f64) -> Result<f64, SurveyError> {
    if !angle1.is_finite() {
        return Err(SurveyError::InvalidAngle { value_rad: angle1 });
    }
    if !angle2.is_finite() {
        return Err(SurveyError::InvalidAngle { value_rad: angle2 });
    }
    if distance.is_nan() || distance <= 0.0 {
        return Err(SurveyError::NonPositiveSeparation {
            distance_m: distance,
        });
    }

    let tan1 = angle1.tan();
    let tan2 = angle2.tan();
    let denominator = tan1 - tan2;

    if denominator.abs() < TAN_DENOMINATOR_FLOOR {
        return Err(SurveyError::IndeterminateGeometry {
            angle_rad: angle1,
            separation_m: distance,
        });
    }

    Ok(distance * tan1 * tan2 / denominator)
}

/// Estimate a landmark's height above eye level from two observations
///
/// The observation with the larger inclination angle is always treated
/// as the nearer site, regardless of argument order, so the result is
/// symmetric in its two arguments. Inputs are borrowed read-only; the
/// reordering is local to this function.
pub fn estimate_height(a: &Observation, b: &Observation) -> Result<f64, SurveyError> {
    // The steeper sightline belongs to the nearer site and must be angle1
    let (near, far) = if a.angle() >= b.angle() { (a, b) } else { (b, a) };

    let separation = near.distance_to(far);
    height_from_angles(near.angle(), far.angle(), separation)
}
