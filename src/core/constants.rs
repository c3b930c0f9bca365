//! Physical constants and survey parameters

use std::f64::consts::FRAC_PI_2;

/// Approximate observer eye height above ground (m)
pub const DEFAULT_EYE_HEIGHT_M: f64 = 1.68;

/// Exclusive upper bound for a plausible inclination angle (radians).
/// At or beyond a right angle the observer is no longer sighting upward
/// toward a landmark top.
pub const MAX_INCLINATION_RAD: f64 = FRAC_PI_2;

/// Minimum |tan(angle1) - tan(angle2)| accepted by the height formula.
/// Below this the two sightlines are effectively parallel and the
/// geometry is indeterminate.
pub const TAN_DENOMINATOR_FLOOR: f64 = 1e-9;
