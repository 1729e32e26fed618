//! Input validation for primitive parameters.
//!
//! The factory calls these before building an object so bad dimensions never
//! reach the registry.

use shared::CylinderParams;

use crate::error::{SceneError, SceneResult};

/// Check a single dimension: finite and strictly positive.
pub fn validate_dimension(name: &'static str, value: f64) -> SceneResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SceneError::InvalidParameter { name, value })
    }
}

/// Check every dimension of a tapered cylinder, reporting the first bad one.
pub fn validate_cylinder(params: &CylinderParams) -> SceneResult<()> {
    validate_dimension("height", params.height)?;
    validate_dimension("top_radius", params.top_radius)?;
    validate_dimension("bottom_radius", params.bottom_radius)?;
    Ok(())
}
