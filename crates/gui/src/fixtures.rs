//! Factory functions for creating test data.
//!
//! Small helpers to construct cylinders and populated states used by unit
//! tests, integration tests and the test harness.

use shared::{CylinderParams, ObjectId, Rgb, SceneObject};

use crate::build::create_primitive;
use crate::state::AppState;

// ── Object factories ────────────────────────────────────────────

/// Unit-height red cylinder with radius 0.5, at the origin.
pub fn red_cylinder() -> SceneObject {
    cylinder(1.0, 0.5, 0.5, "#ff0000")
}

/// Taller, thinner green cylinder at the origin.
pub fn green_cylinder() -> SceneObject {
    cylinder(2.0, 0.3, 0.3, "#00ff00")
}

/// Cylinder with arbitrary valid dimensions.
///
/// Panics on invalid dimensions; fixtures are only called with good values.
pub fn cylinder(height: f64, top: f64, bottom: f64, color: &str) -> SceneObject {
    create_primitive(height, top, bottom, color)
        .unwrap_or_else(|e| panic!("fixture cylinder rejected: {e}"))
}

// ── State factories ─────────────────────────────────────────────

/// State holding the red and green cylinders, both at the origin.
/// Returns the state and the two IDs in insertion order.
pub fn two_cylinder_state() -> (AppState, ObjectId, ObjectId) {
    let mut state = AppState::default();
    let a = add(&mut state, CylinderParams::new(1.0, 0.5, 0.5), Rgb::RED);
    let b = add(&mut state, CylinderParams::new(2.0, 0.3, 0.3), Rgb::new(0, 255, 0));
    (state, a, b)
}

fn add(state: &mut AppState, params: CylinderParams, color: Rgb) -> ObjectId {
    match state.add_primitive(params, color) {
        Ok(Some(id)) => id,
        other => panic!("fixture add_primitive failed: {other:?}"),
    }
}
