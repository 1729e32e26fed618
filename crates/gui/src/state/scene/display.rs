//! Display helper functions for scene objects

use shared::SceneObject;

/// Get display name for an object
pub fn object_display_name(object: &SceneObject) -> String {
    format!("{} ({})", object.name, short_id(&object.id))
}

/// Get shortened ID (first 8 characters)
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

/// Format a point as `x, y, z` for the endpoint readout
pub fn format_point(p: [f64; 3]) -> String {
    format!("{}, {}, {}", p[0], p[1], p[2])
}
