//! Primitive factory and outline building.

mod cache;
mod primitives;

pub use cache::OutlineCache;
pub use primitives::{
    color_rgba, create_primitive, create_primitive_rgb, model_matrix, DEFAULT_SEGMENTS,
};

use std::collections::HashMap;

use glam::DVec3;
use shared::{CylinderParams, ObjectId, Rgb, Transform};

use crate::state::scene::SceneState;
use crate::viewport::mesh::{cylinder_outline, polyline, LineMeshData};

/// Wireframe outline of one placed cylinder, in world space
pub fn build_object_outline(
    params: &CylinderParams,
    transform: &Transform,
    color: Rgb,
    segments: u32,
) -> LineMeshData {
    cylinder_outline(params, model_matrix(transform), segments, color_rgba(color))
}

/// Build outlines for every object in the scene
pub fn build_scene_outlines(scene: &SceneState, segments: u32) -> HashMap<ObjectId, LineMeshData> {
    scene
        .objects()
        .iter()
        .map(|o| {
            (
                o.id.clone(),
                build_object_outline(&o.params, &o.transform, o.color, segments),
            )
        })
        .collect()
}

/// Line mesh through the link sample points
pub fn build_link_outline(points: &[DVec3], color: Rgb) -> LineMeshData {
    let points: Vec<_> = points.iter().map(|p| p.as_vec3()).collect();
    polyline(&points, color_rgba(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::link::sample_line;

    #[test]
    fn test_link_outline_has_fifty_segments() {
        let points = sample_line(DVec3::ZERO, DVec3::X, 51);
        let mesh = build_link_outline(&points, Rgb::RED);
        assert_eq!(mesh.segment_count(), 50);
        let (a, _, color) = mesh.segments().next().unwrap();
        assert_eq!(a, glam::Vec3::ZERO);
        assert_eq!(color, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_scene_outlines_one_per_object() {
        let (state, a, b) = crate::fixtures::two_cylinder_state();
        let outlines = build_scene_outlines(&state.scene, 8);
        assert_eq!(outlines.len(), 2);
        assert_eq!(outlines[&a].segment_count(), 24);
        assert!(outlines.contains_key(&b));
    }
}
