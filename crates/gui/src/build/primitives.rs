//! Primitive creation and transform helpers

use glam::{EulerRot, Mat4, Vec3};
use shared::{CylinderParams, Rgb, SceneObject, Transform};

use crate::error::SceneResult;
use crate::validation::validate_cylinder;

/// Radial segments used when outlining a cylinder.
pub const DEFAULT_SEGMENTS: u32 = 30;

/// Build a tapered cylinder from raw dimensions and a color string.
///
/// Unparseable colors fall back to white. The new object sits at the origin
/// with zero rotation and a fresh id.
pub fn create_primitive(
    height: f64,
    top_radius: f64,
    bottom_radius: f64,
    color: &str,
) -> SceneResult<SceneObject> {
    let rgb = Rgb::parse(color).unwrap_or_else(|| {
        tracing::warn!("Unrecognized color {color:?}, using white");
        Rgb::WHITE
    });
    create_primitive_rgb(CylinderParams::new(height, top_radius, bottom_radius), rgb)
}

/// Build a tapered cylinder from validated parameters and an RGB color.
pub fn create_primitive_rgb(params: CylinderParams, color: Rgb) -> SceneResult<SceneObject> {
    validate_cylinder(&params)?;
    Ok(SceneObject {
        id: uuid::Uuid::new_v4().to_string(),
        name: "Cylinder".to_string(),
        params,
        color,
        transform: Transform::new(),
    })
}

/// Model matrix for a Transform (Euler XYZ rotation, then translation)
pub fn model_matrix(transform: &Transform) -> Mat4 {
    let [tx, ty, tz] = transform.position;
    let [rx, ry, rz] = transform.rotation;

    let rotation = Mat4::from_euler(EulerRot::XYZ, rx as f32, ry as f32, rz as f32);
    Mat4::from_translation(Vec3::new(tx as f32, ty as f32, tz as f32)) * rotation
}

/// Object color as normalized RGBA
pub fn color_rgba(color: Rgb) -> [f32; 4] {
    [
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        1.0,
    ]
}
