pub mod link;
pub mod scene;
pub mod selection;
pub mod settings;

use shared::{CylinderParams, ObjectId, Rgb};

use crate::build::create_primitive_rgb;
use crate::error::{SceneError, SceneResult};
use crate::viewport::camera::ArcBallCamera;
pub use link::{LinkSegment, LinkState, LINK_SAMPLE_COUNT};
pub use scene::SceneState;
use selection::SelectionState;
pub use settings::AppSettings;

/// Combined application state.
///
/// The one owned container shared by input handling (`&mut`) and the render
/// tick (`&`); both run on the same thread and never overlap.
pub struct AppState {
    pub scene: SceneState,
    pub selection: SelectionState,
    pub link: LinkState,
    pub camera: ArcBallCamera,
    pub settings: AppSettings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(AppSettings::default())
    }
}

impl AppState {
    pub fn with_settings(settings: AppSettings) -> Self {
        let link_color = Rgb::parse(&settings.link.default_color).unwrap_or(Rgb::RED);
        Self {
            scene: SceneState::default(),
            selection: SelectionState::default(),
            link: LinkState::with_color(link_color),
            camera: ArcBallCamera::from_settings(&settings.camera),
            settings,
        }
    }

    /// Build a cylinder and add it to the scene.
    ///
    /// Returns `Ok(None)` when the scene is already full: that request is
    /// ignored, not an error. Bad dimensions fail before anything changes.
    pub fn add_primitive(
        &mut self,
        params: CylinderParams,
        color: Rgb,
    ) -> SceneResult<Option<ObjectId>> {
        if self.scene.is_full() {
            tracing::debug!("Scene full, ignoring add");
            return Ok(None);
        }
        let mut object = create_primitive_rgb(params, color)?;
        object.name = format!("Cylinder {}", self.scene.size() + 1);
        let id = object.id.clone();
        Ok(self.scene.add(object).then_some(id))
    }

    /// Connect the first and second scene objects (the "Connect" action)
    pub fn connect_objects(&mut self) -> SceneResult<&LinkSegment> {
        let (Some(a), Some(b)) = (self.scene.get(0), self.scene.get(1)) else {
            return Err(SceneError::InvalidOperation(format!(
                "connect needs 2 objects, scene has {}",
                self.scene.size()
            )));
        };
        let (a, b) = (a.id.clone(), b.id.clone());
        self.link.connect(&self.scene, &a, &b)
    }

    /// Endpoint readout as `x, y, z` strings, if a link exists
    pub fn endpoint_labels(&self) -> Option<(String, String)> {
        let link = self.link.active()?;
        Some((
            scene::format_point(link.start_point().to_array()),
            scene::format_point(link.end_point().to_array()),
        ))
    }
}
