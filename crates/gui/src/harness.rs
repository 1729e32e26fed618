//! Headless test harness for driving a session without a window.
//!
//! Wraps a [`Session`] with a manual clock and a recording surface, so tests
//! can add objects, drag, press keys and step frames, then inspect what was
//! submitted for drawing.

use std::time::Duration;

use glam::DVec3;
use shared::{CylinderParams, ObjectId, Rgb, SceneObject};

use crate::build::OutlineCache;
use crate::interaction::{ArrowKey, DragEvent};
use crate::render::{FrameStatus, ManualClock, RenderScene, RenderSurface};
use crate::session::{InputEvent, Session};
use crate::state::{AppSettings, AppState};
use crate::viewport::camera::ArcBallCamera;
use crate::viewport::mesh::LineMeshData;

/// Fixed frame step of the harness clock
pub const FRAME_STEP: Duration = Duration::from_millis(16);

/// What one rendered frame contained
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    /// (id, position) per drawable, in attachment order
    pub objects: Vec<(ObjectId, [f64; 3])>,
    pub link_points: Option<Vec<DVec3>>,
}

/// Surface that remembers every frame it was asked to draw
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub frames: Vec<FrameRecord>,
    pub size: Option<(u32, u32)>,
}

impl RecordingSurface {
    pub fn last(&self) -> Option<&FrameRecord> {
        self.frames.last()
    }
}

impl RenderSurface for RecordingSurface {
    fn render(&mut self, scene: &RenderScene, _camera: &ArcBallCamera) {
        self.frames.push(FrameRecord {
            objects: scene
                .objects()
                .iter()
                .map(|o| (o.id.clone(), o.transform.position))
                .collect(),
            link_points: scene.link().map(|l| l.points.clone()),
        });
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
    }
}

/// Headless session driver
pub struct TestHarness {
    pub session: Session,
    pub surface: RecordingSurface,
    pending: Vec<InputEvent>,
    outlines: OutlineCache,
}

impl TestHarness {
    /// Create a new harness with default settings.
    pub fn new() -> Self {
        Self::with_settings(AppSettings::default())
    }

    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            session: Session::with_clock(settings, Box::new(ManualClock::new(FRAME_STEP))),
            surface: RecordingSurface::default(),
            pending: Vec::new(),
            outlines: OutlineCache::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        self.session.state()
    }

    // ── Scene manipulation ────────────────────────────────────

    /// Add a cylinder immediately and return its ID.
    /// None when the scene is full or the dimensions are rejected.
    pub fn add_cylinder(&mut self, height: f64, top: f64, bottom: f64, color: &str) -> Option<ObjectId> {
        let color = Rgb::parse(color).unwrap_or(Rgb::WHITE);
        self.session
            .add_primitive(CylinderParams::new(height, top, bottom), color)
            .ok()
            .flatten()
    }

    /// Connect the two scene objects. Returns true when a link now exists.
    pub fn connect(&mut self) -> bool {
        self.session.handle_input(InputEvent::Connect)
    }

    /// Drag an object along `path`: start, one move per point, end
    pub fn drag(&mut self, id: &str, path: &[DVec3]) {
        self.session.handle_input(InputEvent::Drag(DragEvent::Start(id.to_string())));
        for point in path {
            self.session
                .handle_input(InputEvent::Drag(DragEvent::Move(id.to_string(), *point)));
        }
        self.session.handle_input(InputEvent::Drag(DragEvent::End(id.to_string())));
    }

    pub fn press(&mut self, key: ArrowKey) -> bool {
        self.session.handle_input(InputEvent::Key(key))
    }

    /// Queue an event for the next frame
    pub fn queue(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    pub fn close(&mut self) {
        self.session.handle_input(InputEvent::Close);
    }

    // ── Frames ────────────────────────────────────────────────

    /// Render one frame, delivering queued events first
    pub fn step(&mut self) -> FrameStatus {
        let events = std::mem::take(&mut self.pending);
        self.session.frame(events, &mut self.surface)
    }

    /// Step `n` frames; returns how many actually rendered
    pub fn step_n(&mut self, n: usize) -> usize {
        (0..n).filter(|_| self.step() == FrameStatus::Rendered).count()
    }

    pub fn frame_count(&self) -> usize {
        self.surface.frames.len()
    }

    pub fn last_frame(&self) -> Option<&FrameRecord> {
        self.surface.last()
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn object(&self, id: &str) -> Option<&SceneObject> {
        self.state().scene.get_by_id(id)
    }

    pub fn position_of(&self, id: &str) -> Option<DVec3> {
        self.object(id).map(|o| DVec3::from_array(o.position()))
    }

    pub fn rotation_of(&self, id: &str) -> Option<[f64; 3]> {
        self.object(id).map(|o| o.rotation())
    }

    pub fn link_samples(&self) -> Option<&[DVec3]> {
        self.state().link.active().map(|l| l.samples())
    }

    /// Rebuild wireframe outlines if the scene changed
    pub fn build(&mut self) -> bool {
        let state = self.session.state();
        self.outlines.update(&state.scene, state.settings.primitive.segments)
    }

    pub fn outline_of(&self, id: &str) -> Option<&LineMeshData> {
        self.outlines.outline(id)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
