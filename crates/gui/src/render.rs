//! Render loop: per-frame sync of scene state into drawables.
//!
//! Each tick advances the clock, makes sure every registry object and the
//! active link are attached to the [`RenderScene`], and submits exactly one
//! frame to the surface. State only changes through input; the frame delta is
//! tracked but never applied to objects.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use glam::DVec3;
use shared::{CylinderParams, ObjectId, Rgb, Transform};

use crate::state::AppState;
use crate::viewport::camera::ArcBallCamera;

/// Drawable snapshot of one scene object
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDrawable {
    pub id: ObjectId,
    pub params: CylinderParams,
    pub color: Rgb,
    pub transform: Transform,
    pub selected: bool,
}

/// Drawable snapshot of the link polyline
#[derive(Debug, Clone, PartialEq)]
pub struct LinkDrawable {
    pub points: Vec<DVec3>,
    pub color: Rgb,
}

/// Collection of everything attached for drawing
#[derive(Debug, Default)]
pub struct RenderScene {
    objects: Vec<ObjectDrawable>,
    link: Option<LinkDrawable>,
}

impl RenderScene {
    /// Attach an object, replacing an earlier drawable with the same ID.
    /// Attachment order is kept.
    pub fn attach_object(&mut self, drawable: ObjectDrawable) {
        match self.objects.iter_mut().find(|o| o.id == drawable.id) {
            Some(existing) => *existing = drawable,
            None => self.objects.push(drawable),
        }
    }

    /// Replace the link drawable (None detaches it)
    pub fn set_link(&mut self, link: Option<LinkDrawable>) {
        self.link = link;
    }

    pub fn objects(&self) -> &[ObjectDrawable] {
        &self.objects
    }

    pub fn link(&self) -> Option<&LinkDrawable> {
        self.link.as_ref()
    }

    pub fn object(&self, id: &str) -> Option<&ObjectDrawable> {
        self.objects.iter().find(|o| o.id == id)
    }
}

/// Drawing backend: one synchronous draw per frame
pub trait RenderSurface {
    fn render(&mut self, scene: &RenderScene, camera: &ArcBallCamera);

    fn resize(&mut self, _width: u32, _height: u32) {}
}

/// Monotonic time source for the render loop
pub trait Clock {
    /// Time since the previous call (zero on the first call)
    fn delta(&mut self) -> Duration;
}

/// Wall-clock frame timer
#[derive(Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl Clock for FrameClock {
    fn delta(&mut self) -> Duration {
        let now = Instant::now();
        let delta = self
            .last
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        self.last = Some(now);
        delta
    }
}

/// Clock advancing by a fixed step per call, for deterministic runs
pub struct ManualClock {
    step: Duration,
}

impl ManualClock {
    pub fn new(step: Duration) -> Self {
        Self { step }
    }
}

impl Clock for ManualClock {
    fn delta(&mut self) -> Duration {
        self.step
    }
}

/// Shared "disposed" flag. Cloned into the host so it can stop the loop.
#[derive(Clone, Default, Debug)]
pub struct DisposeHandle(Rc<Cell<bool>>);

impl DisposeHandle {
    pub fn dispose(&self) {
        self.0.set(true);
    }

    pub fn is_disposed(&self) -> bool {
        self.0.get()
    }
}

/// Outcome of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Rendered,
    Stopped,
}

pub struct RenderLoop {
    clock: Box<dyn Clock>,
    scene: RenderScene,
    disposed: DisposeHandle,
    frames: u64,
    last_delta: Duration,
    elapsed: Duration,
}

impl RenderLoop {
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            scene: RenderScene::default(),
            disposed: DisposeHandle::default(),
            frames: 0,
            last_delta: Duration::ZERO,
            elapsed: Duration::ZERO,
        }
    }

    pub fn dispose_handle(&self) -> DisposeHandle {
        self.disposed.clone()
    }

    /// Run one frame, unless disposed
    pub fn tick(&mut self, state: &AppState, surface: &mut dyn RenderSurface) -> FrameStatus {
        if self.disposed.is_disposed() {
            return FrameStatus::Stopped;
        }

        self.last_delta = self.clock.delta();
        self.elapsed += self.last_delta;

        self.sync(state);
        surface.render(&self.scene, &state.camera);
        self.frames += 1;

        tracing::trace!("Frame {} ({:?})", self.frames, self.last_delta);
        FrameStatus::Rendered
    }

    fn sync(&mut self, state: &AppState) {
        for object in state.scene.objects() {
            self.scene.attach_object(ObjectDrawable {
                id: object.id.clone(),
                params: object.params,
                color: object.color,
                transform: object.transform.clone(),
                selected: state.selection.is_selected(&object.id),
            });
        }

        self.scene.set_link(state.link.active().map(|link| LinkDrawable {
            points: link.samples().to_vec(),
            color: link.color(),
        }));
    }

    pub fn scene(&self) -> &RenderScene {
        &self.scene
    }

    /// Frames rendered so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn last_delta(&self) -> Duration {
        self.last_delta
    }

    /// Sum of all frame deltas
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::two_cylinder_state;

    #[derive(Default)]
    struct CountingSurface {
        frames: usize,
        last_objects: usize,
        last_link: bool,
    }

    impl RenderSurface for CountingSurface {
        fn render(&mut self, scene: &RenderScene, _camera: &ArcBallCamera) {
            self.frames += 1;
            self.last_objects = scene.objects().len();
            self.last_link = scene.link().is_some();
        }
    }

    fn manual_loop() -> RenderLoop {
        RenderLoop::new(Box::new(ManualClock::new(Duration::from_millis(16))))
    }

    #[test]
    fn test_empty_scene_renders() {
        let state = AppState::default();
        let mut rl = manual_loop();
        let mut surface = CountingSurface::default();
        assert_eq!(rl.tick(&state, &mut surface), FrameStatus::Rendered);
        assert_eq!(surface.frames, 1);
        assert_eq!(surface.last_objects, 0);
        assert!(!surface.last_link);
    }

    #[test]
    fn test_attaches_objects_and_link() {
        let (mut state, _, _) = two_cylinder_state();
        let mut rl = manual_loop();
        let mut surface = CountingSurface::default();
        rl.tick(&state, &mut surface);
        assert_eq!(surface.last_objects, 2);
        assert!(!surface.last_link);

        state.connect_objects().unwrap();
        rl.tick(&state, &mut surface);
        assert!(surface.last_link);
        assert_eq!(rl.scene().link().unwrap().points.len(), 51);
    }

    #[test]
    fn test_attach_is_idempotent() {
        let (state, _, _) = two_cylinder_state();
        let mut rl = manual_loop();
        let mut surface = CountingSurface::default();
        for _ in 0..5 {
            rl.tick(&state, &mut surface);
        }
        assert_eq!(rl.scene().objects().len(), 2);
        assert_eq!(surface.frames, 5);
        assert_eq!(rl.frame_count(), 5);
    }

    #[test]
    fn test_drawables_follow_state() {
        let (mut state, a, _) = two_cylinder_state();
        let mut rl = manual_loop();
        let mut surface = CountingSurface::default();
        rl.tick(&state, &mut surface);

        state.scene.set_position(&a, [1.0, 1.0, 1.0]);
        state.selection.select(a.clone());
        rl.tick(&state, &mut surface);
        let drawable = rl.scene().object(&a).unwrap();
        assert_eq!(drawable.transform.position, [1.0, 1.0, 1.0]);
        assert!(drawable.selected);
    }

    #[test]
    fn test_disposed_loop_stops() {
        let state = AppState::default();
        let mut rl = manual_loop();
        let mut surface = CountingSurface::default();
        rl.tick(&state, &mut surface);
        rl.dispose_handle().dispose();
        assert_eq!(rl.tick(&state, &mut surface), FrameStatus::Stopped);
        assert_eq!(surface.frames, 1);
    }

    #[test]
    fn test_clock_accumulates() {
        let state = AppState::default();
        let mut rl = manual_loop();
        let mut surface = CountingSurface::default();
        for _ in 0..3 {
            rl.tick(&state, &mut surface);
        }
        assert_eq!(rl.last_delta(), Duration::from_millis(16));
        assert_eq!(rl.elapsed(), Duration::from_millis(48));
    }

    #[test]
    fn test_frame_clock_first_delta_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.delta(), Duration::ZERO);
    }
}
