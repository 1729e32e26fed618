//! Session: owned state, interaction controller and render loop.
//!
//! Hosts feed [`InputEvent`]s between frames. Events are handled to
//! completion before the next frame is rendered, so handlers and frames
//! never overlap. Once disposed, the loop stops and further input is dropped.

use std::time::Duration;

use shared::{CylinderParams, ObjectId, Rgb};

use crate::error::SceneResult;
use crate::interaction::{ArrowKey, DragEvent, InteractionController};
use crate::render::{Clock, DisposeHandle, FrameClock, FrameStatus, RenderLoop, RenderSurface};
use crate::state::{AppSettings, AppState};

/// Input delivered by the host between frames
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Drag(DragEvent),
    Key(ArrowKey),
    Resize { width: u32, height: u32 },
    AddPrimitive { params: CylinderParams, color: Rgb },
    Connect,
    SetLinkColor(Rgb),
    /// Window closing: disposes the session
    Close,
}

pub struct Session {
    state: AppState,
    controller: InteractionController,
    render_loop: RenderLoop,
    dispose: DisposeHandle,
    /// Surface size requested by the last `Resize`, applied on the next frame
    pending_resize: Option<(u32, u32)>,
}

impl Session {
    pub fn new(settings: AppSettings) -> Self {
        Self::with_clock(settings, Box::new(FrameClock::default()))
    }

    pub fn with_clock(settings: AppSettings, clock: Box<dyn Clock>) -> Self {
        let render_loop = RenderLoop::new(clock);
        let dispose = render_loop.dispose_handle();
        Self {
            state: AppState::with_settings(settings),
            controller: InteractionController::default(),
            render_loop,
            dispose,
            pending_resize: None,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Camera access for host navigation (orbit, zoom). Camera moves are
    /// view-only and bypass the event queue.
    pub fn camera_mut(&mut self) -> &mut crate::viewport::camera::ArcBallCamera {
        &mut self.state.camera
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn render_loop(&self) -> &RenderLoop {
        &self.render_loop
    }

    /// Handle that stops the session when disposed
    pub fn dispose_handle(&self) -> DisposeHandle {
        self.dispose.clone()
    }

    pub fn dispose(&self) {
        tracing::info!("Session disposed");
        self.dispose.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.dispose.is_disposed()
    }

    /// Apply one input event. Returns true when scene state changed.
    ///
    /// Errors are logged and swallowed; the loop keeps running.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        if self.is_disposed() {
            tracing::debug!("Session disposed, dropping {event:?}");
            return false;
        }
        match self.apply(event) {
            Ok(changed) => changed,
            Err(e) => {
                tracing::warn!("Input rejected: {e}");
                false
            }
        }
    }

    /// Raw key code input: the arrow codes rotate, anything else is ignored
    pub fn handle_key_code(&mut self, code: u32) -> bool {
        match ArrowKey::from_key_code(code) {
            Some(key) => self.handle_input(InputEvent::Key(key)),
            None => false,
        }
    }

    fn apply(&mut self, event: InputEvent) -> SceneResult<bool> {
        match event {
            InputEvent::Drag(drag) => Ok(self.controller.handle_drag(&mut self.state, drag)),
            InputEvent::Key(key) => Ok(self.controller.handle_key(&mut self.state, key)),
            InputEvent::Resize { width, height } => {
                self.pending_resize = Some((width, height));
                Ok(false)
            }
            InputEvent::AddPrimitive { params, color } => {
                Ok(self.state.add_primitive(params, color)?.is_some())
            }
            InputEvent::Connect => {
                let link = self.state.connect_objects()?;
                tracing::debug!(
                    "Linked {} -> {} ({} samples)",
                    link.start_id(),
                    link.end_id(),
                    link.samples().len()
                );
                Ok(true)
            }
            InputEvent::SetLinkColor(color) => {
                self.state.link.set_color(color);
                Ok(self.state.link.is_active())
            }
            InputEvent::Close => {
                self.dispose();
                Ok(false)
            }
        }
    }

    /// Add a cylinder directly, returning its ID.
    /// None when the scene is full or the session is disposed.
    pub fn add_primitive(&mut self, params: CylinderParams, color: Rgb) -> SceneResult<Option<ObjectId>> {
        if self.is_disposed() {
            return Ok(None);
        }
        self.state.add_primitive(params, color)
    }

    /// Handle all pending events, then render one frame
    pub fn frame(
        &mut self,
        events: impl IntoIterator<Item = InputEvent>,
        surface: &mut dyn RenderSurface,
    ) -> FrameStatus {
        for event in events {
            self.handle_input(event);
        }
        if let Some((width, height)) = self.pending_resize.take() {
            if !self.is_disposed() {
                surface.resize(width, height);
            }
        }
        self.render_loop.tick(&self.state, surface)
    }

    /// Explicit render loop. Pulls events from `pump` before each frame until
    /// the session is disposed. Returns the number of frames rendered.
    pub fn run<F>(&mut self, surface: &mut dyn RenderSurface, mut pump: F) -> u64
    where
        F: FnMut(&AppState) -> Vec<InputEvent>,
    {
        let start = self.render_loop.frame_count();
        loop {
            let events = pump(&self.state);
            if self.frame(events, surface) == FrameStatus::Stopped {
                break;
            }
        }
        let frames = self.render_loop.frame_count() - start;
        tracing::debug!("Render loop stopped after {frames} frames");
        frames
    }

    /// Time since the previous frame
    pub fn last_delta(&self) -> Duration {
        self.render_loop.last_delta()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{ManualClock, RenderScene};
    use crate::viewport::camera::ArcBallCamera;

    #[derive(Default)]
    struct NullSurface {
        frames: usize,
        size: Option<(u32, u32)>,
    }

    impl RenderSurface for NullSurface {
        fn render(&mut self, _scene: &RenderScene, _camera: &ArcBallCamera) {
            self.frames += 1;
        }

        fn resize(&mut self, width: u32, height: u32) {
            self.size = Some((width, height));
        }
    }

    fn session() -> Session {
        Session::with_clock(
            AppSettings::default(),
            Box::new(ManualClock::new(Duration::from_millis(16))),
        )
    }

    fn add_event() -> InputEvent {
        InputEvent::AddPrimitive {
            params: CylinderParams::default(),
            color: Rgb::WHITE,
        }
    }

    #[test]
    fn test_third_add_is_ignored() {
        let mut s = session();
        assert!(s.handle_input(add_event()));
        assert!(s.handle_input(add_event()));
        assert!(!s.handle_input(add_event()));
        assert_eq!(s.state().scene.size(), 2);
    }

    #[test]
    fn test_connect_error_is_swallowed() {
        let mut s = session();
        s.handle_input(add_event());
        assert!(!s.handle_input(InputEvent::Connect));
        assert!(!s.state().link.is_active());
    }

    #[test]
    fn test_bad_dimensions_do_not_add() {
        let mut s = session();
        let changed = s.handle_input(InputEvent::AddPrimitive {
            params: CylinderParams::new(0.0, 0.5, 0.5),
            color: Rgb::WHITE,
        });
        assert!(!changed);
        assert_eq!(s.state().scene.size(), 0);
    }

    #[test]
    fn test_close_disposes_and_drops_input() {
        let mut s = session();
        s.handle_input(InputEvent::Close);
        assert!(s.is_disposed());
        assert!(!s.handle_input(add_event()));
        assert_eq!(s.state().scene.size(), 0);

        let mut surface = NullSurface::default();
        assert_eq!(s.frame(Vec::new(), &mut surface), FrameStatus::Stopped);
        assert_eq!(surface.frames, 0);
    }

    #[test]
    fn test_resize_forwarded_on_frame() {
        let mut s = session();
        let mut surface = NullSurface::default();
        s.frame(vec![InputEvent::Resize { width: 640, height: 480 }], &mut surface);
        assert_eq!(surface.size, Some((640, 480)));
        assert_eq!(surface.frames, 1);
    }

    #[test]
    fn test_run_until_disposed() {
        let mut s = session();
        let handle = s.dispose_handle();
        let mut surface = NullSurface::default();
        let mut calls = 0;
        let frames = s.run(&mut surface, |_| {
            calls += 1;
            if calls == 4 {
                handle.dispose();
            }
            Vec::new()
        });
        assert_eq!(frames, 3);
        assert_eq!(surface.frames, 3);
    }

    #[test]
    fn test_raw_key_codes() {
        let mut s = session();
        s.handle_input(add_event());
        let id = s.state().scene.get(0).unwrap().id.clone();
        s.handle_input(InputEvent::Drag(DragEvent::Start(id.clone())));
        s.handle_input(InputEvent::Drag(DragEvent::End(id.clone())));

        assert!(s.handle_key_code(38));
        assert!(!s.handle_key_code(65));
        let rot = s.state().scene.get_by_id(&id).unwrap().rotation();
        assert_eq!(rot, [0.0, 0.1, 0.0]);
    }

    #[test]
    fn test_set_link_color_before_connect() {
        let mut s = session();
        assert!(!s.handle_input(InputEvent::SetLinkColor(Rgb::new(0, 0, 255))));
        s.handle_input(add_event());
        s.handle_input(add_event());
        assert!(s.handle_input(InputEvent::Connect));
        assert_eq!(s.state().link.active().unwrap().color(), Rgb::new(0, 0, 255));
    }
}
