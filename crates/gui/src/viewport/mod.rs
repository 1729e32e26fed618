//! 3D viewport panel: pointer handling and the painter surface

mod painter;

use egui::Ui;

use tether_gui_lib::build::OutlineCache;
use tether_gui_lib::interaction::DragEvent;
use tether_gui_lib::render::FrameStatus;
use tether_gui_lib::session::{InputEvent, Session};
use tether_gui_lib::viewport::drag::PointerDrag;
use painter::PainterSurface;

/// 3D viewport panel
pub struct ViewportPanel {
    outline_cache: OutlineCache,
    pointer_drag: PointerDrag,
    last_size: Option<(u32, u32)>,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            outline_cache: OutlineCache::new(),
            pointer_drag: PointerDrag::default(),
            last_size: None,
        }
    }

    /// Turn pointer input into drag events, then render one session frame
    /// with `events` plus the drag events.
    pub fn show(&mut self, ui: &mut Ui, session: &mut Session, mut events: Vec<InputEvent>) -> FrameStatus {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        let size = (rect.width().max(0.0) as u32, rect.height().max(0.0) as u32);
        if self.last_size != Some(size) {
            self.last_size = Some(size);
            events.push(InputEvent::Resize {
                width: size.0,
                height: size.1,
            });
        }

        // ── Picking bounds ──────────────────────────────────────
        {
            let state = session.state();
            self.outline_cache
                .update(&state.scene, state.settings.primitive.segments);
        }

        // ── Camera controls ─────────────────────────────────────
        let orbiting = response.dragged_by(egui::PointerButton::Middle)
            || (response.dragged_by(egui::PointerButton::Primary)
                && ui.input(|i| i.modifiers.alt)
                && !self.pointer_drag.is_active());
        if orbiting {
            let delta = response.drag_delta();
            session.camera_mut().rotate(delta.x * 0.5, delta.y * 0.5);
        }
        if response.dragged_by(egui::PointerButton::Secondary) {
            let delta = response.drag_delta();
            session.camera_mut().pan(-delta.x * 0.01, delta.y * 0.01);
        }
        let scroll = ui.input(|i| i.smooth_scroll_delta.y);
        if response.hovered() && scroll.abs() > 0.1 {
            session.camera_mut().zoom(scroll * 0.01);
        }

        // ── Object drag ─────────────────────────────────────────
        events.extend(self.handle_object_drag(&response, ui, rect, session).map(InputEvent::Drag));

        let state = session.state();
        let painter = ui.painter_at(rect);
        let settings = state.settings.clone();
        let mut surface = PainterSurface::new(&painter, rect, &settings);
        session.frame(events, &mut surface)
    }

    fn handle_object_drag(
        &mut self,
        response: &egui::Response,
        ui: &Ui,
        rect: egui::Rect,
        session: &Session,
    ) -> Option<DragEvent> {
        let camera = &session.state().camera;
        let pointer = response.interact_pointer_pos().or_else(|| response.hover_pos());

        if self.pointer_drag.is_active() {
            if response.drag_stopped() || !response.dragged_by(egui::PointerButton::Primary) {
                return self.pointer_drag.release();
            }
            let pos = pointer?;
            return self.pointer_drag.motion(&camera.screen_ray(pos, rect));
        }

        if response.drag_started_by(egui::PointerButton::Primary) && !ui.input(|i| i.modifiers.alt) {
            let pos = pointer?;
            return self.pointer_drag.press(
                &camera.screen_ray(pos, rect),
                &session.state().scene,
                self.outline_cache.aabbs(),
                camera.forward(),
            );
        }
        None
    }
}
