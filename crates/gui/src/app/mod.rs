//! Main application module

mod keyboard;
mod panel;
mod styles;

use eframe::egui;

use tether_gui_lib::render::FrameStatus;
use tether_gui_lib::session::{InputEvent, Session};
use tether_gui_lib::state::AppSettings;

use crate::viewport::ViewportPanel;
use panel::PanelState;

/// Main application
pub struct TetherApp {
    session: Session,
    viewport: ViewportPanel,
    panel: PanelState,
}

impl TetherApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        styles::configure_styles(&cc.egui_ctx);
        let panel = PanelState::new(&settings.primitive, &settings.link.default_color);
        Self {
            session: Session::new(settings),
            viewport: ViewportPanel::new(),
            panel,
        }
    }
}

impl eframe::App for TetherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.session.is_disposed() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        // ── Left panel: controls ─────────────────────────────
        let mut events: Vec<InputEvent> = egui::SidePanel::left("controls")
            .default_width(230.0)
            .resizable(true)
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(8)))
            .show(ctx, |ui| panel::show(ui, &mut self.panel, &self.session))
            .inner;

        events.extend(keyboard::collect_arrow_keys(ctx));

        // ── Central panel: 3D viewport ───────────────────────
        let status = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.viewport.show(ui, &mut self.session, events))
            .inner;

        // Re-arm the loop for the next frame
        if status == FrameStatus::Rendered {
            ctx.request_repaint();
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.session.handle_input(InputEvent::Close);
        self.session.state().settings.save();
    }
}
