//! Painter-backed render surface

use egui::{Color32, Painter, Rect, Stroke};
use glam::Vec3;

use tether_gui_lib::build::{build_link_outline, build_object_outline};
use tether_gui_lib::render::{RenderScene, RenderSurface};
use tether_gui_lib::state::settings::AppSettings;
use tether_gui_lib::viewport::camera::ArcBallCamera;

/// Draws the render scene as projected wireframes with an egui painter.
/// Built fresh for every egui frame.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
    settings: &'a AppSettings,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect, settings: &'a AppSettings) -> Self {
        Self {
            painter,
            rect,
            settings,
        }
    }

    fn line(&self, camera: &ArcBallCamera, a: Vec3, b: Vec3, stroke: Stroke) {
        if let (Some(pa), Some(pb)) = (camera.project(a, self.rect), camera.project(b, self.rect)) {
            self.painter.line_segment([pa, pb], stroke);
        }
    }
}

impl RenderSurface for PainterSurface<'_> {
    fn render(&mut self, scene: &RenderScene, camera: &ArcBallCamera) {
        let [r, g, b] = self.settings.viewport.background_color;
        self.painter.rect_filled(self.rect, 0.0, Color32::from_rgb(r, g, b));

        let width = self.settings.viewport.outline_width;
        let [sr, sg, sb] = self.settings.viewport.selection_color;
        let selection = Color32::from_rgb(sr, sg, sb);

        for object in scene.objects() {
            let outline = build_object_outline(
                &object.params,
                &object.transform,
                object.color,
                self.settings.primitive.segments,
            );
            let color = if object.selected {
                selection
            } else {
                Color32::from_rgb(object.color.r, object.color.g, object.color.b)
            };
            for (a, b, _) in outline.segments() {
                self.line(camera, a, b, Stroke::new(width, color));
            }
        }

        if let Some(link) = scene.link() {
            let stroke = Stroke::new(
                self.settings.link.stroke_width,
                Color32::from_rgb(link.color.r, link.color.g, link.color.b),
            );
            for (a, b, _) in build_link_outline(&link.points, link.color).segments() {
                self.line(camera, a, b, stroke);
            }
        }

        draw_axis_labels(self.painter, self.rect, camera);
    }

    fn resize(&mut self, width: u32, height: u32) {
        tracing::debug!("Viewport resized to {width}x{height}");
    }
}

/// Draw axis labels in the viewport
fn draw_axis_labels(painter: &Painter, rect: Rect, camera: &ArcBallCamera) {
    let labels = [
        (Vec3::new(1.6, 0.0, 0.0), "X", Color32::from_rgb(220, 70, 70)),
        (Vec3::new(0.0, 1.6, 0.0), "Y", Color32::from_rgb(70, 200, 70)),
        (Vec3::new(0.0, 0.0, 1.6), "Z", Color32::from_rgb(70, 110, 220)),
    ];

    for (pos, label, color) in labels {
        if let Some(screen) = camera.project(pos, rect) {
            if rect.contains(screen) {
                painter.text(
                    screen,
                    egui::Align2::LEFT_BOTTOM,
                    label,
                    egui::FontId::monospace(12.0),
                    color,
                );
            }
        }
    }
}
