//! Application style configuration

use eframe::egui;

const FONT_SIZE: f32 = 14.0;

/// Configure the dark theme and text sizes
pub fn configure_styles(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::dark();

    style.visuals.window_corner_radius = egui::CornerRadius::same(6);
    style.visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(3);
    style.visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(3);
    style.visuals.widgets.active.corner_radius = egui::CornerRadius::same(3);

    style.spacing.item_spacing = egui::vec2(6.0, 4.0);
    style.spacing.button_padding = egui::vec2(6.0, 3.0);

    style.visuals.panel_fill = egui::Color32::from_rgb(30, 30, 34);

    for (text_style, scale) in [
        (egui::TextStyle::Body, 1.0),
        (egui::TextStyle::Button, 1.0),
        (egui::TextStyle::Small, 0.85),
        (egui::TextStyle::Heading, 1.3),
    ] {
        style
            .text_styles
            .insert(text_style, egui::FontId::proportional(FONT_SIZE * scale));
    }
    style
        .text_styles
        .insert(egui::TextStyle::Monospace, egui::FontId::monospace(FONT_SIZE * 0.9));

    ctx.set_style(style);
}
