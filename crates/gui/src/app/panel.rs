//! Control panel: cylinder form, link actions and endpoint readout

use eframe::egui;

use shared::{CylinderParams, Rgb};
use tether_gui_lib::session::{InputEvent, Session};
use tether_gui_lib::state::scene::object_display_name;
use tether_gui_lib::state::settings::PrimitiveDefaults;

/// Form values kept between frames
pub struct PanelState {
    height: f64,
    top_radius: f64,
    bottom_radius: f64,
    color: String,
    link_color: String,
}

impl PanelState {
    pub fn new(defaults: &PrimitiveDefaults, link_color: &str) -> Self {
        Self {
            height: defaults.height,
            top_radius: defaults.top_radius,
            bottom_radius: defaults.bottom_radius,
            color: defaults.color.clone(),
            link_color: link_color.to_string(),
        }
    }
}

/// Parse a color field; unreadable text falls back to white
fn parse_color(text: &str) -> Rgb {
    Rgb::parse(text).unwrap_or_else(|| {
        tracing::warn!("Unrecognized color {text:?}, using white");
        Rgb::WHITE
    })
}

fn swatch(ui: &mut egui::Ui, color: Option<Rgb>) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
    let fill = color
        .map(|c| egui::Color32::from_rgb(c.r, c.g, c.b))
        .unwrap_or(egui::Color32::WHITE);
    ui.painter().rect_filled(rect, 2.0, fill);
}

/// Draw the panel. Returns the events requested by the user this frame.
pub fn show(ui: &mut egui::Ui, panel: &mut PanelState, session: &Session) -> Vec<InputEvent> {
    let mut events = Vec::new();
    let state = session.state();

    ui.heading("Cylinder");
    egui::Grid::new("cylinder_form")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Height");
            ui.add(egui::DragValue::new(&mut panel.height).speed(0.05).range(0.01..=100.0));
            ui.end_row();

            ui.label("Top radius");
            ui.add(egui::DragValue::new(&mut panel.top_radius).speed(0.05).range(0.01..=100.0));
            ui.end_row();

            ui.label("Bottom radius");
            ui.add(egui::DragValue::new(&mut panel.bottom_radius).speed(0.05).range(0.01..=100.0));
            ui.end_row();

            ui.label("Color");
            ui.horizontal(|ui| {
                swatch(ui, Rgb::parse(&panel.color));
                ui.add(egui::TextEdit::singleline(&mut panel.color).desired_width(80.0));
            });
            ui.end_row();
        });

    let full = state.scene.is_full();
    if ui
        .add_enabled(!full, egui::Button::new("Add"))
        .on_disabled_hover_text("The scene holds two objects")
        .clicked()
    {
        events.push(InputEvent::AddPrimitive {
            params: CylinderParams::new(panel.height, panel.top_radius, panel.bottom_radius),
            color: parse_color(&panel.color),
        });
    }

    ui.separator();
    ui.heading("Objects");
    if state.scene.is_empty() {
        ui.weak("None yet");
    }
    for object in state.scene.objects() {
        let selected = state.selection.is_selected(&object.id);
        let label = object_display_name(object);
        if selected {
            ui.strong(label);
        } else {
            ui.label(label);
        }
    }

    ui.separator();
    ui.heading("Link");
    ui.horizontal(|ui| {
        ui.label("Thread color");
        swatch(ui, Rgb::parse(&panel.link_color));
        let edit = ui.add(egui::TextEdit::singleline(&mut panel.link_color).desired_width(80.0));
        if edit.lost_focus() {
            events.push(InputEvent::SetLinkColor(parse_color(&panel.link_color)));
        }
    });

    if ui
        .add_enabled(full, egui::Button::new("Connect"))
        .on_disabled_hover_text("Add two objects first")
        .clicked()
    {
        events.push(InputEvent::SetLinkColor(parse_color(&panel.link_color)));
        events.push(InputEvent::Connect);
    }

    if let Some((start, end)) = state.endpoint_labels() {
        egui::Grid::new("endpoints").num_columns(2).show(ui, |ui| {
            ui.label("Start");
            ui.monospace(start);
            ui.end_row();
            ui.label("End");
            ui.monospace(end);
            ui.end_row();
        });
    }

    ui.separator();
    ui.weak("Drag objects with the left button. Arrow keys rotate the last one dragged. Alt+drag or middle drag orbits.");

    events
}
