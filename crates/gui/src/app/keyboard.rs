//! Arrow key handling

use eframe::egui;

use tether_gui_lib::interaction::ArrowKey;
use tether_gui_lib::session::InputEvent;

const ARROWS: [(egui::Key, ArrowKey); 4] = [
    (egui::Key::ArrowLeft, ArrowKey::Left),
    (egui::Key::ArrowUp, ArrowKey::Up),
    (egui::Key::ArrowRight, ArrowKey::Right),
    (egui::Key::ArrowDown, ArrowKey::Down),
];

/// One `Key` event per arrow press (key repeat included) this frame
pub fn collect_arrow_keys(ctx: &egui::Context) -> Vec<InputEvent> {
    // Text fields use the arrows for the caret
    if ctx.memory(|m| m.focused().is_some()) {
        return Vec::new();
    }

    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key, pressed: true, ..
                } => ARROWS
                    .iter()
                    .find(|(k, _)| k == key)
                    .map(|(_, arrow)| InputEvent::Key(*arrow)),
                _ => None,
            })
            .collect()
    })
}
