mod app;
mod viewport;

use app::TetherApp;
use tether_gui_lib::state::AppSettings;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tether_gui=info,tether_gui_lib=info".into()),
        )
        .init();

    let settings = AppSettings::load();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Tether")
            .with_inner_size([settings.window.width, settings.window.height])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "tether-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(TetherApp::new(cc, settings)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}
