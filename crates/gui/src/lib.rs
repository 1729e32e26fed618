// Library crate: all scene logic, testable without a window.
// The eframe host (app, painter surface) lives in the binary crate.

pub mod build;
pub mod error;
pub mod fixtures;
pub mod harness;
pub mod interaction;
pub mod render;
pub mod session;
pub mod state;
pub mod validation;

/// Camera, picking and drag math shared by the session and the host viewport.
/// The painter-backed surface stays in the binary crate.
pub mod viewport {
    pub mod camera;
    pub mod drag;
    pub mod mesh;
    pub mod picking;
}
