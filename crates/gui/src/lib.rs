// Library crate: exposes the headless drafting core for integration tests and scripted use.
// GUI-specific modules (app, ui, viewport panel) remain in the binary crate.

pub mod command;
pub mod dimension;
pub mod extrude;
pub mod fixtures;
pub mod harness;
pub mod input;
pub mod shape;
pub mod state;
pub mod validation;

/// Viewport math shared with the binary: camera, picking and mesh buffers.
/// The egui panel that draws them stays in the binary crate.
pub mod viewport {
    pub mod camera;
    pub mod mesh;
    pub mod picking;
}
