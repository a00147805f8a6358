mod app;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state`, `crate::input`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use draft_gui_lib::input;
pub use draft_gui_lib::state;

use app::DraftApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "draft_gui=info,draft_gui_lib=info".into()),
        )
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("CAD/BIM Draft")
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "draft-gui",
        native_options,
        Box::new(|cc| Ok(Box::new(DraftApp::new(cc)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}
