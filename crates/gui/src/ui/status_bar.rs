use egui::Ui;

use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.weak(format!("Objects: {}", state.scene.object_count()));
        ui.separator();
        ui.weak(format!("Layers: {}", state.scene.layers().len()));
        ui.separator();

        if let Some(tool) = &state.tool {
            ui.colored_label(egui::Color32::YELLOW, tool.hint());
        } else if !state.status.is_empty() {
            ui.label(&state.status);
        } else {
            let sel = state.selection.count();
            if sel > 0 {
                ui.label(format!("Selected: {sel}"));
            } else {
                ui.weak("Ready");
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(concat!("Draft v", env!("CARGO_PKG_VERSION")));
        });
    });
}
