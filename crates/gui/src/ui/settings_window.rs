//! Settings window

use crate::state::{AppSettings, AppState};

pub fn show(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.show_settings_window;
    egui::Window::new("Settings")
        .open(&mut open)
        .resizable(true)
        .default_width(320.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                snap_settings(ui, state);
                dimension_settings(ui, state);
                viewport_settings(ui, state);

                ui.heading("Interface");
                ui.horizontal(|ui| {
                    ui.label("Font size");
                    ui.add(egui::Slider::new(&mut state.settings.ui.font_size, 10.0..=24.0));
                });
                ui.add_space(10.0);

                if ui.button("Reset to defaults").clicked() {
                    state.settings = AppSettings::default();
                }
            });
        });
    state.show_settings_window = open;
}

fn snap_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Snapping");
    ui.checkbox(&mut state.settings.snap.enabled, "Snap to vertices");
    ui.horizontal(|ui| {
        ui.label("Radius (px)");
        ui.add(egui::Slider::new(&mut state.settings.snap.threshold_px, 2.0..=60.0));
    });
    ui.add_space(10.0);
}

fn dimension_settings(ui: &mut egui::Ui, state: &mut AppState) {
    let dim = &mut state.settings.dimension;
    ui.heading("Dimensions");
    ui.horizontal(|ui| {
        ui.label("Text scale");
        ui.add(egui::DragValue::new(&mut dim.text_scale_factor).speed(0.005).range(0.0..=1.0));
    });
    ui.horizontal(|ui| {
        ui.label("Tick size");
        ui.add(egui::DragValue::new(&mut dim.tick_factor).speed(0.005).range(0.0..=1.0));
    });
    ui.add_space(10.0);
}

fn viewport_settings(ui: &mut egui::Ui, state: &mut AppState) {
    let vp = &mut state.settings.viewport;
    ui.heading("Viewport");
    ui.checkbox(&mut vp.show_axes, "Show axes");
    for (label, color) in [
        ("Background", &mut vp.background_color),
        ("Curves", &mut vp.curve_color),
        ("Meshes", &mut vp.mesh_color),
        ("Selection", &mut vp.selection_color),
        ("Snap marker", &mut vp.snap_color),
    ] {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.color_edit_button_srgb(color);
        });
    }
    ui.add_space(10.0);
}
