use egui::Ui;

use crate::state::AppState;

/// Layer list with inline rename, visibility toggle and removal
pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.label("Layers");

    let mut remove = None;
    let layers: Vec<_> = state.scene.layers().to_vec();
    for (index, layer) in layers.iter().enumerate() {
        ui.horizontal(|ui| {
            let mut visible = layer.visible;
            if ui.checkbox(&mut visible, "").changed() {
                state.scene.set_layer_visible(index, visible);
            }

            // Edited text lives in temp memory until the field loses focus
            let buffer_id = ui.make_persistent_id(("layer_name", index));
            let mut name = ui
                .data(|d| d.get_temp::<String>(buffer_id))
                .unwrap_or_else(|| layer.name.clone());
            let edit = ui.add(egui::TextEdit::singleline(&mut name).desired_width(110.0));
            if edit.lost_focus() {
                ui.data_mut(|d| d.remove::<String>(buffer_id));
                state.commit_layer_rename(index, &name);
            } else if edit.has_focus() {
                ui.data_mut(|d| d.insert_temp(buffer_id, name));
            }

            if ui.small_button("x").on_hover_text("Remove Layer").clicked() {
                remove = Some(index);
            }
        });
    }

    if layers.is_empty() {
        ui.weak("No layers");
    }

    if let Some(index) = remove {
        if let Some(layer) = state.scene.remove_layer(index) {
            state.status = format!("Removed {}", layer.name);
        }
    }

    if ui.button("Add Layer").clicked() {
        let index = state.scene.add_layer();
        state.status = format!("Added {}", state.scene.layers()[index].name);
    }
}
