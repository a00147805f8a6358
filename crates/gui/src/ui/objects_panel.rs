use egui::Ui;

use crate::state::{object_display_name, object_icon, AppState};

/// Clickable object list; Ctrl/Shift-click extends the selection
pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.label(format!("Objects ({})", state.scene.object_count()));

    let mut clicked = None;
    egui::ScrollArea::vertical()
        .id_salt("objects_scroll")
        .max_height(220.0)
        .show(ui, |ui| {
            for obj in &state.scene.scene.objects {
                // Dimension labels are selected through their line
                if obj.parent.is_some() {
                    continue;
                }
                let text = format!("{} {}", object_icon(obj), object_display_name(obj));
                let selected = state.selection.is_selected(&obj.id);
                if ui.selectable_label(selected, text).clicked() {
                    clicked = Some(obj.id.clone());
                }
            }
        });

    if let Some(id) = clicked {
        let additive = ui.input(|i| i.modifiers.shift || i.modifiers.command);
        if additive {
            state.selection.toggle(id);
        } else {
            state.selection.clear();
            state.selection.select(id);
        }
    }
}
