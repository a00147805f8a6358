//! "CAD/BIM Tools" side panel: drawing tools, parameters, layers and extrusion.

use egui::Ui;
use shared::{ParamKind, ToolId};

use super::{layers_panel, objects_panel};
use crate::state::AppState;

const DRAW_TOOLS: [ToolId; 4] = [
    ToolId::DrawLine,
    ToolId::DrawRectangle,
    ToolId::DrawCircle,
    ToolId::DrawPolygon,
];

/// Draw the panel. Returns the tool the user asked to run; the caller invokes it
/// with the viewport camera.
pub fn show(ui: &mut Ui, state: &mut AppState) -> Option<ToolId> {
    let mut requested = None;
    let active = state.tool.as_ref().map(|t| t.tool_id());

    ui.heading("CAD/BIM Tools");
    ui.separator();

    ui.label("Draw");
    for tool in DRAW_TOOLS {
        if tool_button(ui, tool, active) {
            requested = Some(tool);
        }
    }
    ui.horizontal(|ui| {
        ui.label("Sides");
        let (min, max) = int_range(ToolId::DrawPolygon, "sides").unwrap_or((3, 64));
        ui.add(egui::DragValue::new(&mut state.settings.tools.polygon_sides).range(min..=max));
    });

    ui.add_space(6.0);
    ui.label("Annotate");
    if tool_button(ui, ToolId::CreateDimension, active) {
        requested = Some(ToolId::CreateDimension);
    }

    ui.add_space(6.0);
    ui.label("3D");
    ui.horizontal(|ui| {
        ui.label("Amount");
        ui.add(
            egui::DragValue::new(&mut state.settings.tools.extrude_amount)
                .speed(0.05)
                .range(0.0..=f32::MAX),
        );
    });
    let has_selection = state.selection.count() > 0;
    let extrude = ui.add_enabled(has_selection, egui::Button::new(ToolId::Extrude.label()));
    if extrude.clicked() {
        requested = Some(ToolId::Extrude);
    }

    ui.separator();
    layers_panel::show(ui, state);

    ui.separator();
    objects_panel::show(ui, state);

    requested
}

fn tool_button(ui: &mut Ui, tool: ToolId, active: Option<ToolId>) -> bool {
    ui.selectable_label(active == Some(tool), tool.label())
        .on_hover_text(tool.id())
        .clicked()
}

fn int_range(tool: ToolId, name: &str) -> Option<(u32, u32)> {
    match tool.param(name).ok()?.kind {
        ParamKind::Int { min, max, .. } => Some((min as u32, max.unwrap_or(i64::from(u32::MAX)) as u32)),
        ParamKind::Float { .. } => None,
    }
}
