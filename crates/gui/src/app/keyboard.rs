//! Keyboard shortcut handling

use eframe::egui;

use crate::input::{InputEvent, Key};
use crate::state::AppState;
use crate::viewport::ViewportPanel;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState, viewport: &mut ViewportPanel) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    let (undo, redo, escape) = ctx.input(|i| {
        let z = i.key_pressed(egui::Key::Z);
        (
            i.modifiers.command && z && !i.modifiers.shift,
            (i.modifiers.command && i.modifiers.shift && z)
                || (i.modifiers.command && i.key_pressed(egui::Key::Y)),
            i.key_pressed(egui::Key::Escape),
        )
    });

    // Ctrl+Z / Ctrl+Shift+Z are ignored while a gesture is running
    if undo {
        state.undo();
    }
    if redo {
        state.redo();
    }
    if escape {
        if state.tool.is_some() {
            state.handle_input(&InputEvent::KeyPressed(Key::Escape), viewport.camera_mut());
        } else {
            state.selection.clear();
        }
    }
}
