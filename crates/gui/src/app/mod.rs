//! Main application module

mod keyboard;
mod styles;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{settings_window, status_bar, tools_panel};
use crate::viewport::ViewportPanel;

/// Main application
pub struct DraftApp {
    state: AppState,
    viewport: ViewportPanel,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
    /// Settings as last written to disk
    saved_settings: crate::state::AppSettings,
    /// Scene version drawn last frame
    last_version: u64,
}

impl DraftApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = AppState::default();

        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let last_font_size = state.settings.ui.font_size;
        let saved_settings = state.settings.clone();
        let last_version = state.scene.version();

        Self {
            state,
            viewport: ViewportPanel::new(),
            last_font_size,
            saved_settings,
            last_version,
        }
    }

    fn save_settings_if_changed(&mut self) {
        if self.state.settings != self.saved_settings {
            self.state.settings.save();
            self.saved_settings = self.state.settings.clone();
            tracing::debug!("Settings saved");
        }
    }
}

impl eframe::App for DraftApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        keyboard::handle_keyboard(ctx, &mut self.state, &mut self.viewport);

        // ── Menu bar ──────────────────────────────────────────
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Edit", |ui| {
                    let can_undo = self.state.tool.is_none() && self.state.scene.can_undo();
                    if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                    let can_redo = self.state.tool.is_none() && self.state.scene.can_redo();
                    if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                        self.state.redo();
                        ui.close_menu();
                    }
                });
                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.state.panels.tools, "Tools panel");
                    ui.checkbox(&mut self.state.panels.status_bar, "Status bar");
                    ui.checkbox(&mut self.state.settings.viewport.show_axes, "Axes");
                    if ui.button("Top view").clicked() {
                        self.viewport.camera_mut().set_top_view();
                        ui.close_menu();
                    }
                });
                if ui.button("Settings").clicked() {
                    self.state.show_settings_window = true;
                }
            });
        });

        settings_window::show(ctx, &mut self.state);

        // ── Status bar ───────────────────────────────────────
        if self.state.panels.status_bar {
            egui::TopBottomPanel::bottom("status_bar")
                .exact_height(22.0)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style())
                        .inner_margin(egui::Margin::symmetric(8, 2)),
                )
                .show(ctx, |ui| {
                    status_bar::show(ui, &self.state);
                });
        }

        // ── Left panel: CAD/BIM tools ────────────────────────
        if self.state.panels.tools {
            egui::SidePanel::left("tools_panel")
                .default_width(230.0)
                .width_range(180.0..=400.0)
                .resizable(true)
                .frame(
                    egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::same(6)),
                )
                .show(ctx, |ui| {
                    if let Some(tool) = tools_panel::show(ui, &mut self.state) {
                        self.state.invoke_tool(tool, self.viewport.camera_mut());
                    }
                });
        }

        // ── Central panel: drafting viewport ─────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.state);
            });

        // Edits made after the viewport drew (panel buttons) need another frame
        let version = self.state.scene.version();
        if version != self.last_version {
            self.last_version = version;
            ctx.request_repaint();
        }

        self.save_settings_if_changed();
    }
}
