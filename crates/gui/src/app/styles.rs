//! Application style configuration

use eframe::egui;

/// Dark drafting theme with the configured font size
pub fn configure_styles(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::dark();

    let radius = egui::CornerRadius::same(2);
    style.visuals.window_corner_radius = egui::CornerRadius::same(4);
    for widget in [
        &mut style.visuals.widgets.noninteractive,
        &mut style.visuals.widgets.inactive,
        &mut style.visuals.widgets.hovered,
        &mut style.visuals.widgets.active,
    ] {
        widget.corner_radius = radius;
    }

    style.spacing.item_spacing = egui::vec2(6.0, 5.0);
    style.spacing.button_padding = egui::vec2(8.0, 3.0);

    style.visuals.panel_fill = egui::Color32::from_rgb(36, 38, 42);
    style.visuals.window_fill = egui::Color32::from_rgb(40, 42, 47);
    style.visuals.selection.bg_fill = egui::Color32::from_rgb(30, 95, 130);

    set_text_sizes(&mut style, font_size);
    ctx.set_style(style);
}

/// Re-apply text sizes after the font size setting changed
pub fn apply_font_size(ctx: &egui::Context, font_size: f32) {
    let mut style = (*ctx.style()).clone();
    set_text_sizes(&mut style, font_size);
    ctx.set_style(style);
}

fn set_text_sizes(style: &mut egui::Style, font_size: f32) {
    use egui::{FontId, TextStyle};
    let sizes = [
        (TextStyle::Body, FontId::proportional(font_size)),
        (TextStyle::Button, FontId::proportional(font_size)),
        (TextStyle::Small, FontId::proportional(font_size * 0.85)),
        (TextStyle::Heading, FontId::proportional(font_size * 1.25)),
        (TextStyle::Monospace, FontId::monospace(font_size)),
    ];
    for (text_style, font) in sizes {
        style.text_styles.insert(text_style, font);
    }
}
