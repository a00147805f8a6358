//! Drafting viewport panel drawn with the egui painter

pub use draft_gui_lib::viewport::camera;

use egui::{Color32, Pos2, Stroke, Ui};
use glam::{Mat4, Vec2, Vec3};

use crate::input::{InputEvent, PointerButton};
use crate::state::scene::{ObjectData, SceneObject};
use crate::state::AppState;
use camera::ViewCamera;

/// Pixel radius for click selection of curves and mesh edges
const SELECT_RADIUS_PX: f32 = 6.0;

/// Central viewport: owns the view camera, feeds pointer input to the active tool
/// and draws the scene.
pub struct ViewportPanel {
    camera: ViewCamera,
    last_pointer: Option<Vec2>,
}

impl ViewportPanel {
    pub fn new() -> Self {
        let mut camera = ViewCamera::new(Vec2::new(800.0, 600.0));
        camera.set_top_view();
        Self {
            camera,
            last_pointer: None,
        }
    }

    pub fn camera_mut(&mut self) -> &mut ViewCamera {
        &mut self.camera
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
        self.camera
            .set_viewport(Vec2::new(rect.width(), rect.height()));

        self.handle_navigation(ui, &response);
        if state.tool.is_some() {
            self.feed_tool(ui, &response, rect, state);
        } else {
            self.handle_selection(ui, &response, rect, state);
        }

        if !ui.is_rect_visible(rect) {
            return;
        }
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, rgb(state.settings.viewport.background_color));
        if state.settings.viewport.show_axes {
            self.draw_axes(&painter, rect);
        }
        self.draw_scene(&painter, rect, state);
        self.draw_snap_marker(&painter, rect, state);
    }

    // ── Input ─────────────────────────────────────────────────

    fn handle_navigation(&mut self, ui: &Ui, response: &egui::Response) {
        if response.dragged_by(egui::PointerButton::Middle) {
            let delta = response.drag_delta();
            self.camera.pan(delta.x, delta.y);
        }
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                self.camera.zoom(scroll * 0.01);
            }
        }
    }

    /// Translate this frame's pointer input into tool events
    fn feed_tool(
        &mut self,
        ui: &Ui,
        response: &egui::Response,
        rect: egui::Rect,
        state: &mut AppState,
    ) {
        let (latest, primary_pressed, primary_released, secondary_pressed) = ui.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.button_pressed(egui::PointerButton::Secondary),
            )
        });
        let Some(screen) = latest else {
            return;
        };
        let pos = local(rect, screen);

        let mut events = Vec::new();
        if self.last_pointer != Some(pos) && rect.contains(screen) {
            events.push(InputEvent::PointerMoved { pos });
        }
        if primary_pressed && response.hovered() {
            events.push(InputEvent::ButtonPressed {
                button: PointerButton::Primary,
                pos,
            });
        }
        if primary_released {
            events.push(InputEvent::ButtonReleased {
                button: PointerButton::Primary,
                pos,
            });
        }
        if secondary_pressed && response.hovered() {
            events.push(InputEvent::ButtonPressed {
                button: PointerButton::Secondary,
                pos,
            });
        }
        self.last_pointer = Some(pos);

        for event in events {
            if state.tool.is_none() {
                break;
            }
            state.handle_input(&event, &mut self.camera);
        }
    }

    fn handle_selection(
        &mut self,
        ui: &Ui,
        response: &egui::Response,
        rect: egui::Rect,
        state: &mut AppState,
    ) {
        self.last_pointer = None;
        if !response.clicked_by(egui::PointerButton::Primary) {
            return;
        }
        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };
        let cursor = local(rect, pos);
        let additive = ui.input(|i| i.modifiers.shift);

        let hit = nearest_object(state, &self.camera, cursor);
        match (hit, additive) {
            (Some(id), true) => state.selection.toggle(id),
            (Some(id), false) => {
                state.selection.clear();
                state.selection.select(id);
            }
            (None, false) => state.selection.clear(),
            (None, true) => {}
        }
    }

    // ── Drawing ───────────────────────────────────────────────

    fn draw_axes(&self, painter: &egui::Painter, rect: egui::Rect) {
        let extent = self.camera.distance * 10.0;
        for (axis, color) in [
            (Vec3::X, Color32::from_rgb(170, 60, 60)),
            (Vec3::Y, Color32::from_rgb(60, 150, 60)),
        ] {
            if let (Some(a), Some(b)) = (
                to_screen(&self.camera, rect, -axis * extent),
                to_screen(&self.camera, rect, axis * extent),
            ) {
                painter.line_segment([a, b], Stroke::new(1.0, color));
            }
        }
    }

    fn draw_scene(&self, painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
        let vp = &state.settings.viewport;
        for obj in state.scene.visible_objects() {
            let world = state.scene.world_matrix(&obj.id);
            let selected = state.selection.is_selected(&obj.id);
            let color = match (&obj.data, selected) {
                (_, true) => rgb(vp.selection_color),
                (ObjectData::Mesh(_), false) => rgb(vp.mesh_color),
                _ => rgb(vp.curve_color),
            };
            match &obj.data {
                ObjectData::Text(text) => self.draw_label(painter, rect, &world, &text.body, color),
                _ => {
                    let stroke = Stroke::new(if selected { 2.0 } else { 1.2 }, color);
                    for (a, b) in world_segments(obj, &world) {
                        if let (Some(a), Some(b)) = (
                            to_screen(&self.camera, rect, a),
                            to_screen(&self.camera, rect, b),
                        ) {
                            painter.line_segment([a, b], stroke);
                        }
                    }
                }
            }
        }
    }

    /// Text label centered on the object origin, rotated with its local X axis
    fn draw_label(
        &self,
        painter: &egui::Painter,
        rect: egui::Rect,
        world: &Mat4,
        body: &str,
        color: Color32,
    ) {
        let origin = world.transform_point3(Vec3::ZERO);
        let along = world.transform_point3(Vec3::X);
        let (Some(center), Some(tip)) = (
            to_screen(&self.camera, rect, origin),
            to_screen(&self.camera, rect, along),
        ) else {
            return;
        };
        let axis = tip - center;
        // One local unit is the label height
        let size = axis.length().clamp(8.0, 64.0);
        let mut angle = axis.y.atan2(axis.x);
        if angle.abs() > std::f32::consts::FRAC_PI_2 {
            angle -= std::f32::consts::PI.copysign(angle);
        }

        let galley = painter.layout_no_wrap(body.to_string(), egui::FontId::proportional(size), color);
        let origin = label_origin(center, galley.size(), angle);
        let shape = egui::epaint::TextShape::new(origin, galley, color).with_angle(angle);
        painter.add(shape);
    }

    fn draw_snap_marker(&self, painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
        let Some(picked) = state.tool.as_ref().and_then(|t| t.hover()) else {
            return;
        };
        let Some(pos) = to_screen(&self.camera, rect, picked.point) else {
            return;
        };
        let color = rgb(state.settings.viewport.snap_color);
        if picked.snapped {
            painter.circle_stroke(pos, 6.0, Stroke::new(2.0, color));
        } else {
            let d = 4.0;
            let stroke = Stroke::new(1.0, color);
            painter.line_segment([pos - egui::vec2(d, 0.0), pos + egui::vec2(d, 0.0)], stroke);
            painter.line_segment([pos - egui::vec2(0.0, d), pos + egui::vec2(0.0, d)], stroke);
        }
    }
}

/// Top-left corner that centres a text block of `size` on `center` once it is
/// rotated by `angle` about that corner
fn label_origin(center: Pos2, size: egui::Vec2, angle: f32) -> Pos2 {
    center - egui::emath::Rot2::from_angle(angle) * (size * 0.5)
}

fn rgb(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

/// Viewport-local pixel position (origin top-left of the panel)
fn local(rect: egui::Rect, pos: Pos2) -> Vec2 {
    Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y)
}

/// Project to panel pixels without clipping to the viewport, so segments that leave
/// the panel still draw up to its edge.
fn to_screen(camera: &ViewCamera, rect: egui::Rect, point: Vec3) -> Option<Pos2> {
    let clip = camera.view_projection() * point.extend(1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Pos2::new(
        rect.min.x + (ndc.x + 1.0) * 0.5 * rect.width(),
        rect.min.y + (1.0 - ndc.y) * 0.5 * rect.height(),
    ))
}

/// Line segments of a curve or mesh in world space
fn world_segments(obj: &SceneObject, world: &Mat4) -> Vec<(Vec3, Vec3)> {
    let local: Vec<(Vec3, Vec3)> = match &obj.data {
        ObjectData::Curve(curve) => curve.splines.iter().flat_map(|s| s.segments()).collect(),
        ObjectData::Mesh(mesh) => mesh.edge_segments().collect(),
        ObjectData::Text(_) => Vec::new(),
    };
    local
        .into_iter()
        .map(|(a, b)| (world.transform_point3(a), world.transform_point3(b)))
        .collect()
}

/// Closest curve or mesh object to the cursor within the selection radius
fn nearest_object(state: &AppState, camera: &ViewCamera, cursor: Vec2) -> Option<String> {
    let mut best: Option<(f32, &str)> = None;
    for obj in state.scene.visible_objects() {
        let world = state.scene.world_matrix(&obj.id);
        for (a, b) in world_segments(obj, &world) {
            let (Some(a), Some(b)) = (camera.project(a), camera.project(b)) else {
                continue;
            };
            let d = distance_to_segment(cursor, a, b);
            if d < SELECT_RADIUS_PX && best.map_or(true, |(bd, _)| d < bd) {
                best = Some((d, &obj.id));
            }
        }
    }
    best.map(|(_, id)| id.to_string())
}

fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len2 = ab.length_squared();
    if len2 <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
