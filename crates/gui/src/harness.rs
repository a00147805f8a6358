//! Headless test harness for driving the drafting tools programmatically.
//!
//! Owns a scene, selection, settings and a top-view camera, and feeds synthetic
//! [`InputEvent`]s to the modal tools exactly as the viewport would.

use glam::{Vec2, Vec3};
use shared::{ObjectId, ShapeSpec, ToolId};

use crate::extrude::extrude_selected;
use crate::input::{InputEvent, Key, ModalResult, PointerButton};
use crate::state::scene::{DimensionObjects, SceneObject, SceneState};
use crate::state::selection::SelectionState;
use crate::state::settings::AppSettings;
use crate::state::tool::{ActiveTool, ToolContext};
use crate::validation::MeshValidator;
use crate::viewport::camera::ViewCamera;

/// Headless test harness: manages scene, selection, camera and the active tool
pub struct TestHarness {
    pub scene: SceneState,
    pub selection: SelectionState,
    pub settings: AppSettings,
    pub camera: ViewCamera,
    tool: Option<ActiveTool>,
    last_result: Option<ModalResult>,
}

impl TestHarness {
    /// Create a new empty harness with default settings and an 800x600 top view.
    pub fn new() -> Self {
        let mut camera = ViewCamera::new(Vec2::new(800.0, 600.0));
        camera.set_top_view();
        Self {
            scene: SceneState::default(),
            selection: SelectionState::default(),
            settings: AppSettings::default(),
            camera,
            tool: None,
            last_result: None,
        }
    }

    // ── Direct scene manipulation ─────────────────────────────

    /// Draw a shape between two world points (one undo step)
    pub fn draw(&mut self, spec: ShapeSpec, from: Vec3, to: Vec3) -> ObjectId {
        self.scene.add_shape(spec, from, to)
    }

    /// Create a dimension between two world points (one undo step)
    pub fn dimension(&mut self, from: Vec3, to: Vec3) -> DimensionObjects {
        self.scene.add_dimension(from, to, &self.settings.dimension)
    }

    pub fn add_layer(&mut self) -> usize {
        self.scene.add_layer()
    }

    pub fn remove_layer(&mut self, index: usize) -> bool {
        self.scene.remove_layer(index).is_some()
    }

    pub fn layer_names(&self) -> Vec<String> {
        self.scene.layers().iter().map(|l| l.name.clone()).collect()
    }

    /// Extrude the selection by `amount` (or the configured default)
    pub fn extrude(&mut self, amount: Option<f32>) -> Vec<ObjectId> {
        let amount = amount.unwrap_or(self.settings.tools.extrude_amount);
        extrude_selected(&mut self.scene, &self.selection, amount)
    }

    /// Undo the last operation
    pub fn undo(&mut self) -> bool {
        if self.scene.can_undo() && !self.scene.in_gesture() {
            self.scene.undo();
            self.prune_selection();
            true
        } else {
            false
        }
    }

    /// Redo the last undone operation
    pub fn redo(&mut self) -> bool {
        if self.scene.can_redo() && !self.scene.in_gesture() {
            self.scene.redo();
            self.prune_selection();
            true
        } else {
            false
        }
    }

    /// Clear the entire scene
    pub fn clear(&mut self) {
        self.scene.clear();
        self.selection.clear();
    }

    // ── Selection ─────────────────────────────────────────────

    pub fn select(&mut self, id: &str) {
        self.selection.select(id.to_string());
    }

    pub fn select_many(&mut self, ids: &[ObjectId]) {
        self.selection.select_many(ids.iter().cloned());
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn prune_selection(&mut self) {
        let scene = &self.scene;
        self.selection
            .retain_existing(|id| scene.get_object(id).is_some());
    }

    // ── Modal tools ───────────────────────────────────────────

    /// Start a modal tool; returns false for tools that are not modal
    pub fn invoke_tool(&mut self, tool: ToolId) -> bool {
        self.cancel_tool();
        let Some(mut active) = ActiveTool::for_tool(tool, &self.settings.tools) else {
            return false;
        };
        let mut ctx = ToolContext {
            scene: &mut self.scene,
            camera: &mut self.camera,
            settings: &self.settings,
        };
        self.last_result = Some(active.invoke(&mut ctx));
        self.tool = Some(active);
        true
    }

    /// Start the polygon tool with a specific side count
    pub fn invoke_polygon(&mut self, sides: u32) -> bool {
        self.settings.tools.polygon_sides = sides;
        self.invoke_tool(ToolId::DrawPolygon)
    }

    pub fn active_tool(&self) -> Option<&ActiveTool> {
        self.tool.as_ref()
    }

    /// Result of the last event handled (sticky once the tool is done)
    pub fn last_result(&self) -> Option<ModalResult> {
        self.last_result
    }

    /// Feed one event to the active tool. The tool is dropped once it finishes or
    /// cancels.
    pub fn send(&mut self, event: InputEvent) -> Option<ModalResult> {
        let active = self.tool.as_mut()?;
        let mut ctx = ToolContext {
            scene: &mut self.scene,
            camera: &mut self.camera,
            settings: &self.settings,
        };
        let result = active.handle(&mut ctx, &event);
        if result.is_done() {
            self.tool = None;
        }
        self.last_result = Some(result);
        Some(result)
    }

    fn cancel_tool(&mut self) {
        if let Some(mut active) = self.tool.take() {
            let mut ctx = ToolContext {
                scene: &mut self.scene,
                camera: &mut self.camera,
                settings: &self.settings,
            };
            active.cancel(&mut ctx);
        }
    }

    /// Pixel position of a world point in the harness viewport
    pub fn screen_of(&self, world: Vec3) -> Vec2 {
        self.camera.project(world).unwrap_or(self.camera.viewport * 0.5)
    }

    pub fn move_to(&mut self, world: Vec3) -> Option<ModalResult> {
        self.move_px(self.screen_of(world))
    }

    pub fn move_px(&mut self, pos: Vec2) -> Option<ModalResult> {
        self.send(InputEvent::PointerMoved { pos })
    }

    pub fn press(&mut self, world: Vec3) -> Option<ModalResult> {
        self.press_px(self.screen_of(world))
    }

    pub fn press_px(&mut self, pos: Vec2) -> Option<ModalResult> {
        self.send(InputEvent::ButtonPressed {
            button: PointerButton::Primary,
            pos,
        })
    }

    pub fn release(&mut self, world: Vec3) -> Option<ModalResult> {
        self.release_px(self.screen_of(world))
    }

    pub fn release_px(&mut self, pos: Vec2) -> Option<ModalResult> {
        self.send(InputEvent::ButtonReleased {
            button: PointerButton::Primary,
            pos,
        })
    }

    pub fn right_click(&mut self) -> Option<ModalResult> {
        let pos = self.camera.viewport * 0.5;
        self.send(InputEvent::ButtonPressed {
            button: PointerButton::Secondary,
            pos,
        })
    }

    pub fn escape(&mut self) -> Option<ModalResult> {
        self.send(InputEvent::KeyPressed(Key::Escape))
    }

    /// Press at `from`, move through `steps` intermediate samples to `to`, release.
    pub fn drag(&mut self, from: Vec3, to: Vec3, steps: usize) -> Option<ModalResult> {
        self.press(from);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.move_to(from.lerp(to, t));
        }
        self.move_to(to);
        self.release(to)
    }

    /// Run a whole press-drag-release gesture with a drawing tool
    pub fn drag_shape(&mut self, tool: ToolId, from: Vec3, to: Vec3) -> Option<ModalResult> {
        self.invoke_tool(tool);
        self.drag(from, to, 4)
    }

    /// Run a whole two-click dimension gesture
    pub fn click_dimension(&mut self, from: Vec3, to: Vec3) -> Option<ModalResult> {
        self.invoke_tool(ToolId::CreateDimension);
        self.press(from);
        self.release(from);
        self.move_to(to);
        self.press(to)
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn object_count(&self) -> usize {
        self.scene.object_count()
    }

    pub fn object(&self, id: &str) -> Option<&SceneObject> {
        self.scene.get_object(id)
    }

    pub fn object_named(&self, name: &str) -> Option<&SceneObject> {
        self.scene.find_by_name(name)
    }

    /// Object names in insertion order
    pub fn object_names(&self) -> Vec<String> {
        self.scene.scene.objects.iter().map(|o| o.name.clone()).collect()
    }

    /// Most recently created object
    pub fn last_object(&self) -> Option<&SceneObject> {
        self.scene.scene.objects.last()
    }

    /// Create a validator for a mesh object
    pub fn validate_mesh(&self, id: &str) -> Option<MeshValidator<'_>> {
        self.scene
            .get_object(id)
            .and_then(|o| o.as_mesh())
            .map(MeshValidator::new)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
