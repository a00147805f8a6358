//! Scene state management
//!
//! Scene objects, the name-keyed material cache, the layer registry and undo/redo history.

mod annotation_ops;
mod data;
mod display;
mod history;
mod layer_ops;
mod material_ops;
mod object_ops;

pub use annotation_ops::DimensionObjects;
pub use data::{
    CurveData, Material, ObjectData, SceneObject, Spline, SplineKind, TextAlign, TextData,
    Transform,
};
pub use display::{object_display_name, object_icon, short_id};
pub use material_ops::WHITE_MATERIAL;

use shared::Layer;

/// Maximum number of undo snapshots kept
const UNDO_LIMIT: usize = 100;

/// Live scene content
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Objects in insertion order
    pub objects: Vec<SceneObject>,
    /// Materials, unique by name
    pub materials: Vec<Material>,
    /// Ordered layer registry
    pub layers: Vec<Layer>,
}

/// Scene with undo/redo history
#[derive(Default)]
pub struct SceneState {
    /// Current scene
    pub scene: Scene,
    /// Undo stack - previous states
    pub(crate) undo_stack: Vec<Scene>,
    /// Redo stack - undone states
    pub(crate) redo_stack: Vec<Scene>,
    /// Snapshot taken when a modal gesture began
    pub(crate) gesture_snapshot: Option<Scene>,
    /// Monotonically increasing version counter for change detection
    pub(crate) version: u64,
}

impl SceneState {
    /// Current scene version (increments on every mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Save current state to undo stack
    pub(crate) fn save_undo(&mut self) {
        self.undo_stack.push(self.scene.clone());
        if self.undo_stack.len() > UNDO_LIMIT {
            self.undo_stack.remove(0);
        }
    }

    /// Remove everything
    pub fn clear(&mut self) {
        self.save_undo();
        self.redo_stack.clear();
        self.scene = Scene::default();
        self.version += 1;
    }
}
