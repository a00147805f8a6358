//! Object CRUD operations

use glam::{Mat4, Vec3};
use shared::{ObjectId, ShapeSpec};

use super::{
    CurveData, ObjectData, SceneObject, SceneState, Spline, SplineKind, Transform, WHITE_MATERIAL,
};
use crate::shape;
use crate::viewport::mesh::MeshData;

impl SceneState {
    /// Name not yet used by any object: `base`, then `base.001`, `base.002`, ...
    pub fn unique_name(&self, base: &str) -> String {
        let taken = |name: &str| self.scene.objects.iter().any(|o| o.name == name);
        if !taken(base) {
            return base.to_string();
        }
        (1..)
            .map(|n| format!("{}.{:03}", base, n))
            .find(|name| !taken(name))
            .unwrap_or_else(|| base.to_string())
    }

    /// Insert an object, renaming it if its name is taken. Returns its id.
    pub fn insert_object(&mut self, mut obj: SceneObject) -> ObjectId {
        self.record_step();
        obj.name = self.unique_name(&obj.name);
        let id = obj.id.clone();
        tracing::debug!("Created {} '{}'", obj.kind().label(), obj.name);
        self.scene.objects.push(obj);
        self.version += 1;
        id
    }

    /// Create a curve object
    pub fn create_curve(&mut self, name: &str, curve: CurveData, transform: Transform) -> ObjectId {
        let mut obj = SceneObject::new(name, ObjectData::Curve(curve));
        obj.transform = transform;
        self.insert_object(obj)
    }

    /// Create a mesh object
    pub fn create_mesh(&mut self, name: &str, mesh: MeshData, transform: Transform) -> ObjectId {
        let mut obj = SceneObject::new(name, ObjectData::Mesh(mesh));
        obj.transform = transform;
        self.insert_object(obj)
    }

    /// Create a curve object from a generated shape outline, with the white material
    pub fn add_shape(&mut self, spec: ShapeSpec, a: Vec3, b: Vec3) -> ObjectId {
        let outline = shape::generate(spec, a, b);
        let kind = match spec {
            ShapeSpec::Circle => SplineKind::Nurbs,
            _ => SplineKind::Poly,
        };
        let curve = CurveData {
            splines: vec![Spline {
                kind,
                points: outline.points,
                cyclic: outline.cyclic,
            }],
        };
        let mut obj = SceneObject::new(spec.object_name(), ObjectData::Curve(curve));
        obj.materials.push(WHITE_MATERIAL.to_string());
        let id = self.insert_object(obj);
        self.white_material();
        id
    }

    /// Remove an object; children are unparented. Returns false if the id is absent.
    pub fn remove_object(&mut self, id: &str) -> bool {
        let Some(pos) = self.scene.objects.iter().position(|o| o.id == id) else {
            return false;
        };
        self.record_step();
        let removed = self.scene.objects.remove(pos);
        for child in self
            .scene
            .objects
            .iter_mut()
            .filter(|o| o.parent.as_deref() == Some(id))
        {
            child.parent = None;
        }
        tracing::debug!("Removed '{}'", removed.name);
        self.version += 1;
        true
    }

    /// Attach `child` under `parent`. Returns false if either id is absent.
    pub fn set_parent(&mut self, child: &str, parent: &str) -> bool {
        if child == parent || self.get_object(parent).is_none() {
            return false;
        }
        if self.get_object(child).is_none() {
            return false;
        }
        self.record_step();
        if let Some(obj) = self.get_object_mut(child) {
            obj.parent = Some(parent.to_string());
        }
        self.version += 1;
        true
    }

    /// Find object by ID
    pub fn get_object(&self, id: &str) -> Option<&SceneObject> {
        self.scene.objects.iter().find(|o| o.id == id)
    }

    /// Find object by ID (mutable)
    pub fn get_object_mut(&mut self, id: &str) -> Option<&mut SceneObject> {
        self.scene.objects.iter_mut().find(|o| o.id == id)
    }

    /// Find object by name
    pub fn find_by_name(&self, name: &str) -> Option<&SceneObject> {
        self.scene.objects.iter().find(|o| o.name == name)
    }

    pub fn object_count(&self) -> usize {
        self.scene.objects.len()
    }

    /// Visible objects in insertion order
    pub fn visible_objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.scene.objects.iter().filter(|o| o.visible)
    }

    /// Visible mesh objects in insertion order (snap candidates)
    pub fn visible_meshes(&self) -> impl Iterator<Item = &SceneObject> {
        self.visible_objects()
            .filter(|o| matches!(o.data, ObjectData::Mesh(_)))
    }

    /// Visible meshes paired with their object-to-world matrix
    pub fn snap_targets(&self) -> impl Iterator<Item = (&SceneObject, Mat4)> + '_ {
        self.visible_meshes()
            .map(move |o| (o, self.world_matrix(&o.id)))
    }

    /// Object-to-world matrix following the parent chain
    pub fn world_matrix(&self, id: &str) -> Mat4 {
        let mut matrix = Mat4::IDENTITY;
        let mut current = self.get_object(id);
        // Bounded walk guards against parent cycles
        for _ in 0..=self.scene.objects.len() {
            let Some(obj) = current else {
                break;
            };
            matrix = obj.transform.matrix() * matrix;
            current = obj.parent.as_deref().and_then(|p| self.get_object(p));
        }
        matrix
    }
}
