use glam::{Mat4, Vec2, Vec3};

use super::camera::ViewCamera;
use super::mesh::MeshData;
use crate::state::scene::{ObjectData, SceneObject};
use crate::state::settings::SnapSettings;

/// Default snap radius in pixels
pub const SNAP_THRESHOLD_PX: f32 = 20.0;

/// A ray in world space
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Compute AABB from the mesh positions
    pub fn from_mesh(data: &MeshData) -> Self {
        let mut min = Vec3::splat(f32::MAX);
        let mut max = Vec3::splat(f32::MIN);
        for p in data.positions() {
            min = min.min(p);
            max = max.max(p);
        }
        Self { min, max }
    }

    /// Center of the bounding box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Intersect a ray with the horizontal plane at height `z`.
/// Returns None if the ray is parallel to the plane or the plane lies behind the ray origin.
pub fn ray_plane_z(ray: &Ray, z: f32) -> Option<Vec3> {
    const EPSILON: f32 = 1e-6;

    if ray.direction.z.abs() < EPSILON {
        return None;
    }
    let t = (z - ray.origin.z) / ray.direction.z;
    if t < 0.0 {
        return None;
    }
    Some(ray.origin + ray.direction * t)
}

/// Find the world-space vertex of a mesh object whose projection lies nearest to
/// `cursor`, strictly closer than `threshold_px`.
///
/// Each object comes paired with its object-to-world matrix. Non-mesh objects are
/// skipped, as are vertices that fail to project. Objects are
/// visited in iteration order and vertices in buffer order; on an exact distance tie
/// the first one seen wins.
pub fn find_snap<'a>(
    cursor: Vec2,
    objects: impl IntoIterator<Item = (&'a SceneObject, Mat4)>,
    camera: &ViewCamera,
    threshold_px: f32,
) -> Option<Vec3> {
    let mut best: Option<(f32, Vec3)> = None;

    for (obj, matrix) in objects {
        let ObjectData::Mesh(mesh) = &obj.data else {
            continue;
        };
        for local in mesh.positions() {
            let world = matrix.transform_point3(local);
            let Some(screen) = camera.project(world) else {
                continue;
            };
            let dist = cursor.distance(screen);
            if dist < threshold_px && best.is_none_or(|(d, _)| dist < d) {
                best = Some((dist, world));
            }
        }
    }

    best.map(|(_, p)| p)
}

/// Result of picking a point under the cursor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickedPoint {
    pub point: Vec3,
    pub snapped: bool,
}

/// Converts cursor positions into world anchors on the drafting plane (z = 0),
/// preferring a snapped vertex over the unconstrained intersection.
#[derive(Debug, Clone, Default)]
pub struct PointPicker {
    last_good: Option<Vec3>,
}

impl PointPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pick<'a>(
        &mut self,
        cursor: Vec2,
        objects: impl IntoIterator<Item = (&'a SceneObject, Mat4)>,
        camera: &ViewCamera,
        snap: &SnapSettings,
    ) -> PickedPoint {
        let free = self.plane_point(cursor, camera);

        if snap.enabled {
            if let Some(snapped) = find_snap(cursor, objects, camera, snap.threshold_px) {
                tracing::debug!("Snapped to vertex {:?}", snapped);
                return PickedPoint {
                    point: snapped,
                    snapped: true,
                };
            }
        }

        PickedPoint {
            point: free,
            snapped: false,
        }
    }

    fn plane_point(&mut self, cursor: Vec2, camera: &ViewCamera) -> Vec3 {
        let ray = camera.screen_ray(cursor);
        match ray_plane_z(&ray, 0.0) {
            Some(hit) => {
                self.last_good = Some(hit);
                hit
            }
            None => {
                tracing::warn!("Cursor ray misses the drafting plane, reusing last point");
                self.last_good
                    .unwrap_or(Vec3::new(ray.origin.x, ray.origin.y, 0.0))
            }
        }
    }
}
