//! Factory functions for creating test scene content.
//!
//! Provides mesh snap targets and curve profiles used by the unit and integration tests.

use glam::Vec3;
use shared::ObjectId;

use crate::state::scene::{CurveData, SceneState, Transform};
use crate::viewport::mesh::{plane, MeshData};

const PLANE_COLOR: [f32; 3] = [0.8, 0.8, 0.8];

// ── Mesh factories ──────────────────────────────────────────────

/// A single-vertex mesh: the simplest possible snap target.
pub fn point_mesh(at: Vec3) -> MeshData {
    let mut mesh = MeshData::default();
    mesh.push_vertex(at, Vec3::Z, PLANE_COLOR);
    mesh
}

/// Add a square plane of edge `size` centered at `center`.
pub fn add_plane(scene: &mut SceneState, name: &str, size: f32, center: Vec3) -> ObjectId {
    scene.create_mesh(
        name,
        plane(size, PLANE_COLOR),
        Transform::from_location(center),
    )
}

/// Scene with one 2x2 plane at the origin; its corners sit at (+-1, +-1, 0).
pub fn plane_scene() -> (SceneState, ObjectId) {
    let mut scene = SceneState::default();
    let id = add_plane(&mut scene, "Plane", 2.0, Vec3::ZERO);
    (scene, id)
}

// ── Curve factories ─────────────────────────────────────────────

/// Closed axis-aligned rectangle profile from `min` to `max` (z = 0).
pub fn rect_profile(min: [f32; 2], max: [f32; 2]) -> CurveData {
    CurveData::poly(
        vec![
            Vec3::new(min[0], min[1], 0.0),
            Vec3::new(max[0], min[1], 0.0),
            Vec3::new(max[0], max[1], 0.0),
            Vec3::new(min[0], max[1], 0.0),
        ],
        true,
    )
}

/// Add a closed rectangle curve object
pub fn add_rect_profile(scene: &mut SceneState, name: &str, min: [f32; 2], max: [f32; 2]) -> ObjectId {
    scene.create_curve(name, rect_profile(min, max), Transform::default())
}

/// L-shaped closed profile (non-convex), wound clockwise
pub fn l_profile_cw() -> CurveData {
    let mut pts = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(2.0, 1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(1.0, 2.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
    ];
    pts.reverse();
    CurveData::poly(pts, true)
}
