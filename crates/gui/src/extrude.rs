use glam::Vec3;
use kurbo::{BezPath, Shape};
use shared::ObjectId;

use crate::state::scene::{CurveData, ObjectData, SceneState, Spline};
use crate::state::selection::SelectionState;
use crate::viewport::mesh::MeshData;

const DEFAULT_COLOR: [f32; 3] = [0.6, 0.6, 0.65];

/// Signed area of a closed outline projected onto the XY plane.
/// Positive for counter-clockwise winding seen from +Z.
pub fn signed_area(points: &[Vec3]) -> f64 {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    let Some(first) = iter.next() else {
        return 0.0;
    };
    path.move_to((first.x as f64, first.y as f64));
    for p in iter {
        path.line_to((p.x as f64, p.y as f64));
    }
    path.close_path();
    path.area()
}

/// Sweep one spline along +Z by `height`, appending to `mesh`.
///
/// Every segment becomes a side quad. Closed splines with at least three points are
/// wound counter-clockwise first, so side normals face outward, and get a bottom cap
/// facing -Z and a top cap facing +Z.
pub fn extrude_spline(mesh: &mut MeshData, spline: &Spline, height: f32) {
    let offset = Vec3::Z * height;
    let closed = spline.cyclic && spline.points.len() >= 3;

    let mut ring = spline.points.clone();
    if closed && signed_area(&ring) < 0.0 {
        ring.reverse();
    }
    let oriented = Spline {
        kind: spline.kind,
        points: ring,
        cyclic: spline.cyclic,
    };

    for (p0, p1) in oriented.segments() {
        mesh.push_quad([p0, p1, p1 + offset, p0 + offset], DEFAULT_COLOR);
    }

    if closed {
        let top: Vec<Vec3> = oriented.points.iter().map(|p| *p + offset).collect();
        let bottom: Vec<Vec3> = oriented.points.iter().rev().copied().collect();
        mesh.push_cap(&bottom, Vec3::NEG_Z, DEFAULT_COLOR);
        mesh.push_cap(&top, Vec3::Z, DEFAULT_COLOR);
    }
}

/// Extruded mesh of every spline in a curve
pub fn extrude_curve(curve: &CurveData, height: f32) -> MeshData {
    let mut mesh = MeshData::default();
    for spline in &curve.splines {
        extrude_spline(&mut mesh, spline, height);
    }
    mesh
}

/// Extrude each selected curve object into a new `<name>_3D` mesh object at the same
/// transform. Other objects are skipped. Returns the created ids; all of them undo as
/// one step.
pub fn extrude_selected(
    scene: &mut SceneState,
    selection: &SelectionState,
    amount: f32,
) -> Vec<ObjectId> {
    let amount = amount.max(0.0);
    let sources: Vec<_> = selection
        .all()
        .iter()
        .filter_map(|id| scene.get_object(id))
        .filter_map(|obj| match &obj.data {
            ObjectData::Curve(curve) => Some((obj.name.clone(), curve.clone(), obj.transform)),
            _ => None,
        })
        .collect();

    if sources.is_empty() {
        tracing::debug!("Extrude: no curve objects selected");
        return Vec::new();
    }

    let created = scene.batch(|scene| {
        sources
            .into_iter()
            .map(|(name, curve, transform)| {
                let mesh = extrude_curve(&curve, amount);
                scene.create_mesh(&format!("{}_3D", name), mesh, transform)
            })
            .collect::<Vec<_>>()
    });
    tracing::info!("Extruded {} object(s) by {}", created.len(), amount);
    created
}
