//! Mesh and curve validation utilities.
//!
//! `MeshValidator` checks mesh data integrity: correct stride, in-range triangle and
//! edge indices, unit normals and bounding-box dimensions. `validate_curve` checks the
//! splines produced by the drawing tools.

use crate::state::scene::CurveData;
use crate::viewport::mesh::{MeshData, STRIDE};
use crate::viewport::picking::Aabb;

/// Validator for `MeshData` integrity checks.
pub struct MeshValidator<'a> {
    mesh: &'a MeshData,
}

impl<'a> MeshValidator<'a> {
    pub fn new(mesh: &'a MeshData) -> Self {
        Self { mesh }
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.vertices.len() / STRIDE
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.indices.len() / 3
    }

    /// Vertex buffer length is a multiple of the stride
    pub fn is_stride_valid(&self) -> bool {
        self.mesh.vertices.len() % STRIDE == 0
    }

    pub fn is_index_stride_valid(&self) -> bool {
        self.mesh.indices.len() % 3 == 0
    }

    /// All triangle indices are within the vertex range
    pub fn are_indices_in_range(&self) -> bool {
        let max_idx = self.vertex_count() as u32;
        self.mesh.indices.iter().all(|&i| i < max_idx)
    }

    /// All feature edge endpoints are within the vertex range
    pub fn are_edges_in_range(&self) -> bool {
        let max_idx = self.vertex_count() as u32;
        self.mesh.edges.iter().flatten().all(|&i| i < max_idx)
    }

    /// Check that all vertex normals have unit length (within epsilon).
    pub fn are_normals_normalized(&self, epsilon: f32) -> bool {
        self.mesh.vertices.chunks_exact(STRIDE).all(|v| {
            let len = (v[3] * v[3] + v[4] * v[4] + v[5] * v[5]).sqrt();
            (len - 1.0).abs() <= epsilon
        })
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_mesh(self.mesh)
    }

    /// Dimensions (width, depth, height) of the bounding box
    pub fn dimensions(&self) -> [f32; 3] {
        self.aabb().size().to_array()
    }

    /// Check that the AABB dimensions are approximately equal to `expected`.
    pub fn assert_dimensions_approx(&self, expected: [f32; 3], tolerance: f32) -> bool {
        self.dimensions()
            .iter()
            .zip(expected)
            .all(|(d, e)| (d - e).abs() < tolerance)
    }

    /// Run all validation checks and return a list of error messages.
    /// An empty list means the mesh is valid.
    pub fn validate_all(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !self.is_stride_valid() {
            errors.push(format!(
                "Vertex buffer length {} is not a multiple of {}",
                self.mesh.vertices.len(),
                STRIDE
            ));
        }

        if !self.is_index_stride_valid() {
            errors.push(format!(
                "Index buffer length {} is not a multiple of 3",
                self.mesh.indices.len()
            ));
        }

        if !self.are_indices_in_range() {
            let max_idx = self.vertex_count() as u32;
            let out_of_range: Vec<_> = self
                .mesh
                .indices
                .iter()
                .filter(|&&i| i >= max_idx)
                .take(5)
                .collect();
            errors.push(format!(
                "Indices out of range (vertex_count={}): {:?}",
                max_idx, out_of_range
            ));
        }

        if !self.are_edges_in_range() {
            errors.push(format!(
                "Edge indices out of range (vertex_count={})",
                self.vertex_count()
            ));
        }

        if self.vertex_count() > 0 && !self.are_normals_normalized(0.1) {
            errors.push("Some normals are not unit-length (epsilon=0.1)".to_string());
        }

        errors
    }
}

/// Check curve splines: every spline has points, closed splines have at least three,
/// and all coordinates are finite.
pub fn validate_curve(curve: &CurveData) -> Vec<String> {
    let mut errors = Vec::new();
    for (i, spline) in curve.splines.iter().enumerate() {
        if spline.points.is_empty() {
            errors.push(format!("Spline {} has no points", i));
        }
        if spline.cyclic && spline.points.len() < 3 {
            errors.push(format!(
                "Cyclic spline {} has {} points",
                i,
                spline.points.len()
            ));
        }
        if spline.points.iter().any(|p| !p.is_finite()) {
            errors.push(format!("Spline {} has non-finite coordinates", i));
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn simple_triangle() -> MeshData {
        let mut mesh = MeshData::default();
        for p in [Vec3::ZERO, Vec3::X, Vec3::Y] {
            mesh.push_vertex(p, Vec3::Z, [0.5; 3]);
        }
        mesh.indices = vec![0, 1, 2];
        mesh.edges = vec![[0, 1], [1, 2], [2, 0]];
        mesh
    }

    #[test]
    fn test_counts() {
        let mesh = simple_triangle();
        let v = MeshValidator::new(&mesh);
        assert_eq!(v.vertex_count(), 3);
        assert_eq!(v.triangle_count(), 1);
    }

    #[test]
    fn test_stride_invalid() {
        let bad = MeshData {
            vertices: vec![0.0; 10],
            ..Default::default()
        };
        let v = MeshValidator::new(&bad);
        assert!(!v.is_stride_valid());
    }

    #[test]
    fn test_indices_out_of_range() {
        let bad = MeshData {
            vertices: vec![0.0; 9],
            indices: vec![0, 1, 2],
            edges: Vec::new(),
        };
        assert!(!MeshValidator::new(&bad).are_indices_in_range());
    }

    #[test]
    fn test_edges_out_of_range() {
        let mut mesh = simple_triangle();
        mesh.edges.push([2, 7]);
        let errors = MeshValidator::new(&mesh).validate_all();
        assert!(errors.iter().any(|e| e.contains("Edge indices")));
    }

    #[test]
    fn test_normals_not_normalized() {
        let mut mesh = MeshData::default();
        mesh.push_vertex(Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0), [0.5; 3]);
        assert!(!MeshValidator::new(&mesh).are_normals_normalized(0.01));
    }

    #[test]
    fn test_dimensions() {
        let mesh = simple_triangle();
        let v = MeshValidator::new(&mesh);
        assert!(v.assert_dimensions_approx([1.0, 1.0, 0.0], 0.01));
        assert!(!v.assert_dimensions_approx([2.0, 1.0, 0.0], 0.01));
    }

    #[test]
    fn test_validate_all_ok() {
        let mesh = simple_triangle();
        let errors = MeshValidator::new(&mesh).validate_all();
        assert!(errors.is_empty(), "Expected no errors, got: {:?}", errors);
    }

    #[test]
    fn test_validate_all_catches_bad_stride() {
        let bad = MeshData {
            vertices: vec![0.0; 10],
            indices: vec![0, 1, 2],
            edges: Vec::new(),
        };
        let errors = MeshValidator::new(&bad).validate_all();
        assert!(errors.iter().any(|e| e.contains("multiple of 9")));
    }

    #[test]
    fn test_validate_curve() {
        let ok = CurveData::poly(vec![Vec3::ZERO, Vec3::X, Vec3::Y], true);
        assert!(validate_curve(&ok).is_empty());

        let short = CurveData::poly(vec![Vec3::ZERO, Vec3::X], true);
        assert_eq!(validate_curve(&short).len(), 1);

        let bad = CurveData::poly(vec![Vec3::new(f32::NAN, 0.0, 0.0)], false);
        assert!(validate_curve(&bad)[0].contains("non-finite"));
    }
}
