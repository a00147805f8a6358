use glam::Vec3;

/// Floats per vertex in [`MeshData::vertices`]
pub const STRIDE: usize = 9;

/// CPU-side mesh data: interleaved [pos.x, pos.y, pos.z, norm.x, norm.y, norm.z, r, g, b]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    /// 9 floats per vertex: position(3) + normal(3) + color(3)
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
    /// Feature edges drawn as wireframe (vertex index pairs)
    pub edges: Vec<[u32; 2]>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / STRIDE
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn position(&self, index: usize) -> Vec3 {
        let base = index * STRIDE;
        Vec3::new(
            self.vertices[base],
            self.vertices[base + 1],
            self.vertices[base + 2],
        )
    }

    /// Vertex positions in local space, in buffer order
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.vertices
            .chunks_exact(STRIDE)
            .map(|v| Vec3::new(v[0], v[1], v[2]))
    }

    /// Append a vertex and return its index
    pub fn push_vertex(&mut self, pos: Vec3, normal: Vec3, color: [f32; 3]) -> u32 {
        let index = self.vertex_count() as u32;
        self.vertices.extend_from_slice(&[
            pos.x, pos.y, pos.z, normal.x, normal.y, normal.z, color[0], color[1], color[2],
        ]);
        index
    }

    /// Append a flat-shaded quad (two triangles) with the given corner order.
    /// The outline of the quad is recorded as feature edges.
    pub fn push_quad(&mut self, corners: [Vec3; 4], color: [f32; 3]) {
        let normal = (corners[1] - corners[0])
            .cross(corners[2] - corners[0])
            .normalize_or_zero();
        let base = self.vertex_count() as u32;
        for c in corners {
            self.push_vertex(c, normal, color);
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        self.edges.extend_from_slice(&[
            [base, base + 1],
            [base + 1, base + 2],
            [base + 2, base + 3],
            [base + 3, base],
        ]);
    }

    /// Append a simple polygon lying parallel to the XY plane, triangulated by ear
    /// clipping. Every triangle is wound so its face normal points along `normal`.
    /// Outline recorded as feature edges.
    pub fn push_cap(&mut self, ring: &[Vec3], normal: Vec3, color: [f32; 3]) {
        if ring.len() < 3 {
            return;
        }
        let coords: Vec<f64> = ring
            .iter()
            .flat_map(|p| [p.x as f64, p.y as f64])
            .collect();
        let triangles = match earcutr::earcut(&coords, &[], 2) {
            Ok(triangles) => triangles,
            Err(e) => {
                tracing::warn!("Cap triangulation failed: {:?}", e);
                return;
            }
        };

        let base = self.vertex_count() as u32;
        for &p in ring {
            self.push_vertex(p, normal, color);
        }
        for tri in triangles.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]];
            let facing = (ring[b] - ring[a]).cross(ring[c] - ring[a]).dot(normal);
            let (b, c) = if facing < 0.0 { (c, b) } else { (b, c) };
            self.indices
                .extend_from_slice(&[base + a as u32, base + b as u32, base + c as u32]);
        }
        let n = ring.len() as u32;
        for i in 0..n {
            self.edges.push([base + i, base + (i + 1) % n]);
        }
    }

    /// Segments of the feature edges in local space
    pub fn edge_segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.edges
            .iter()
            .map(|[a, b]| (self.position(*a as usize), self.position(*b as usize)))
    }
}

/// Flat square in the z = 0 plane, used as a snapping target in tests and the demo scene
pub fn plane(size: f32, color: [f32; 3]) -> MeshData {
    let h = size * 0.5;
    let mut mesh = MeshData::default();
    mesh.push_quad(
        [
            Vec3::new(-h, -h, 0.0),
            Vec3::new(h, -h, 0.0),
            Vec3::new(h, h, 0.0),
            Vec3::new(-h, h, 0.0),
        ],
        color,
    );
    mesh
}
