//! Scene object data blocks

use glam::{Mat4, Quat, Vec3};
use shared::{ObjectId, ObjectKind};

use crate::viewport::mesh::MeshData;

/// Object transform: location, rotation, scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub location: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            location: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_location(location: Vec3) -> Self {
        Self {
            location,
            ..Default::default()
        }
    }

    /// Local-to-parent matrix
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.location)
    }
}

/// Interpolation type of a spline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplineKind {
    Poly,
    Nurbs,
}

/// One spline of a curve data block
#[derive(Debug, Clone, PartialEq)]
pub struct Spline {
    pub kind: SplineKind,
    pub points: Vec<Vec3>,
    /// Closed loop (last point connects back to the first)
    pub cyclic: bool,
}

impl Spline {
    /// Segments between consecutive points, including the closing one for cyclic splines
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        let n = self.points.len();
        let count = match (self.cyclic, n) {
            (_, 0 | 1) => 0,
            (true, 2) => 1,
            (true, _) => n,
            (false, _) => n - 1,
        };
        (0..count).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}

/// Curve data block: ordered splines
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurveData {
    pub splines: Vec<Spline>,
}

impl CurveData {
    /// Single poly spline
    pub fn poly(points: Vec<Vec3>, cyclic: bool) -> Self {
        Self {
            splines: vec![Spline {
                kind: SplineKind::Poly,
                points,
                cyclic,
            }],
        }
    }

    pub fn push_poly(&mut self, points: Vec<Vec3>) {
        self.splines.push(Spline {
            kind: SplineKind::Poly,
            points,
            cyclic: false,
        });
    }

    pub fn point_count(&self) -> usize {
        self.splines.iter().map(|s| s.points.len()).sum()
    }
}

/// Text alignment along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Text data block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextData {
    pub body: String,
    pub align_x: TextAlign,
    pub align_y: TextAlign,
}

/// Data block owned by an object
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectData {
    Curve(CurveData),
    Mesh(MeshData),
    Text(TextData),
}

impl ObjectData {
    pub fn kind(&self) -> ObjectKind {
        match self {
            ObjectData::Curve(_) => ObjectKind::Curve,
            ObjectData::Mesh(_) => ObjectKind::Mesh,
            ObjectData::Text(_) => ObjectKind::Text,
        }
    }
}

/// An entity in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub data: ObjectData,
    pub transform: Transform,
    pub visible: bool,
    pub parent: Option<ObjectId>,
    /// Material slots, by material name
    pub materials: Vec<String>,
}

impl SceneObject {
    /// New visible object with a fresh id at the identity transform
    pub fn new(name: impl Into<String>, data: ObjectData) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            data,
            transform: Transform::default(),
            visible: true,
            parent: None,
            materials: Vec::new(),
        }
    }

    pub fn kind(&self) -> ObjectKind {
        self.data.kind()
    }

    pub fn as_curve(&self) -> Option<&CurveData> {
        match &self.data {
            ObjectData::Curve(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_mesh(&self) -> Option<&MeshData> {
        match &self.data {
            ObjectData::Mesh(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextData> {
        match &self.data {
            ObjectData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Emissive surface material
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub emission_color: [f32; 4],
    pub emission_strength: f32,
}
