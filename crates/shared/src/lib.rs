use serde::{Deserialize, Serialize};

pub mod parameters;

pub use parameters::{ParamError, ParamKind, ParamSpec, ToolId};

/// Unique identifier of a scene object
pub type ObjectId = String;

/// Data-block type carried by a scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Curve,
    Mesh,
    Text,
}

impl ObjectKind {
    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::Curve => "Curve",
            ObjectKind::Mesh => "Mesh",
            ObjectKind::Text => "Text",
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_sides() -> u32 {
    6
}

/// Drawing layer entry: advisory bookkeeping, not linked to geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    #[serde(default = "default_true")]
    pub visible: bool,
}

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: true,
        }
    }
}

/// Shape produced by the drawing tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeSpec {
    Line,
    Rectangle,
    Circle,
    Polygon {
        #[serde(default = "default_sides")]
        sides: u32,
    },
}

impl ShapeSpec {
    /// Base name given to objects of this shape
    pub fn object_name(&self) -> &'static str {
        match self {
            ShapeSpec::Line => "Line",
            ShapeSpec::Rectangle => "Rectangle",
            ShapeSpec::Circle => "Circle",
            ShapeSpec::Polygon { .. } => "Polygon",
        }
    }

    /// The invokable tool that draws this shape
    pub fn tool(&self) -> ToolId {
        match self {
            ShapeSpec::Line => ToolId::DrawLine,
            ShapeSpec::Rectangle => ToolId::DrawRectangle,
            ShapeSpec::Circle => ToolId::DrawCircle,
            ShapeSpec::Polygon { .. } => ToolId::DrawPolygon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(val: &T) {
        let json = serde_json::to_string(val).expect("serialize");
        let back: T = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(*val, back);
    }

    #[test]
    fn test_object_kind_serde() {
        let json = serde_json::to_string(&ObjectKind::Curve).unwrap();
        assert_eq!(json, r#""curve""#);
        roundtrip(&ObjectKind::Mesh);
        roundtrip(&ObjectKind::Text);
    }

    #[test]
    fn test_layer_visible_defaults_true() {
        let layer: Layer = serde_json::from_str(r#"{"name": "Walls"}"#).unwrap();
        assert_eq!(layer.name, "Walls");
        assert!(layer.visible);
        roundtrip(&Layer {
            name: "Hidden".into(),
            visible: false,
        });
    }

    #[test]
    fn test_shape_spec_serde() {
        let json = serde_json::to_string(&ShapeSpec::Rectangle).unwrap();
        assert_eq!(json, r#"{"type":"rectangle"}"#);
        roundtrip(&ShapeSpec::Line);
        roundtrip(&ShapeSpec::Polygon { sides: 12 });
    }

    #[test]
    fn test_polygon_sides_default() {
        let spec: ShapeSpec = serde_json::from_str(r#"{"type": "polygon"}"#).unwrap();
        assert_eq!(spec, ShapeSpec::Polygon { sides: 6 });
    }

    #[test]
    fn test_shape_object_names_and_tools() {
        assert_eq!(ShapeSpec::Line.object_name(), "Line");
        assert_eq!(ShapeSpec::Circle.object_name(), "Circle");
        assert_eq!(ShapeSpec::Polygon { sides: 3 }.object_name(), "Polygon");
        assert_eq!(ShapeSpec::Rectangle.tool(), ToolId::DrawRectangle);
        assert_eq!(ShapeSpec::Polygon { sides: 3 }.tool(), ToolId::DrawPolygon);
    }
}
