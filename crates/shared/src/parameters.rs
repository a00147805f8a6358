//! Invokable tools and their declared parameter schema.

use serde::{Deserialize, Serialize};

/// Errors raised while resolving a tool parameter
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    /// The tool declares no parameter with this name
    NotFound(String),
    /// The parameter exists but has a different type
    InvalidType(String),
}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamError::NotFound(name) => write!(f, "Parameter '{}' not found", name),
            ParamError::InvalidType(msg) => write!(f, "Invalid type: {}", msg),
        }
    }
}

impl std::error::Error for ParamError {}

/// Value domain of a tool parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParamKind {
    Int {
        min: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
        default: i64,
    },
    Float {
        min: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
        default: f64,
    },
}

/// Declared parameter of an invokable tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    pub label: String,
    pub kind: ParamKind,
}

impl ParamSpec {
    fn int(name: &str, label: &str, min: i64, max: Option<i64>, default: i64) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: ParamKind::Int { min, max, default },
        }
    }

    fn float(name: &str, label: &str, min: f64, max: Option<f64>, default: f64) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind: ParamKind::Float { min, max, default },
        }
    }

    /// Clamp an integer into the declared range (default when `None`)
    pub fn resolve_int(&self, value: Option<i64>) -> Result<i64, ParamError> {
        match self.kind {
            ParamKind::Int { min, max, default } => {
                let v = value.unwrap_or(default).max(min);
                Ok(max.map_or(v, |m| v.min(m)))
            }
            ParamKind::Float { .. } => Err(ParamError::InvalidType(format!(
                "'{}' is a float parameter",
                self.name
            ))),
        }
    }

    /// Clamp a float into the declared range (default when `None`)
    pub fn resolve_float(&self, value: Option<f64>) -> Result<f64, ParamError> {
        match self.kind {
            ParamKind::Float { min, max, default } => {
                let v = value.unwrap_or(default).max(min);
                Ok(max.map_or(v, |m| v.min(m)))
            }
            ParamKind::Int { .. } => Err(ParamError::InvalidType(format!(
                "'{}' is an integer parameter",
                self.name
            ))),
        }
    }
}

/// The fixed set of tools exposed to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolId {
    DrawLine,
    DrawRectangle,
    DrawCircle,
    DrawPolygon,
    CreateDimension,
    AddLayer,
    RemoveLayer,
    Extrude,
}

impl ToolId {
    pub const ALL: [ToolId; 8] = [
        ToolId::DrawLine,
        ToolId::DrawRectangle,
        ToolId::DrawCircle,
        ToolId::DrawPolygon,
        ToolId::CreateDimension,
        ToolId::AddLayer,
        ToolId::RemoveLayer,
        ToolId::Extrude,
    ];

    /// Registered identifier, e.g. `draft.draw_line`
    pub fn id(&self) -> &'static str {
        match self {
            ToolId::DrawLine => "draft.draw_line",
            ToolId::DrawRectangle => "draft.draw_rectangle",
            ToolId::DrawCircle => "draft.draw_circle",
            ToolId::DrawPolygon => "draft.draw_polygon",
            ToolId::CreateDimension => "draft.create_dimension",
            ToolId::AddLayer => "draft.add_layer",
            ToolId::RemoveLayer => "draft.remove_layer",
            ToolId::Extrude => "draft.extrude",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToolId::DrawLine => "Draw Line",
            ToolId::DrawRectangle => "Draw Rectangle",
            ToolId::DrawCircle => "Draw Circle",
            ToolId::DrawPolygon => "Draw Polygon",
            ToolId::CreateDimension => "Create Dimension",
            ToolId::AddLayer => "Add Layer",
            ToolId::RemoveLayer => "Remove Layer",
            ToolId::Extrude => "Extrude 2D to 3D",
        }
    }

    /// True for tools that run a modal gesture in the viewport
    pub fn is_modal(&self) -> bool {
        matches!(
            self,
            ToolId::DrawLine
                | ToolId::DrawRectangle
                | ToolId::DrawCircle
                | ToolId::DrawPolygon
                | ToolId::CreateDimension
        )
    }

    /// Declared parameter schema
    pub fn params(&self) -> Vec<ParamSpec> {
        match self {
            ToolId::DrawPolygon => vec![ParamSpec::int("sides", "Sides", 3, Some(64), 6)],
            ToolId::RemoveLayer => vec![ParamSpec::int("layer_index", "Layer Index", 0, None, 0)],
            ToolId::Extrude => vec![ParamSpec::float(
                "extrude_amount",
                "Extrude Amount",
                0.0,
                None,
                1.0,
            )],
            _ => Vec::new(),
        }
    }

    /// Look up a declared parameter by name
    pub fn param(&self, name: &str) -> Result<ParamSpec, ParamError> {
        self.params()
            .into_iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ParamError::NotFound(format!("{}.{}", self.id(), name)))
    }

    pub fn from_id(id: &str) -> Option<ToolId> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}
