//! JSON command protocol for scripted tool invocation.
//!
//! Each command maps to one tool of the drafting panel and runs against the headless
//! harness. Numeric parameters are clamped to the tool's declared schema.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use shared::{ParamError, ShapeSpec, ToolId};

use crate::harness::TestHarness;
use crate::state::scene::ObjectData;

/// A command a script can execute.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ToolCommand {
    /// Draw a shape between two world points
    DrawShape {
        shape: ShapeSpec,
        from: [f32; 3],
        to: [f32; 3],
    },
    /// Create a linear dimension between two world points
    CreateDimension { from: [f32; 3], to: [f32; 3] },
    /// Append a layer named after the current count
    AddLayer,
    /// Remove the layer at an index (out of range is a no-op)
    RemoveLayer { index: i64 },
    SetLayerVisible { index: usize, visible: bool },
    RenameLayer { index: usize, name: String },
    /// Select objects by IDs.
    Select { ids: Vec<String> },
    ClearSelection,
    /// Extrude selected curves (default amount when omitted)
    Extrude {
        #[serde(default)]
        amount: Option<f64>,
    },
    /// Undo the last operation.
    Undo,
    /// Redo the last undone operation.
    Redo,
    /// Clear the entire scene.
    Clear,
    /// Inspect the scene: objects and layers.
    Inspect,
    /// Invokable tools with their parameter schema
    ListTools,
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

impl From<ParamError> for CommandResponse {
    fn from(e: ParamError) -> Self {
        CommandResponse::err(e.to_string())
    }
}

fn clamp_shape(shape: ShapeSpec) -> Result<ShapeSpec, ParamError> {
    match shape {
        ShapeSpec::Polygon { sides } => {
            let sides = ToolId::DrawPolygon
                .param("sides")?
                .resolve_int(Some(sides as i64))?;
            Ok(ShapeSpec::Polygon {
                sides: sides as u32,
            })
        }
        other => Ok(other),
    }
}

fn inspect(harness: &TestHarness) -> serde_json::Value {
    let objects: Vec<serde_json::Value> = harness
        .scene
        .scene
        .objects
        .iter()
        .map(|obj| {
            let mut entry = serde_json::json!({
                "id": obj.id,
                "name": obj.name,
                "kind": obj.kind(),
                "visible": obj.visible,
                "location": obj.transform.location.to_array(),
                "materials": obj.materials,
            });
            match &obj.data {
                ObjectData::Curve(curve) => {
                    entry["spline_count"] = curve.splines.len().into();
                    entry["point_count"] = curve.point_count().into();
                }
                ObjectData::Mesh(mesh) => {
                    entry["vertex_count"] = mesh.vertex_count().into();
                    entry["triangle_count"] = mesh.triangle_count().into();
                }
                ObjectData::Text(text) => {
                    entry["body"] = text.body.clone().into();
                }
            }
            if let Some(parent) = &obj.parent {
                entry["parent"] = parent.clone().into();
            }
            entry
        })
        .collect();
    serde_json::json!({
        "object_count": objects.len(),
        "objects": objects,
        "layers": harness.scene.layers(),
        "selected": harness.selection.all(),
    })
}

/// Execute a single command on the harness.
pub fn execute_command(harness: &mut TestHarness, cmd: ToolCommand) -> CommandResponse {
    match cmd {
        ToolCommand::DrawShape { shape, from, to } => {
            let shape = match clamp_shape(shape) {
                Ok(s) => s,
                Err(e) => return e.into(),
            };
            let id = harness.draw(shape, Vec3::from(from), Vec3::from(to));
            CommandResponse::ok_with_data(serde_json::json!({ "id": id }))
        }

        ToolCommand::CreateDimension { from, to } => {
            let ids = harness.dimension(Vec3::from(from), Vec3::from(to));
            let label = harness
                .object(&ids.label)
                .and_then(|o| o.as_text())
                .map(|t| t.body.clone())
                .unwrap_or_default();
            CommandResponse::ok_with_data(serde_json::json!({
                "line": ids.line,
                "label": ids.label,
                "text": label,
            }))
        }

        ToolCommand::AddLayer => {
            let index = harness.add_layer();
            CommandResponse::ok_with_data(serde_json::json!({
                "index": index,
                "name": harness.scene.layers()[index].name,
            }))
        }

        ToolCommand::RemoveLayer { index } => {
            let index = match ToolId::RemoveLayer
                .param("layer_index")
                .and_then(|p| p.resolve_int(Some(index)))
            {
                Ok(i) => i as usize,
                Err(e) => return e.into(),
            };
            let removed = harness.scene.remove_layer(index);
            CommandResponse::ok_with_data(serde_json::json!({
                "removed": removed.map(|l| l.name),
            }))
        }

        ToolCommand::SetLayerVisible { index, visible } => {
            if harness.scene.set_layer_visible(index, visible) {
                CommandResponse::ok()
            } else {
                CommandResponse::err(format!("No layer at index {}", index))
            }
        }

        ToolCommand::RenameLayer { index, name } => {
            if harness.scene.rename_layer(index, name) {
                CommandResponse::ok()
            } else {
                CommandResponse::err(format!("No layer at index {}", index))
            }
        }

        ToolCommand::Select { ids } => {
            harness.select_many(&ids);
            CommandResponse::ok_with_data(serde_json::json!({ "selected": harness.selection.all() }))
        }

        ToolCommand::ClearSelection => {
            harness.clear_selection();
            CommandResponse::ok()
        }

        ToolCommand::Extrude { amount } => {
            let amount = match ToolId::Extrude
                .param("extrude_amount")
                .and_then(|p| p.resolve_float(amount))
            {
                Ok(a) => a as f32,
                Err(e) => return e.into(),
            };
            let created = harness.extrude(Some(amount));
            CommandResponse::ok_with_data(serde_json::json!({ "created": created }))
        }

        ToolCommand::Undo => {
            let success = harness.undo();
            CommandResponse::ok_with_data(serde_json::json!({ "undone": success }))
        }

        ToolCommand::Redo => {
            let success = harness.redo();
            CommandResponse::ok_with_data(serde_json::json!({ "redone": success }))
        }

        ToolCommand::Clear => {
            harness.clear();
            CommandResponse::ok()
        }

        ToolCommand::Inspect => CommandResponse::ok_with_data(inspect(harness)),

        ToolCommand::ListTools => {
            let tools: Vec<serde_json::Value> = ToolId::ALL
                .iter()
                .map(|tool| {
                    serde_json::json!({
                        "id": tool.id(),
                        "label": tool.label(),
                        "modal": tool.is_modal(),
                        "params": tool.params(),
                    })
                })
                .collect();
            CommandResponse::ok_with_data(serde_json::json!({ "tools": tools }))
        }
    }
}

/// Parse and execute a single JSON command string.
pub fn execute_json(harness: &mut TestHarness, json: &str) -> Result<CommandResponse, String> {
    let cmd: ToolCommand =
        serde_json::from_str(json).map_err(|e| format!("Invalid command JSON: {e}"))?;
    Ok(execute_command(harness, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch(
    harness: &mut TestHarness,
    json: &str,
) -> Result<Vec<CommandResponse>, String> {
    let cmds: Vec<ToolCommand> =
        serde_json::from_str(json).map_err(|e| format!("Invalid commands JSON: {e}"))?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(harness, cmd))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_serde_undo() {
        let cmd: ToolCommand = serde_json::from_str(r#"{"command": "undo"}"#).unwrap();
        assert!(matches!(cmd, ToolCommand::Undo));
    }

    #[test]
    fn test_command_serde_draw_polygon() {
        let json = r#"{"command": "draw_shape", "shape": {"type": "polygon", "sides": 8}, "from": [0, 0, 0], "to": [1, 0, 0]}"#;
        let cmd: ToolCommand = serde_json::from_str(json).unwrap();
        match cmd {
            ToolCommand::DrawShape { shape, to, .. } => {
                assert_eq!(shape, ShapeSpec::Polygon { sides: 8 });
                assert_eq!(to, [1.0, 0.0, 0.0]);
            }
            _ => panic!("Expected DrawShape"),
        }
    }

    #[test]
    fn test_command_serde_extrude_default() {
        let cmd: ToolCommand = serde_json::from_str(r#"{"command": "extrude"}"#).unwrap();
        assert!(matches!(cmd, ToolCommand::Extrude { amount: None }));
    }

    #[test]
    fn test_execute_draw_rectangle() {
        let mut h = TestHarness::new();
        let json = r#"{"command": "draw_shape", "shape": {"type": "rectangle"}, "from": [0, 0, 0], "to": [2, 1, 0]}"#;
        let resp = execute_json(&mut h, json).unwrap();
        assert!(resp.success);
        let id = resp.data.unwrap()["id"].as_str().unwrap().to_string();
        assert_eq!(h.object(&id).unwrap().name, "Rectangle");
    }

    #[test]
    fn test_polygon_sides_clamped() {
        let mut h = TestHarness::new();
        let json = r#"{"command": "draw_shape", "shape": {"type": "polygon", "sides": 200}, "from": [0, 0, 0], "to": [1, 0, 0]}"#;
        execute_json(&mut h, json).unwrap();
        let curve = h.last_object().unwrap().as_curve().unwrap();
        assert_eq!(curve.splines[0].points.len(), 64);
    }

    #[test]
    fn test_execute_dimension() {
        let mut h = TestHarness::new();
        let json = r#"{"command": "create_dimension", "from": [0, 0, 0], "to": [3, 4, 0]}"#;
        let resp = execute_json(&mut h, json).unwrap();
        assert_eq!(resp.data.unwrap()["text"], "5.00");
        assert_eq!(h.object_count(), 2);
    }

    #[test]
    fn test_remove_layer_out_of_range() {
        let mut h = TestHarness::new();
        h.add_layer();
        let resp = execute_json(&mut h, r#"{"command": "remove_layer", "index": 7}"#).unwrap();
        assert!(resp.success);
        assert!(resp.data.unwrap()["removed"].is_null());
        assert_eq!(h.layer_names(), vec!["Layer 1"]);
    }

    #[test]
    fn test_rename_missing_layer_fails() {
        let mut h = TestHarness::new();
        let resp =
            execute_json(&mut h, r#"{"command": "rename_layer", "index": 0, "name": "A"}"#)
                .unwrap();
        assert!(!resp.success);
        assert!(resp.error.unwrap().contains("No layer"));
    }

    #[test]
    fn test_execute_inspect() {
        let mut h = TestHarness::new();
        h.draw(ShapeSpec::Line, Vec3::ZERO, Vec3::X);
        h.add_layer();
        let resp = execute_json(&mut h, r#"{"command": "inspect"}"#).unwrap();
        let data = resp.data.unwrap();
        assert_eq!(data["object_count"], 1);
        assert_eq!(data["objects"][0]["kind"], "curve");
        assert_eq!(data["objects"][0]["point_count"], 2);
        assert_eq!(data["layers"][0]["name"], "Layer 1");
    }

    #[test]
    fn test_list_tools() {
        let mut h = TestHarness::new();
        let resp = execute_json(&mut h, r#"{"command": "list_tools"}"#).unwrap();
        let data = resp.data.unwrap();
        let tools = data["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 8);
        assert_eq!(tools[3]["id"], "draft.draw_polygon");
        assert_eq!(tools[3]["params"][0]["kind"]["max"], 64);
    }

    #[test]
    fn test_execute_undo_redo() {
        let mut h = TestHarness::new();
        h.draw(ShapeSpec::Circle, Vec3::ZERO, Vec3::X);

        let resp = execute_json(&mut h, r#"{"command": "undo"}"#).unwrap();
        assert_eq!(resp.data.unwrap()["undone"], true);
        assert_eq!(h.object_count(), 0);

        let resp = execute_json(&mut h, r#"{"command": "redo"}"#).unwrap();
        assert_eq!(resp.data.unwrap()["redone"], true);
        assert_eq!(h.object_count(), 1);
    }

    #[test]
    fn test_execute_invalid_json() {
        let mut h = TestHarness::new();
        assert!(execute_json(&mut h, "not valid json").is_err());
        assert!(execute_json(&mut h, r#"{"command": "explode"}"#).is_err());
    }
}
