//! Display helper functions for scene objects

use shared::ObjectKind;

use super::SceneObject;

/// Get display name for an object
pub fn object_display_name(obj: &SceneObject) -> String {
    format!("{} ({})", obj.name, short_id(&obj.id))
}

/// Get icon for an object
pub fn object_icon(obj: &SceneObject) -> &'static str {
    match obj.kind() {
        ObjectKind::Curve => "[~]",
        ObjectKind::Mesh => "[M]",
        ObjectKind::Text => "[T]",
    }
}

/// Get shortened ID (first 8 characters)
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
