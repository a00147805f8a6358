//! Application settings

use serde::{Deserialize, Serialize};

use crate::viewport::picking::SNAP_THRESHOLD_PX;

/// Vertex snapping while picking points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapSettings {
    /// Enable snapping
    pub enabled: bool,
    /// Snap radius in pixels (a vertex must be strictly closer)
    pub threshold_px: f32,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold_px: SNAP_THRESHOLD_PX,
        }
    }
}

/// Default tool parameters shown in the tools panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Side count for the polygon tool (3..=64)
    pub polygon_sides: u32,
    /// Extrusion distance along +Z
    pub extrude_amount: f32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            polygon_sides: 6,
            extrude_amount: 1.0,
        }
    }
}

/// Dimension annotation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionSettings {
    /// Label scale per unit of measured length
    pub text_scale_factor: f32,
    /// Half-length of an end tick per unit of measured length
    pub tick_factor: f32,
}

impl Default for DimensionSettings {
    fn default() -> Self {
        Self {
            text_scale_factor: 0.05,
            tick_factor: 0.05,
        }
    }
}

/// Viewport settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Background color RGB
    pub background_color: [u8; 3],
    /// Curve and label color RGB
    pub curve_color: [u8; 3],
    /// Mesh wireframe color RGB
    pub mesh_color: [u8; 3],
    /// Selection color RGB
    pub selection_color: [u8; 3],
    /// Snap marker color RGB
    pub snap_color: [u8; 3],
    /// Show the drafting-plane axes
    pub show_axes: bool,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            background_color: [30, 30, 35],
            curve_color: [240, 240, 240],
            mesh_color: [150, 150, 165],
            selection_color: [0, 220, 255],
            snap_color: [255, 200, 0],
            show_axes: true,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { font_size: 14.0 }
    }
}

/// All application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub snap: SnapSettings,
    pub tools: ToolSettings,
    pub dimension: DimensionSettings,
    pub viewport: ViewportSettings,
    pub ui: UiSettings,
}

impl AppSettings {
    fn config_path() -> Option<std::path::PathBuf> {
        directories::ProjectDirs::from("com", "cadbim", "draft")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid settings: {}", e))
    }

    /// Load settings from file, or return default if not found or malformed
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let Ok(json) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }

    /// Save settings to file
    pub fn save(&self) {
        let Some(path) = Self::config_path() else {
            return;
        };
        if let Some(dir) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                tracing::warn!("Failed to create config dir: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    tracing::warn!("Failed to save settings: {}", e);
                }
            }
            Err(e) => tracing::warn!("Failed to serialize settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = AppSettings::default();
        assert!(s.snap.enabled);
        assert_eq!(s.snap.threshold_px, 20.0);
        assert_eq!(s.tools.polygon_sides, 6);
        assert_eq!(s.tools.extrude_amount, 1.0);
        assert_eq!(s.dimension.text_scale_factor, 0.05);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = AppSettings::from_json(r#"{"snap": {"enabled": false}}"#).unwrap();
        assert!(!s.snap.enabled);
        assert_eq!(s.snap.threshold_px, 20.0);
        assert_eq!(s.tools, ToolSettings::default());
    }

    #[test]
    fn test_stale_precision_key_ignored() {
        let s = AppSettings::from_json(r#"{"dimension": {"precision": 5, "tick_factor": 0.1}}"#)
            .unwrap();
        assert_eq!(s.dimension.tick_factor, 0.1);
        assert_eq!(s.dimension.text_scale_factor, 0.05);
    }

    #[test]
    fn test_malformed_json() {
        let err = AppSettings::from_json("{not json").unwrap_err();
        assert!(err.starts_with("Invalid settings"));
    }

    #[test]
    fn test_json_roundtrip() {
        let mut s = AppSettings::default();
        s.tools.polygon_sides = 12;
        s.ui.font_size = 16.0;
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(AppSettings::from_json(&json).unwrap(), s);
    }
}
