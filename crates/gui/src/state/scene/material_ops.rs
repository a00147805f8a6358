//! Name-keyed material cache

use super::{Material, SceneState};

/// Name of the shared emissive white material
pub const WHITE_MATERIAL: &str = "Draft_White";

impl SceneState {
    /// Get a material by name, creating it with the given emission if absent.
    /// Returns the material name.
    pub fn get_or_create_material(&mut self, name: &str, color: [f32; 4], strength: f32) -> String {
        if self.material(name).is_none() {
            self.scene.materials.push(Material {
                name: name.to_string(),
                emission_color: color,
                emission_strength: strength,
            });
            tracing::debug!("Created material '{}'", name);
            self.version += 1;
        }
        name.to_string()
    }

    /// The shared white emission material (created on first use)
    pub fn white_material(&mut self) -> String {
        self.get_or_create_material(WHITE_MATERIAL, [1.0, 1.0, 1.0, 1.0], 1.0)
    }

    pub fn material(&self, name: &str) -> Option<&Material> {
        self.scene.materials.iter().find(|m| m.name == name)
    }
}
