//! Layer registry operations
//!
//! Layers are advisory bookkeeping: they never change object visibility.

use shared::Layer;

use super::SceneState;

impl SceneState {
    /// Append a layer named `Layer {count + 1}`. Returns its index.
    ///
    /// The name depends only on the current count, so adding after a removal can
    /// repeat an existing name.
    pub fn add_layer(&mut self) -> usize {
        self.record_step();
        let name = format!("Layer {}", self.scene.layers.len() + 1);
        tracing::info!("Added layer '{}'", name);
        self.scene.layers.push(Layer::new(name));
        self.version += 1;
        self.scene.layers.len() - 1
    }

    /// Remove the layer at `index`; out of range is a no-op
    pub fn remove_layer(&mut self, index: usize) -> Option<Layer> {
        if index >= self.scene.layers.len() {
            return None;
        }
        self.record_step();
        let layer = self.scene.layers.remove(index);
        tracing::info!("Removed layer '{}'", layer.name);
        self.version += 1;
        Some(layer)
    }

    /// Rename a layer. Returns false if out of range.
    pub fn rename_layer(&mut self, index: usize, name: impl Into<String>) -> bool {
        let name = name.into();
        match self.scene.layers.get(index) {
            None => false,
            Some(layer) if layer.name == name => true,
            Some(_) => {
                self.record_step();
                self.scene.layers[index].name = name;
                self.version += 1;
                true
            }
        }
    }

    /// Set layer visibility flag. Returns false if out of range.
    pub fn set_layer_visible(&mut self, index: usize, visible: bool) -> bool {
        match self.scene.layers.get(index) {
            None => false,
            Some(layer) if layer.visible == visible => true,
            Some(_) => {
                self.record_step();
                self.scene.layers[index].visible = visible;
                self.version += 1;
                true
            }
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.scene.layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(s: &SceneState) -> Vec<&str> {
        s.layers().iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn test_add_layer_naming() {
        let mut s = SceneState::default();
        assert_eq!(s.add_layer(), 0);
        assert_eq!(s.add_layer(), 1);
        assert_eq!(names(&s), vec!["Layer 1", "Layer 2"]);
        assert!(s.layers().iter().all(|l| l.visible));
    }

    #[test]
    fn test_add_after_remove_repeats_name() {
        let mut s = SceneState::default();
        s.add_layer();
        s.add_layer();
        let removed = s.remove_layer(0).unwrap();
        assert_eq!(removed.name, "Layer 1");
        s.add_layer();
        assert_eq!(names(&s), vec!["Layer 2", "Layer 2"]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut s = SceneState::default();
        s.add_layer();
        let before = s.version();
        assert!(s.remove_layer(5).is_none());
        assert_eq!(s.layers().len(), 1);
        assert_eq!(s.version(), before);
    }

    #[test]
    fn test_rename_and_visibility() {
        let mut s = SceneState::default();
        s.add_layer();
        assert!(s.rename_layer(0, "Walls"));
        assert!(s.set_layer_visible(0, false));
        assert_eq!(s.layers()[0].name, "Walls");
        assert!(!s.layers()[0].visible);
        assert!(!s.rename_layer(3, "Doors"));
        assert!(!s.set_layer_visible(3, true));
    }
}
