pub mod scene;
pub mod selection;
pub mod settings;
pub mod tool;

use shared::ToolId;

pub use scene::{object_display_name, object_icon, short_id, SceneState};
use selection::SelectionState;
pub use settings::{AppSettings, DimensionSettings, SnapSettings, ToolSettings};
use tool::{ActiveTool, ToolContext};

use crate::extrude::extrude_selected;
use crate::input::{InputEvent, ModalResult};
use crate::viewport::camera::ViewCamera;

/// Panel visibility flags
pub struct PanelVisibility {
    pub tools: bool,
    pub status_bar: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            tools: true,
            status_bar: true,
        }
    }
}

/// Combined application state
pub struct AppState {
    pub scene: SceneState,
    pub selection: SelectionState,
    pub settings: AppSettings,
    /// Modal tool receiving viewport input
    pub tool: Option<ActiveTool>,
    pub panels: PanelVisibility,
    /// Show settings window
    pub show_settings_window: bool,
    /// Message shown in the status bar after the last operation
    pub status: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(AppSettings::load())
    }
}

impl AppState {
    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            scene: SceneState::default(),
            selection: SelectionState::default(),
            settings,
            tool: None,
            panels: PanelVisibility::default(),
            show_settings_window: false,
            status: String::new(),
        }
    }

    /// Run a tool. Modal tools become the active tool (cancelling any running one);
    /// the others execute immediately with their current parameters.
    pub fn invoke_tool(&mut self, tool: ToolId, camera: &mut ViewCamera) {
        self.cancel_tool(camera);
        match ActiveTool::for_tool(tool, &self.settings.tools) {
            Some(mut active) => {
                let mut ctx = ToolContext {
                    scene: &mut self.scene,
                    camera,
                    settings: &self.settings,
                };
                active.invoke(&mut ctx);
                tracing::info!("Tool {}", tool.id());
                self.tool = Some(active);
            }
            None => self.run_immediate(tool),
        }
    }

    fn run_immediate(&mut self, tool: ToolId) {
        match tool {
            ToolId::AddLayer => {
                let index = self.scene.add_layer();
                self.status = format!("Added {}", self.scene.layers()[index].name);
            }
            ToolId::RemoveLayer => {
                // Panel rows remove their own index; the bare tool removes the first layer
                if let Some(layer) = self.scene.remove_layer(0) {
                    self.status = format!("Removed {}", layer.name);
                }
            }
            ToolId::Extrude => {
                let created = extrude_selected(
                    &mut self.scene,
                    &self.selection,
                    self.settings.tools.extrude_amount,
                );
                self.status = format!("Extruded {} object(s)", created.len());
                if !created.is_empty() {
                    self.selection.select_many(created);
                }
            }
            other => tracing::warn!("{} is a modal tool", other.id()),
        }
    }

    /// Feed one input event to the active tool; drops the tool once it is done
    pub fn handle_input(&mut self, event: &InputEvent, camera: &mut ViewCamera) -> ModalResult {
        let Some(active) = self.tool.as_mut() else {
            return ModalResult::Cancelled;
        };
        let mut ctx = ToolContext {
            scene: &mut self.scene,
            camera,
            settings: &self.settings,
        };
        let result = active.handle(&mut ctx, event);
        if result.is_done() {
            self.status = match result {
                ModalResult::Finished => format!("{} finished", active.tool_id().label()),
                _ => format!("{} cancelled", active.tool_id().label()),
            };
            self.tool = None;
        }
        result
    }

    /// Cancel the running tool, if any
    pub fn cancel_tool(&mut self, camera: &mut ViewCamera) {
        if let Some(mut active) = self.tool.take() {
            let mut ctx = ToolContext {
                scene: &mut self.scene,
                camera,
                settings: &self.settings,
            };
            active.cancel(&mut ctx);
        }
    }

    pub fn undo(&mut self) {
        if self.tool.is_none() {
            self.scene.undo();
            self.sync_selection();
        }
    }

    pub fn redo(&mut self) {
        if self.tool.is_none() {
            self.scene.redo();
            self.sync_selection();
        }
    }

    /// Apply a finished layer name edit as a single undo step
    pub fn commit_layer_rename(&mut self, index: usize, name: &str) {
        let name = name.trim();
        let Some(old) = self.scene.layers().get(index).map(|l| l.name.clone()) else {
            return;
        };
        if name.is_empty() || name == old {
            return;
        }
        self.scene.rename_layer(index, name);
        self.status = format!("Renamed {} to {}", old, name);
    }

    /// Drop selected ids that no longer exist
    pub fn sync_selection(&mut self) {
        let scene = &self.scene;
        self.selection
            .retain_existing(|id| scene.get_object(id).is_some());
    }
}
