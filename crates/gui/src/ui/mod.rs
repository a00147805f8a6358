pub mod layers_panel;
pub mod objects_panel;
pub mod settings_window;
pub mod status_bar;
pub mod tools_panel;
