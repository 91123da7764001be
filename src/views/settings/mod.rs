// Facade module for the settings panel building blocks.
pub mod items;
pub mod render;
pub use render::draw_settings_panel;

/// Key of the Fluent message that names an enum variant in the UI.
pub trait LocalizableName {
    fn loc_key(&self) -> &'static str;
}
