// Library exports for testing and potential library use

pub mod commands;
pub mod debug;
pub mod host;
pub mod plugin;
mod traits_impl;

// Re-export the workspace crates under short names
pub use chat_overlay_config as config;
pub use chat_overlay_settings_ui as settings_ui;

pub use commands::CommandManager;
pub use host::PluginHost;
pub use plugin::{PLUGIN_NAME, Plugin};
