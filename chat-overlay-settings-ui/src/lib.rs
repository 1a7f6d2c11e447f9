//! Settings UI for the chat-overlay plugin.
//!
//! This crate provides an egui-based settings window for editing the
//! overlay's configuration at runtime. It is decoupled from the plugin host
//! through trait interfaces: the host registers the toggle command through
//! [`CommandRegistrar`] and carries out the side effects of a save through
//! [`HostOps`].

// Trait interfaces for decoupling from the plugin host
mod traits;
pub use traits::*;

mod visibility;
pub use visibility::VisibilityFlag;

// Editable snapshot of the configuration
pub mod draft;
pub use draft::{CommitChanges, SettingsDraft, TabEdit};

// Settings sections
pub mod colours_tab;
pub mod general_tab;
pub mod section;
pub mod tabs_tab;

// SettingsUI struct and impl
mod settings_ui;
pub use settings_ui::{FooterAction, SETTINGS_COMMAND, SettingsUI};

// Re-export types that settings consumers need
pub use chat_overlay_config::{self as config, Config};

/// Side effect requested by a settings save.
///
/// The host processes these after the frame in which the user saved,
/// usually by handing each one to [`HostOps::handle_action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsWindowAction {
    /// Persist the configuration store
    SaveConfig,
    /// Re-run tab filters over all buffered chat lines
    FilterAllTabs,
    /// Font size changed; rebuild the font atlas
    RebuildFonts,
    /// Chat was un-hidden; make the chat window accept input again
    SetChatInteractable(bool),
}
