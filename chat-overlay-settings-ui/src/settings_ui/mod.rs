//! SettingsUI struct and implementation.
//!
//! This module contains the settings window manager and all its methods for
//! opening, drawing, saving and discarding the settings window.
//!
//! Sub-modules:
//! - `state`: construction, command registration, snapshot lifecycle, commit
//! - `display`: per-frame egui rendering

mod display;
mod state;

use std::collections::HashSet;

use crate::{SettingsDraft, VisibilityFlag};

/// Text command that toggles the settings window.
pub const SETTINGS_COMMAND: &str = "/chatoverlay";

/// Window control activated this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterAction {
    /// Commit and keep editing
    Save,
    /// Commit, then hide the window
    SaveAndClose,
    /// Hide without committing
    Discard,
    /// The window's own close button
    Close,
}

/// Settings window manager using egui
pub struct SettingsUI {
    /// Window title
    pub title: String,

    /// Whether the settings window should be drawn. Shared with the toggle
    /// command callback.
    visible: VisibilityFlag,

    /// Visibility as of the last drawn frame, for detecting the window
    /// appearing
    was_visible: bool,

    /// Working copy being edited; `None` while the window is hidden
    draft: Option<SettingsDraft>,

    /// Section IDs toggled away from their default open state
    pub collapsed_sections: HashSet<String>,
}
