//! Host-side state touched by settings side effects.
//!
//! The overlay's chat buffers, font atlas and game window hooks live outside
//! this crate. `PluginHost` records what the settings window asked of them so
//! the owning render loop can act on it at a safe point in the frame.

use std::path::{Path, PathBuf};

/// Pending host work and persistence target.
#[derive(Debug)]
pub struct PluginHost {
    config_path: PathBuf,
    /// Number of completed config saves
    pub saves: usize,
    /// Number of re-filter passes requested
    pub refilters: usize,
    /// Font atlas must be rebuilt before the next frame
    pub fonts_dirty: bool,
    /// Whether the chat window accepts mouse and keyboard input
    pub chat_interactable: bool,
}

impl PluginHost {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            saves: 0,
            refilters: 0,
            fonts_dirty: false,
            chat_interactable: true,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Consume a pending font rebuild request.
    pub fn take_font_rebuild(&mut self) -> bool {
        std::mem::take(&mut self.fonts_dirty)
    }
}
