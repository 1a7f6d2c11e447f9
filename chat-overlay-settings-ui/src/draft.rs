//! Editable snapshot of the configuration.
//!
//! The settings window never edits [`Config`] directly. It works on a
//! [`SettingsDraft`] cloned from the store when the window appears, and
//! copies the draft back only when the user saves. Closing the window
//! without saving drops the draft and leaves the store untouched.

use chat_overlay_config::config::effective_colour;
use chat_overlay_config::{ChatType, Config, Tab, rgb_to_rgba};
use std::collections::HashMap;

/// Working copy of every field the settings window edits.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDraft {
    pub hide_chat: bool,
    pub native_item_tooltips: bool,
    pub sidebar_tab_view: bool,
    pub font_size: f32,
    pub chat_colours: HashMap<ChatType, u32>,
    pub tabs: Vec<Tab>,
}

/// Structural edit requested while drawing the tab list.
///
/// Recorded inside the tab loop and applied after it, so the list is never
/// mutated mid-iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEdit {
    Delete(usize),
    MoveUp(usize),
    MoveDown(usize),
}

/// Which commit-sensitive fields a save changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommitChanges {
    pub hide_chat_changed: bool,
    pub font_size_changed: bool,
}

impl SettingsDraft {
    /// Snapshot the editable fields of `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            hide_chat: config.hide_chat,
            native_item_tooltips: config.native_item_tooltips,
            sidebar_tab_view: config.sidebar_tab_view,
            font_size: config.font_size,
            chat_colours: config.chat_colours.clone(),
            tabs: config.tabs.clone(),
        }
    }

    /// Whether saving would change anything in `config`.
    pub fn differs_from(&self, config: &Config) -> bool {
        self.hide_chat != config.hide_chat
            || self.native_item_tooltips != config.native_item_tooltips
            || self.sidebar_tab_view != config.sidebar_tab_view
            || (self.font_size - config.font_size).abs() > f32::EPSILON
            || self.chat_colours != config.chat_colours
            || self.tabs != config.tabs
    }

    /// Move every field into `config`, reporting which of the fields with
    /// save-time side effects changed.
    pub fn apply_to(self, config: &mut Config) -> CommitChanges {
        let changes = CommitChanges {
            hide_chat_changed: self.hide_chat != config.hide_chat,
            font_size_changed: (self.font_size - config.font_size).abs() > f32::EPSILON,
        };

        config.hide_chat = self.hide_chat;
        config.native_item_tooltips = self.native_item_tooltips;
        config.sidebar_tab_view = self.sidebar_tab_view;
        config.font_size = self.font_size;
        config.chat_colours = self.chat_colours;
        config.tabs = self.tabs;

        changes
    }

    // ========================================================================
    // Colours
    // ========================================================================

    /// Colour shown in the picker for `ty`: override, else type default,
    /// else `0`.
    pub fn effective_colour(&self, ty: ChatType) -> u32 {
        effective_colour(&self.chat_colours, ty)
    }

    /// Drop the override for `ty`.
    pub fn reset_colour(&mut self, ty: ChatType) {
        self.chat_colours.remove(&ty);
    }

    pub fn set_colour(&mut self, ty: ChatType, rgb: [u8; 3]) {
        self.chat_colours.insert(ty, rgb_to_rgba(rgb));
    }

    // ========================================================================
    // Tabs
    // ========================================================================

    /// Append a default tab.
    pub fn add_tab(&mut self) {
        self.tabs.push(Tab::default());
    }

    pub fn remove_tab(&mut self, index: usize) -> Option<Tab> {
        (index < self.tabs.len()).then(|| self.tabs.remove(index))
    }

    /// Swap the tab at `index` with the one before it. No-op for the first
    /// tab; returns whether anything moved.
    pub fn move_tab_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.tabs.len() {
            return false;
        }
        self.tabs.swap(index - 1, index);
        true
    }

    /// Swap the tab at `index` with the one after it. No-op for the last
    /// tab; returns whether anything moved.
    pub fn move_tab_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.tabs.len() {
            return false;
        }
        self.tabs.swap(index, index + 1);
        true
    }

    /// Apply a deferred tab list edit. Returns whether the list changed.
    pub fn apply_tab_edit(&mut self, edit: TabEdit) -> bool {
        match edit {
            TabEdit::Delete(i) => self.remove_tab(i).is_some(),
            TabEdit::MoveUp(i) => self.move_tab_up(i),
            TabEdit::MoveDown(i) => self.move_tab_down(i),
        }
    }
}
