//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! `Config` and `Tab` fields.

use std::collections::HashMap;

use crate::tab::Tab;
use crate::types::{ChatSource, ChatType};

pub fn hide_chat() -> bool {
    false
}

pub fn native_item_tooltips() -> bool {
    true
}

pub fn sidebar_tab_view() -> bool {
    false
}

pub fn font_size() -> f32 {
    17.0
}

/// Smallest font size the settings panel allows.
pub const MIN_FONT_SIZE: f32 = 12.0;

/// Largest font size the settings panel allows.
pub const MAX_FONT_SIZE: f32 = 36.0;

/// Drag step for the font size control.
pub const FONT_SIZE_STEP: f32 = 0.5;

pub fn tab_name() -> String {
    "New tab".to_string()
}

pub fn display_unread() -> bool {
    true
}

pub fn display_timestamp() -> bool {
    true
}

/// The tab list a fresh install starts with: a single "General" tab that
/// receives every common chat type from every source.
pub fn tabs() -> Vec<Tab> {
    let chat_codes: HashMap<ChatType, ChatSource> = ChatType::general()
        .iter()
        .map(|ty| (*ty, ChatSource::all()))
        .collect();

    vec![Tab {
        name: "General".to_string(),
        chat_codes,
        ..Tab::default()
    }]
}
