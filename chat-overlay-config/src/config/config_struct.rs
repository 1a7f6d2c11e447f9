//! The persisted configuration store.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::tab::Tab;
use crate::types::ChatType;

/// Plugin configuration, persisted as YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Hide the chat window entirely
    #[serde(default = "crate::defaults::hide_chat")]
    pub hide_chat: bool,

    /// Show the game's own tooltip when hovering item links
    #[serde(default = "crate::defaults::native_item_tooltips")]
    pub native_item_tooltips: bool,

    /// Lay tabs out in a sidebar instead of a tab bar
    #[serde(default = "crate::defaults::sidebar_tab_view")]
    pub sidebar_tab_view: bool,

    #[serde(default = "crate::defaults::font_size")]
    pub font_size: f32,

    /// Per-type colour overrides, packed as `0xRRGGBBAA`
    #[serde(default)]
    pub chat_colours: HashMap<ChatType, u32>,

    #[serde(default = "crate::defaults::tabs")]
    pub tabs: Vec<Tab>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hide_chat: crate::defaults::hide_chat(),
            native_item_tooltips: crate::defaults::native_item_tooltips(),
            sidebar_tab_view: crate::defaults::sidebar_tab_view(),
            font_size: crate::defaults::font_size(),
            chat_colours: HashMap::new(),
            tabs: crate::defaults::tabs(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Colour a line of `ty` is drawn with: the user's override, else the
    /// type's default, else `0`.
    pub fn effective_colour(&self, ty: ChatType) -> u32 {
        effective_colour(&self.chat_colours, ty)
    }
}

/// Resolve the colour for `ty` against an override map.
pub fn effective_colour(overrides: &HashMap<ChatType, u32>, ty: ChatType) -> u32 {
    overrides
        .get(&ty)
        .copied()
        .or_else(|| ty.default_colour())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_colour_prefers_override() {
        let mut config = Config::default();
        config.chat_colours.insert(ChatType::Say, 0x123456ff);
        assert_eq!(config.effective_colour(ChatType::Say), 0x123456ff);
    }

    #[test]
    fn test_effective_colour_falls_back_to_default() {
        let config = Config::default();
        assert_eq!(
            config.effective_colour(ChatType::Say),
            ChatType::Say.default_colour().unwrap()
        );
    }

    #[test]
    fn test_effective_colour_without_default_is_zero() {
        let config = Config::default();
        assert_eq!(config.effective_colour(ChatType::BattleSystem), 0);
    }
}
