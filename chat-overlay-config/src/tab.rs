//! User-defined chat tabs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::{ChatSource, ChatType, InputChannel};

/// A chat tab and the rules deciding which lines it shows.
///
/// A chat type is routed to the tab when it has an entry in `chat_codes`;
/// the entry's bitset says which sources of that type are accepted. An entry
/// with an empty bitset is kept (the type stays enabled) but matches nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    #[serde(default = "crate::defaults::tab_name")]
    pub name: String,

    /// Show the unread line count next to the tab name
    #[serde(default = "crate::defaults::display_unread")]
    pub display_unread: bool,

    /// Prefix each line with its timestamp
    #[serde(default = "crate::defaults::display_timestamp")]
    pub display_timestamp: bool,

    /// Channel the input box switches to while this tab is active
    #[serde(default)]
    pub input_channel: Option<InputChannel>,

    #[serde(default)]
    pub chat_codes: HashMap<ChatType, ChatSource>,
}

impl Default for Tab {
    fn default() -> Self {
        Self {
            name: crate::defaults::tab_name(),
            display_unread: crate::defaults::display_unread(),
            display_timestamp: crate::defaults::display_timestamp(),
            input_channel: None,
            chat_codes: HashMap::new(),
        }
    }
}

impl Tab {
    /// Create a tab with the given name and default options.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Whether a line of `ty` coming from `source` belongs in this tab.
    pub fn matches(&self, ty: ChatType, source: ChatSource) -> bool {
        self.chat_codes
            .get(&ty)
            .is_some_and(|sources| sources.intersects(source))
    }

    /// Whether `ty` is routed to this tab at all.
    pub fn is_enabled(&self, ty: ChatType) -> bool {
        self.chat_codes.contains_key(&ty)
    }

    /// Enable or disable a chat type. Enabling accepts every source;
    /// disabling removes the entry.
    pub fn set_enabled(&mut self, ty: ChatType, enabled: bool) {
        if enabled {
            self.chat_codes.insert(ty, ChatSource::all());
        } else {
            self.chat_codes.remove(&ty);
        }
    }

    /// Set or clear one source bit for `ty`.
    ///
    /// The entry is created if absent and kept even when its bitset ends up
    /// empty; only [`Tab::set_enabled`] removes it.
    pub fn set_source(&mut self, ty: ChatType, source: ChatSource, on: bool) {
        let mut sources = self
            .chat_codes
            .get(&ty)
            .copied()
            .unwrap_or(ChatSource::empty());
        sources.set(source, on);
        self.chat_codes.insert(ty, sources);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab() {
        let tab = Tab::default();
        assert_eq!(tab.name, "New tab");
        assert!(tab.display_unread);
        assert!(tab.display_timestamp);
        assert!(tab.input_channel.is_none());
        assert!(tab.chat_codes.is_empty());
    }

    #[test]
    fn test_matches_requires_type_and_source() {
        let mut tab = Tab::new("Party");
        tab.chat_codes
            .insert(ChatType::Party, ChatSource::SELF | ChatSource::PARTY_MEMBER);

        assert!(tab.matches(ChatType::Party, ChatSource::PARTY_MEMBER));
        assert!(!tab.matches(ChatType::Party, ChatSource::OTHER));
        assert!(!tab.matches(ChatType::Say, ChatSource::SELF));
    }

    #[test]
    fn test_empty_bitset_matches_nothing() {
        let mut tab = Tab::new("Muted");
        tab.chat_codes.insert(ChatType::Say, ChatSource::empty());
        assert!(!tab.matches(ChatType::Say, ChatSource::SELF));
    }

    #[test]
    fn test_set_enabled_toggles_entry() {
        let mut tab = Tab::default();
        tab.set_enabled(ChatType::Yell, true);
        assert_eq!(tab.chat_codes.get(&ChatType::Yell), Some(&ChatSource::all()));

        tab.set_enabled(ChatType::Yell, false);
        assert!(!tab.is_enabled(ChatType::Yell));
    }

    #[test]
    fn test_clearing_last_source_keeps_entry() {
        let mut tab = Tab::default();
        tab.set_source(ChatType::Echo, ChatSource::SELF, true);
        assert_eq!(tab.chat_codes.get(&ChatType::Echo), Some(&ChatSource::SELF));

        tab.set_source(ChatType::Echo, ChatSource::SELF, false);
        assert!(tab.is_enabled(ChatType::Echo));
        assert_eq!(
            tab.chat_codes.get(&ChatType::Echo),
            Some(&ChatSource::empty())
        );
    }

    #[test]
    fn test_tab_yaml_missing_fields_use_defaults() {
        let tab: Tab = serde_yaml_ng::from_str("name: Trade\n").unwrap();
        assert_eq!(tab.name, "Trade");
        assert!(tab.display_unread);
        assert!(tab.chat_codes.is_empty());
    }
}
