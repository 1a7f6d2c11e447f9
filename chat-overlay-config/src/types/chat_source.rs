//! Who a chat line originated from.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Set of message sources feeding a chat type in a tab.
    ///
    /// Bit 0 is unused so the values line up with the game's own source
    /// masks.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ChatSource: u16 {
        const SELF = 1 << 1;
        const PARTY_MEMBER = 1 << 2;
        const ALLIANCE_MEMBER = 1 << 3;
        const OTHER = 1 << 4;
        const ENGAGED_ENEMY = 1 << 5;
        const UNENGAGED_ENEMY = 1 << 6;
        const FRIENDLY_NPC = 1 << 7;
        const SELF_PET = 1 << 8;
        const PARTY_PET = 1 << 9;
        const ALLIANCE_PET = 1 << 10;
        const OTHER_PET = 1 << 11;
    }
}

const NAMES: &[(ChatSource, &str)] = &[
    (ChatSource::SELF, "Self"),
    (ChatSource::PARTY_MEMBER, "Party member"),
    (ChatSource::ALLIANCE_MEMBER, "Alliance member"),
    (ChatSource::OTHER, "Other"),
    (ChatSource::ENGAGED_ENEMY, "Engaged enemy"),
    (ChatSource::UNENGAGED_ENEMY, "Unengaged enemy"),
    (ChatSource::FRIENDLY_NPC, "Friendly NPC"),
    (ChatSource::SELF_PET, "Self pet"),
    (ChatSource::PARTY_PET, "Party pet"),
    (ChatSource::ALLIANCE_PET, "Alliance pet"),
    (ChatSource::OTHER_PET, "Other pet"),
];

impl ChatSource {
    /// Every individual source bit, in display order.
    pub fn each() -> impl Iterator<Item = ChatSource> {
        NAMES.iter().map(|(source, _)| *source)
    }

    /// Display name for a single source bit. Combined sets render as
    /// "Mixed".
    pub fn display_name(self) -> &'static str {
        NAMES
            .iter()
            .find(|(source, _)| *source == self)
            .map_or("Mixed", |(_, name)| name)
    }
}
