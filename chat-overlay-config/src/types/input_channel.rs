//! Channels the chat input box can send to.

use serde::{Deserialize, Serialize};

use super::ChatType;

/// A channel a tab can pin its input box to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputChannel {
    Tell,
    Say,
    Party,
    Alliance,
    Yell,
    Shout,
    FreeCompany,
    PvpTeam,
    NoviceNetwork,
    CrossLinkshell1,
    CrossLinkshell2,
    CrossLinkshell3,
    CrossLinkshell4,
    CrossLinkshell5,
    CrossLinkshell6,
    CrossLinkshell7,
    CrossLinkshell8,
    Linkshell1,
    Linkshell2,
    Linkshell3,
    Linkshell4,
    Linkshell5,
    Linkshell6,
    Linkshell7,
    Linkshell8,
}

impl InputChannel {
    /// All channels for UI iteration
    pub fn all() -> &'static [InputChannel] {
        &[
            InputChannel::Tell,
            InputChannel::Say,
            InputChannel::Party,
            InputChannel::Alliance,
            InputChannel::Yell,
            InputChannel::Shout,
            InputChannel::FreeCompany,
            InputChannel::PvpTeam,
            InputChannel::NoviceNetwork,
            InputChannel::CrossLinkshell1,
            InputChannel::CrossLinkshell2,
            InputChannel::CrossLinkshell3,
            InputChannel::CrossLinkshell4,
            InputChannel::CrossLinkshell5,
            InputChannel::CrossLinkshell6,
            InputChannel::CrossLinkshell7,
            InputChannel::CrossLinkshell8,
            InputChannel::Linkshell1,
            InputChannel::Linkshell2,
            InputChannel::Linkshell3,
            InputChannel::Linkshell4,
            InputChannel::Linkshell5,
            InputChannel::Linkshell6,
            InputChannel::Linkshell7,
            InputChannel::Linkshell8,
        ]
    }

    /// The chat type messages sent on this channel show up as.
    pub fn to_chat_type(self) -> ChatType {
        match self {
            InputChannel::Tell => ChatType::TellOutgoing,
            InputChannel::Say => ChatType::Say,
            InputChannel::Party => ChatType::Party,
            InputChannel::Alliance => ChatType::Alliance,
            InputChannel::Yell => ChatType::Yell,
            InputChannel::Shout => ChatType::Shout,
            InputChannel::FreeCompany => ChatType::FreeCompany,
            InputChannel::PvpTeam => ChatType::PvpTeam,
            InputChannel::NoviceNetwork => ChatType::NoviceNetwork,
            InputChannel::CrossLinkshell1 => ChatType::CrossLinkshell1,
            InputChannel::CrossLinkshell2 => ChatType::CrossLinkshell2,
            InputChannel::CrossLinkshell3 => ChatType::CrossLinkshell3,
            InputChannel::CrossLinkshell4 => ChatType::CrossLinkshell4,
            InputChannel::CrossLinkshell5 => ChatType::CrossLinkshell5,
            InputChannel::CrossLinkshell6 => ChatType::CrossLinkshell6,
            InputChannel::CrossLinkshell7 => ChatType::CrossLinkshell7,
            InputChannel::CrossLinkshell8 => ChatType::CrossLinkshell8,
            InputChannel::Linkshell1 => ChatType::Linkshell1,
            InputChannel::Linkshell2 => ChatType::Linkshell2,
            InputChannel::Linkshell3 => ChatType::Linkshell3,
            InputChannel::Linkshell4 => ChatType::Linkshell4,
            InputChannel::Linkshell5 => ChatType::Linkshell5,
            InputChannel::Linkshell6 => ChatType::Linkshell6,
            InputChannel::Linkshell7 => ChatType::Linkshell7,
            InputChannel::Linkshell8 => ChatType::Linkshell8,
        }
    }

    /// Display name for UI, shared with the chat type it maps to.
    pub fn display_name(self) -> &'static str {
        self.to_chat_type().display_name()
    }
}
