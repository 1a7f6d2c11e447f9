//! Chat message types, matching the game's own chat type codes.

use serde::{Deserialize, Serialize};

use super::color::rgba_components;

/// A kind of chat line.
///
/// The discriminants are the game's chat type codes, so values can be
/// converted straight from incoming message headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u16)]
pub enum ChatType {
    Debug = 1,
    Urgent = 2,
    Notice = 3,
    Say = 10,
    Shout = 11,
    TellOutgoing = 12,
    TellIncoming = 13,
    Party = 14,
    Alliance = 15,
    Linkshell1 = 16,
    Linkshell2 = 17,
    Linkshell3 = 18,
    Linkshell4 = 19,
    Linkshell5 = 20,
    Linkshell6 = 21,
    Linkshell7 = 22,
    Linkshell8 = 23,
    FreeCompany = 24,
    NoviceNetwork = 27,
    CustomEmote = 28,
    StandardEmote = 29,
    Yell = 30,
    CrossParty = 32,
    PvpTeam = 36,
    CrossLinkshell1 = 37,
    Echo = 56,
    System = 57,
    BattleSystem = 58,
    GatheringSystem = 59,
    Error = 60,
    NpcDialogue = 61,
    LootNotice = 62,
    Progress = 64,
    LootRoll = 65,
    Crafting = 66,
    Gathering = 67,
    NpcAnnouncement = 68,
    FreeCompanyAnnouncement = 69,
    FreeCompanyLoginLogout = 70,
    RetainerSale = 71,
    PeriodicRecruitmentNotification = 72,
    Sign = 73,
    RandomNumber = 74,
    NoviceNetworkSystem = 75,
    Orchestrion = 76,
    PvpTeamAnnouncement = 77,
    PvpTeamLoginLogout = 78,
    MessageBook = 79,
    CrossLinkshell2 = 101,
    CrossLinkshell3 = 102,
    CrossLinkshell4 = 103,
    CrossLinkshell5 = 104,
    CrossLinkshell6 = 105,
    CrossLinkshell7 = 106,
    CrossLinkshell8 = 107,
}

impl ChatType {
    /// All chat types for UI iteration, in code order.
    pub fn all() -> &'static [ChatType] {
        &[
            ChatType::Debug,
            ChatType::Urgent,
            ChatType::Notice,
            ChatType::Say,
            ChatType::Shout,
            ChatType::TellOutgoing,
            ChatType::TellIncoming,
            ChatType::Party,
            ChatType::Alliance,
            ChatType::Linkshell1,
            ChatType::Linkshell2,
            ChatType::Linkshell3,
            ChatType::Linkshell4,
            ChatType::Linkshell5,
            ChatType::Linkshell6,
            ChatType::Linkshell7,
            ChatType::Linkshell8,
            ChatType::FreeCompany,
            ChatType::NoviceNetwork,
            ChatType::CustomEmote,
            ChatType::StandardEmote,
            ChatType::Yell,
            ChatType::CrossParty,
            ChatType::PvpTeam,
            ChatType::CrossLinkshell1,
            ChatType::Echo,
            ChatType::System,
            ChatType::BattleSystem,
            ChatType::GatheringSystem,
            ChatType::Error,
            ChatType::NpcDialogue,
            ChatType::LootNotice,
            ChatType::Progress,
            ChatType::LootRoll,
            ChatType::Crafting,
            ChatType::Gathering,
            ChatType::NpcAnnouncement,
            ChatType::FreeCompanyAnnouncement,
            ChatType::FreeCompanyLoginLogout,
            ChatType::RetainerSale,
            ChatType::PeriodicRecruitmentNotification,
            ChatType::Sign,
            ChatType::RandomNumber,
            ChatType::NoviceNetworkSystem,
            ChatType::Orchestrion,
            ChatType::PvpTeamAnnouncement,
            ChatType::PvpTeamLoginLogout,
            ChatType::MessageBook,
            ChatType::CrossLinkshell2,
            ChatType::CrossLinkshell3,
            ChatType::CrossLinkshell4,
            ChatType::CrossLinkshell5,
            ChatType::CrossLinkshell6,
            ChatType::CrossLinkshell7,
            ChatType::CrossLinkshell8,
        ]
    }

    /// Chat types routed to the "General" tab of a fresh configuration.
    pub fn general() -> &'static [ChatType] {
        &[
            ChatType::Debug,
            ChatType::Urgent,
            ChatType::Notice,
            ChatType::Say,
            ChatType::Shout,
            ChatType::TellOutgoing,
            ChatType::TellIncoming,
            ChatType::Party,
            ChatType::Alliance,
            ChatType::FreeCompany,
            ChatType::NoviceNetwork,
            ChatType::CustomEmote,
            ChatType::StandardEmote,
            ChatType::Yell,
            ChatType::CrossParty,
            ChatType::PvpTeam,
            ChatType::Echo,
            ChatType::System,
            ChatType::Error,
            ChatType::NpcDialogue,
            ChatType::NpcAnnouncement,
        ]
    }

    /// Look up a chat type by its numeric game code.
    pub fn from_code(code: u16) -> Option<ChatType> {
        Self::all().iter().copied().find(|ty| ty.code() == code)
    }

    /// Numeric game code.
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ChatType::Debug => "Debug",
            ChatType::Urgent => "Urgent",
            ChatType::Notice => "Notice",
            ChatType::Say => "Say",
            ChatType::Shout => "Shout",
            ChatType::TellOutgoing => "Tell (outgoing)",
            ChatType::TellIncoming => "Tell (incoming)",
            ChatType::Party => "Party",
            ChatType::Alliance => "Alliance",
            ChatType::Linkshell1 => "Linkshell [1]",
            ChatType::Linkshell2 => "Linkshell [2]",
            ChatType::Linkshell3 => "Linkshell [3]",
            ChatType::Linkshell4 => "Linkshell [4]",
            ChatType::Linkshell5 => "Linkshell [5]",
            ChatType::Linkshell6 => "Linkshell [6]",
            ChatType::Linkshell7 => "Linkshell [7]",
            ChatType::Linkshell8 => "Linkshell [8]",
            ChatType::FreeCompany => "Free Company",
            ChatType::NoviceNetwork => "Novice Network",
            ChatType::CustomEmote => "Custom emotes",
            ChatType::StandardEmote => "Standard emotes",
            ChatType::Yell => "Yell",
            ChatType::CrossParty => "Cross-world Party",
            ChatType::PvpTeam => "PvP Team",
            ChatType::CrossLinkshell1 => "Cross-world Linkshell [1]",
            ChatType::Echo => "Echo",
            ChatType::System => "System messages",
            ChatType::BattleSystem => "Battle system messages",
            ChatType::GatheringSystem => "Gathering system messages",
            ChatType::Error => "Error messages",
            ChatType::NpcDialogue => "NPC dialogue",
            ChatType::LootNotice => "Loot notices",
            ChatType::Progress => "Progression messages",
            ChatType::LootRoll => "Loot messages",
            ChatType::Crafting => "Synthesis messages",
            ChatType::Gathering => "Gathering messages",
            ChatType::NpcAnnouncement => "NPC announcements",
            ChatType::FreeCompanyAnnouncement => "Free Company announcements",
            ChatType::FreeCompanyLoginLogout => "Free Company member login notifications",
            ChatType::RetainerSale => "Retainer sale notifications",
            ChatType::PeriodicRecruitmentNotification => "Periodic recruitment notifications",
            ChatType::Sign => "Sign messages for PC targets",
            ChatType::RandomNumber => "Random number messages",
            ChatType::NoviceNetworkSystem => "Novice Network notifications",
            ChatType::Orchestrion => "Current orchestrion track messages",
            ChatType::PvpTeamAnnouncement => "PvP Team announcements",
            ChatType::PvpTeamLoginLogout => "PvP Team member login notifications",
            ChatType::MessageBook => "Message book alert",
            ChatType::CrossLinkshell2 => "Cross-world Linkshell [2]",
            ChatType::CrossLinkshell3 => "Cross-world Linkshell [3]",
            ChatType::CrossLinkshell4 => "Cross-world Linkshell [4]",
            ChatType::CrossLinkshell5 => "Cross-world Linkshell [5]",
            ChatType::CrossLinkshell6 => "Cross-world Linkshell [6]",
            ChatType::CrossLinkshell7 => "Cross-world Linkshell [7]",
            ChatType::CrossLinkshell8 => "Cross-world Linkshell [8]",
        }
    }

    /// Colour used when the user has not overridden this type.
    ///
    /// Types without a game-defined colour return `None`; callers fall back
    /// to `0`.
    pub fn default_colour(&self) -> Option<u32> {
        let (r, g, b) = match self {
            ChatType::Say => (0xf7, 0xf7, 0xf5),
            ChatType::Shout => (0xff, 0xa6, 0x66),
            ChatType::TellOutgoing | ChatType::TellIncoming => (0xff, 0xb8, 0xde),
            ChatType::Party | ChatType::CrossParty => (0x66, 0xe5, 0xff),
            ChatType::Alliance => (0xff, 0x7f, 0x00),
            ChatType::Linkshell1
            | ChatType::Linkshell2
            | ChatType::Linkshell3
            | ChatType::Linkshell4
            | ChatType::Linkshell5
            | ChatType::Linkshell6
            | ChatType::Linkshell7
            | ChatType::Linkshell8
            | ChatType::NoviceNetwork
            | ChatType::CrossLinkshell1
            | ChatType::CrossLinkshell2
            | ChatType::CrossLinkshell3
            | ChatType::CrossLinkshell4
            | ChatType::CrossLinkshell5
            | ChatType::CrossLinkshell6
            | ChatType::CrossLinkshell7
            | ChatType::CrossLinkshell8 => (0xd4, 0xff, 0x7d),
            ChatType::FreeCompany
            | ChatType::PvpTeam
            | ChatType::FreeCompanyAnnouncement
            | ChatType::FreeCompanyLoginLogout
            | ChatType::PvpTeamAnnouncement
            | ChatType::PvpTeamLoginLogout => (0xab, 0xdb, 0xe5),
            ChatType::CustomEmote | ChatType::StandardEmote => (0xbd, 0xe6, 0x9e),
            ChatType::Yell => (0xff, 0xff, 0x00),
            ChatType::Echo | ChatType::System => (0xcc, 0xcc, 0xcc),
            ChatType::Error => (0xff, 0x4a, 0x4a),
            ChatType::NpcDialogue | ChatType::NpcAnnouncement => (0xab, 0xd6, 0x47),
            _ => return None,
        };

        Some(rgba_components(r, g, b, 0xff))
    }
}
