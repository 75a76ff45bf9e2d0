//! Guild-related types returned by the API and request arguments for guild endpoints.

use serde::{Deserialize, Serialize};

use super::{lenient::bool_from_int, Channel, RolePermission};

/// A guild (server).
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Guild {
    pub id: String,
    pub name: String,
    pub topic: String,
    /// Owner's user id.
    pub master_id: String,
    pub icon: String,
    /// Default notification setting: 0 follows the guild default, 1 all, 2 mentions, 3 none.
    pub notify_type: i64,
    pub region: String,
    #[serde(deserialize_with = "bool_from_int")]
    pub enable_open: bool,
    pub open_id: String,
    pub default_channel_id: String,
    pub welcome_channel_id: String,
    /// Only filled by `guild_view`.
    pub roles: Vec<Role>,
    /// Only filled by `guild_view`.
    pub channels: Vec<Channel>,
}

/// A guild role.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Role {
    pub role_id: i64,
    pub name: String,
    pub color: i64,
    pub position: i64,
    /// Whether members with this role are listed separately.
    #[serde(deserialize_with = "bool_from_int")]
    pub hoist: bool,
    #[serde(deserialize_with = "bool_from_int")]
    pub mentionable: bool,
    pub permissions: RolePermission,
}

/// Arguments for `guild_nickname`. An empty nickname resets it.
#[derive(Serialize, Clone, Debug, Default)]
pub struct GuildNickname {
    pub guild_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub nickname: String,
    /// Target user; the bot itself when empty.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_id: String,
}

/// Users muted in a guild, by mute kind.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct GuildMuteList {
    #[serde(rename = "1", default)]
    pub mic: Vec<String>,
    #[serde(rename = "2", default)]
    pub headset: Vec<String>,
}

/// What a mute revokes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(into = "u8", try_from = "u8")]
pub enum MuteType {
    Mic,
    Headset,
}

impl From<MuteType> for u8 {
    fn from(value: MuteType) -> u8 {
        match value {
            MuteType::Mic => 1,
            MuteType::Headset => 2,
        }
    }
}

impl TryFrom<u8> for MuteType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MuteType::Mic),
            2 => Ok(MuteType::Headset),
            other => Err(format!("unknown mute type {other}")),
        }
    }
}

/// Arguments for `guild_mute_create` and `guild_mute_delete`.
#[derive(Serialize, Clone, Debug)]
pub struct GuildMuteSetting {
    pub guild_id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub mute_type: MuteType,
}
