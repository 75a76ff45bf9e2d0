//! Channel-related types returned by the API and request arguments for channel endpoints.

use serde::{Deserialize, Serialize};

use super::{lenient::bool_from_int, RolePermission, User};

/// Kind of channel. Unknown kinds are kept as their raw number.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(into = "u8", from = "u8")]
pub enum ChannelType {
    #[default]
    Text,
    Voice,
    Other(u8),
}

impl From<ChannelType> for u8 {
    fn from(value: ChannelType) -> u8 {
        match value {
            ChannelType::Text => 1,
            ChannelType::Voice => 2,
            ChannelType::Other(n) => n,
        }
    }
}

impl From<u8> for ChannelType {
    fn from(value: u8) -> Self {
        match value {
            1 => ChannelType::Text,
            2 => ChannelType::Voice,
            n => ChannelType::Other(n),
        }
    }
}

/// Role-level permission overwrite on a channel.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct PermissionOverwrite {
    pub role_id: i64,
    pub allow: RolePermission,
    pub deny: RolePermission,
}

/// User-level permission overwrite on a channel.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct PermissionUser {
    pub user: User,
    pub allow: RolePermission,
    pub deny: RolePermission,
}

/// A guild channel or category.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Channel {
    pub id: String,
    pub name: String,
    /// Creator's user id.
    pub user_id: String,
    pub guild_id: String,
    pub topic: String,
    pub is_category: bool,
    /// Parent category id, empty for top-level channels.
    pub parent_id: String,
    /// Sort position.
    pub level: i64,
    /// Slow mode interval in milliseconds.
    pub slow_mode: i64,
    #[serde(rename = "type")]
    pub channel_type: ChannelType,
    pub permission_overwrites: Vec<PermissionOverwrite>,
    pub permission_users: Vec<PermissionUser>,
    #[serde(deserialize_with = "bool_from_int")]
    pub permission_sync: bool,
    /// Member limit for voice channels.
    pub limit_amount: i64,
}

/// Arguments for `channel_create`.
#[derive(Serialize, Clone, Debug, Default)]
pub struct ChannelCreate {
    pub guild_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent_id: String,
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<ChannelType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_amount: Option<u32>,
    /// Voice quality: 1 smooth, 2 normal, 3 high.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_quality: Option<u8>,
}

/// Role and user permission settings of a channel.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct ChannelRoleIndex {
    pub permission_overwrites: Vec<PermissionOverwrite>,
    pub permission_users: Vec<PermissionUser>,
    #[serde(deserialize_with = "bool_from_int")]
    pub permission_sync: bool,
}

/// Target of a channel permission change: `type` is `role_id` or `user_id`
/// and `value` the matching id.
#[derive(Serialize, Clone, Debug, Default)]
pub struct ChannelRoleBase {
    pub channel_id: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub target_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
}

/// Arguments for `channel_role_create`.
pub type ChannelRoleCreate = ChannelRoleBase;

/// Arguments for `channel_role_delete`.
pub type ChannelRoleDelete = ChannelRoleBase;

/// Arguments for `channel_role_update`.
#[derive(Serialize, Clone, Debug, Default)]
pub struct ChannelRoleUpdate {
    #[serde(flatten)]
    pub base: ChannelRoleBase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow: Option<RolePermission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deny: Option<RolePermission>,
}

/// Result of `channel_role_update`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct ChannelRoleUpdateResp {
    pub user_id: String,
    pub role_id: i64,
    pub allow: RolePermission,
    pub deny: RolePermission,
}
