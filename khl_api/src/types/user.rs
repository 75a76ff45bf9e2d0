//! User-related types returned by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A platform user, including bots.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct User {
    /// Unique user identifier.
    pub id: String,

    pub username: String,

    /// Guild nickname; only filled for guild-scoped lookups.
    pub nickname: String,

    /// Four-digit discriminator shown after the username.
    pub identify_num: String,

    pub online: bool,

    pub bot: bool,

    /// Account status; `10` is normal, `0` and `1` mean banned.
    pub status: i64,

    pub avatar: String,

    pub vip_avatar: String,

    pub mobile_verified: bool,

    /// Role ids held in the guild the user was looked up in.
    pub roles: Vec<i64>,
}

/// The other party of a direct chat.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct TargetInfo {
    pub id: String,
    pub username: String,
    pub online: bool,
    pub avatar: String,
}

/// A direct chat session between the bot and one user.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UserChat {
    /// Chat code used to address direct messages.
    pub code: String,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_read_time: DateTime<Utc>,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub latest_msg_time: DateTime<Utc>,

    #[serde(default)]
    pub unread_count: i64,

    #[serde(default)]
    pub target_info: TargetInfo,
}
