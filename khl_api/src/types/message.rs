//! Message-related types returned by the API and request arguments for message endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;

/// Message content kind. Unknown kinds are kept as their raw number.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(into = "u8", from = "u8")]
pub enum MessageType {
    #[default]
    Text,
    Image,
    Video,
    File,
    Audio,
    KMarkdown,
    Card,
    System,
    Other(u8),
}

impl From<MessageType> for u8 {
    fn from(value: MessageType) -> u8 {
        match value {
            MessageType::Text => 1,
            MessageType::Image => 2,
            MessageType::Video => 3,
            MessageType::File => 4,
            MessageType::Audio => 8,
            MessageType::KMarkdown => 9,
            MessageType::Card => 10,
            MessageType::System => 255,
            MessageType::Other(n) => n,
        }
    }
}

impl From<u8> for MessageType {
    fn from(value: u8) -> Self {
        match value {
            1 => MessageType::Text,
            2 => MessageType::Image,
            3 => MessageType::Video,
            4 => MessageType::File,
            8 => MessageType::Audio,
            9 => MessageType::KMarkdown,
            10 => MessageType::Card,
            255 => MessageType::System,
            n => MessageType::Other(n),
        }
    }
}

/// Fields shared by channel and direct message creation.
#[derive(Serialize, Clone, Debug, Default)]
pub struct MessageCreateBase {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageType>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub target_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
    /// Id of the message being replied to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub quote: String,
    /// Echoed back in the response and the gateway event.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub nonce: String,
}

/// Arguments for `message_create`.
#[derive(Serialize, Clone, Debug, Default)]
pub struct MessageCreate {
    #[serde(flatten)]
    pub base: MessageCreateBase,
    /// Makes the message visible to this user only.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub temp_target_id: String,
}

/// Fields shared by channel and direct message updates.
#[derive(Serialize, Clone, Debug, Default)]
pub struct MessageUpdateBase {
    pub msg_id: String,
    pub content: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub quote: String,
}

/// Arguments for `message_update`.
#[derive(Serialize, Clone, Debug, Default)]
pub struct MessageUpdate {
    #[serde(flatten)]
    pub base: MessageUpdateBase,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub temp_target_id: String,
}

/// Arguments for `direct_message_create`. Address the chat either by
/// `base.target_id` (a user id) or by `chat_code`.
#[derive(Serialize, Clone, Debug, Default)]
pub struct DirectMessageCreate {
    #[serde(flatten)]
    pub base: MessageCreateBase,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub chat_code: String,
}

/// Arguments for `direct_message_update`.
pub type DirectMessageUpdate = MessageUpdateBase;

/// Result of a message creation.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MessageResp {
    pub msg_id: String,
    #[serde(alias = "meg_timestamp", with = "chrono::serde::ts_milliseconds")]
    pub msg_timestamp: DateTime<Utc>,
    #[serde(default)]
    pub nonce: String,
}

/// Badge shown next to a reacting user.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct TagInfo {
    pub color: String,
    pub text: String,
}

/// A user who reacted to a message with a given emoji.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ReactedUser {
    #[serde(flatten)]
    pub user: User,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub reaction_time: DateTime<Utc>,
    #[serde(default)]
    pub tag_info: TagInfo,
}

/// A channel message as returned by `message_list`.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct DetailedChannelMessage {
    pub id: String,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub content: String,
    /// Mentioned user ids.
    pub mention: Vec<String>,
    pub mention_all: bool,
    pub mention_roles: Vec<i64>,
    pub mention_here: bool,
    pub embeds: Vec<serde_json::Value>,
    pub attachments: Option<serde_json::Value>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub create_at: DateTime<Utc>,
    /// Epoch when the message was never edited.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
    pub reactions: Vec<serde_json::Value>,
    pub author: User,
    pub image_name: String,
    pub read_status: bool,
    pub quote: Option<serde_json::Value>,
    pub mention_info: Option<serde_json::Value>,
}
