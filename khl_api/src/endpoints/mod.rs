//! Endpoint functions, one `impl Session` block per API area.
//!
//! Each function builds its URL, composes its query, dispatches through the
//! session and decodes the payload into its own model.

mod channel;
mod channel_role;
mod direct_message;
mod gateway;
mod guild;
mod message;
mod user;

pub const GATEWAY_INDEX: &str = "/gateway/index";

pub const MESSAGE_LIST: &str = "/message/list";
pub const MESSAGE_CREATE: &str = "/message/create";
pub const MESSAGE_UPDATE: &str = "/message/update";
pub const MESSAGE_DELETE: &str = "/message/delete";
pub const MESSAGE_REACTION_LIST: &str = "/message/reaction-list";
pub const MESSAGE_ADD_REACTION: &str = "/message/add-reaction";
pub const MESSAGE_DELETE_REACTION: &str = "/message/delete-reaction";

pub const CHANNEL_LIST: &str = "/channel/list";
pub const CHANNEL_VIEW: &str = "/channel/view";
pub const CHANNEL_CREATE: &str = "/channel/create";
pub const CHANNEL_DELETE: &str = "/channel/delete";
pub const CHANNEL_MOVE_USER: &str = "/channel/move-user";

pub const CHANNEL_ROLE_INDEX: &str = "/channel-role/index";
pub const CHANNEL_ROLE_CREATE: &str = "/channel-role/create";
pub const CHANNEL_ROLE_UPDATE: &str = "/channel-role/update";
pub const CHANNEL_ROLE_DELETE: &str = "/channel-role/delete";

pub const USER_CHAT_CREATE: &str = "/user-chat/create";
pub const USER_CHAT_DELETE: &str = "/user-chat/delete";

pub const DIRECT_MESSAGE_CREATE: &str = "/direct-message/create";
pub const DIRECT_MESSAGE_UPDATE: &str = "/direct-message/update";
pub const DIRECT_MESSAGE_DELETE: &str = "/direct-message/delete";

pub const GUILD_LIST: &str = "/guild/list";
pub const GUILD_VIEW: &str = "/guild/view";
pub const GUILD_USER_LIST: &str = "/guild/user-list";
pub const GUILD_NICKNAME: &str = "/guild/nickname";
pub const GUILD_LEAVE: &str = "/guild/leave";
pub const GUILD_KICKOUT: &str = "/guild/kickout";

pub const GUILD_MUTE_LIST: &str = "/guild-mute/list";
pub const GUILD_MUTE_CREATE: &str = "/guild-mute/create";
pub const GUILD_MUTE_DELETE: &str = "/guild-mute/delete";

pub const GUILD_ROLE_LIST: &str = "/guild-role/list";

pub const USER_ME: &str = "/user/me";
