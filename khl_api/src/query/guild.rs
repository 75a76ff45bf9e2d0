use super::{QueryOption, QueryParams};

/// Optional arguments for `guild_user_list`.
#[derive(Clone, Debug)]
pub enum GuildUserListOption {
    /// Only users currently in this voice channel.
    ChannelId(String),
    /// Match against username or nickname.
    Search(String),
    /// Only users holding this role.
    RoleId(i64),
    /// Only users with (`true`) or without (`false`) a verified phone.
    MobileVerified(bool),
    /// Sort by last active time.
    ActiveTime(bool),
    /// Sort by join time.
    JoinedAt(bool),
}

impl QueryOption for GuildUserListOption {
    fn apply(&self, params: &mut QueryParams) {
        match self {
            GuildUserListOption::ChannelId(id) => params.set("channel_id", id.as_str()),
            GuildUserListOption::Search(search) => params.set("search", search.as_str()),
            GuildUserListOption::RoleId(role_id) => params.set("role_id", role_id.to_string()),
            GuildUserListOption::MobileVerified(verified) => {
                params.set_flag("mobile_verified", *verified)
            }
            GuildUserListOption::ActiveTime(active) => params.set_flag("active_time", *active),
            GuildUserListOption::JoinedAt(joined) => params.set_flag("joined_at", *joined),
        };
    }
}
