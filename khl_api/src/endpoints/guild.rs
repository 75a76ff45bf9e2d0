use serde::Serialize;

use crate::{
    query::{GuildUserListOption, PageSetting, QueryParams},
    types::{Guild, GuildMuteList, GuildMuteSetting, GuildNickname, PageInfo, Role, User},
    Error, Session,
};

use super::{
    GUILD_KICKOUT, GUILD_LEAVE, GUILD_LIST, GUILD_MUTE_CREATE, GUILD_MUTE_DELETE,
    GUILD_MUTE_LIST, GUILD_NICKNAME, GUILD_ROLE_LIST, GUILD_USER_LIST, GUILD_VIEW,
};

#[derive(Serialize)]
struct GuildTarget<'a> {
    guild_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_id: Option<&'a str>,
}

impl Session {
    /// Lists the guilds the bot has joined.
    pub async fn guild_list(&self, page: &PageSetting) -> Result<(Vec<Guild>, PageInfo), Error> {
        let url = self.endpoint(GUILD_LIST)?;
        self.get_list(url, page).await
    }

    /// Returns a guild with its roles and channels.
    pub async fn guild_view(&self, guild_id: &str) -> Result<Guild, Error> {
        let mut params = QueryParams::new();
        params.set("guild_id", guild_id);
        let url = self.endpoint_with(GUILD_VIEW, &params)?;
        self.get(url).await?.decode()
    }

    /// Lists the members of a guild, optionally filtered.
    pub async fn guild_user_list(
        &self,
        guild_id: &str,
        page: &PageSetting,
        options: &[GuildUserListOption],
    ) -> Result<(Vec<User>, PageInfo), Error> {
        let mut params = QueryParams::new();
        params.set("guild_id", guild_id).apply_all(options);
        let url = self.endpoint_with(GUILD_USER_LIST, &params)?;
        self.get_list(url, page).await
    }

    /// Changes a member's nickname in a guild.
    pub async fn guild_nickname(&self, nickname: &GuildNickname) -> Result<(), Error> {
        let url = self.endpoint(GUILD_NICKNAME)?;
        self.post(url, nickname).await?;
        Ok(())
    }

    /// Makes the bot leave a guild.
    pub async fn guild_leave(&self, guild_id: &str) -> Result<(), Error> {
        let url = self.endpoint(GUILD_LEAVE)?;
        self.post(
            url,
            &GuildTarget {
                guild_id,
                target_id: None,
            },
        )
        .await?;
        Ok(())
    }

    /// Kicks a user out of a guild.
    pub async fn guild_kickout(&self, guild_id: &str, user_id: &str) -> Result<(), Error> {
        let url = self.endpoint(GUILD_KICKOUT)?;
        self.post(
            url,
            &GuildTarget {
                guild_id,
                target_id: Some(user_id),
            },
        )
        .await?;
        Ok(())
    }

    /// Lists users muted on mic or headset in a guild.
    pub async fn guild_mute_list(&self, guild_id: &str) -> Result<GuildMuteList, Error> {
        let mut params = QueryParams::new();
        params.set("guild_id", guild_id);
        let url = self.endpoint_with(GUILD_MUTE_LIST, &params)?;
        self.get(url).await?.decode()
    }

    /// Revokes a user's mic or headset.
    pub async fn guild_mute_create(&self, setting: &GuildMuteSetting) -> Result<(), Error> {
        let url = self.endpoint(GUILD_MUTE_CREATE)?;
        self.post(url, setting).await?;
        Ok(())
    }

    /// Gives a user's mic or headset back.
    pub async fn guild_mute_delete(&self, setting: &GuildMuteSetting) -> Result<(), Error> {
        let url = self.endpoint(GUILD_MUTE_DELETE)?;
        self.post(url, setting).await?;
        Ok(())
    }

    pub async fn guild_role_list(
        &self,
        guild_id: &str,
        page: &PageSetting,
    ) -> Result<(Vec<Role>, PageInfo), Error> {
        let mut params = QueryParams::new();
        params.set("guild_id", guild_id);
        let url = self.endpoint_with(GUILD_ROLE_LIST, &params)?;
        self.get_list(url, page).await
    }
}
