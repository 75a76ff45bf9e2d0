use serde::Serialize;

use crate::{
    query::{PageSetting, QueryParams},
    types::{Channel, ChannelCreate, PageInfo},
    Error, Session,
};

use super::{CHANNEL_CREATE, CHANNEL_DELETE, CHANNEL_LIST, CHANNEL_MOVE_USER, CHANNEL_VIEW};

#[derive(Serialize)]
struct MoveUsers<'a> {
    target_id: &'a str,
    user_ids: &'a [String],
}

impl Session {
    /// Lists the channels of a guild, one page at a time.
    pub async fn channel_list(
        &self,
        guild_id: &str,
        page: &PageSetting,
    ) -> Result<(Vec<Channel>, PageInfo), Error> {
        let mut params = QueryParams::new();
        params.set("guild_id", guild_id);
        let url = self.endpoint_with(CHANNEL_LIST, &params)?;
        self.get_list(url, page).await
    }

    pub async fn channel_view(&self, channel_id: &str) -> Result<Channel, Error> {
        let mut params = QueryParams::new();
        params.set("target_id", channel_id);
        let url = self.endpoint_with(CHANNEL_VIEW, &params)?;
        self.get(url).await?.decode()
    }

    pub async fn channel_create(&self, create: &ChannelCreate) -> Result<Channel, Error> {
        let url = self.endpoint(CHANNEL_CREATE)?;
        self.post(url, create).await?.decode()
    }

    pub async fn channel_delete(&self, channel_id: &str) -> Result<(), Error> {
        #[derive(Serialize)]
        struct Args<'a> {
            channel_id: &'a str,
        }
        let url = self.endpoint(CHANNEL_DELETE)?;
        self.post(url, &Args { channel_id }).await?;
        Ok(())
    }

    /// Moves users into a voice channel. They must already be in a voice channel.
    pub async fn channel_move_users(
        &self,
        target_channel_id: &str,
        user_ids: &[String],
    ) -> Result<(), Error> {
        let url = self.endpoint(CHANNEL_MOVE_USER)?;
        self.post(
            url,
            &MoveUsers {
                target_id: target_channel_id,
                user_ids,
            },
        )
        .await?;
        Ok(())
    }
}
