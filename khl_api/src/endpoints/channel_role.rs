use crate::{
    query::QueryParams,
    types::{
        ChannelRoleCreate, ChannelRoleDelete, ChannelRoleIndex, ChannelRoleUpdate,
        ChannelRoleUpdateResp,
    },
    Error, Session,
};

use super::{CHANNEL_ROLE_CREATE, CHANNEL_ROLE_DELETE, CHANNEL_ROLE_INDEX, CHANNEL_ROLE_UPDATE};

impl Session {
    /// Returns the role and user permission overwrites of a channel.
    pub async fn channel_role_index(&self, channel_id: &str) -> Result<ChannelRoleIndex, Error> {
        let mut params = QueryParams::new();
        params.set("channel_id", channel_id);
        let url = self.endpoint_with(CHANNEL_ROLE_INDEX, &params)?;
        self.get(url).await?.decode()
    }

    pub async fn channel_role_create(&self, create: &ChannelRoleCreate) -> Result<(), Error> {
        let url = self.endpoint(CHANNEL_ROLE_CREATE)?;
        self.post(url, create).await?;
        Ok(())
    }

    pub async fn channel_role_update(
        &self,
        update: &ChannelRoleUpdate,
    ) -> Result<ChannelRoleUpdateResp, Error> {
        let url = self.endpoint(CHANNEL_ROLE_UPDATE)?;
        self.post(url, update).await?.decode()
    }

    pub async fn channel_role_delete(&self, delete: &ChannelRoleDelete) -> Result<(), Error> {
        let url = self.endpoint(CHANNEL_ROLE_DELETE)?;
        self.post(url, delete).await?;
        Ok(())
    }
}
