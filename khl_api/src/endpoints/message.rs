use serde::Serialize;

use crate::{
    query::{MessageListOption, QueryParams},
    types::{DetailedChannelMessage, MessageCreate, MessageResp, MessageUpdate, ReactedUser},
    Error, Session,
};

use super::{
    MESSAGE_ADD_REACTION, MESSAGE_CREATE, MESSAGE_DELETE, MESSAGE_DELETE_REACTION, MESSAGE_LIST,
    MESSAGE_REACTION_LIST, MESSAGE_UPDATE,
};

#[derive(Serialize)]
struct MsgId<'a> {
    msg_id: &'a str,
}

#[derive(Serialize)]
struct Reaction<'a> {
    msg_id: &'a str,
    emoji: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    user_id: &'a str,
}

impl Session {
    /// Lists messages of a channel, newest first unless options say otherwise.
    pub async fn message_list(
        &self,
        target_id: &str,
        options: &[MessageListOption],
    ) -> Result<Vec<DetailedChannelMessage>, Error> {
        let mut params = QueryParams::new();
        params.set("target_id", target_id).apply_all(options);
        let url = self.endpoint_with(MESSAGE_LIST, &params)?;
        self.get(url).await?.decode()
    }

    /// Sends a message to a channel.
    pub async fn message_create(&self, create: &MessageCreate) -> Result<MessageResp, Error> {
        let url = self.endpoint(MESSAGE_CREATE)?;
        self.post(url, create).await?.decode()
    }

    /// Edits a message. Only KMarkdown and card messages can be edited.
    pub async fn message_update(&self, update: &MessageUpdate) -> Result<(), Error> {
        let url = self.endpoint(MESSAGE_UPDATE)?;
        self.post(url, update).await?;
        Ok(())
    }

    pub async fn message_delete(&self, msg_id: &str) -> Result<(), Error> {
        let url = self.endpoint(MESSAGE_DELETE)?;
        self.post(url, &MsgId { msg_id }).await?;
        Ok(())
    }

    /// Lists the users who reacted to a message with `emoji`.
    pub async fn message_reaction_list(
        &self,
        msg_id: &str,
        emoji: &str,
    ) -> Result<Vec<ReactedUser>, Error> {
        let mut params = QueryParams::new();
        params.set("msg_id", msg_id).set("emoji", emoji);
        let url = self.endpoint_with(MESSAGE_REACTION_LIST, &params)?;
        self.get(url).await?.decode()
    }

    /// Adds a reaction as the bot.
    pub async fn message_add_reaction(&self, msg_id: &str, emoji: &str) -> Result<(), Error> {
        let url = self.endpoint(MESSAGE_ADD_REACTION)?;
        self.post(
            url,
            &Reaction {
                msg_id,
                emoji,
                user_id: "",
            },
        )
        .await?;
        Ok(())
    }

    /// Removes a user's reaction. An empty `user_id` removes the bot's own.
    pub async fn message_delete_reaction(
        &self,
        msg_id: &str,
        emoji: &str,
        user_id: &str,
    ) -> Result<(), Error> {
        let url = self.endpoint(MESSAGE_DELETE_REACTION)?;
        self.post(
            url,
            &Reaction {
                msg_id,
                emoji,
                user_id,
            },
        )
        .await?;
        Ok(())
    }
}
