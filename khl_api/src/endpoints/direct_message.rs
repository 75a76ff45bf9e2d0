use serde::Serialize;

use crate::{
    types::{DirectMessageCreate, DirectMessageUpdate, MessageResp, UserChat},
    Error, Session,
};

use super::{
    DIRECT_MESSAGE_CREATE, DIRECT_MESSAGE_DELETE, DIRECT_MESSAGE_UPDATE, USER_CHAT_CREATE,
    USER_CHAT_DELETE,
};

impl Session {
    /// Opens (or returns the existing) direct chat with a user.
    pub async fn user_chat_create(&self, user_id: &str) -> Result<UserChat, Error> {
        #[derive(Serialize)]
        struct Args<'a> {
            target_id: &'a str,
        }
        let url = self.endpoint(USER_CHAT_CREATE)?;
        self.post(url, &Args { target_id: user_id })
            .await?
            .decode()
    }

    pub async fn user_chat_delete(&self, chat_code: &str) -> Result<(), Error> {
        #[derive(Serialize)]
        struct Args<'a> {
            chat_code: &'a str,
        }
        let url = self.endpoint(USER_CHAT_DELETE)?;
        self.post(url, &Args { chat_code }).await?;
        Ok(())
    }

    pub async fn direct_message_create(
        &self,
        create: &DirectMessageCreate,
    ) -> Result<MessageResp, Error> {
        let url = self.endpoint(DIRECT_MESSAGE_CREATE)?;
        self.post(url, create).await?.decode()
    }

    pub async fn direct_message_update(&self, update: &DirectMessageUpdate) -> Result<(), Error> {
        let url = self.endpoint(DIRECT_MESSAGE_UPDATE)?;
        self.post(url, update).await?;
        Ok(())
    }

    pub async fn direct_message_delete(&self, msg_id: &str) -> Result<(), Error> {
        #[derive(Serialize)]
        struct Args<'a> {
            msg_id: &'a str,
        }
        let url = self.endpoint(DIRECT_MESSAGE_DELETE)?;
        self.post(url, &Args { msg_id }).await?;
        Ok(())
    }
}
