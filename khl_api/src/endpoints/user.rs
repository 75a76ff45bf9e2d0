use crate::{types::User, Error, Session};

use super::USER_ME;

impl Session {
    /// Returns the bot's own user record.
    pub async fn user_me(&self) -> Result<User, Error> {
        let url = self.endpoint(USER_ME)?;
        self.get(url).await?.decode()
    }
}
