use serde::Deserialize;

use crate::{query::QueryParams, Error, Session};

use super::GATEWAY_INDEX;

#[derive(Deserialize)]
struct GatewayResp {
    url: String,
}

impl Session {
    /// Returns the websocket gateway URL. Asks for a compressed stream when
    /// the session was configured with `compress`.
    pub async fn gateway(&self) -> Result<String, Error> {
        let mut params = QueryParams::new();
        params.set_flag("compress", self.compress());
        let url = self.endpoint_with(GATEWAY_INDEX, &params)?;
        let resp: GatewayResp = self.get(url).await?.decode()?;
        Ok(resp.url)
    }
}
