//! HTTP session for the KaiHeiLa API.
//!
//! Every call goes through [`Session::request`]: it serializes the payload,
//! attaches the auth header, performs one exchange and decodes the response
//! envelope. List endpoints go through [`Session::request_with_page`], which
//! adds the pagination parameters and splits the list envelope.

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{error, trace};
use url::Url;

use crate::{
    config::SessionConfig,
    envelope::{self, RawData},
    errors::truncate_body,
    query::{PageSetting, QueryParams},
    types::{ListEnvelope, PageInfo},
    Error,
};

const USER_AGENT: &str = concat!("khl-rs/", env!("CARGO_PKG_VERSION"));

/// Authenticated handle on the API.
///
/// Holds the token, the HTTP transport and the API root. It is never
/// modified by a request, so clones can be shared freely across tasks.
#[derive(Clone, Debug)]
pub struct Session {
    client: reqwest::Client,
    token: HeaderValue,
    base_url: Url,
    compress: bool,
}

impl Session {
    /// Builds a session with its own HTTP client, honouring the configured timeout.
    pub fn new(config: &SessionConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        Self::with_client(config, client)
    }

    /// Builds a session on top of an existing HTTP client. The config's
    /// timeout is not applied; the client's own settings are used as-is.
    pub fn with_client(config: &SessionConfig, client: reqwest::Client) -> Result<Self, Error> {
        let mut token = HeaderValue::from_str(&config.token).map_err(|_| {
            Error::Config("token contains characters not allowed in a header".to_string())
        })?;
        token.set_sensitive(true);
        let base_url = Url::parse(&config.base_url)?;
        Ok(Self {
            client,
            token,
            base_url,
            compress: config.compress,
        })
    }

    pub(crate) fn compress(&self) -> bool {
        self.compress
    }

    /// Resolves an endpoint path such as `/message/list` against the API root.
    pub fn endpoint(&self, path: &str) -> Result<Url, Error> {
        let url = Url::parse(
            format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path).as_str(),
        )
        .map_err(|e| {
            error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e)
        })?;
        Ok(url)
    }

    /// Resolves an endpoint path and writes `params` as its query string.
    pub fn endpoint_with(&self, path: &str, params: &QueryParams) -> Result<Url, Error> {
        let mut url = self.endpoint(path)?;
        params.write_to(&mut url);
        Ok(url)
    }

    /// Performs one API call and returns the envelope's undecoded `data`.
    ///
    /// `url` must already carry its query string. `Content-Type` is only set
    /// when there is a body. Nothing is retried.
    #[tracing::instrument(skip_all, fields(method = %method, url = %url))]
    pub async fn request<P>(
        &self,
        method: Method,
        url: Url,
        payload: Option<&P>,
    ) -> Result<RawData, Error>
    where
        P: Serialize + ?Sized,
    {
        let body = match payload {
            Some(payload) => serde_json::to_vec(payload).map_err(|e| {
                error!(error = %e, "failed to serialize request payload");
                Error::Serialization(e)
            })?,
            None => Vec::new(),
        };

        if body.is_empty() {
            trace!(method = %method, url = %url, "http api request");
        } else {
            trace!(
                method = %method,
                url = %url,
                payload = %String::from_utf8_lossy(&body),
                "http api request"
            );
        }

        let mut builder = self
            .client
            .request(method, url)
            .header(AUTHORIZATION, self.token.clone());
        if !body.is_empty() {
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }
        let request = builder.build().map_err(|e| {
            error!(error = %e, "failed to build request");
            Error::Transport(e)
        })?;
        trace!(headers = ?request.headers(), "http api request headers");

        let response = self.client.execute(request).await.map_err(|e| {
            error!(error = %e, "http api request failed");
            Error::Transport(e)
        })?;

        // `bytes()` consumes the response; every other exit drops it.
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(|e| {
            error!(error = %e, "failed to read response body");
            Error::Transport(e)
        })?;

        trace!(
            status_code = status.as_u16(),
            status = %status,
            body = %String::from_utf8_lossy(&body),
            "http response"
        );
        trace!(headers = ?headers, "http response headers");

        envelope::decode(&body).inspect_err(|e| match e {
            Error::Api { code, message } => {
                error!(code = *code, error_msg = %message, "api response error");
            }
            Error::MalformedEnvelope { source, .. } => {
                error!(
                    error = %source,
                    status_code = status.as_u16(),
                    body = %truncate_body(&body),
                    "response unmarshal error"
                );
            }
            _ => {}
        })
    }

    /// `GET` without a body.
    pub async fn get(&self, url: Url) -> Result<RawData, Error> {
        self.request(Method::GET, url, None::<&()>).await
    }

    /// `POST` with a JSON body.
    pub async fn post<P>(&self, url: Url, payload: &P) -> Result<RawData, Error>
    where
        P: Serialize + ?Sized,
    {
        self.request(Method::POST, url, Some(payload)).await
    }

    /// Performs a list call and splits the result into its undecoded items and
    /// page metadata.
    ///
    /// Only the fields set in `page` are added to the query string, on top of
    /// whatever `url` already carries. A payload without `items` and `meta`
    /// is an [`Error::MalformedEnvelope`], never an empty list.
    pub async fn request_with_page(
        &self,
        method: Method,
        mut url: Url,
        page: &PageSetting,
    ) -> Result<(RawData, PageInfo), Error> {
        let mut params = QueryParams::from_url(&url);
        page.add_to_params(&mut params);
        params.write_to(&mut url);

        let data = self.request(method, url, None::<&()>).await?;
        let list: ListEnvelope = data.decode()?;
        Ok((RawData::from(list.items), list.meta))
    }

    /// `GET` list call decoded into `T` items.
    pub(crate) async fn get_list<T>(
        &self,
        url: Url,
        page: &PageSetting,
    ) -> Result<(Vec<T>, PageInfo), Error>
    where
        T: DeserializeOwned,
    {
        let (items, meta) = self.request_with_page(Method::GET, url, page).await?;
        Ok((items.decode()?, meta))
    }
}
