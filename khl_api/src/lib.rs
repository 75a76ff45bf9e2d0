//! Typed client binding for the KaiHeiLa (KOOK) HTTP API.
//!
//! All calls flow through [`Session::request`], which returns the response
//! envelope's `data` as [`RawData`]; endpoint methods on [`Session`] decode
//! it into the models under [`types`].

mod client;
mod config;
mod endpoints;
mod envelope;
mod errors;
mod query;
pub mod types;
pub use self::client::Session;
pub use self::config::{SessionConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::envelope::{decode as decode_envelope, RawData, ResponseEnvelope};
pub use self::errors::Error;
pub use self::query::{
    GuildUserListOption, MessageListFlag, MessageListOption, PageSetting, QueryOption,
    QueryParams,
};
pub use reqwest::Method;

/// Endpoint paths, relative to the API root.
pub mod paths {
    pub use crate::endpoints::*;
}
