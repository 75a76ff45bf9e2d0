//! The platform's uniform response wrapper and the raw payload it carries.
//!
//! Every response body looks like `{"code": 0, "message": "", "data": ...}`.
//! Decoding happens in two phases: [`decode`] checks the wrapper and hands
//! back `data` untouched as [`RawData`], then the endpoint function decodes
//! that into its own model with [`RawData::decode`].

use std::fmt;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::Error;

/// The `{code, message, data}` wrapper around every response.
#[derive(Deserialize, Debug)]
pub struct ResponseEnvelope {
    /// `0` on success, the platform's error code otherwise.
    pub code: i64,
    /// Human-readable reason. `null` and a missing key both read as empty.
    #[serde(default)]
    pub message: Option<String>,
    /// Operation-specific payload. Only meaningful when `code == 0`.
    #[serde(default)]
    pub data: Option<Box<RawValue>>,
}

impl ResponseEnvelope {
    /// Turns the envelope into its payload or an [`Error::Api`].
    ///
    /// A successful envelope without `data` yields a JSON `null` payload.
    pub fn into_result(self) -> Result<RawData, Error> {
        if self.code != 0 {
            return Err(Error::Api {
                code: self.code,
                message: self.message.unwrap_or_default(),
            });
        }
        Ok(match self.data {
            Some(data) => RawData(data),
            None => RawData::null(),
        })
    }
}

/// An operation payload that has not been decoded yet.
///
/// Holds the exact JSON text of the envelope's `data` field.
#[derive(Serialize, Debug, Clone)]
#[serde(transparent)]
pub struct RawData(Box<RawValue>);

impl RawData {
    pub(crate) fn null() -> Self {
        RawData(RawValue::NULL.to_owned())
    }

    /// The payload's JSON text, exactly as the server sent it.
    pub fn get(&self) -> &str {
        self.0.get()
    }

    /// Decodes the payload into an endpoint-specific model.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_str(self.get()).map_err(|e| {
            tracing::error!(error = %e, "payload does not match the expected shape");
            Error::malformed(self.get().as_bytes(), e)
        })
    }

    pub fn into_inner(self) -> Box<RawValue> {
        self.0
    }
}

impl From<Box<RawValue>> for RawData {
    fn from(value: Box<RawValue>) -> Self {
        RawData(value)
    }
}

impl fmt::Display for RawData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get())
    }
}

/// Decodes a response body into its payload.
///
/// Fails with [`Error::MalformedEnvelope`] if the body is not an envelope and
/// with [`Error::Api`] if the platform reported a non-zero code.
pub fn decode(body: &[u8]) -> Result<RawData, Error> {
    let envelope: ResponseEnvelope =
        serde_json::from_slice(body).map_err(|e| Error::malformed(body, e))?;
    envelope.into_result()
}
