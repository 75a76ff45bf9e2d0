//! Error types for the API client.

/// Errors that can occur when building a session or making API requests.
///
/// A dispatch ends in exactly one of `Serialization`, `Transport`,
/// `MalformedEnvelope` or `Api`. `InvalidUrl` and `Config` only come out of
/// session construction and URL building.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request payload could not be encoded as JSON. Nothing was sent.
    #[error("Failed to serialize request payload")]
    Serialization(#[source] serde_json::Error),

    /// The exchange could not complete, or its body could not be read.
    #[error("Request failed")]
    Transport(#[source] reqwest::Error),

    /// A response arrived but did not match the expected envelope or list shape.
    #[error("Malformed response envelope")]
    MalformedEnvelope {
        /// Raw response (or payload) bytes, kept for diagnostics.
        body: Vec<u8>,
        #[source]
        source: serde_json::Error,
    },

    /// The platform rejected the request with a non-zero `code`.
    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },

    /// A base URL or endpoint path could not be parsed.
    #[error("Invalid URL")]
    InvalidUrl(#[from] url::ParseError),

    /// A configuration value is missing or invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Returns the platform's error code if this is an [`Error::Api`].
    pub fn api_code(&self) -> Option<i64> {
        match self {
            Error::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub(crate) fn malformed(body: &[u8], source: serde_json::Error) -> Self {
        Error::MalformedEnvelope {
            body: body.to_vec(),
            source,
        }
    }
}

/// Shortens a body for log output.
pub(crate) fn truncate_body(body: &[u8]) -> String {
    const MAX: usize = 2000;
    let text = String::from_utf8_lossy(body);
    if text.len() <= MAX {
        text.into_owned()
    } else {
        let mut end = MAX;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &text[..end])
    }
}
