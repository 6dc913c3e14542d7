//! Error types for the media server API client.

/// Errors surfaced by [`ApiClient`](crate::ApiClient) calls.
///
/// Failures carry the request path rather than the full URL: the URL embeds
/// the `ApiKey` token and must never reach a log sink or error message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("GET {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a status other than 200.
    #[error("GET {path} returned HTTP {status}")]
    Http { path: String, status: u16 },

    /// The response body did not decode as the expected shape.
    #[error("GET {path} returned an undecodable body: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub(crate) fn transport(path: &str, source: reqwest::Error) -> Self {
        Self::Transport {
            path: path.to_string(),
            source,
        }
    }

    pub(crate) fn http(path: &str, status: u16) -> Self {
        Self::Http {
            path: path.to_string(),
            status,
        }
    }

    pub(crate) fn decode(path: &str, source: serde_json::Error) -> Self {
        Self::Decode {
            path: path.to_string(),
            source,
        }
    }

    /// HTTP status code for [`ApiError::Http`] failures, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The request path the failure happened on.
    pub fn path(&self) -> &str {
        match self {
            Self::Transport { path, .. } | Self::Http { path, .. } | Self::Decode { path, .. } => {
                path
            }
        }
    }
}

/// Result type alias using [`ApiError`].
pub type Result<T> = std::result::Result<T, ApiError>;
