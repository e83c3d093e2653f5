use thiserror::Error;

/// Failures of a single submission.
///
/// `Display` for the three surfaced variants is the bare message so that the
/// status line reads `Error: <message>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Blank theme. Never surfaced to the user.
    #[error("theme is empty")]
    Validation,
    /// Non-2xx answer from the proxy; carries its plain-text body.
    #[error("{0}")]
    RequestFailed(String),
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("FINDMUSIC_PROXY_URL is not set")]
    MissingProxyUrl,
    #[error("invalid proxy url {url:?}: {reason}")]
    InvalidProxyUrl { url: String, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
