//! Error types for Folio
//!
//! None of these are fatal to the page: each one maps to a visible fallback
//! panel (article card, contact form message) or is dropped silently.

/// A window kind string that does not name a known kind.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum KindError {
    #[error("unknown window kind: {0}")]
    Unknown(String),
}

/// Errors from the article feed adapter.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ContentError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The feed answered with a non-success HTTP status.
    #[error("feed request failed with HTTP {0}")]
    HttpStatus(u16),

    /// The body could not be decoded as a feed.
    #[error("malformed feed: {0}")]
    Decode(String),

    /// The feed proxy reported a failure status in its payload.
    #[error("feed proxy returned status {0:?}")]
    FeedStatus(String),

    /// No item matched the keyword.
    #[error("no article matches {keyword:?}")]
    NotFound { keyword: String },

    /// The configured feed endpoint or source is not a valid URL.
    #[error("invalid feed url: {0}")]
    InvalidUrl(String),

    /// A rewrite rule pattern failed to compile.
    #[error("invalid rewrite rule {name}: {reason}")]
    InvalidRule { name: String, reason: String },
}

impl From<serde_json::Error> for ContentError {
    fn from(e: serde_json::Error) -> Self {
        ContentError::Decode(e.to_string())
    }
}

impl From<url::ParseError> for ContentError {
    fn from(e: url::ParseError) -> Self {
        ContentError::InvalidUrl(e.to_string())
    }
}

/// Errors from contact form submission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// A form field is missing or malformed.
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: &'static str },

    /// The relay account ids are missing from the site config.
    #[error("contact relay is not configured")]
    NotConfigured,

    /// A submission is already in flight.
    #[error("a message is already being sent")]
    Busy,

    /// The relay rejected the message.
    #[error("relay rejected the message with HTTP {0}")]
    Relay(u16),

    /// The relay could not be reached.
    #[error("network error: {0}")]
    Network(String),
}

/// Errors from loading site configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}
