//! HTTP transport boundary.
//!
//! The dispatcher builds a [`reqwest::Request`] and hands it to a [`Transport`]. The
//! default [`HttpTransport`] owns a pooled `reqwest::Client`; tests and embedders can
//! plug in their own implementation through [`crate::BotClientBuilder::transport`].

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;

/// Sends a prepared request and returns the response with its body not yet read.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

// Request URLs embed the bot token; never keep them in an error.
impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.without_url())
    }
}

impl TransportError {
    /// Drop any URL a custom transport left in the error.
    pub(crate) fn redacted(self) -> Self {
        match self {
            Self::Http(e) => Self::Http(e.without_url()),
            other => other,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}
