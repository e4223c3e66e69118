use super::{Transport, TransportError};
use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use reqwest::Proxy;
use std::env;
use std::time::Duration;

pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build the default transport.
    ///
    /// `connect_timeout` bounds connecting only; API calls carry their own per-request timeout
    /// so that file downloads are not cut off mid-stream.
    /// `TELEGRAM_PROXY_URL` routes all traffic through a proxy when set.
    pub fn new(connect_timeout: Duration) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            .user_agent(concat!("telegram-bot-client/", env!("CARGO_PKG_VERSION")));

        if let Ok(proxy_url) = env::var("TELEGRAM_PROXY_URL") {
            let proxy = Proxy::all(&proxy_url).map_err(|e| {
                Error::configuration_with_context(
                    format!("Invalid proxy URL: {}", e),
                    ErrorContext::new()
                        .with_field_path("TELEGRAM_PROXY_URL")
                        .with_source("http_transport"),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| {
            Error::configuration_with_context(
                format!("Failed to create HTTP client: {}", e),
                ErrorContext::new().with_source("http_transport"),
            )
        })?;

        Ok(Self { client })
    }

    /// Wrap an existing client, e.g. one shared with the rest of the application.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: reqwest::Request) -> std::result::Result<reqwest::Response, TransportError> {
        self.client
            .execute(request)
            .await
            .map_err(TransportError::from)
    }
}
