use crate::client::core::BotClient;
use crate::client::error_classification::{DefaultErrorClassifier, ErrorClassifier};
use crate::client::options::ClientOptions;
use crate::interceptors::{Observers, RequestObserver};
use crate::transport::{HttpTransport, Transport};
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use std::time::Duration;

/// Default per-request timeout for API calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(100);

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for creating clients with custom configuration.
///
/// Values not set explicitly fall back to the environment:
/// - `TELEGRAM_BOT_TOKEN`
/// - `TELEGRAM_BOT_API_URL` (self-hosted server root)
/// - `TELEGRAM_HTTP_TIMEOUT_SECS`
/// - `TELEGRAM_PROXY_URL` (default transport only)
pub struct BotClientBuilder {
    token: Option<String>,
    base_url: Option<String>,
    test_environment: bool,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
    classifier: Arc<dyn ErrorClassifier>,
    observers: Observers,
}

impl BotClientBuilder {
    pub fn new() -> Self {
        Self {
            token: None,
            base_url: None,
            test_environment: false,
            timeout: None,
            transport: None,
            classifier: Arc::new(DefaultErrorClassifier),
            observers: Observers::new(),
        }
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Root of a self-hosted Bot API server, e.g. `http://localhost:8081`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Route calls to the test environment.
    pub fn test_environment(mut self, enable: bool) -> Self {
        self.test_environment = enable;
        self
    }

    /// Per-request timeout for API calls.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Replace the transport, e.g. with a fake one in tests.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Reuse an application-wide `reqwest::Client`.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.transport = Some(Arc::new(HttpTransport::from_client(client)));
        self
    }

    pub fn error_classifier(mut self, classifier: Arc<dyn ErrorClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    /// Register an observer. Observers run in registration order.
    pub fn observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<BotClient> {
        let token = self
            .token
            .or_else(|| std::env::var("TELEGRAM_BOT_TOKEN").ok())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "Bot token required",
                    ErrorContext::new()
                        .with_field_path("token")
                        .with_details("set it on the builder or via TELEGRAM_BOT_TOKEN"),
                )
            })?;
        let base_url = self
            .base_url
            .or_else(|| std::env::var("TELEGRAM_BOT_API_URL").ok());
        let options =
            ClientOptions::with_base_url(&token, base_url.as_deref(), self.test_environment)?;

        let timeout = match self.timeout {
            Some(t) => t,
            None => timeout_from_env()?.unwrap_or(DEFAULT_TIMEOUT),
        };

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::new(DEFAULT_CONNECT_TIMEOUT)?),
        };

        Ok(BotClient {
            options,
            transport,
            classifier: self.classifier,
            observers: self.observers,
            timeout,
        })
    }
}

fn timeout_from_env() -> Result<Option<Duration>> {
    let Ok(raw) = std::env::var("TELEGRAM_HTTP_TIMEOUT_SECS") else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(|secs| Some(Duration::from_secs(secs)))
        .ok_or_else(|| {
            Error::configuration_with_context(
                "invalid timeout",
                ErrorContext::new()
                    .with_field_path("TELEGRAM_HTTP_TIMEOUT_SECS")
                    .with_details(format!("expected a positive number of seconds, got '{}'", raw)),
            )
        })
}

impl Default for BotClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
