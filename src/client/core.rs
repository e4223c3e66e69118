use crate::client::builder::BotClientBuilder;
use crate::client::error_classification::ErrorClassifier;
use crate::client::options::ClientOptions;
use crate::interceptors::Observers;
use crate::requests::GetMeRequest;
use crate::transport::Transport;
use crate::types::User;
use crate::{Error, Result};
use std::sync::Arc;
use std::time::Duration;

/// Client for the Telegram Bot API.
///
/// Cheap to share: wrap it in an `Arc` or pass `&BotClient` to concurrent tasks. All
/// configuration is fixed at build time; the underlying connection pool is reused
/// across calls.
pub struct BotClient {
    pub(crate) options: ClientOptions,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) classifier: Arc<dyn ErrorClassifier>,
    pub(crate) observers: Observers,
    pub(crate) timeout: Duration,
}

impl BotClient {
    /// Create a client for the public Bot API server with default settings.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        BotClientBuilder::new().token(token).build()
    }

    pub fn builder() -> BotClientBuilder {
        BotClientBuilder::new()
    }

    /// The bot's numeric id, taken from the token.
    pub fn bot_id(&self) -> i64 {
        self.options.bot_id()
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Per-request timeout applied to API calls (not to file downloads).
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn error_classifier(&self) -> &dyn ErrorClassifier {
        self.classifier.as_ref()
    }

    pub fn observers(&self) -> &Observers {
        &self.observers
    }

    /// Basic information about the bot.
    pub async fn get_me(&self) -> Result<User> {
        self.execute(&GetMeRequest).await
    }

    /// Check the token with one `getMe` call.
    ///
    /// Returns `Ok(false)` when the API rejects the token as unauthorized; any other
    /// failure is returned as is.
    pub async fn test_token(&self) -> Result<bool> {
        match self.execute(&GetMeRequest).await {
            Ok(_) => Ok(true),
            Err(Error::Api(e)) if e.kind.is_unauthorized() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl std::fmt::Debug for BotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotClient")
            .field("bot_id", &self.options.bot_id())
            .field("base_url", &self.options.base_url())
            .field("test_environment", &self.options.use_test_environment())
            .field("timeout", &self.timeout)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}
