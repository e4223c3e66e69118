//! Endpoint roots derived from the token.

use crate::token::BotToken;
use crate::{Error, ErrorContext, Result};

/// Public Bot API server.
pub const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

/// Token plus the two URL roots every call is built from:
/// - requests: `<base_url>/bot<token>[/test]/<method>`
/// - files: `<base_url>/file/bot<token>[/test]/<file_path>`
#[derive(Debug, Clone)]
pub struct ClientOptions {
    token: BotToken,
    base_url: String,
    use_test_environment: bool,
    base_request_url: String,
    base_file_url: String,
}

impl ClientOptions {
    /// Options for the public server, production environment.
    pub fn new(token: &str) -> Result<Self> {
        Self::with_base_url(token, None, false)
    }

    /// `base_url` points at a self-hosted Bot API server when set.
    /// `use_test_environment` routes calls to the test data centers.
    pub fn with_base_url(
        token: &str,
        base_url: Option<&str>,
        use_test_environment: bool,
    ) -> Result<Self> {
        let token = BotToken::parse(token)?;
        let base_url = match base_url {
            Some(url) => validate_base_url(url)?,
            None => DEFAULT_BASE_URL.to_string(),
        };
        let env_suffix = if use_test_environment { "/test" } else { "" };
        let base_request_url = format!("{}/bot{}{}", base_url, token.as_str(), env_suffix);
        let base_file_url = format!("{}/file/bot{}{}", base_url, token.as_str(), env_suffix);

        Ok(Self {
            token,
            base_url,
            use_test_environment,
            base_request_url,
            base_file_url,
        })
    }

    pub fn token(&self) -> &BotToken {
        &self.token
    }

    pub fn bot_id(&self) -> i64 {
        self.token.bot_id()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn use_test_environment(&self) -> bool {
        self.use_test_environment
    }

    pub fn is_custom_server(&self) -> bool {
        self.base_url != DEFAULT_BASE_URL
    }

    /// Contains the token: never log it.
    pub fn base_request_url(&self) -> &str {
        &self.base_request_url
    }

    /// Contains the token: never log it.
    pub fn base_file_url(&self) -> &str {
        &self.base_file_url
    }

    pub(crate) fn request_url(&self, method_name: &str) -> String {
        format!("{}/{}", self.base_request_url, method_name)
    }

    pub(crate) fn file_url(&self, file_path: &str) -> String {
        format!("{}/{}", self.base_file_url, file_path)
    }
}

fn validate_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = url::Url::parse(trimmed).map_err(|e| {
        Error::configuration_with_context(
            "invalid base URL",
            ErrorContext::new()
                .with_field_path("base_url")
                .with_details(e.to_string()),
        )
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::configuration_with_context(
            "invalid base URL",
            ErrorContext::new()
                .with_field_path("base_url")
                .with_details(format!("unsupported scheme '{}'", parsed.scheme())),
        ));
    }
    Ok(trimmed.to_string())
}
