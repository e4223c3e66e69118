use crate::error_code::ApiErrorKind;
use crate::types::ResponseParameters;
use std::time::Duration;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Structured error context for configuration failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "token", "base_url")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected shape, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "token_parser", "download_file")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the bot client.
///
/// The two failure families never overlap:
/// - [`Error::Request`]: the API's answer could not be obtained or interpreted.
/// - [`Error::Api`]: the API answered with a structured rejection.
///
/// [`Error::Cancelled`] is reported when the caller's cancellation token fires.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Operation was cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration { .. })
    }

    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_request(&self) -> Option<&RequestError> {
        match self {
            Error::Request(e) => Some(e),
            _ => None,
        }
    }
}

/// The response could not be obtained or did not have the expected shape.
#[derive(Debug, Error)]
#[error("Request error: {message}{}", .status_code.map(|s| format!(" (HTTP {})", s)).unwrap_or_default())]
pub struct RequestError {
    message: String,
    status_code: Option<u16>,
    body: Option<String>,
    #[source]
    source: Option<BoxError>,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: None,
            body: None,
            source: None,
        }
    }

    pub fn with_status_code(mut self, status: u16) -> Self {
        self.status_code = Some(status);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status of the response, `None` when no response was received.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Raw response body, kept for diagnostics.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn inner(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.source.as_deref()
    }
}

/// A structured rejection reported by the Bot API.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Bot API error {error_code} ({kind}): {description}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub error_code: i64,
    pub description: String,
    pub parameters: Option<ResponseParameters>,
}

impl ApiError {
    pub fn new(
        kind: ApiErrorKind,
        error_code: i64,
        description: impl Into<String>,
        parameters: Option<ResponseParameters>,
    ) -> Self {
        Self {
            kind,
            error_code,
            description: description.into(),
            parameters,
        }
    }

    pub fn kind(&self) -> &ApiErrorKind {
        &self.kind
    }

    /// How long the API asked us to wait before repeating the request.
    pub fn retry_after(&self) -> Option<Duration> {
        match &self.kind {
            ApiErrorKind::TooManyRequests { retry_after } => *retry_after,
            _ => self
                .parameters
                .as_ref()
                .and_then(|p| p.retry_after)
                .and_then(|secs| u64::try_from(secs).ok())
                .map(Duration::from_secs),
        }
    }

    /// The supergroup id a group chat was migrated to.
    pub fn migrate_to_chat_id(&self) -> Option<i64> {
        self.parameters.as_ref().and_then(|p| p.migrate_to_chat_id)
    }
}
