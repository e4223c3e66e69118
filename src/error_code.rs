//! Bot API error kinds.
//!
//! The Bot API reports failures as `{ "ok": false, "error_code": <int>, "description": <string> }`.
//! The numeric code mirrors an HTTP status; this module maps it onto a small set of
//! actionable kinds.
//!
//! | Code | Kind              | Typical cause                               |
//! |------|-------------------|---------------------------------------------|
//! | 400  | `BadRequest`      | invalid parameters, chat not found          |
//! | 401  | `Unauthorized`    | revoked or mistyped token                   |
//! | 403  | `Forbidden`       | bot blocked by the user, kicked from a chat |
//! | 404  | `NotFound`        | unknown method or file                      |
//! | 409  | `Conflict`        | webhook set while polling, parallel polling |
//! | 429  | `TooManyRequests` | flood control, see `retry_after`            |
//!
//! ## Example
//!
//! ```rust
//! use telegram_bot_client::error_code::ApiErrorKind;
//! use std::time::Duration;
//!
//! let kind = ApiErrorKind::from_error_code(429, Some(30));
//! assert_eq!(kind, ApiErrorKind::TooManyRequests { retry_after: Some(Duration::from_secs(30)) });
//! assert_eq!(kind.name(), "too_many_requests");
//! ```

use std::fmt;
use std::time::Duration;

/// Actionable classification of a Bot API failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 400: the request was malformed or referenced something that does not exist
    BadRequest,
    /// 401: the token is not valid
    Unauthorized,
    /// 403: the bot is not allowed to perform the action
    Forbidden,
    /// 404: the method or resource does not exist
    NotFound,
    /// 409: conflicting update delivery (webhook vs. long polling)
    Conflict,
    /// 429: flood control triggered
    TooManyRequests { retry_after: Option<Duration> },
    /// Any other code, kept verbatim
    Other(i64),
}

impl ApiErrorKind {
    /// Maps an API error code onto a kind. `retry_after` (seconds) is only used for 429.
    pub fn from_error_code(error_code: i64, retry_after: Option<i64>) -> Self {
        match error_code {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            429 => Self::TooManyRequests {
                retry_after: retry_after
                    .and_then(|secs| u64::try_from(secs).ok())
                    .map(Duration::from_secs),
            },
            other => Self::Other(other),
        }
    }

    /// Returns the snake_case name used in logs (e.g., `"bad_request"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::TooManyRequests { .. } => "too_many_requests",
            Self::Other(_) => "other",
        }
    }

    #[inline]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(code) => write!(f, "other({})", code),
            _ => write!(f, "{}", self.name()),
        }
    }
}
