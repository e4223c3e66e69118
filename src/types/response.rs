//! Response envelope shapes.
//!
//! Every Bot API answer is wrapped in an envelope:
//!
//! ```json
//! { "ok": true, "result": { "id": 1, "is_bot": true, "first_name": "bot" } }
//! { "ok": false, "error_code": 429, "description": "Too Many Requests: retry after 30", "parameters": { "retry_after": 30 } }
//! ```
//!
//! A required field that is absent or `null` makes decoding fail; the dispatcher turns
//! that into a [`crate::RequestError`].

use serde::{Deserialize, Serialize};

/// Optional hints attached to a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// The group has been migrated to a supergroup with this identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds to wait before the request can be repeated (flood control).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<i64>,
}

/// A decoded envelope: either the payload or the API's rejection.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseEnvelope<T> {
    Successful {
        result: T,
    },
    Failed {
        error_code: i64,
        description: String,
        parameters: Option<ResponseParameters>,
    },
}

impl<T> ResponseEnvelope<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Successful { .. })
    }
}

/// Raw envelope returned by [`crate::BotClient::execute_raw`].
///
/// Only `ok` is required; the remaining fields are present depending on its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    // No `default` here: it would demand `T: Default`. A missing `Option` is `None` anyway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ResponseParameters>,
}

impl<T> ApiResponse<T> {
    /// Convert into the tagged form. Returns `None` when the fields required by the
    /// `ok` flag are missing (e.g. `ok: true` without a `result`).
    pub fn into_envelope(self) -> Option<ResponseEnvelope<T>> {
        if self.ok {
            self.result
                .map(|result| ResponseEnvelope::Successful { result })
        } else {
            Some(ResponseEnvelope::Failed {
                error_code: self.error_code?,
                description: self.description?,
                parameters: self.parameters,
            })
        }
    }
}

/// Success shape decoded for HTTP 200 answers.
#[derive(Debug, Deserialize)]
pub(crate) struct SuccessfulResponse<T> {
    pub ok: bool,
    pub result: T,
}

/// Failure shape decoded for every non-200 answer.
#[derive(Debug, Deserialize)]
pub(crate) struct FailedResponse {
    // Required but not checked: a non-200 answer is a failure whatever it claims.
    #[allow(dead_code)]
    pub ok: bool,
    pub error_code: i64,
    pub description: String,
    #[serde(default)]
    pub parameters: Option<ResponseParameters>,
}
