//! Outbound requests.
//!
//! Each API method is a type implementing [`BotRequest`]: it names the method (used as
//! the URL path suffix), picks the HTTP verb and produces the body. The associated
//! `Response` type is what `result` decodes into.

mod methods;

pub use methods::{CloseRequest, GetFileRequest, GetMeRequest, LogOutRequest};

use crate::Result;
use bytes::Bytes;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A typed Bot API request.
pub trait BotRequest: Send + Sync {
    /// Payload type of a successful answer.
    type Response: DeserializeOwned + Send;

    fn method_name(&self) -> &str;

    fn http_method(&self) -> Method {
        Method::POST
    }

    /// Produce a transport-ready body.
    fn body(&self) -> Result<RequestBody>;
}

/// Serialized request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// Parameterless methods send nothing.
    Empty,
    /// `application/json` payload.
    Json(Bytes),
}

impl RequestBody {
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self::Json(Bytes::from(serde_json::to_vec(value)?)))
    }

    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Empty => None,
            Self::Json(_) => Some("application/json"),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Empty => &[],
            Self::Json(bytes) => bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}
