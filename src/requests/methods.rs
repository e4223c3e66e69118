use super::{BotRequest, RequestBody};
use crate::types::{File, User};
use crate::Result;
use serde::{Deserialize, Serialize};

/// `getMe`: basic information about the bot. `test_token` calls it to check the token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetMeRequest;

impl BotRequest for GetMeRequest {
    type Response = User;

    fn method_name(&self) -> &str {
        "getMe"
    }

    fn body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Empty)
    }
}

/// `logOut`: log out from the cloud Bot API server before moving to a local one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogOutRequest;

impl BotRequest for LogOutRequest {
    type Response = bool;

    fn method_name(&self) -> &str {
        "logOut"
    }

    fn body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Empty)
    }
}

/// `close`: close the bot instance before moving it between local servers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CloseRequest;

impl BotRequest for CloseRequest {
    type Response = bool;

    fn method_name(&self) -> &str {
        "close"
    }

    fn body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Empty)
    }
}

/// `getFile`: resolve a file id to a downloadable path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetFileRequest {
    pub file_id: String,
}

impl GetFileRequest {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
        }
    }
}

impl BotRequest for GetFileRequest {
    type Response = File;

    fn method_name(&self) -> &str {
        "getFile"
    }

    fn body(&self) -> Result<RequestBody> {
        RequestBody::json(self)
    }
}
