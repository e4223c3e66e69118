//! Convenient imports: `use telegram_bot_client::prelude::*;`

pub use crate::client::{BotClient, BotClientBuilder, ErrorClassifier};
pub use crate::error_code::ApiErrorKind;
pub use crate::interceptors::{ApiRequestEvent, ApiResponseEvent, RequestObserver};
pub use crate::requests::{BotRequest, CloseRequest, GetFileRequest, GetMeRequest, LogOutRequest, RequestBody};
pub use crate::types::{ApiResponse, File, ResponseEnvelope, User};
pub use crate::{ApiError, CancellationToken, Error, RequestError, Result};
