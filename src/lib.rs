//! # telegram-bot-client
//!
//! Typed client for the Telegram Bot HTTP API.
//!
//! ## Overview
//!
//! Every API method is a type implementing [`requests::BotRequest`]. [`BotClient`] turns
//! such a value into an HTTP call, checks the response envelope and either returns the
//! decoded `result` or a typed error:
//!
//! - [`Error::Api`]: the API understood the request and rejected it. The
//!   [`ApiErrorKind`] says how (bad request, unauthorized, flood control, ...).
//! - [`Error::Request`]: the answer could not be obtained or decoded (network failure,
//!   unexpected body).
//! - [`Error::Cancelled`]: the caller's cancellation token fired.
//!
//! Nothing is retried automatically, not even `TooManyRequests`; the retry hint is
//! exposed through [`ApiError::retry_after`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use telegram_bot_client::BotClient;
//!
//! #[tokio::main]
//! async fn main() -> telegram_bot_client::Result<()> {
//!     let client = BotClient::new("1234567:your-bot-token")?;
//!
//!     let me = client.get_me().await?;
//!     println!("running as @{}", me.username.unwrap_or_default());
//!
//!     let mut file = tokio::fs::File::create("photo.jpg").await?;
//!     client.get_info_and_download_file("AgACAgIAAxkBAAIB", &mut file).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | dispatcher, file downloads, builder, error classification |
//! | [`requests`] | the request trait and the bundled methods |
//! | [`types`] | response envelope and API objects |
//! | [`interceptors`] | request observers |
//! | [`transport`] | HTTP transport boundary |
//! | [`token`] | token parsing |

pub mod client;
pub mod error_code;
pub mod interceptors;
pub mod prelude;
pub mod requests;
pub mod token;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{
    BotClient, BotClientBuilder, ClientOptions, DefaultErrorClassifier, ErrorClassifier,
};
pub use error_code::ApiErrorKind;
pub use interceptors::{ApiRequestEvent, ApiResponseEvent, RequestObserver};
pub use token::BotToken;
pub use tokio_util::sync::CancellationToken;
pub use types::{ApiResponse, ResponseEnvelope, ResponseParameters};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{ApiError, Error, ErrorContext, RequestError};
