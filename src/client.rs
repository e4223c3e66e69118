//! Bot API client.
//!
//! Keep the public surface small: [`BotClient`] dispatches requests and downloads
//! files, [`BotClientBuilder`] configures it. Implementation details are split into
//! submodules under `src/client/`.

pub mod builder;
pub mod core;
pub mod error_classification;
mod execution;
mod files;
pub mod options;

pub use builder::BotClientBuilder;
pub use core::BotClient;
pub use error_classification::{DefaultErrorClassifier, ErrorClassifier};
pub use options::{ClientOptions, DEFAULT_BASE_URL};
