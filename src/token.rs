//! Bot token parsing.
//!
//! A token looks like `123456789:AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw`. The leading
//! segment is the bot's numeric id; the rest is the secret. Authenticity can only be
//! proven by a successful round trip (see [`crate::BotClient::test_token`]).

use crate::{Error, ErrorContext, Result};
use std::fmt;
use std::str::FromStr;

/// A syntactically valid bot token together with the bot id it embeds.
#[derive(Clone, PartialEq, Eq)]
pub struct BotToken {
    raw: String,
    bot_id: i64,
}

impl BotToken {
    /// Parse a token. Fails with a configuration error when the token does not have
    /// at least two `:`-separated segments, the first one is not an integer, or the
    /// secret holds characters outside `[A-Za-z0-9_:-]`.
    pub fn parse(token: impl Into<String>) -> Result<Self> {
        let raw = token.into();
        let mut segments = raw.split(':');
        let id_segment = segments.next().unwrap_or_default();
        if segments.next().is_none() {
            return Err(invalid_format("expected '<bot id>:<secret>'"));
        }
        let bot_id = id_segment
            .parse::<i64>()
            .map_err(|_| invalid_format("bot id segment is not an integer"))?;
        // The token is pasted into URL paths unescaped.
        let secret = &raw[id_segment.len() + 1..];
        if !secret.chars().all(is_secret_char) {
            return Err(invalid_format("secret contains characters not allowed in a URL path"));
        }
        Ok(Self { raw, bot_id })
    }

    pub fn bot_id(&self) -> i64 {
        self.bot_id
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

fn is_secret_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ':')
}

fn invalid_format(details: &str) -> Error {
    Error::configuration_with_context(
        "invalid token format",
        ErrorContext::new()
            .with_field_path("token")
            .with_details(details)
            .with_source("token_parser"),
    )
}

impl FromStr for BotToken {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// Never leak the secret through `{:?}`.
impl fmt::Debug for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotToken")
            .field("bot_id", &self.bot_id)
            .finish_non_exhaustive()
    }
}
