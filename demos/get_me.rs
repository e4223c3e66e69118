//! Check a token and print the bot's identity.
//!
//! Usage:
//!   TELEGRAM_BOT_TOKEN="123:abc" cargo run --example get_me
//!
//! Set RUST_LOG=telegram_bot_client=debug to see each request.

use std::sync::Arc;
use telegram_bot_client::prelude::*;
use tracing_subscriber::EnvFilter;

/// Logs every call's method and status.
struct LoggingObserver;

impl RequestObserver for LoggingObserver {
    fn on_making_request(&self, event: &ApiRequestEvent<'_>) {
        tracing::info!(method = event.method_name, "calling");
    }

    fn on_response_received(&self, event: &ApiResponseEvent<'_>) {
        tracing::info!(
            method = event.request.method_name,
            status = event.response.status().as_u16(),
            "answered"
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    // Token comes from TELEGRAM_BOT_TOKEN.
    let client = BotClient::builder()
        .observer(Arc::new(LoggingObserver))
        .build()?;
    println!("bot id from token: {}", client.bot_id());

    if !client.test_token().await? {
        anyhow::bail!("the API rejected the token");
    }

    let me = client.get_me().await?;
    println!(
        "{} (@{})",
        me.first_name,
        me.username.as_deref().unwrap_or("<no username>")
    );
    Ok(())
}
