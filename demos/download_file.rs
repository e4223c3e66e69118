//! Download a file by its file id.
//!
//! Usage:
//!   TELEGRAM_BOT_TOKEN="123:abc" cargo run --example download_file -- <file_id> <output path>
//!
//! Press Ctrl-C to abort the transfer.

use telegram_bot_client::prelude::*;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let (Some(file_id), Some(output)) = (args.next(), args.next()) else {
        anyhow::bail!("usage: download_file <file_id> <output path>");
    };

    let client = BotClient::builder().timeout(Duration::from_secs(30)).build()?;

    let cancel = CancellationToken::new();
    let on_ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_ctrl_c.cancel();
        }
    });

    let mut out = tokio::fs::File::create(&output).await?;
    match client
        .get_info_and_download_file_with_cancel(&file_id, &mut out, &cancel)
        .await
    {
        Ok(file) => println!(
            "saved {} ({} bytes) to {}",
            file.file_path.unwrap_or_default(),
            file.file_size.unwrap_or_default(),
            output
        ),
        Err(Error::Api(e)) if e.kind == ApiErrorKind::NotFound => {
            anyhow::bail!("no such file: {}", e.description)
        }
        Err(e) if e.is_cancelled() => println!("download cancelled"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
