//! Log output never carries the bot token

use crate::integration::mock_server::{stalling_server, MockServerFixture};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use telegram_bot_client::prelude::*;

const SECRET_TOKEN: &str = "1234567:SUPERSECRET";

/// In-memory writer for a `tracing_subscriber::fmt` layer
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}

#[tokio::test]
async fn test_connection_failure_logs_no_token() {
    let (logs, _guard) = capture_logs();
    let client = BotClient::builder()
        .token(SECRET_TOKEN)
        .base_url("http://127.0.0.1:1")
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    let err = client.execute(&GetMeRequest).await.unwrap_err();

    let logs = logs.contents();
    assert!(logs.contains("bot api request failed before a response arrived"), "{}", logs);
    assert!(!logs.contains("SUPERSECRET"), "{}", logs);
    assert!(!format!("{:?}", err).contains("SUPERSECRET"));
}

#[tokio::test]
async fn test_download_failure_logs_no_token() {
    let (logs, _guard) = capture_logs();
    let client = BotClient::builder()
        .token(SECRET_TOKEN)
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let mut sink: Vec<u8> = Vec::new();
    let err = client
        .download_file("photos/file_0.jpg", &mut sink)
        .await
        .unwrap_err();

    let logs = logs.contents();
    assert!(logs.contains("file download failed"), "{}", logs);
    assert!(!logs.contains("SUPERSECRET"), "{}", logs);
    assert!(!format!("{:?}", err).contains("SUPERSECRET"));
}

#[tokio::test]
async fn test_truncated_body_logs_no_token() {
    let (logs, _guard) = capture_logs();
    // Declares more bytes than it sends, then the client times out mid-body.
    let base_url = stalling_server(200, 100, br#"{"ok":"#).await;
    let client = BotClient::builder()
        .token(SECRET_TOKEN)
        .base_url(base_url)
        .timeout(Duration::from_millis(300))
        .build()
        .unwrap();

    let err = client.execute(&GetMeRequest).await.unwrap_err();

    assert!(err.as_request().is_some());
    let logs = logs.contents();
    assert!(!logs.contains("SUPERSECRET"), "{}", logs);
    assert!(!format!("{:?}", err).contains("SUPERSECRET"));
}

#[tokio::test]
async fn test_rejection_logs_no_token() {
    let (logs, _guard) = capture_logs();
    let mut fixture = MockServerFixture::new().await;
    let _mock = fixture
        .server
        .mock("POST", "/bot1234567:SUPERSECRET/getMe")
        .with_status(401)
        .with_body(r#"{"ok":false,"error_code":401,"description":"Unauthorized"}"#)
        .create_async()
        .await;
    let client = BotClient::builder()
        .token(SECRET_TOKEN)
        .base_url(&fixture.base_url)
        .build()
        .unwrap();

    let err = client.execute(&GetMeRequest).await.unwrap_err();

    assert_eq!(err.as_api().unwrap().kind, ApiErrorKind::Unauthorized);
    let logs = logs.contents();
    assert!(logs.contains("bot api request rejected"), "{}", logs);
    assert!(!logs.contains("SUPERSECRET"), "{}", logs);
}
