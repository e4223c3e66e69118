//! Mock Bot API server and fake transports for integration tests

use async_trait::async_trait;
use mockito::{Mock, Server, ServerGuard};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use telegram_bot_client::transport::{HttpTransport, Transport, TransportError};
use std::time::Duration;
use telegram_bot_client::{
    ApiRequestEvent, ApiResponseEvent, BotClient, CancellationToken, RequestObserver,
};

pub const TOKEN: &str = "1234567:4TT8bAc8GHUspu3ERYn-KGcvsvGB9u_n4ddy";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Create a client whose base URL points at the mock server
    pub fn client(&self) -> BotClient {
        BotClient::builder()
            .token(TOKEN)
            .base_url(&self.base_url)
            .build()
            .expect("client should build")
    }

    pub fn method_path(method: &str) -> String {
        format!("/bot{}/{}", TOKEN, method)
    }

    pub fn file_path(path: &str) -> String {
        format!("/file/bot{}/{}", TOKEN, path)
    }

    /// Mock a Bot API method answering with `status` and a JSON `body`
    pub async fn mock_method(&mut self, method: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock("POST", Self::method_path(method).as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock a raw file download
    pub async fn mock_file(&mut self, path: &str, status: usize, body: &[u8]) -> Mock {
        self.server
            .mock("GET", Self::file_path(path).as_str())
            .with_status(status)
            .with_header("content-type", "application/octet-stream")
            .with_body(body)
            .create_async()
            .await
    }
}

/// Raw HTTP server that sends a head declaring `content_length` bytes, then only
/// `partial`, then stalls. Returns its base URL.
pub async fn stalling_server(status: u16, content_length: usize, partial: &'static [u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let head = format!(
        "HTTP/1.1 {} Stalled\r\ncontent-type: application/json\r\ncontent-length: {}\r\n\r\n",
        status, content_length
    );

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let head = head.clone();
            tokio::spawn(async move {
                let mut request = [0u8; 8192];
                let _ = socket.read(&mut request).await;
                let _ = socket.write_all(head.as_bytes()).await;
                let _ = socket.write_all(partial).await;
                let _ = socket.flush().await;
                // Keep the connection open without sending the rest.
                futures::future::pending::<()>().await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}

/// Cancel `cancel` after `delay`
pub fn cancel_after(cancel: &CancellationToken, delay: Duration) {
    let cancel = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        cancel.cancel();
    });
}

/// Transport that fails every call before any response exists
pub struct FailingTransport;

#[async_trait]
impl Transport for FailingTransport {
    async fn send(&self, _request: reqwest::Request) -> Result<reqwest::Response, TransportError> {
        Err(TransportError::Other("connection reset by peer".to_string()))
    }
}

/// Transport that never answers; only cancellation ends the call
pub struct PendingTransport;

#[async_trait]
impl Transport for PendingTransport {
    async fn send(&self, _request: reqwest::Request) -> Result<reqwest::Response, TransportError> {
        futures::future::pending().await
    }
}

/// Real HTTP transport that counts the requests passing through it
pub struct CountingTransport {
    inner: HttpTransport,
    calls: AtomicUsize,
}

impl CountingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: HttpTransport::from_client(reqwest::Client::new()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for CountingTransport {
    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.send(request).await
    }
}

/// Observer that records every hook invocation as a string
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl RequestObserver for RecordingObserver {
    fn on_making_request(&self, event: &ApiRequestEvent<'_>) {
        self.events
            .lock()
            .unwrap()
            .push(format!("request:{}", event.method_name));
    }

    fn on_response_received(&self, event: &ApiResponseEvent<'_>) {
        self.events.lock().unwrap().push(format!(
            "response:{}:{}",
            event.request.method_name,
            event.response.status().as_u16()
        ));
    }
}
