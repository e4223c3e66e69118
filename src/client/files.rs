//! File downloads.

use crate::error::RequestError;
use crate::requests::GetFileRequest;
use crate::types::File;
use crate::{Error, ErrorContext, Result};
use futures::StreamExt;
use reqwest::Method;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::core::BotClient;

/// Bytes of a rejected download's body kept for diagnostics.
const ERROR_BODY_LIMIT: usize = 4096;

impl BotClient {
    /// Stream the file at `file_path` (as returned by `getFile`) into `destination`.
    pub async fn download_file<W>(&self, file_path: &str, destination: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin + Send + ?Sized,
    {
        self.download_file_with_cancel(file_path, destination, &CancellationToken::new())
            .await
    }

    pub async fn download_file_with_cancel<W>(
        &self,
        file_path: &str,
        destination: &mut W,
        cancel: &CancellationToken,
    ) -> Result<()>
    where
        W: AsyncWrite + Unpin + Send + ?Sized,
    {
        // Real paths look like "documents/file_3.pdf"; this only catches obvious mistakes.
        if file_path.chars().count() < 2 {
            return Err(Error::configuration_with_context(
                "file path is empty or too short",
                ErrorContext::new()
                    .with_field_path("file_path")
                    .with_details(format!("got {:?}", file_path))
                    .with_source("download_file"),
            ));
        }

        let url = reqwest::Url::parse(&self.options.file_url(file_path)).map_err(|e| {
            Error::configuration_with_context(
                "cannot build file URL",
                ErrorContext::new()
                    .with_field_path("file_path")
                    .with_details(e.to_string())
                    .with_source("download_file"),
            )
        })?;
        // No per-request timeout: large files may legitimately take long.
        let request = reqwest::Request::new(Method::GET, url);

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            sent = self.transport.send(request) => sent.map_err(|e| {
                let e = e.redacted();
                warn!(error = %e, "file download failed before a response arrived");
                RequestError::new("exception during file download").with_source(e)
            })?,
        };

        let status = response.status();
        if !status.is_success() {
            let body = read_error_body(response, cancel).await?;
            warn!(http_status = status.as_u16(), "file download rejected");
            return Err(RequestError::new("unable to download file")
                .with_status_code(status.as_u16())
                .with_body(body)
                .into());
        }

        let mut written: u64 = 0;
        let mut chunks = Box::pin(response.bytes_stream());
        loop {
            let next = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(Error::Cancelled),
                next = chunks.next() => next,
            };
            let Some(chunk) = next else { break };
            let chunk = chunk.map_err(|e| {
                RequestError::new("failed to read file content")
                    .with_status_code(status.as_u16())
                    .with_source(e.without_url())
            })?;
            destination.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        destination.flush().await?;

        debug!(bytes = written, "file downloaded");
        Ok(())
    }

    /// Resolve `file_id` with `getFile`, stream the file into `destination`, and return
    /// the file's metadata.
    ///
    /// Nothing is written when the lookup fails.
    pub async fn get_info_and_download_file<W>(
        &self,
        file_id: &str,
        destination: &mut W,
    ) -> Result<File>
    where
        W: AsyncWrite + Unpin + Send + ?Sized,
    {
        self.get_info_and_download_file_with_cancel(file_id, destination, &CancellationToken::new())
            .await
    }

    pub async fn get_info_and_download_file_with_cancel<W>(
        &self,
        file_id: &str,
        destination: &mut W,
        cancel: &CancellationToken,
    ) -> Result<File>
    where
        W: AsyncWrite + Unpin + Send + ?Sized,
    {
        let file = self
            .execute_with_cancel(&GetFileRequest::new(file_id), cancel)
            .await?;
        let file_path = file
            .file_path
            .as_deref()
            .ok_or_else(|| RequestError::new("getFile returned no file_path"))?;

        self.download_file_with_cancel(file_path, destination, cancel)
            .await?;
        Ok(file)
    }
}

/// Read at most [`ERROR_BODY_LIMIT`] bytes of an error body. A body that fails midway
/// keeps what arrived so far.
async fn read_error_body(response: reqwest::Response, cancel: &CancellationToken) -> Result<String> {
    let mut body = Vec::new();
    let mut chunks = Box::pin(response.bytes_stream());
    while body.len() < ERROR_BODY_LIMIT {
        let next = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            next = chunks.next() => next,
        };
        match next {
            Some(Ok(chunk)) => body.extend_from_slice(&chunk),
            _ => break,
        }
    }
    body.truncate(ERROR_BODY_LIMIT);
    Ok(String::from_utf8_lossy(&body).into_owned())
}
