//! 请求执行逻辑：构造、观察、发送、分类、解码。
//!
//! Request dispatch (single attempt, no retry).

use crate::error::RequestError;
use crate::interceptors::{ApiRequestEvent, ApiResponseEvent};
use crate::requests::{BotRequest, RequestBody};
use crate::transport::TransportError;
use crate::types::response::{FailedResponse, SuccessfulResponse};
use crate::types::ApiResponse;
use crate::{Error, ErrorContext, Result};
use bytes::Bytes;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::core::BotClient;

/// What is left of a call once the response body has been read.
struct ReceivedResponse {
    status: StatusCode,
    body: Bytes,
    client_request_id: String,
    started: Instant,
}

impl BotClient {
    /// Send a request and return its result.
    ///
    /// Fails with [`Error::Api`] when the API rejects the request and with
    /// [`Error::Request`] when the answer cannot be obtained or decoded.
    pub async fn execute<R: BotRequest>(&self, request: &R) -> Result<R::Response> {
        self.execute_with_cancel(request, &CancellationToken::new())
            .await
    }

    /// [`execute`](Self::execute) that gives up with [`Error::Cancelled`] once `cancel`
    /// fires.
    pub async fn execute_with_cancel<R: BotRequest>(
        &self,
        request: &R,
        cancel: &CancellationToken,
    ) -> Result<R::Response> {
        let received = self.send_request(request, cancel).await?;
        let method = request.method_name();

        if received.status != StatusCode::OK {
            let failed: FailedResponse = decode(&received)?;
            let err = self.classifier.classify(
                failed.error_code,
                &failed.description,
                failed.parameters.as_ref(),
            );
            info!(
                method,
                http_status = received.status.as_u16(),
                error_code = err.error_code,
                kind = err.kind.name(),
                client_request_id = received.client_request_id.as_str(),
                duration_ms = received.started.elapsed().as_millis(),
                "bot api request rejected"
            );
            return Err(Error::Api(err));
        }

        let ok: SuccessfulResponse<R::Response> = decode(&received)?;
        if !ok.ok {
            warn!(
                method,
                client_request_id = received.client_request_id.as_str(),
                "bot api answered 200 with ok=false"
            );
            return Err(Error::Request(envelope_mismatch(&received)));
        }
        Ok(ok.result)
    }

    /// Send a request and return the raw envelope, whatever its `ok` flag says.
    ///
    /// Never fails with [`Error::Api`]; API rejections are returned as data.
    pub async fn execute_raw<R: BotRequest>(&self, request: &R) -> Result<ApiResponse<R::Response>> {
        self.execute_raw_with_cancel(request, &CancellationToken::new())
            .await
    }

    pub async fn execute_raw_with_cancel<R: BotRequest>(
        &self,
        request: &R,
        cancel: &CancellationToken,
    ) -> Result<ApiResponse<R::Response>> {
        let received = self.send_request(request, cancel).await?;
        decode(&received)
    }

    /// Steps shared by both modes: build, observe, send, observe, read the body.
    ///
    /// The response is owned here and dropped on every exit path, including
    /// cancellation and unwinding observers.
    async fn send_request<R: BotRequest>(
        &self,
        request: &R,
        cancel: &CancellationToken,
    ) -> Result<ReceivedResponse> {
        let method = request.method_name();
        let client_request_id = Uuid::new_v4().to_string();

        let url = reqwest::Url::parse(&self.options.request_url(method)).map_err(|e| {
            Error::configuration_with_context(
                format!("Cannot build URL for method '{}'", method),
                ErrorContext::new()
                    .with_field_path("method_name")
                    .with_details(e.to_string())
                    .with_source("dispatcher"),
            )
        })?;
        let body = request.body()?;

        let mut http_request = reqwest::Request::new(request.http_method(), url);
        *http_request.timeout_mut() = Some(self.timeout);
        if let Some(content_type) = body.content_type() {
            http_request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }
        if let RequestBody::Json(bytes) = &body {
            *http_request.body_mut() = Some(reqwest::Body::from(bytes.clone()));
        }

        let request_event = ApiRequestEvent {
            method_name: method,
            body: &body,
            client_request_id: &client_request_id,
        };
        self.observers.making_request(&request_event);

        debug!(
            method,
            client_request_id = client_request_id.as_str(),
            "sending bot api request"
        );
        let started = Instant::now();

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            sent = self.transport.send(http_request) => sent.map_err(|e| {
                let e = e.redacted();
                warn!(
                    method,
                    client_request_id = client_request_id.as_str(),
                    timeout = e.is_timeout(),
                    error = %e,
                    "bot api request failed before a response arrived"
                );
                transport_failure(e)
            })?,
        };

        // Classification uses the status captured here, before observers run.
        let status = response.status();
        self.observers.response_received(&ApiResponseEvent {
            response: &response,
            request: &request_event,
        });

        let body = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(Error::Cancelled),
            read = response.bytes() => read.map_err(|e| {
                let e = e.without_url();
                warn!(
                    method,
                    http_status = status.as_u16(),
                    client_request_id = client_request_id.as_str(),
                    error = %e,
                    "failed to read bot api response body"
                );
                RequestError::new("failed to read response body")
                    .with_status_code(status.as_u16())
                    .with_source(e)
            })?,
        };

        debug!(
            method,
            http_status = status.as_u16(),
            client_request_id = client_request_id.as_str(),
            duration_ms = started.elapsed().as_millis(),
            "bot api response received"
        );

        Ok(ReceivedResponse {
            status,
            body,
            client_request_id,
            started,
        })
    }
}

fn transport_failure(e: TransportError) -> RequestError {
    let message = if e.is_timeout() {
        "request timed out"
    } else {
        "exception during making request"
    };
    RequestError::new(message).with_source(e)
}

/// Decode the body into `T`. Absent required fields and malformed syntax both end
/// up as the same [`RequestError`].
fn decode<T: DeserializeOwned>(received: &ReceivedResponse) -> Result<T> {
    serde_json::from_slice(&received.body).map_err(|e| {
        let body = String::from_utf8_lossy(&received.body).into_owned();
        warn!(
            http_status = received.status.as_u16(),
            client_request_id = received.client_request_id.as_str(),
            error = %e,
            "bot api response did not match the expected envelope"
        );
        Error::Request(
            RequestError::new("required properties not found in response")
                .with_status_code(received.status.as_u16())
                .with_body(body)
                .with_source(e),
        )
    })
}

fn envelope_mismatch(received: &ReceivedResponse) -> RequestError {
    RequestError::new("success envelope has ok=false")
        .with_status_code(received.status.as_u16())
        .with_body(String::from_utf8_lossy(&received.body).into_owned())
}
