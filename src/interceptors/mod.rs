//! Request observers.
//!
//! Observers see every API call at two fixed points of the dispatch pipeline:
//! right before the request is sent, and right after the response headers arrive
//! (before the body is inspected). They are useful for logging, metrics and auditing.
//!
//! Hooks run synchronously on the calling task, in registration order. They receive
//! shared references only, so they cannot alter the request or the response.
//! A call that fails before any response arrives (e.g. connection refused) only
//! triggers the first hook.

use crate::requests::RequestBody;
use std::sync::Arc;

/// Context passed to [`RequestObserver::on_making_request`].
#[derive(Debug, Clone, Copy)]
pub struct ApiRequestEvent<'a> {
    pub method_name: &'a str,
    pub body: &'a RequestBody,
    /// Correlation id of this call, also present in the client's log records.
    pub client_request_id: &'a str,
}

/// Context passed to [`RequestObserver::on_response_received`].
#[derive(Debug, Clone, Copy)]
pub struct ApiResponseEvent<'a> {
    pub response: &'a reqwest::Response,
    /// The event emitted for the same call before it was sent.
    pub request: &'a ApiRequestEvent<'a>,
}

/// Observer trait for cross-cutting concerns around API calls.
pub trait RequestObserver: Send + Sync {
    fn on_making_request(&self, _event: &ApiRequestEvent<'_>) {}

    fn on_response_received(&self, _event: &ApiResponseEvent<'_>) {}
}

/// Registered observers, invoked in order.
#[derive(Clone, Default)]
pub struct Observers {
    pub(crate) observers: Vec<Arc<dyn RequestObserver>>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<O: RequestObserver + 'static>(mut self, observer: O) -> Self {
        self.observers.push(Arc::new(observer));
        self
    }

    pub fn push(&mut self, observer: Arc<dyn RequestObserver>) {
        self.observers.push(observer);
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub(crate) fn making_request(&self, event: &ApiRequestEvent<'_>) {
        for observer in &self.observers {
            observer.on_making_request(event);
        }
    }

    pub(crate) fn response_received(&self, event: &ApiResponseEvent<'_>) {
        for observer in &self.observers {
            observer.on_response_received(event);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.observers.len())
            .finish()
    }
}
