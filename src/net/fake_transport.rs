//! Recording transport for request-client tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use super::error::TransportError;
use super::transport::{HttpRequest, HttpResponse, Transport};

/// Replays queued responses in order and records every request it sees.
#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    replies: Arc<Mutex<VecDeque<Result<HttpResponse, TransportError>>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(self, status: u16, body: &str) -> Self {
        lock(&self.replies).push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub(crate) fn reply_with(self, response: HttpResponse) -> Self {
        lock(&self.replies).push_back(Ok(response));
        self
    }

    pub(crate) fn fail(self, message: &str) -> Self {
        lock(&self.replies).push_back(Err(TransportError(message.to_owned())));
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    pub(crate) fn last_request(&self) -> Option<HttpRequest> {
        lock(&self.requests).last().cloned()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        lock(&self.requests).push(request);
        lock(&self.replies)
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no reply queued".to_owned())))
    }
}
