//! Authenticated request client.
//!
//! Every protected call goes through [`ApiClient::request`], which applies one
//! policy for all methods:
//!
//! 1. No stored token: clear the session, emit `SessionInvalidated`, return
//!    `Unauthenticated`. Nothing is sent.
//! 2. Attach `Authorization: Bearer <token>` and `Accept: application/json`;
//!    POST/PUT also send a JSON body.
//! 3. 401: clear the session, emit `SessionInvalidated`, return
//!    `SessionExpired`. Other non-2xx: `Http` with a best-effort message.
//!    2xx: the JSON body, or `Http` if it does not parse.
//! 4. Transport failure: `Network`. The session is left alone.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client never navigates. The shell subscribes to `SessionInvalidated`
//! and decides how to route the user back to the login page.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ApiError, ApiResult};
use super::transport::{BrowserTransport, HttpRequest, HttpResponse, Method, Transport};
use crate::config;
use crate::session::Session;

/// Why the client dropped the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidationReason {
    /// A protected call was attempted with no stored token.
    MissingCredential,
    /// The server answered 401 to the stored token.
    Rejected,
}

/// Emitted after the client has cleared the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionInvalidated {
    pub reason: InvalidationReason,
}

type InvalidationListener = Arc<dyn Fn(SessionInvalidated) + Send + Sync>;

/// HTTP client bound to a [`Session`] and a [`Transport`].
#[derive(Clone)]
pub struct ApiClient<T = BrowserTransport> {
    transport: T,
    session: Session,
    base_url: String,
    on_invalidated: Option<InvalidationListener>,
}

impl<T> fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, session: Session) -> Self {
        Self {
            transport,
            session,
            base_url: config::API_BASE.to_owned(),
            on_invalidated: None,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Register the subscriber notified whenever the client clears the session.
    #[must_use]
    pub fn on_session_invalidated<F>(mut self, listener: F) -> Self
    where
        F: Fn(SessionInvalidated) + Send + Sync + 'static,
    {
        self.on_invalidated = Some(Arc::new(listener));
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send without a credential and without the invalidation policy.
    pub(crate) async fn send_public(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        log::debug!("{} {}", request.method, request.url);
        Ok(self.transport.send(request).await?)
    }

    /// Issue an authenticated call and return the parsed JSON body.
    ///
    /// # Errors
    ///
    /// See the module docs for the full classification.
    pub async fn request(&self, method: Method, path: &str, body: Option<Value>) -> ApiResult<Value> {
        self.send_authenticated(method, path, body).await.map(|(_, value)| value)
    }

    /// `GET` and deserialize the body into `R`.
    ///
    /// # Errors
    ///
    /// As [`ApiClient::request`]; a body that does not match `R` is `Http`.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.send_typed(Method::Get, path, None).await
    }

    /// `POST` a JSON body and deserialize the reply into `R`.
    ///
    /// # Errors
    ///
    /// As [`ApiClient::get`].
    pub async fn post<R: DeserializeOwned>(&self, path: &str, body: Value) -> ApiResult<R> {
        self.send_typed(Method::Post, path, Some(body)).await
    }

    /// `PUT` a JSON body and deserialize the reply into `R`.
    ///
    /// # Errors
    ///
    /// As [`ApiClient::get`].
    pub async fn put<R: DeserializeOwned>(&self, path: &str, body: Value) -> ApiResult<R> {
        self.send_typed(Method::Put, path, Some(body)).await
    }

    /// `DELETE` and deserialize the reply into `R`.
    ///
    /// # Errors
    ///
    /// As [`ApiClient::get`].
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.send_typed(Method::Delete, path, None).await
    }

    async fn send_typed<R: DeserializeOwned>(&self, method: Method, path: &str, body: Option<Value>) -> ApiResult<R> {
        let (status, value) = self.send_authenticated(method, path, body).await?;
        serde_json::from_value(value).map_err(|e| invalid_body(status, &e))
    }

    async fn send_authenticated(&self, method: Method, path: &str, body: Option<Value>) -> ApiResult<(u16, Value)> {
        let Some(token) = self.session.token() else {
            self.invalidate(InvalidationReason::MissingCredential);
            return Err(ApiError::Unauthenticated);
        };

        let mut request = HttpRequest::new(method, self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .header("Accept", "application/json");
        if method.sends_body() {
            request = request.json_body(body.unwrap_or(Value::Null).to_string());
        }

        log::debug!("{method} {path}");
        let resp = self.transport.send(request).await.map_err(|e| {
            log::warn!("{method} {path} failed before a response: {e}");
            ApiError::from(e)
        })?;

        if resp.status == 401 {
            self.invalidate(InvalidationReason::Rejected);
            return Err(ApiError::SessionExpired);
        }
        if !resp.is_success() {
            let message = error_message(&resp);
            log::warn!("{method} {path} -> {}: {message}", resp.status);
            return Err(ApiError::Http { status: resp.status, message });
        }
        let value = parse_json(&resp)?;
        Ok((resp.status, value))
    }

    fn invalidate(&self, reason: InvalidationReason) {
        log::warn!("session invalidated: {reason:?}");
        self.session.sign_out();
        if let Some(listener) = &self.on_invalidated {
            listener(SessionInvalidated { reason });
        }
    }
}

/// Parse a successful body as JSON, turning garbage into `Http`.
///
/// An empty body (`204 No Content`) parses as `null`.
pub(crate) fn parse_json(resp: &HttpResponse) -> ApiResult<Value> {
    if resp.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&resp.body).map_err(|e| invalid_body(resp.status, &e))
}

fn invalid_body(status: u16, err: &serde_json::Error) -> ApiError {
    ApiError::Http { status, message: format!("invalid response body: {err}") }
}

/// Best-effort human message for a failed response.
///
/// Prefers a JSON `error` or `message` field, then the raw body text, then
/// the status line.
pub(crate) fn error_message(resp: &HttpResponse) -> String {
    let text = resp.body.trim();
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        if let Some(message) = message_field(&value) {
            return message;
        }
    }
    if text.is_empty() { resp.status_line() } else { text.to_owned() }
}

/// `error` or `message` from a JSON object, or the value itself if it is a string.
pub(crate) fn message_field(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Object(map) => ["error", "message"]
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(|v| v.as_str().filter(|s| !s.trim().is_empty()))
            .map(str::to_owned),
        _ => None,
    }
}
