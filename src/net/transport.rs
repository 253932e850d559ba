//! HTTP transport seam between the request client and the browser.
//!
//! Browser build (`csr`): real `fetch` calls via `gloo-net`.
//! Server-side / native: `BrowserTransport` reports a transport failure, the
//! same way the other browser-only helpers degrade outside the browser.
//!
//! DESIGN
//! ======
//! Requests and responses are plain owned values so the classification logic
//! in `client` can be exercised with a recording fake.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::fmt;

use super::error::TransportError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a JSON body.
    pub fn sends_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outbound request, fully resolved (absolute URL, final headers).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), headers: Vec::new(), body: None }
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_owned(), value.into()));
        self
    }

    #[must_use]
    pub fn json_body(self, body: String) -> Self {
        let mut request = self.header("Content-Type", "application/json");
        request.body = Some(body);
        request
    }

    /// First header value matching `name`, case-insensitively.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Response as received, body read fully as text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, status_text: String::new(), body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// `HTTP 500 Internal Server Error`, or `HTTP 500` without a reason phrase.
    pub fn status_line(&self) -> String {
        let reason = self.status_text.trim();
        if reason.is_empty() {
            format!("HTTP {}", self.status)
        } else {
            format!("HTTP {} {reason}", self.status)
        }
    }
}

/// Something that can deliver an [`HttpRequest`] and hand back the response.
///
/// `Err` means no response was received (offline, DNS, CORS, aborted).
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// `fetch`-backed transport used by the running app.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            send_with_fetch(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError("not available on server".to_owned()))
        }
    }
}

#[cfg(feature = "csr")]
async fn send_with_fetch(request: HttpRequest) -> Result<HttpResponse, TransportError> {
    use gloo_net::http::Request;

    let to_transport = |e: gloo_net::Error| TransportError(e.to_string());

    let mut builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Put => Request::put(&request.url),
        Method::Delete => Request::delete(&request.url),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let sent = match request.body {
        Some(body) => builder.body(body).map_err(to_transport)?.send().await,
        None => builder.send().await,
    };
    let resp = sent.map_err(to_transport)?;
    let status = resp.status();
    let status_text = resp.status_text();
    let body = resp.text().await.map_err(to_transport)?;
    Ok(HttpResponse { status, status_text, body })
}
