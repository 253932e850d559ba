//! Public account endpoints (`/auth/*`).
//!
//! These calls are made without a bearer token and bypass the invalidation
//! policy: a 401 from `/auth/login` means wrong credentials, not an expired
//! session, so it is reported as an ordinary `Http` error.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::Value;

use super::client::{ApiClient, error_message, message_field, parse_json};
use super::error::{ApiError, ApiResult};
use super::transport::{HttpRequest, HttpResponse, Method, Transport};

fn reset_password_path(token: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(token.as_bytes()).collect();
    format!("/auth/reset-password?token={encoded}")
}

fn failure(resp: &HttpResponse) -> ApiError {
    ApiError::Http { status: resp.status, message: error_message(resp) }
}

impl<T: Transport> ApiClient<T> {
    async fn post_public(&self, path: &str, body: Value) -> ApiResult<HttpResponse> {
        let request = HttpRequest::new(Method::Post, self.url(path))
            .header("Accept", "application/json")
            .json_body(body.to_string());
        self.send_public(request).await
    }

    /// Exchange credentials for a token and store it on success.
    ///
    /// # Errors
    ///
    /// `Http` with the server's `error` text for rejected credentials, or
    /// `Network` when the backend is unreachable.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<()> {
        let resp = self
            .post_public("/auth/login", serde_json::json!({ "email": email, "password": password }))
            .await?;
        if !resp.is_success() {
            return Err(failure(&resp));
        }
        let value = parse_json(&resp)?;
        match value.get("access_token").and_then(Value::as_str) {
            Some(token) if !token.is_empty() => {
                self.session().sign_in(token);
                log::info!("signed in");
                Ok(())
            }
            _ => Err(ApiError::Http {
                status: resp.status,
                message: message_field(&value).unwrap_or_else(|| "login response did not include a token".to_owned()),
            }),
        }
    }

    /// Create an account. Does not sign the user in.
    ///
    /// # Errors
    ///
    /// `Http` with the server's `error` text (e.g. email already registered).
    pub async fn register(&self, email: &str, password: &str) -> ApiResult<()> {
        let resp = self
            .post_public("/auth/register", serde_json::json!({ "email": email, "password": password }))
            .await?;
        if resp.is_success() { Ok(()) } else { Err(failure(&resp)) }
    }

    /// Ask the backend to email a reset link. Returns the server's message.
    ///
    /// # Errors
    ///
    /// `Http` with the server's `error` text, or `Network`.
    pub async fn forgot_password(&self, email: &str) -> ApiResult<String> {
        let resp = self.post_public("/auth/forgot-password", serde_json::json!({ "email": email })).await?;
        confirmation(&resp)
    }

    /// Set a new password using the token from the reset link.
    ///
    /// # Errors
    ///
    /// `Http` when the reset token is invalid or expired, or `Network`.
    pub async fn reset_password(&self, reset_token: &str, password: &str) -> ApiResult<String> {
        let resp = self
            .post_public(&reset_password_path(reset_token), serde_json::json!({ "password": password }))
            .await?;
        confirmation(&resp)
    }

    /// Forget the stored token. No server call is made.
    pub fn logout(&self) {
        self.session().sign_out();
        log::info!("signed out");
    }
}

fn confirmation(resp: &HttpResponse) -> ApiResult<String> {
    if !resp.is_success() {
        return Err(failure(resp));
    }
    let value = parse_json(resp)?;
    Ok(message_field(&value).unwrap_or_default())
}
