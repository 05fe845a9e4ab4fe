//! Browser side of the auth gateway
//!
//! Each call posts the form value as JSON and reads an [`AuthReply`](crate::core::AuthReply). The
//! request races a timer so a stalled gateway surfaces as
//! [`SubmitError::Timeout`] instead of an endless spinner.

use serde::Serialize;

use crate::core::{Credentials, SignupCredentials, SubmitError};

/// Client-side bound on a single auth request
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

/// Sign in with email and password
pub async fn submit_login(credentials: Credentials) -> Result<(), SubmitError> {
    post_auth("/api/auth/login", &credentials).await
}

/// Create an account; success means a confirmation email was sent
pub async fn submit_signup(credentials: SignupCredentials) -> Result<(), SubmitError> {
    post_auth("/api/auth/signup", &credentials).await
}

#[cfg(not(feature = "ssr"))]
async fn post_auth<B: Serialize>(url: &str, body: &B) -> Result<(), SubmitError> {
    use futures::future::{Either, select};
    use gloo_net::http::Request;
    use gloo_timers::future::TimeoutFuture;

    use crate::core::AuthReply;

    let request = Request::post(url)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| SubmitError::Transport(format!("Failed to send request: {}", e)))?;

    let call = Box::pin(async move {
        let response = request
            .send()
            .await
            .map_err(|_| SubmitError::Transport("Network error. Please try again.".to_string()))?;

        let reply: AuthReply = response.json().await.map_err(|_| {
            SubmitError::Transport(format!(
                "Unexpected response from server (HTTP {})",
                response.status()
            ))
        })?;

        reply.into_result()
    });

    match select(call, Box::pin(TimeoutFuture::new(REQUEST_TIMEOUT_MS))).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            leptos::logging::warn!("Auth request to {} timed out", url);
            Err(SubmitError::Timeout)
        }
    }
}

#[cfg(feature = "ssr")]
async fn post_auth<B: Serialize>(_url: &str, _body: &B) -> Result<(), SubmitError> {
    Err(SubmitError::Transport(
        "Auth requests are not available on server".to_string(),
    ))
}
