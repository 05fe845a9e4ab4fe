//! Authentication service contract
//!
//! The hosted auth project is reached through an [`AuthBackend`]. The gateway
//! only depends on this trait, so handlers can be exercised against an
//! in-memory backend.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::reply::TIMEOUT_MESSAGE;
use crate::core::validation::{Credentials, FieldErrors};

/// Authentication service error types
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    InvalidInput(String),

    /// The auth service refused the request
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Request timed out. Please try again.")]
    Timeout,

    #[error("Could not reach the authentication service: {0}")]
    Transport(String),

    #[error("Authentication is not configured")]
    NotConfigured,

    #[error("Confirmation link has expired or was opened in another browser")]
    MissingVerifier,
}

impl From<FieldErrors> for AuthError {
    fn from(errors: FieldErrors) -> Self {
        AuthError::InvalidInput(
            errors
                .first_message()
                .unwrap_or("Invalid input")
                .to_string(),
        )
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AuthError::Timeout
        } else {
            AuthError::Transport(err.to_string())
        }
    }
}

/// Tokens issued by the auth service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    /// Lifetime of the access token in seconds
    #[serde(default)]
    pub expires_in: i64,
}

/// Operations the hosted auth project offers to the gateway
pub trait AuthBackend: Clone + Send + Sync + 'static {
    /// Password sign-in
    fn sign_in(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<Session, AuthError>> + Send;

    /// Account creation; the service emails a link back to `redirect_to`
    fn sign_up(
        &self,
        credentials: &Credentials,
        redirect_to: &str,
        code_challenge: &str,
    ) -> impl Future<Output = Result<(), AuthError>> + Send;

    /// Trade the code from the confirmation link for a session
    fn exchange_code(
        &self,
        auth_code: &str,
        code_verifier: &str,
    ) -> impl Future<Output = Result<Session, AuthError>> + Send;
}

/// Run an upstream call with a bounded wait
pub async fn with_timeout<T>(
    limit: Duration,
    call: impl Future<Output = Result<T, AuthError>>,
) -> Result<T, AuthError> {
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!("Auth call exceeded {:?}", limit);
            Err(AuthError::Timeout)
        }
    }
}

impl AuthError {
    /// Message placed in the reply body
    pub fn reply_message(&self) -> String {
        match self {
            AuthError::Timeout => TIMEOUT_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}
