//! Wire format shared by the browser and the auth gateway
//!
//! Every auth endpoint answers with an [`AuthReply`]: an empty object on
//! success, `{ "error": { "message": "..." } }` on failure.

use serde::{Deserialize, Serialize};

pub const TIMEOUT_MESSAGE: &str = "Request timed out. Please try again.";

/// Error payload of a failed auth call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyError {
    pub message: String,
}

/// Reply of the remote auth collaborator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ReplyError>,
}

impl AuthReply {
    pub fn ok() -> Self {
        Self { error: None }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            error: Some(ReplyError {
                message: message.into(),
            }),
        }
    }

    /// Any non-empty error message means failure
    pub fn into_result(self) -> Result<(), SubmitError> {
        match self.error {
            Some(error) if !error.message.is_empty() => Err(SubmitError::Rejected(error.message)),
            _ => Ok(()),
        }
    }
}

/// Why a submission did not succeed, as seen by the form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The auth service answered with an error message
    #[error("{0}")]
    Rejected(String),

    /// No answer within the configured bound
    #[error("Request timed out. Please try again.")]
    Timeout,

    /// The request could not be sent or the reply could not be read
    #[error("{0}")]
    Transport(String),
}

impl SubmitError {
    /// Message shown in the form-level message region
    pub fn message(&self) -> String {
        self.to_string()
    }
}
