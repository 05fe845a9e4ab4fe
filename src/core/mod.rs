//! Domain models and business logic for the authentication flows

#[cfg(feature = "ssr")]
pub mod auth;
#[cfg(feature = "ssr")]
pub mod config;
pub mod flow;
pub mod reply;
pub mod validation;

pub use flow::{
    ErrorTransition, PanelTone, Settlement, SignupView, StatusPanel, SubmissionState, SubmitFlow,
};
pub use reply::{AuthReply, ReplyError, SubmitError};
pub use validation::{Credentials, Field, FieldErrors, FormSchema, SignupCredentials};
