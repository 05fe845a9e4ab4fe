//! Authentication gateway for IdeaForge
//!
//! This module provides the server side of the login and signup pages:
//! - A contract for the hosted auth service
//! - A client for the Supabase GoTrue REST API
//! - REST endpoints used by the browser, including the email confirmation callback

pub mod api;
pub mod service;
pub mod supabase;

pub use api::{AuthApiState, auth_api_router};
pub use service::{AuthBackend, AuthError, Session};
pub use supabase::SupabaseAuth;
