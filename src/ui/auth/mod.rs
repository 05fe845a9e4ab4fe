//! Authentication UI module
//!
//! Login and signup forms, the reactive form controller they share and the
//! browser client for the auth gateway.

mod brand;
pub mod client;
mod controller;
mod login_form;
mod signup_form;

pub use brand::BrandHeader;
pub use controller::FormController;
pub use login_form::{LOGIN_DESTINATION, LoginForm};
pub use signup_form::{LINK_ERROR_PARAM, SignupForm};
