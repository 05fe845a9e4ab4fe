//! Application pages module
//!
//! - Landing page (home)
//! - Login page
//! - Signup page
//! - Dashboard
//! - Not found

mod dashboard;
mod landing;
mod login;
mod not_found;
mod signup;

pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use signup::SignupPage;
