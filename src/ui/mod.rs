pub mod auth;
pub mod common;
pub mod icon;
pub mod layout;
pub mod loader;
pub mod pages;
pub mod theme;

pub use icon::{Icon, icons};
pub use layout::{AuthLayout, SiteLayout};
pub use loader::Loader;
pub use theme::{ThemeContext, ThemeMode, provide_theme_context, use_theme_context};
