//! Common reusable UI components

pub mod form;
pub mod message;

pub use form::{FormField, FormMessage};
pub use message::Alert;
