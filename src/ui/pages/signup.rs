//! Signup page component
//!
//! Also the landing spot for failed email confirmation links.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::auth::SignupForm;

/// Signup page component
#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <Title text="Sign Up | IdeaForge" />
        <SignupForm />
    }
}
