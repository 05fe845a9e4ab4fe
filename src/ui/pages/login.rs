//! Login page component

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::auth::LoginForm;

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Title text="Log In | IdeaForge" />
        <LoginForm />
    }
}
