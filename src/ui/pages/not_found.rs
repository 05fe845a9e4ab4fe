//! Fallback for unknown routes

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found | IdeaForge" />
        <div class="min-h-screen bg-theme-primary flex flex-col items-center justify-center gap-6 p-4 text-center">
            <Icon name=icons::ALERT_CIRCLE class="w-12 h-12" />
            <h1 class="text-6xl font-bold text-theme-primary">"404"</h1>
            <p class="text-theme-secondary max-w-md">
                "This page doesn't exist. It may have been moved, or the link is mistyped."
            </p>
            <div class="flex gap-4">
                <A href="/" attr:class="btn-primary px-6 py-3">"Go Home"</A>
                <A href="/login" attr:class="btn-secondary px-6 py-3">"Log In"</A>
            </div>
        </div>
    }
}
