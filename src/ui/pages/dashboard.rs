//! Dashboard page component
//!
//! Destination after signing in or confirming an email address.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Title text="Dashboard | IdeaForge" />
        <div class="min-h-screen bg-theme-primary flex flex-col items-center justify-center p-4 text-center">
            <h1 class="text-4xl font-bold text-theme-primary mb-4">"Your workspaces"</h1>
            <p class="text-theme-secondary mb-8 max-w-md">
                "You're signed in. Workspaces you create will show up here."
            </p>
            <A href="/" attr:class="btn-secondary px-6 py-3">"Back to home"</A>
        </div>
    }
}
