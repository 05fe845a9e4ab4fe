//! Landing page component
//!
//! Hero with the product pitch and calls to action, plus a short feature grid.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};
use leptos_router::components::A;

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text="IdeaForge" />
        <Meta name="description" content="Create Workspaces with an ease" />

        // Hero Section
        <section class="min-h-screen flex items-center justify-center relative pt-16">
            <div class="text-center px-4 max-w-4xl mx-auto">
                <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold text-theme-primary mb-6 tracking-tight">
                    "IdeaForge"
                </h1>
                <p class="text-xl sm:text-2xl text-theme-secondary max-w-2xl mx-auto mb-10 leading-relaxed">
                    "An all-In-One Collaboration and Productivity Platform"
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A href="/signup" attr:class="btn-primary px-6 py-3">
                        "Get IdeaForge Free"
                    </A>
                    <A href="/login" attr:class="btn-secondary px-6 py-3">
                        "Log In"
                    </A>
                </div>
            </div>
        </section>

        // Features Section
        <section class="py-20 px-4">
            <div class="max-w-6xl mx-auto grid md:grid-cols-3 gap-8">
                <FeatureCard
                    title="Workspaces"
                    description="Create workspaces with an ease and keep every project in one place."
                />
                <FeatureCard
                    title="Collaboration"
                    description="Invite your team and work on the same documents together."
                />
                <FeatureCard
                    title="Productivity"
                    description="Notes, plans and files side by side, in light or dark mode."
                />
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="p-6 rounded-xl border border-theme bg-theme-secondary/10">
            <h3 class="text-xl font-semibold text-theme-primary mb-2">{title}</h3>
            <p class="text-theme-secondary">{description}</p>
        </div>
    }
}
