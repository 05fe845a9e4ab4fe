use leptos::prelude::*;
use leptos_router::components::A;

/// Logo link and tagline shown above both auth forms
#[component]
pub fn BrandHeader() -> impl IntoView {
    view! {
        <A href="/" attr:class="w-full flex justify-start items-center">
            <img src="/logo.svg" alt="IdeaForge logo" height="52" width="50" />
            <span class="font-semibold dark:text-white text-4xl ml-2">"IdeaForge."</span>
        </A>
        <p class="text-sm text-foreground/60">
            "An all-In-One Collaboration and Productivity Platform"
        </p>
    }
}
