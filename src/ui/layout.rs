//! Route-selected page layouts
//!
//! - `SiteLayout`: marketing pages, fixed header with navigation and theme toggle
//! - `AuthLayout`: login/signup, a single centered column

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

use crate::ui::icon::{Icon, icons};
use crate::ui::theme::{ThemeContext, use_theme_context};

/// Layout for the marketing site
#[component]
pub fn SiteLayout() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <main class="min-h-screen bg-theme-primary overflow-x-hidden">
            <Header theme=theme />
            <Outlet />
        </main>
    }
}

/// Layout for the authentication pages
#[component]
pub fn AuthLayout() -> impl IntoView {
    view! {
        <div class="h-screen p-6 flex justify-center bg-theme-primary">
            <Outlet />
        </div>
    }
}

#[component]
fn Header(theme: ThemeContext) -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-theme-primary/80 backdrop-blur-md border-b border-theme/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <img src="/logo.svg" alt="IdeaForge logo" class="w-8 h-8" />
                        <span class="text-xl font-bold text-theme-primary">"IdeaForge."</span>
                    </A>

                    // Desktop Navigation
                    <div class="hidden md:flex items-center gap-6">
                        <nav class="flex items-center gap-4">
                            <A href="/login" attr:class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors">
                                "Log In"
                            </A>
                            <A href="/signup" attr:class="btn-primary px-4 py-2 text-sm">
                                "Sign Up"
                            </A>
                        </nav>
                        <ThemeToggle theme=theme />
                    </div>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6 text-theme-primary" /> }
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6 text-theme-primary" /> }
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <nav class="py-4 flex flex-col gap-2 border-t border-theme/50">
                        <A href="/login" attr:class="block px-4 py-2 text-sm font-medium text-theme-secondary hover:text-theme-primary rounded-lg">
                            "Log In"
                        </A>
                        <A href="/signup" attr:class="block px-4 py-2 text-sm font-medium text-theme-secondary hover:text-theme-primary rounded-lg">
                            "Sign Up"
                        </A>
                        <ThemeToggle theme=theme />
                    </nav>
                </div>
            </div>
        </header>
    }
}

/// Theme toggle button component
#[component]
fn ThemeToggle(theme: ThemeContext) -> impl IntoView {
    view! {
        <button
            class="p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors
                   border border-gray-300 dark:border-gray-600"
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
        >
            {move || {
                if theme.is_dark.get() {
                    view! { <Icon name=icons::SUN class="w-5 h-5" /> }
                } else {
                    view! { <Icon name=icons::MOON class="w-5 h-5" /> }
                }
            }}
        </button>
    }
}
