use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::ui::pages::{DashboardPage, LandingPage, LoginPage, NotFoundPage, SignupPage};
use crate::ui::{AuthLayout, SiteLayout, provide_theme_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Theme state lives for the whole app and is scoped to this root
    provide_theme_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/ideaforge.css"/>

        <Title text="IdeaForge"/>
        <Meta name="description" content="Create Workspaces with an ease"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <ParentRoute path=path!("") view=SiteLayout>
                    <Route path=path!("") view=LandingPage/>
                </ParentRoute>
                <ParentRoute path=path!("") view=AuthLayout>
                    <Route path=path!("login") view=LoginPage/>
                    <Route path=path!("signup") view=SignupPage/>
                </ParentRoute>
                <Route path=path!("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
