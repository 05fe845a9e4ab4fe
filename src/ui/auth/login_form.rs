//! Login form component
//!
//! Validates on every change, posts the credentials to the auth gateway and
//! navigates to the dashboard once the call settles.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::BrandHeader;
use super::client::submit_login;
use super::controller::FormController;
use crate::core::{Credentials, ErrorTransition, Field};
use crate::ui::common::{FormField, FormMessage};
use crate::ui::loader::Loader;

/// Where a settled login sends the user
pub const LOGIN_DESTINATION: &str = "/dashboard";

/// Login form component
#[component]
pub fn LoginForm(
    /// What a failed sign-in does after showing its message
    #[prop(default = ErrorTransition::Proceed)]
    on_error: ErrorTransition,
) -> impl IntoView {
    let form = FormController::<Credentials>::new(on_error);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(credentials) = form.try_begin() else {
            return;
        };

        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = submit_login(credentials).await;
            let settlement = form.settle(outcome);
            if settlement.terminal {
                navigate(
                    LOGIN_DESTINATION,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        });
    };

    let loading = Signal::derive(move || form.is_loading());

    view! {
        <form
            on:submit=on_submit
            class="flex flex-col gap-4 w-full sm:justify-center sm:w-[400px] space-y-6"
            novalidate=true
        >
            <BrandHeader />

            <FormField
                name=Field::Email.name()
                input_type="email"
                placeholder="Email"
                autocomplete="email"
                value=Signal::derive(move || form.value(Field::Email))
                on_input=Callback::new(move |value| form.set(Field::Email, value))
                disabled=loading
                error=Signal::derive(move || form.error(Field::Email))
            />
            <FormField
                name=Field::Password.name()
                input_type="password"
                placeholder="Password"
                autocomplete="current-password"
                value=Signal::derive(move || form.value(Field::Password))
                on_input=Callback::new(move |value| form.set(Field::Password, value))
                disabled=loading
                error=Signal::derive(move || form.error(Field::Password))
            />

            {move || form.submit_error().map(|message| view! { <FormMessage>{message}</FormMessage> })}

            <button
                type="submit"
                class="btn-primary w-full py-3"
                disabled=move || loading.get()
            >
                {move || {
                    if loading.get() {
                        view! { <Loader /> }.into_any()
                    } else {
                        view! { <span>"Log In"</span> }.into_any()
                    }
                }}
            </button>

            <span class="self-center text-left flex justify-start items-start gap-1">
                "Dont have an account ?"
                <A href="/signup" attr:class="text-primary">"Sign Up"</A>
            </span>
        </form>
    }
}
