//! Signup form component
//!
//! Creates the account and swaps the fields for a confirmation panel. A failed
//! confirmation link comes back as `?error_description=...`, which replaces
//! the form with an "Invalid Link" panel regardless of submission state.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use super::BrandHeader;
use super::client::submit_signup;
use super::controller::FormController;
use crate::core::{ErrorTransition, Field, SignupCredentials, SignupView};
use crate::ui::common::{Alert, FormField, FormMessage};
use crate::ui::loader::Loader;

/// Query parameter carrying a code-exchange error
pub const LINK_ERROR_PARAM: &str = "error_description";

/// Signup form component
#[component]
pub fn SignupForm(
    /// What a failed signup does after showing its message
    #[prop(default = ErrorTransition::Proceed)]
    on_error: ErrorTransition,
) -> impl IntoView {
    let form = FormController::<SignupCredentials>::new(on_error);
    let query = use_query_map();

    let link_error = Memo::new(move |_| query.with(|q| q.get(LINK_ERROR_PARAM)));
    let view_state = Memo::new(move |_| {
        link_error.with(|error| SignupView::resolve(form.is_confirmed(), error.as_deref()))
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if !view_state.get_untracked().show_fields {
            return;
        }
        let Some(credentials) = form.try_begin() else {
            return;
        };

        spawn_local(async move {
            let outcome = submit_signup(credentials).await;
            form.settle(outcome);
        });
    };

    let loading = Signal::derive(move || form.is_loading());

    let input = move |field: Field, placeholder: &'static str, autocomplete: &'static str| {
        let input_type = if field == Field::Email { "email" } else { "password" };
        view! {
            <FormField
                name=field.name()
                input_type=input_type
                placeholder=placeholder
                autocomplete=autocomplete
                value=Signal::derive(move || form.value(field))
                on_input=Callback::new(move |value| form.set(field, value))
                disabled=loading
                error=Signal::derive(move || form.error(field))
            />
        }
    };

    view! {
        <form
            on:submit=on_submit
            class="flex flex-col gap-4 w-full sm:justify-center sm:w-[400px] space-y-6"
            novalidate=true
        >
            <BrandHeader />

            <Show when=move || view_state.with(|v| v.show_fields)>
                {input(Field::Email, "Email", "email")}
                {input(Field::Password, "Password", "new-password")}
                {input(Field::ConfirmPassword, "Confirm Password", "new-password")}
                <button
                    type="submit"
                    class="btn-primary w-full p-6"
                    disabled=move || loading.get()
                >
                    {move || {
                        if loading.get() {
                            view! { <Loader /> }.into_any()
                        } else {
                            view! { <span>"Create Account"</span> }.into_any()
                        }
                    }}
                </button>
            </Show>

            {move || form.submit_error().map(|message| view! { <FormMessage>{message}</FormMessage> })}

            <span class="self-center text-left flex justify-start items-start gap-1">
                "Already have an account ?"
                <A href="/login" attr:class="text-primary">"Log In"</A>
            </span>

            {move || view_state.get().panel.map(|panel| view! { <Alert panel=panel /> })}
        </form>
    }
}
