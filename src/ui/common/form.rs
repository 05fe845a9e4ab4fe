use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Input with its inline validation message
#[component]
pub fn FormField(
    /// Input name and id
    name: &'static str,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value signal
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Whether field is disabled
    #[prop(into)]
    disabled: Signal<bool>,
    /// Validation message to display under the input
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <input
                type=input_type
                id=name
                name=name
                autocomplete=autocomplete
                class="input-base w-full"
                class:border-red-500=move || error.get().is_some()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
                aria-invalid=move || error.get().is_some().to_string()
            />
            {move || {
                error.get().map(|err| view! {
                    <FormMessage>{err}</FormMessage>
                })
            }}
        </div>
    }
}

/// Small destructive-coloured message line, used for field and form errors
#[component]
pub fn FormMessage(children: Children) -> impl IntoView {
    view! {
        <p class="flex items-center gap-1 text-sm font-medium text-theme-error" role="alert">
            <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
            <span>{children()}</span>
        </p>
    }
}
