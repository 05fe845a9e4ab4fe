//! Pending-operation indicator

use leptos::prelude::*;

/// Spinner shown in place of a label or icon while an operation is pending
#[component]
pub fn Loader(
    /// Additional CSS classes
    #[prop(default = "h-6 w-6")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div role="status" aria-live="polite" class="flex items-center justify-center">
            <img src="/spinner.svg" alt="" class=format!("animate-spin {}", class) />
            <span class="sr-only">"Loading..."</span>
        </div>
    }
}
