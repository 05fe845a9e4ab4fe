//! Alert panel used for confirmations and link errors

use crate::core::StatusPanel;
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Alert box with a title and description
#[component]
pub fn Alert(panel: StatusPanel) -> impl IntoView {
    let StatusPanel {
        title,
        description,
        tone,
        show_mail_icon,
    } = panel;

    view! {
        <div role="alert" class=format!("relative w-full rounded-lg border p-4 {}", tone.class())>
            {show_mail_icon.then(|| view! {
                <Icon name=icons::MAIL_CHECK class="absolute left-4 top-4 h-4 w-4"/>
            })}
            <div class:pl-7=show_mail_icon>
                <h5 class="mb-1 font-medium leading-none tracking-tight">{title}</h5>
                <div class="text-sm">{description}</div>
            </div>
        </div>
    }
}
