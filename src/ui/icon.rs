use leptos::prelude::*;

/// Icon rendered from `/icons/{name}.svg`
#[component]
pub fn Icon(
    /// Icon file name without the .svg extension
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const MAIL_CHECK: &str = "mail-check";
    pub const MENU: &str = "menu";
    pub const MOON: &str = "moon";
    pub const SUN: &str = "sun";
    pub const X: &str = "x";
}
