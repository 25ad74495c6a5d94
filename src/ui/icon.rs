use leptos::prelude::*;

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
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in public/icons
pub mod icons {
    pub const LOADER: &str = "loader";
    pub const LOG_IN: &str = "log-in";
    pub const USER_PLUS: &str = "user-plus";
    pub const ALERT_TRIANGLE: &str = "alert-triangle";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const SUN: &str = "sun";
    pub const MOON: &str = "moon";
}
