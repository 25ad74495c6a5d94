//! Banner shown above a form after a submission

use leptos::prelude::*;

use crate::core::auth::MessageKind;
use crate::ui::icon::{Icon, icons};

/// Alert banner with an icon, a title and a body line
#[component]
pub fn Banner(
    kind: MessageKind,
    title: &'static str,
    text: String,
) -> impl IntoView {
    let (class, icon) = match kind {
        MessageKind::Error => ("alert alert-destructive", icons::ALERT_TRIANGLE),
        MessageKind::Success => (
            "alert border-green-500/50 bg-green-500/10 text-green-700 dark:text-green-400",
            icons::CHECK_CIRCLE,
        ),
    };
    let role = match kind {
        MessageKind::Error => "alert",
        MessageKind::Success => "status",
    };

    view! {
        <div class=class role=role>
            <Icon name=icon class="h-5 w-5"/>
            <h5 class="alert-title">{title}</h5>
            <p class="alert-description">{text}</p>
        </div>
    }
}
