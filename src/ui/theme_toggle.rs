use leptos::prelude::*;

use crate::core::theme::{ThemePreference, select_theme};
use crate::ui::common::{Dropdown, DropdownAlign, DropdownItem};
use crate::ui::icon::{Icon, icons};
use crate::ui::theme::use_theme_context;

/// Icon button opening a Light / Dark / System menu
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context();

    let items = ThemePreference::ALL
        .iter()
        .map(|p| DropdownItem::new(p.as_str(), p.label()))
        .collect::<Vec<_>>();

    let on_select = Callback::new(move |id: String| {
        if select_theme(&theme, &id).is_none() {
            leptos::logging::warn!("unknown theme option: {}", id);
        }
    });

    view! {
        <Dropdown
            items=items
            on_select=on_select
            align=DropdownAlign::End
            trigger_class="btn-ghost btn-icon rounded-full"
            menu_class="glass-card"
        >
            <Icon
                name=icons::SUN
                class="h-[1.2rem] w-[1.2rem] rotate-0 scale-100 transition-all dark:-rotate-90 dark:scale-0"
            />
            <Icon
                name=icons::MOON
                class="absolute h-[1.2rem] w-[1.2rem] rotate-90 scale-0 transition-all dark:rotate-0 dark:scale-100"
            />
            <span class="sr-only">"Toggle theme"</span>
        </Dropdown>
    }
}
