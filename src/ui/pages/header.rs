use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::ThemeToggle;

/// Top bar with the app name and theme menu
#[component]
pub fn PageHeader() -> impl IntoView {
    view! {
        <header class="border-b border-theme">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <A href="/" attr:class="text-xl font-bold font-headline hover:opacity-80 transition-opacity">
                        "Synthara"
                    </A>
                    <ThemeToggle/>
                </div>
            </div>
        </header>
    }
}
