//! Dashboard page
//!
//! Landing page after sign-in. Shows who is signed in, re-reading the stored
//! session whenever the auth context reports a session change.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::header::PageHeader;
use crate::core::auth::stored_session;
use crate::ui::auth::use_auth_context;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth_context();

    // Filled after hydration so server and client render the same markup
    let email = RwSignal::new(None::<String>);
    Effect::new(move |_| {
        auth.session_version.track();
        email.set(stored_session().and_then(|s| s.user.email));
    });

    view! {
        <Title text="Dashboard - Synthara"/>
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <PageHeader/>
            <main class="flex-1 max-w-4xl w-full mx-auto px-4 py-8">
                <h1 class="text-3xl font-bold font-headline mb-2">"Dashboard"</h1>
                {move || match email.get() {
                    Some(email) => view! {
                        <p class="text-theme-secondary">"Signed in as " {email}</p>
                    }.into_any(),
                    None => view! {
                        <p class="text-theme-secondary">
                            "You are not signed in. "
                            <A href="/login" attr:class="text-accent-primary font-medium">"Sign in"</A>
                        </p>
                    }.into_any(),
                }}
            </main>
        </div>
    }
}
