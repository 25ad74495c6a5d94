use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::auth::GoTrueClient;
use crate::core::config::Config;
use crate::ui::pages::{AuthPage, DashboardPage, NotFoundPage};
use crate::ui::{provide_auth_context, provide_theme_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    provide_theme_context();

    let client = GoTrueClient::new(Config::from_build_env());
    if !client.is_configured() {
        leptos::logging::warn!("SUPABASE_URL / SUPABASE_ANON_KEY not set; auth requests will fail");
    }
    provide_auth_context(Arc::new(client));

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/synthara.css"/>

        <Title text="Synthara"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=AuthPage/>
                <Route path=path!("/login") view=AuthPage/>
                <Route path=path!("/dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
