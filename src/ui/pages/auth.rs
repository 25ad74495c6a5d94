//! Sign in / sign up page

use leptos::prelude::*;
use leptos_meta::Title;

use super::header::PageHeader;
use crate::ui::AuthForm;

#[component]
pub fn AuthPage() -> impl IntoView {
    view! {
        <Title text="Sign In - Synthara"/>
        <div class="min-h-screen bg-theme-primary flex flex-col">
            <PageHeader/>
            <main class="flex-1 flex items-center justify-center p-4">
                <div class="w-full max-w-md">
                    <AuthForm/>
                </div>
            </main>
        </div>
    }
}
