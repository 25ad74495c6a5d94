//! Sign-in / sign-up form component
//!
//! One card that switches between the two modes. Validation and state
//! transitions live in [`AuthFormState`]; this component wires them to inputs,
//! runs the remote call and navigates on sign-in.

use leptos::logging::warn;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use super::context::use_auth_context;
use crate::core::auth::{
    AuthFormState, AuthMode, Field, MessageKind, PageLocation, SubmitOutcome, current_origin,
    submit,
};
use crate::ui::common::{Banner, FormField};
use crate::ui::icon::{Icon, icons};

/// Auth form component
#[component]
pub fn AuthForm() -> impl IntoView {
    let auth = use_auth_context();
    let query = use_query_map();
    let navigate = use_navigate();

    let state = RwSignal::new(AuthFormState::new());
    // True while the async task is alive, even after `submitting` was reset
    let pending = RwSignal::new(false);

    let mode = Memo::new(move |_| state.with(|s| s.mode()));
    let busy = Signal::derive(move || pending.get() || state.with(|s| s.is_submitting()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if pending.get_untracked() {
            return;
        }
        let Some(submission) = state.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };

        let location = PageLocation::new(
            current_origin(),
            query.with_untracked(|q| q.get("next").map(|s| s.to_string())),
        );
        let auth = auth.clone();
        let navigate = navigate.clone();

        pending.set(true);
        spawn_local(async move {
            let outcome = submit(auth.client().as_ref(), &submission, &location).await;

            if let SubmitOutcome::Failed { message } = &outcome {
                warn!("{:?} failed: {}", submission.mode, message);
            }

            let current = state
                .try_update(|s| s.finish_submit(submission.generation, outcome.message()))
                .unwrap_or(false);

            if current {
                if let Some(target) = outcome.redirect_target() {
                    navigate(target, Default::default());
                    auth.refresh();
                }
            }
            pending.set(false);
        });
    };

    let on_toggle = move |_: leptos::ev::MouseEvent| state.update(|s| s.toggle_mode());

    view! {
        <div class="card w-full shadow-xl">
            <div class="card-header text-center">
                <h2 class="card-title font-headline text-2xl sm:text-3xl">
                    {move || mode.get().title()}
                </h2>
                <p class="card-description text-md">
                    {move || mode.get().description()}
                </p>
            </div>

            <form on:submit=on_submit novalidate=true>
                <div class="card-content space-y-6">
                    {move || {
                        state.with(|s| s.message().cloned()).map(|message| {
                            let title = match message.kind {
                                MessageKind::Error => "Authentication Error",
                                MessageKind::Success => mode.get_untracked().success_title(),
                            };
                            view! { <Banner kind=message.kind title=title text=message.text/> }
                        })
                    }}

                    <Show when=move || mode.get() == AuthMode::SignUp>
                        <AuthField state=state field=Field::FullName busy=busy/>
                    </Show>
                    <AuthField state=state field=Field::Email busy=busy/>
                    <AuthField state=state field=Field::Password busy=busy/>
                </div>

                <div class="card-footer flex flex-col gap-4">
                    <button
                        type="submit"
                        class="btn btn-primary w-full text-lg py-3"
                        disabled=move || busy.get()
                    >
                        {move || {
                            let icon = if busy.get() {
                                icons::LOADER
                            } else if mode.get() == AuthMode::SignIn {
                                icons::LOG_IN
                            } else {
                                icons::USER_PLUS
                            };
                            let class = if busy.get() {
                                "mr-2 h-5 w-5 animate-spin"
                            } else {
                                "mr-2 h-5 w-5"
                            };
                            view! { <Icon name=icon class=class/> }
                        }}
                        {move || mode.get().submit_label()}
                    </button>
                    <button
                        type="button"
                        class="btn btn-link"
                        on:click=on_toggle
                        disabled=move || busy.get()
                    >
                        {move || mode.get().toggle_label()}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// One input bound to a field of the form state
#[component]
fn AuthField(state: RwSignal<AuthFormState>, field: Field, busy: Signal<bool>) -> impl IntoView {
    let value = Signal::derive(move || state.with(|s| s.values().get(field).to_string()));
    let error = Signal::derive(move || state.with(|s| s.error_for(field).map(str::to_string)));
    let on_input = Callback::new(move |v: String| state.update(|s| s.set_field(field, v)));
    let autocomplete = Signal::derive(move || field.autocomplete(state.with(|s| s.mode())));

    view! {
        <FormField
            id=field.id()
            label=field.label()
            input_type=field.input_type()
            placeholder=field.placeholder()
            autocomplete=autocomplete
            value=value
            on_input=on_input
            disabled=busy
            error=error
        />
    }
}
