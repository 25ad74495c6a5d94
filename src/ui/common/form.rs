use leptos::prelude::*;

/// Labelled text input with an inline error line
#[component]
pub fn FormField(
    /// Input id and name
    id: &'static str,
    /// Field label text
    label: &'static str,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(into, default = Signal::stored("off"))]
    autocomplete: Signal<&'static str>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    #[prop(into)]
    disabled: Signal<bool>,
    /// Error message shown under the input when Some
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    let error_id = format!("{}-error", id);
    let described_by = error_id.clone();

    view! {
        <div class="space-y-1.5">
            <label for=id class="label text-base">{label}</label>
            <input
                id=id
                name=id
                type=input_type
                class="input-base py-3 h-auto shadow-sm"
                class:border-red-500=move || error.with(Option::is_some)
                placeholder=placeholder
                autocomplete=move || autocomplete.get()
                aria-invalid=move || error.with(Option::is_some).to_string()
                aria-describedby=move || error.with(Option::is_some).then(|| described_by.clone())
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            {move || {
                error.get().map(|err| view! {
                    <p id=error_id.clone() class="text-sm text-destructive mt-1">{err}</p>
                })
            }}
        </div>
    }
}
