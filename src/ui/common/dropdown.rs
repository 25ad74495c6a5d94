use leptos::prelude::*;
use leptos::web_sys::MouseEvent;

/// Dropdown menu item definition
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropdownItem {
    /// Identifier passed to `on_select`
    pub id: String,
    /// Display label
    pub label: String,
}

impl DropdownItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Which edge of the trigger the menu lines up with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropdownAlign {
    Start,
    End,
}

impl DropdownAlign {
    fn class(&self) -> &'static str {
        match self {
            DropdownAlign::Start => "dropdown-align-start",
            DropdownAlign::End => "dropdown-align-end",
        }
    }
}

/// Menu button. The children render inside the trigger.
///
/// Selecting an item runs `on_select` with its id and closes the menu. Clicking
/// the backdrop closes it without selecting.
#[component]
pub fn Dropdown(
    items: Vec<DropdownItem>,
    on_select: Callback<String>,
    #[prop(default = DropdownAlign::Start)]
    align: DropdownAlign,
    /// Extra classes for the trigger button
    #[prop(default = "")]
    trigger_class: &'static str,
    /// Additional CSS classes for the menu panel
    #[prop(default = "")]
    menu_class: &'static str,
    children: Children,
) -> impl IntoView {
    let items = StoredValue::new(items);
    let (is_open, set_is_open) = signal(false);

    let toggle = move |_: MouseEvent| set_is_open.update(|open| *open = !*open);
    let close = move || set_is_open.set(false);

    view! {
        <div class=format!("dropdown-container {}", align.class())>
            <button
                type="button"
                class=format!("dropdown-trigger {}", trigger_class)
                on:click=toggle
                aria-haspopup="menu"
                aria-expanded=move || is_open.get().to_string()
            >
                {children()}
            </button>

            <Show when=move || is_open.get()>
                <div class="dropdown-backdrop" on:click=move |_| close()></div>
                <div class=format!("dropdown-menu {}", menu_class) role="menu">
                    {items.get_value().into_iter().map(|item| {
                        let item_id = item.id.clone();
                        view! {
                            <button
                                type="button"
                                class="dropdown-item"
                                role="menuitem"
                                on:click=move |_| {
                                    on_select.run(item_id.clone());
                                    close();
                                }
                            >
                                {item.label}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
