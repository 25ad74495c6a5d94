//! Theme context: the browser-side preference store
//!
//! Provides:
//! - ThemeContext for reactive theme state
//! - System theme detection via prefers-color-scheme
//! - LocalStorage persistence under the `theme` key

use leptos::prelude::*;

use crate::core::theme::{ThemePreference, ThemeStore};

/// localStorage key for the saved preference
pub const STORAGE_KEY_THEME: &str = "theme";

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current preference
    pub preference: RwSignal<ThemePreference>,
    /// Whether the page renders dark, resolving `System` against the OS setting
    pub is_dark: Memo<bool>,
    /// System prefers dark mode
    pub system_prefers_dark: RwSignal<bool>,
}

impl ThemeStore for ThemeContext {
    fn set_theme(&self, preference: ThemePreference) {
        self.preference.set(preference);
        persist_theme(preference);
        self.apply_theme_class();
    }
}

impl ThemeContext {
    /// Apply the dark class to the document element
    pub fn apply_theme_class(&self) {
        #[cfg(feature = "hydrate")]
        {
            let dark = self.is_dark.get_untracked();
            if let Some(html) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let class_list = html.class_list();
                let result = if dark {
                    class_list.add_1("dark")
                } else {
                    class_list.remove_1("dark")
                };
                if result.is_err() {
                    leptos::logging::warn!("could not update theme class");
                }
            }
        }
    }
}

fn persist_theme(preference: ThemePreference) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY_THEME, preference.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = preference;
    }
}

/// Load theme from localStorage
fn load_persisted_theme() -> ThemePreference {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(value)) = storage.get_item(STORAGE_KEY_THEME) {
                    return value.parse().unwrap_or_default();
                }
            }
        }
    }
    ThemePreference::System
}

/// Detect system color scheme preference
fn detect_system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                return media_query.matches();
            }
        }
    }
    false
}

/// Provide theme context to the application
pub fn provide_theme_context() -> ThemeContext {
    let preference = RwSignal::new(load_persisted_theme());
    let system_prefers_dark = RwSignal::new(detect_system_prefers_dark());

    let is_dark = Memo::new(move |_| preference.get().is_dark(system_prefers_dark.get()));

    let ctx = ThemeContext {
        preference,
        is_dark,
        system_prefers_dark,
    };

    // Follow OS changes while the preference is `System`
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                    let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                        move |e: web_sys::MediaQueryListEvent| {
                            system_prefers_dark.set(e.matches());
                        },
                    );

                    let _ = media_query.add_event_listener_with_callback(
                        "change",
                        handler.as_ref().unchecked_ref(),
                    );

                    // Lives as long as the page
                    handler.forget();
                }
            }
        });

        Effect::new(move |_| {
            let _ = ctx.is_dark.get();
            ctx.apply_theme_class();
        });
    }

    provide_context(ctx);

    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}
