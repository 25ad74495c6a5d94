pub mod auth;
pub mod common;
pub mod icon;
pub mod pages;
pub mod theme;
pub mod theme_toggle;

pub use auth::{AuthForm, provide_auth_context, use_auth_context};
pub use icon::{Icon, icons};
pub use theme::{ThemeContext, provide_theme_context, use_theme_context};
pub use theme_toggle::ThemeToggle;
