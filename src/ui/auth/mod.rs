//! Authentication UI module
//!
//! The sign-in / sign-up form and the context that injects the auth client.

mod auth_form;
mod context;

pub use auth_form::AuthForm;
pub use context::{AuthContext, provide_auth_context, use_auth_context};
