//! Auth context
//!
//! Carries the injected [`AuthClient`] down the component tree, plus a session
//! version that pages track to reload session-derived state after a sign-in.

use std::sync::Arc;

use leptos::prelude::*;

use crate::core::auth::AuthClient;

/// Auth context providing the client and session refresh signal
#[derive(Clone)]
pub struct AuthContext {
    client: Arc<dyn AuthClient>,
    /// Bumped whenever the session changes
    pub session_version: RwSignal<u64>,
}

impl AuthContext {
    pub fn client(&self) -> Arc<dyn AuthClient> {
        Arc::clone(&self.client)
    }

    /// Ask everything that tracks `session_version` to reload
    pub fn refresh(&self) {
        self.session_version.update(|v| *v += 1);
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context(client: Arc<dyn AuthClient>) -> AuthContext {
    let ctx = AuthContext {
        client,
        session_version: RwSignal::new(0),
    };
    provide_context(ctx.clone());
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}
