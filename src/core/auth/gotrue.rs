//! Supabase GoTrue client for the browser
//!
//! Talks to the hosted auth REST API with `gloo-net`. Only the two calls the form
//! needs are implemented. After a successful sign-in the returned session is kept
//! in localStorage so later page loads see a signed-in user.

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

use super::client::{AuthClient, AuthError, SignInRequest, SignUpRequest, UserMetadata};
use crate::core::config::Config;

/// localStorage key holding the current session JSON
pub const STORAGE_KEY_SESSION: &str = "sb-auth-token";

/// Session returned by the token endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: SessionUser,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of `POST /auth/v1/signup`
#[derive(Debug, Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
    data: &'a UserMetadata,
}

/// Body of `POST /auth/v1/token?grant_type=password`
#[derive(Debug, Serialize)]
struct PasswordGrantBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// GoTrue REST client
#[derive(Debug, Clone)]
pub struct GoTrueClient {
    config: Config,
}

impl GoTrueClient {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.has_supabase()
    }

    /// Sign-up endpoint. The confirmation redirect travels as a query parameter.
    pub fn signup_url(&self, redirect_to: &str) -> Result<String, AuthError> {
        let (base, _) = self.config.require_supabase()?;
        Ok(format!(
            "{}/auth/v1/signup?redirect_to={}",
            base,
            urlencoding::encode(redirect_to)
        ))
    }

    pub fn password_grant_url(&self) -> Result<String, AuthError> {
        let (base, _) = self.config.require_supabase()?;
        Ok(format!("{}/auth/v1/token?grant_type=password", base))
    }

    #[cfg(feature = "hydrate")]
    async fn post_json<T: Serialize>(
        &self,
        url: &str,
        body: &T,
    ) -> Result<gloo_net::http::Response, AuthError> {
        use gloo_net::http::Request;

        let (_, anon_key) = self.config.require_supabase()?;

        let response = Request::post(url)
            .header("apikey", anon_key)
            .header("Authorization", &format!("Bearer {}", anon_key))
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;

        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AuthError::Decode(e.to_string()))?;
        leptos::logging::warn!("auth request to {} failed with status {}", url, status);
        Err(parse_error_body(&text))
    }

    #[cfg(not(feature = "hydrate"))]
    async fn post_json<T: Serialize>(&self, _url: &str, _body: &T) -> Result<(), AuthError> {
        Err(AuthError::Network(
            "Auth requests are only available in the browser".to_string(),
        ))
    }

    async fn sign_up_inner(&self, request: SignUpRequest) -> Result<(), AuthError> {
        let url = self.signup_url(&request.options.email_redirect_to)?;
        let body = SignUpBody {
            email: &request.email,
            password: &request.password,
            data: &request.options.data,
        };
        self.post_json(&url, &body).await?;
        Ok(())
    }

    async fn sign_in_inner(&self, request: SignInRequest) -> Result<(), AuthError> {
        let url = self.password_grant_url()?;
        let body = PasswordGrantBody {
            email: &request.email,
            password: &request.password,
        };

        #[cfg(feature = "hydrate")]
        {
            let response = self.post_json(&url, &body).await?;
            let session: Session = response
                .json()
                .await
                .map_err(|e| AuthError::Decode(e.to_string()))?;
            save_session(&session);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.post_json(&url, &body).await?;
        }

        Ok(())
    }
}

impl AuthClient for GoTrueClient {
    fn sign_up(&self, request: SignUpRequest) -> LocalBoxFuture<'_, Result<(), AuthError>> {
        self.sign_up_inner(request).boxed_local()
    }

    fn sign_in_with_password(
        &self,
        request: SignInRequest,
    ) -> LocalBoxFuture<'_, Result<(), AuthError>> {
        self.sign_in_inner(request).boxed_local()
    }
}

/// Transport failure as shown to the user; JS errors keep only their message
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn network_error(error: gloo_net::Error) -> AuthError {
    match error {
        gloo_net::Error::JsError(js) => AuthError::Network(js.message),
        other => AuthError::Network(other.to_string()),
    }
}

/// Decode a non-2xx body. Unreadable bodies become [`AuthError::Decode`].
pub fn parse_error_body(text: &str) -> AuthError {
    match serde_json::from_str(text) {
        Ok(body) => AuthError::Api(body),
        Err(e) => AuthError::Decode(e.to_string()),
    }
}

/// Save the session to localStorage
#[cfg(feature = "hydrate")]
fn save_session(session: &Session) {
    let Ok(json) = serde_json::to_string(session) else {
        return;
    };
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if storage.set_item(STORAGE_KEY_SESSION, &json).is_err() {
                leptos::logging::warn!("could not persist auth session");
            }
        }
    }
}

/// Session saved by the last successful sign-in, if any
#[cfg(feature = "hydrate")]
pub fn stored_session() -> Option<Session> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    let json = storage.get_item(STORAGE_KEY_SESSION).ok()??;
    serde_json::from_str(&json).ok()
}

#[cfg(not(feature = "hydrate"))]
pub fn stored_session() -> Option<Session> {
    None
}
