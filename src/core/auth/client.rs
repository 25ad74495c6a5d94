//! Seam to the hosted auth service
//!
//! The form only needs two operations from the backend. They are expressed as
//! the [`AuthClient`] trait so the concrete GoTrue client can be injected through
//! context and swapped for a recording mock in tests.

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

/// Text shown when an error carries nothing readable
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Profile metadata stored with a new user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpOptions {
    /// Where the confirmation email link sends the user
    pub email_redirect_to: String,
    pub data: UserMetadata,
}

/// Registration request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub options: SignUpOptions,
}

/// Password sign-in request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Error body returned by the auth service.
///
/// GoTrue is inconsistent about the field carrying the text: OAuth-style
/// endpoints use `error_description`, others use `msg` or `message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiErrorBody {
    pub fn with_description(text: impl Into<String>) -> Self {
        Self {
            error_description: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn with_message(text: impl Into<String>) -> Self {
        Self {
            message: Some(text.into()),
            ..Self::default()
        }
    }

    /// `message`, falling back to GoTrue's `msg`
    pub fn message(&self) -> Option<&str> {
        non_empty(&self.message).or_else(|| non_empty(&self.msg))
    }

    /// First readable text: description, then message
    pub fn text(&self) -> Option<&str> {
        non_empty(&self.error_description).or_else(|| self.message())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Auth request failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Auth service rejected the request: {}", .0.text().unwrap_or("no details"))]
    Api(ApiErrorBody),

    #[error("{0}")]
    Network(String),

    #[error("Failed to decode auth response: {0}")]
    Decode(String),

    #[error("Auth service is not configured")]
    NotConfigured,
}

impl AuthError {
    /// Text for the error banner
    pub fn user_message(&self) -> String {
        let text = match self {
            AuthError::Api(body) => body.text(),
            AuthError::Network(message) => Some(message.as_str()).filter(|m| !m.is_empty()),
            AuthError::Decode(_) | AuthError::NotConfigured => None,
        };
        text.unwrap_or(FALLBACK_ERROR_MESSAGE).to_string()
    }
}

/// Operations the auth form needs from the backend
pub trait AuthClient: Send + Sync {
    /// Register a new user; the backend emails a confirmation link
    fn sign_up(&self, request: SignUpRequest) -> LocalBoxFuture<'_, Result<(), AuthError>>;

    /// Verify credentials and establish a session
    fn sign_in_with_password(
        &self,
        request: SignInRequest,
    ) -> LocalBoxFuture<'_, Result<(), AuthError>>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_description() {
        let error = AuthError::Api(ApiErrorBody {
            error_description: Some("Invalid login credentials".to_string()),
            message: Some("invalid_grant".to_string()),
            ..Default::default()
        });
        assert_eq!(error.user_message(), "Invalid login credentials");
    }

    #[test]
    fn test_user_message_falls_back_to_message() {
        let error = AuthError::Api(ApiErrorBody::with_message("User already registered"));
        assert_eq!(error.user_message(), "User already registered");
    }

    #[test]
    fn test_user_message_reads_msg() {
        let error = AuthError::Api(ApiErrorBody {
            msg: Some("Email rate limit exceeded".to_string()),
            ..Default::default()
        });
        assert_eq!(error.user_message(), "Email rate limit exceeded");
    }

    #[test]
    fn test_user_message_skips_empty_fields() {
        let error = AuthError::Api(ApiErrorBody {
            error_description: Some(String::new()),
            message: Some("Signups not allowed".to_string()),
            ..Default::default()
        });
        assert_eq!(error.user_message(), "Signups not allowed");
    }

    #[test]
    fn test_user_message_fallback() {
        assert_eq!(
            AuthError::Api(ApiErrorBody::default()).user_message(),
            FALLBACK_ERROR_MESSAGE
        );
        assert_eq!(
            AuthError::Decode("expected value".to_string()).user_message(),
            FALLBACK_ERROR_MESSAGE
        );
        assert_eq!(AuthError::NotConfigured.user_message(), FALLBACK_ERROR_MESSAGE);
        assert_eq!(
            AuthError::Network(String::new()).user_message(),
            FALLBACK_ERROR_MESSAGE
        );
    }

    #[test]
    fn test_user_message_network() {
        let error = AuthError::Network("Failed to fetch".to_string());
        assert_eq!(error.user_message(), "Failed to fetch");
    }

    #[test]
    fn test_api_error_body_decodes_gotrue_shapes() {
        let oauth: ApiErrorBody = serde_json::from_str(
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        )
        .unwrap();
        assert_eq!(oauth.text(), Some("Invalid login credentials"));
        assert_eq!(oauth.error.as_deref(), Some("invalid_grant"));

        let plain: ApiErrorBody =
            serde_json::from_str(r#"{"code":422,"msg":"Password should be at least 6 characters"}"#)
                .unwrap();
        assert_eq!(plain.text(), Some("Password should be at least 6 characters"));
    }

    #[test]
    fn test_sign_up_request_serializes_like_js_client() {
        let request = SignUpRequest {
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
            options: SignUpOptions {
                email_redirect_to: "https://app.example.com/auth/callback".to_string(),
                data: UserMetadata {
                    full_name: "Ada Lovelace".to_string(),
                },
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["options"]["emailRedirectTo"],
            "https://app.example.com/auth/callback"
        );
        assert_eq!(json["options"]["data"]["full_name"], "Ada Lovelace");
    }

    #[test]
    fn test_error_display() {
        let error = AuthError::Api(ApiErrorBody::with_description("Email not confirmed"));
        assert_eq!(
            error.to_string(),
            "Auth service rejected the request: Email not confirmed"
        );
        assert_eq!(
            AuthError::NotConfigured.to_string(),
            "Auth service is not configured"
        );
    }
}
