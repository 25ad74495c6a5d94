//! Remote half of a form submission

use super::client::{AuthClient, SignInRequest, SignUpOptions, SignUpRequest, UserMetadata};
use super::form::{AuthMessage, AuthMode, Submission};
use super::redirect::PageLocation;

pub const SIGN_UP_SUCCESS_MESSAGE: &str =
    "Check your email for the confirmation link to complete registration!";

/// What happened to a validated submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Sign-up accepted; the user must confirm by email
    Registered,
    /// Credentials verified; the caller navigates to `redirect_to`
    SignedIn { redirect_to: String },
    Failed { message: String },
}

impl SubmitOutcome {
    /// Banner to show for this outcome, if any
    pub fn message(&self) -> Option<AuthMessage> {
        match self {
            SubmitOutcome::Registered => Some(AuthMessage::success(SIGN_UP_SUCCESS_MESSAGE)),
            SubmitOutcome::SignedIn { .. } => None,
            SubmitOutcome::Failed { message } => Some(AuthMessage::error(message.clone())),
        }
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            SubmitOutcome::SignedIn { redirect_to } => Some(redirect_to),
            _ => None,
        }
    }
}

/// Send a validated submission to the auth service.
///
/// Makes exactly one remote call. Failures are reduced to the banner text here,
/// so the caller never sees an error type.
pub async fn submit<C>(client: &C, submission: &Submission, location: &PageLocation) -> SubmitOutcome
where
    C: AuthClient + ?Sized,
{
    let values = &submission.values;

    let result = match submission.mode {
        AuthMode::SignUp => {
            let request = SignUpRequest {
                email: values.email.clone(),
                password: values.password.clone(),
                options: SignUpOptions {
                    email_redirect_to: location.callback_url(),
                    data: UserMetadata {
                        full_name: values.full_name.clone(),
                    },
                },
            };
            client
                .sign_up(request)
                .await
                .map(|_| SubmitOutcome::Registered)
        }
        AuthMode::SignIn => {
            let request = SignInRequest {
                email: values.email.clone(),
                password: values.password.clone(),
            };
            client
                .sign_in_with_password(request)
                .await
                .map(|_| SubmitOutcome::SignedIn {
                    redirect_to: location.sign_in_target().to_string(),
                })
        }
    };

    result.unwrap_or_else(|error| SubmitOutcome::Failed {
        message: error.user_message(),
    })
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::core::auth::client::testing::RecordingClient;
    use crate::core::auth::client::{ApiErrorBody, AuthError, FALLBACK_ERROR_MESSAGE};
    use crate::core::auth::form::{AuthFormState, Field, MessageKind};

    fn filled(mode: AuthMode, email: &str, password: &str, full_name: &str) -> AuthFormState {
        let mut state = AuthFormState::new();
        if mode != state.mode() {
            state.toggle_mode();
        }
        state.set_field(Field::Email, email.to_string());
        state.set_field(Field::Password, password.to_string());
        state.set_field(Field::FullName, full_name.to_string());
        state
    }

    /// Drive one submission the way the component does
    fn run(
        state: &mut AuthFormState,
        client: &RecordingClient,
        location: &PageLocation,
    ) -> Option<SubmitOutcome> {
        let submission = state.begin_submit()?;
        let outcome = block_on(submit(client, &submission, location));
        state.finish_submit(submission.generation, outcome.message());
        Some(outcome)
    }

    fn origin() -> PageLocation {
        PageLocation::new("https://app.example.com", None)
    }

    #[test]
    fn test_invalid_input_makes_no_remote_call() {
        let client = RecordingClient::default();
        for (email, password) in [("no-at-sign.com", "secret1"), ("user@example.com", "12345")] {
            let mut state = filled(AuthMode::SignIn, email, password, "");
            assert!(run(&mut state, &client, &origin()).is_none());
        }
        assert_eq!(client.sign_in_count(), 0);
    }

    #[test]
    fn test_sign_up_blank_name_makes_no_remote_call() {
        let client = RecordingClient::default();
        let mut state = filled(AuthMode::SignUp, "user@example.com", "secret1", "  ");

        assert!(run(&mut state, &client, &origin()).is_none());
        assert_eq!(client.sign_up_count(), 0);
        assert!(state.error_for(Field::FullName).is_some());
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_sign_up_calls_registration_once() {
        let client = RecordingClient::default();
        let location = PageLocation::new("https://app.example.com", Some("/billing".to_string()));
        let mut state = filled(AuthMode::SignUp, "ada@example.com", "secret1", " Ada ");

        let outcome = run(&mut state, &client, &location).unwrap();

        assert_eq!(outcome, SubmitOutcome::Registered);
        assert_eq!(client.sign_up_count(), 1);
        assert_eq!(client.sign_in_count(), 0);

        let sign_ups = client.sign_ups.lock().unwrap();
        let request = &sign_ups[0];
        assert_eq!(request.email, "ada@example.com");
        assert_eq!(request.options.data.full_name, " Ada ");
        assert_eq!(
            request.options.email_redirect_to,
            "https://app.example.com/auth/callback?next=%2Fbilling"
        );
    }

    #[test]
    fn test_sign_up_success_message_and_no_navigation() {
        let client = RecordingClient::default();
        let mut state = filled(AuthMode::SignUp, "ada@example.com", "secret1", "Ada");

        let outcome = run(&mut state, &client, &origin()).unwrap();

        assert!(outcome.redirect_target().is_none());
        let message = state.message().unwrap();
        assert_eq!(message.kind, MessageKind::Success);
        assert_eq!(message.text, SIGN_UP_SUCCESS_MESSAGE);
        assert_eq!(state.mode(), AuthMode::SignUp);
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_sign_in_redirects_to_next() {
        let client = RecordingClient::default();
        let location = PageLocation::new("https://app.example.com", Some("/billing".to_string()));
        let mut state = filled(AuthMode::SignIn, "ada@example.com", "secret1", "");

        let outcome = run(&mut state, &client, &location).unwrap();

        assert_eq!(outcome.redirect_target(), Some("/billing"));
        assert_eq!(client.sign_in_count(), 1);
        assert!(state.message().is_none());
    }

    #[test]
    fn test_sign_in_redirects_to_dashboard_by_default() {
        let client = RecordingClient::default();
        let mut state = filled(AuthMode::SignIn, "ada@example.com", "secret1", "");

        let outcome = run(&mut state, &client, &origin()).unwrap();

        assert_eq!(outcome.redirect_target(), Some("/dashboard"));
        let sign_ins = client.sign_ins.lock().unwrap();
        assert_eq!(sign_ins[0].email, "ada@example.com");
        assert_eq!(sign_ins[0].password, "secret1");
    }

    #[test]
    fn test_sign_in_failure_shows_description() {
        let client = RecordingClient::failing(AuthError::Api(ApiErrorBody::with_description(
            "Invalid login credentials",
        )));
        let mut state = filled(AuthMode::SignIn, "ada@example.com", "secret1", "");

        let outcome = run(&mut state, &client, &origin()).unwrap();

        assert!(outcome.redirect_target().is_none());
        assert_eq!(
            state.message(),
            Some(&AuthMessage::error("Invalid login credentials"))
        );
        assert!(!state.is_submitting());
        assert_eq!(state.mode(), AuthMode::SignIn);
    }

    #[test]
    fn test_failure_without_text_uses_fallback() {
        let client = RecordingClient::failing(AuthError::Decode("eof".to_string()));
        let mut state = filled(AuthMode::SignUp, "ada@example.com", "secret1", "Ada");

        run(&mut state, &client, &origin());

        assert_eq!(
            state.message(),
            Some(&AuthMessage::error(FALLBACK_ERROR_MESSAGE))
        );
    }

    #[test]
    fn test_resubmit_after_failure() {
        let client = RecordingClient::failing(AuthError::Network("Failed to fetch".to_string()));
        let mut state = filled(AuthMode::SignIn, "ada@example.com", "secret1", "");

        run(&mut state, &client, &origin());
        run(&mut state, &client, &origin());

        assert_eq!(client.sign_in_count(), 2);
        assert_eq!(state.message(), Some(&AuthMessage::error("Failed to fetch")));
    }
}
