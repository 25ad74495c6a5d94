//! Authentication flow behind the sign-in / sign-up form
//!
//! This module provides:
//! - The form state machine and its validation rules
//! - Redirect and callback URL construction
//! - The `AuthClient` seam and the GoTrue implementation of it

pub mod client;
pub mod form;
pub mod gotrue;
pub mod redirect;
pub mod submit;

pub use client::{
    ApiErrorBody, AuthClient, AuthError, FALLBACK_ERROR_MESSAGE, SignInRequest, SignUpOptions,
    SignUpRequest, UserMetadata,
};
pub use form::{
    AuthFormState, AuthFormValues, AuthMessage, AuthMode, Field, FieldError, MessageKind,
    Submission, validate,
};
pub use gotrue::{GoTrueClient, Session, stored_session};
pub use redirect::{PageLocation, current_origin};
pub use submit::{SIGN_UP_SUCCESS_MESSAGE, SubmitOutcome, submit};
