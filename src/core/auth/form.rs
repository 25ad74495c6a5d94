//! Sign-in / sign-up form state
//!
//! Holds the mode, field values, inline field errors and banner message of one
//! form instance. Transitions are plain methods, so the Leptos component only
//! wraps an [`AuthFormState`] in a signal and the logic stays testable natively.

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address.";
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Password must be at least 6 characters.";
pub const FULL_NAME_REQUIRED_MESSAGE: &str = "Full name is required for sign up.";

/// Which remote operation the form performs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Welcome Back!",
            AuthMode::SignUp => "Create Account",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign in to access your Synthara dashboard.",
            AuthMode::SignUp => "Sign up to start generating synthetic data.",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Sign Up",
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Don't have an account? Sign Up",
            AuthMode::SignUp => "Already have an account? Sign In",
        }
    }

    /// Banner title used for a success message in this mode
    pub fn success_title(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Success",
            AuthMode::SignUp => "Registration Pending",
        }
    }
}

/// Form inputs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    Email,
    Password,
}

impl Field {
    /// DOM id and name of the input
    pub fn id(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email",
            Field::Password => "Password",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            Field::FullName => "text",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::FullName => "Enter your full name",
            Field::Email => "Enter your email address",
            Field::Password => "Create a secure password",
        }
    }

    pub fn autocomplete(&self, mode: AuthMode) -> &'static str {
        match (self, mode) {
            (Field::FullName, _) => "name",
            (Field::Email, _) => "email",
            (Field::Password, AuthMode::SignIn) => "current-password",
            (Field::Password, AuthMode::SignUp) => "new-password",
        }
    }
}

/// Values typed into the form. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormValues {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

impl AuthFormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.full_name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }
}

/// Inline error shown under a single input
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// Validate the form for the given mode.
///
/// The email and password rules apply in both modes. The full name is only
/// required when signing up. Errors come back in field order.
pub fn validate(values: &AuthFormValues, mode: AuthMode) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if mode == AuthMode::SignUp && values.full_name.trim().is_empty() {
        errors.push(FieldError::new(Field::FullName, FULL_NAME_REQUIRED_MESSAGE));
    }

    if !is_valid_email(&values.email) {
        errors.push(FieldError::new(Field::Email, INVALID_EMAIL_MESSAGE));
    }

    if values.password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(FieldError::new(Field::Password, PASSWORD_TOO_SHORT_MESSAGE));
    }

    errors
}

/// Email format check: `local@label.label...tld`.
///
/// The local part allows letters, digits and `_ ' + - .`. It may not start with
/// a dot, may not end with `.` or `'`, and may not contain `..`. Domain labels
/// start with a letter or digit and contain only letters, digits and `-`. The
/// TLD is at least two ASCII letters.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && !local.starts_with('.')
        && !local.contains("..")
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '\'' | '+' | '-' | '.'))
        && local
            .chars()
            .last()
            .is_some_and(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-'));
    if !local_ok {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, hosts)) = labels.split_last() else {
        return false;
    };
    if hosts.is_empty() || tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    hosts.iter().all(|label| {
        label
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Success,
}

/// Banner shown above the fields after a submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl AuthMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }
}

/// Snapshot of a validated submission handed to the async task
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub generation: u64,
    pub mode: AuthMode,
    pub values: AuthFormValues,
}

/// State of one auth form instance
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthFormState {
    mode: AuthMode,
    values: AuthFormValues,
    errors: Vec<FieldError>,
    message: Option<AuthMessage>,
    submitting: bool,
    /// Bumped on every mode toggle; results from an older generation are dropped
    generation: u64,
}

impl AuthFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn values(&self) -> &AuthFormValues {
        &self.values
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn message(&self) -> Option<&AuthMessage> {
        self.message.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Store a typed value and clear that field's inline error
    pub fn set_field(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        self.errors.retain(|e| e.field != field);
    }

    /// Flip between sign-in and sign-up.
    ///
    /// Clears field values, field errors and the message. The submitting flag is
    /// left alone; an in-flight result still resets it when it lands.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.values = AuthFormValues::default();
        self.errors.clear();
        self.message = None;
        self.generation += 1;
    }

    /// Start a submission.
    ///
    /// Returns `None` when one is already in flight or when validation fails. In
    /// the latter case the field errors are stored for display. An email or
    /// password error keeps the previous message; the attempt only counts once
    /// those pass.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.submitting {
            return None;
        }

        self.errors = validate(&self.values, self.mode);
        if self.errors.iter().all(|e| e.field == Field::FullName) {
            self.message = None;
        }
        if !self.errors.is_empty() {
            return None;
        }

        self.submitting = true;
        Some(Submission {
            generation: self.generation,
            mode: self.mode,
            values: self.values.clone(),
        })
    }

    /// Record the result of a submission.
    ///
    /// Always clears the submitting flag. The message is applied only if the
    /// submission belongs to the current generation; returns whether it did.
    pub fn finish_submit(&mut self, generation: u64, message: Option<AuthMessage>) -> bool {
        self.submitting = false;
        if generation != self.generation {
            return false;
        }
        self.message = message;
        true
    }
}
