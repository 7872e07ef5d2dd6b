//! Auth form state.
//!
//! Two mutually exclusive forms (signup, login) plus the status message
//! shown beneath whichever one is active. Values survive mode switches;
//! only explicit resets clear them.

/// Which auth form is active.
///
/// Freely bidirectional, no guard conditions. The portal opens on the
/// signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Signup,
    Login,
}

/// Severity of the status line under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Success/error message displayed under the active form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub message: String,
}

impl StatusMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }
}

/// Signup form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub terms: bool,
}

/// Login form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

/// Both auth forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForms {
    pub signup: SignupForm,
    pub login: LoginForm,
}

impl AuthForms {
    /// Fresh defaults with the login email pre-filled.
    ///
    /// Used after signup (new normalized email) and after sign-out
    /// (email of the session that just ended).
    pub fn reset_with_login_email(email: &str) -> Self {
        Self {
            signup: SignupForm::default(),
            login: LoginForm {
                email: email.to_string(),
                ..LoginForm::default()
            },
        }
    }

    /// Mutates one field of one form, leaving the other form untouched.
    ///
    /// Fields that do not exist on the targeted form are ignored.
    pub fn set_field(&mut self, mode: AuthMode, field: FormField) {
        match (mode, field) {
            (AuthMode::Signup, FormField::Name(value)) => self.signup.name = value,
            (AuthMode::Signup, FormField::Email(value)) => self.signup.email = value,
            (AuthMode::Signup, FormField::Password(value)) => self.signup.password = value,
            (AuthMode::Signup, FormField::Terms(value)) => self.signup.terms = value,
            (AuthMode::Login, FormField::Email(value)) => self.login.email = value,
            (AuthMode::Login, FormField::Password(value)) => self.login.password = value,
            (AuthMode::Login, FormField::Remember(value)) => self.login.remember = value,
            _ => {}
        }
    }
}

/// A single form field addressed by `PortalEvent::SetField`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    Name(String),
    Email(String),
    Password(String),
    Terms(bool),
    Remember(bool),
}
