//! Auth feature: the signup/login forms and their reducers.

mod state;
mod update;

pub use state::{AuthForms, AuthMode, FormField, LoginForm, SignupForm, StatusKind, StatusMessage};
pub use update::{
    DUPLICATE_EMAIL, INVALID_CREDENTIALS, SIGNUP_SUCCESS, TERMS_NOT_ACCEPTED, submit_login,
    submit_signup, switch_mode,
};
