//! Auth feature reducers.
//!
//! Handles signup, login, and mode switching. Status wording matches
//! what the portal has always shown, so keep the strings stable.

use portal_core::accounts::{RegisterError, normalize_email};
use portal_core::storage::KeyValueStore;

use super::state::{AuthForms, AuthMode, StatusMessage};
use crate::state::{PortalState, View};

pub const TERMS_NOT_ACCEPTED: &str = "You need to accept the terms to create an account.";
pub const DUPLICATE_EMAIL: &str = "An account with this email already exists. Try signing in.";
pub const INVALID_CREDENTIALS: &str = "Incorrect email or password. Try again.";
pub const SIGNUP_SUCCESS: &str = "Account created. Please sign in with your new credentials.";

/// Validates and submits the signup form.
///
/// The terms check runs before the duplicate-email check; that order is
/// part of the contract. On failure the form values stay exactly as
/// typed. On success the signup form resets, the login form is
/// pre-filled with the new normalized email, and the mode flips to
/// login.
pub fn submit_signup<S: KeyValueStore>(state: &mut PortalState<S>) {
    let form = state.forms.signup.clone();

    if !form.terms {
        state.status = Some(StatusMessage::error(TERMS_NOT_ACCEPTED));
        return;
    }

    let normalized = normalize_email(&form.email);
    match state.registry.register(
        &state.store,
        &state.users_key,
        &form.name,
        &form.email,
        &form.password,
    ) {
        Ok(_) => {
            tracing::debug!("Registered account {normalized}");
            state.forms = AuthForms::reset_with_login_email(&normalized);
            state.mode = AuthMode::Login;
            state.status = Some(StatusMessage::success(SIGNUP_SUCCESS));
        }
        Err(RegisterError::DuplicateEmail) => {
            state.status = Some(StatusMessage::error(DUPLICATE_EMAIL));
        }
    }
}

/// Submits the login form.
///
/// A failed attempt leaves every field as typed, password included
/// (long-standing portal behavior). Success clears the status, seeds
/// the expanded panels with the first course, and moves the view to the
/// dashboard.
pub fn submit_login<S: KeyValueStore>(state: &mut PortalState<S>) {
    let email = state.forms.login.email.clone();
    let password = state.forms.login.password.clone();

    match state.sessions.authenticate(
        &mut state.registry,
        &state.store,
        &state.users_key,
        &state.session_key,
        &email,
        &password,
    ) {
        Ok(session) => {
            tracing::debug!("Signed in as {}", session.email());
            state.status = None;
            match state.catalog.first_title() {
                Some(first) => state.panels.reset_to(first),
                None => state.panels.clear(),
            }
            state.view = View::Dashboard;
        }
        Err(_) => {
            state.status = Some(StatusMessage::error(INVALID_CREDENTIALS));
        }
    }
}

/// Flips the active form. Field values persist on both sides; only the
/// status message clears.
pub fn switch_mode<S: KeyValueStore>(state: &mut PortalState<S>, mode: AuthMode) {
    state.mode = mode;
    state.status = None;
}
