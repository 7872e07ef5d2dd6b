//! Portal reducer (update function).
//!
//! All state mutations happen here. The embedder feeds events through
//! `update(state, event)` and re-renders from the resulting state.
//!
//! Persistence writes are synchronous side effects of the transitions,
//! so a render never observes state the store has not seen yet.

use portal_core::storage::KeyValueStore;

use crate::auth::{self, AuthForms, AuthMode};
use crate::events::PortalEvent;
use crate::state::{PortalState, View};

/// The main reducer function.
pub fn update<S: KeyValueStore>(state: &mut PortalState<S>, event: PortalEvent) {
    match event {
        PortalEvent::NavigateToAuth { mode } => {
            state.mode = mode;
            state.view = View::Auth;
            state.status = None;
        }
        PortalEvent::SwitchMode { mode } => auth::switch_mode(state, mode),
        PortalEvent::SetField { mode, field } => state.forms.set_field(mode, field),
        PortalEvent::SubmitSignup => auth::submit_signup(state),
        PortalEvent::SubmitLogin => auth::submit_login(state),
        PortalEvent::ToggleCourse { title } => state.panels.toggle(&title),
        PortalEvent::SignOut => sign_out(state),
        PortalEvent::SessionExpired => state.sessions.invalidate(),
    }

    guard_dashboard(state);
}

/// The dashboard requires a live session.
///
/// Evaluated after every event so that any path that loses the session
/// falls back to landing, whatever caused it.
fn guard_dashboard<S: KeyValueStore>(state: &mut PortalState<S>) {
    if state.view == View::Dashboard && state.sessions.current().is_none() {
        tracing::warn!("Dashboard held without a session; falling back to landing");
        state.view = View::Landing;
        state.status = None;
    }
}

/// Clears the session and bounces back to the landing page.
///
/// The login form is pre-filled with the email of the session that just
/// ended, and the mode flips to login so the user can come straight
/// back in.
fn sign_out<S: KeyValueStore>(state: &mut PortalState<S>) {
    let ended = state.sessions.sign_out(&state.store, &state.session_key);
    let email = ended.map(|session| session.email().to_string());

    state.forms = AuthForms::reset_with_login_email(email.as_deref().unwrap_or(""));
    state.mode = AuthMode::Login;
    state.status = None;
    state.panels.clear();
    state.view = View::Landing;
}
