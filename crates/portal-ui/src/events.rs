//! Portal events.
//!
//! Every user-visible interaction arrives as one of these and is fed to
//! [`crate::update::update`]. Handlers run synchronously; by the time
//! the reducer returns, any persistence the event implied has happened.

use crate::auth::{AuthMode, FormField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortalEvent {
    /// Landing-page navigation into the auth view ("Sign In" carries
    /// login, "Get Started" carries signup).
    NavigateToAuth { mode: AuthMode },

    /// Toggle between the signup and login forms.
    SwitchMode { mode: AuthMode },

    /// Edit one field of one form.
    SetField { mode: AuthMode, field: FormField },

    /// Submit the signup form.
    SubmitSignup,

    /// Submit the login form.
    SubmitLogin,

    /// Expand or collapse a course panel on the dashboard.
    ToggleCourse { title: String },

    /// End the session and return to the landing page.
    SignOut,

    /// The durable session disappeared out from under us (external
    /// expiry). The in-memory session is dropped; the dashboard guard
    /// does the rest.
    SessionExpired,
}
