//! Portal state composition.
//!
//! `PortalState` is the single aggregate constructed at process start
//! and handed to every handler; there are no ambient globals. Hierarchy:
//!
//! ```text
//! PortalState
//! ├── store: S            (durable key-value backend)
//! ├── registry            (registered accounts, mirrored from the store)
//! ├── sessions            (the active session, or none)
//! ├── catalog             (course titles for the dashboard)
//! ├── view                (landing / auth / dashboard)
//! ├── mode + forms        (auth form controller state)
//! ├── status              (message under the active form)
//! └── panels              (expanded course accordions)
//! ```

use portal_core::accounts::AccountRegistry;
use portal_core::catalog::CourseCatalog;
use portal_core::config::Config;
use portal_core::session::SessionManager;
use portal_core::storage::KeyValueStore;

use crate::auth::{AuthForms, AuthMode, StatusMessage};
use crate::dashboard::ExpandedPanels;

/// Top-level view selector.
///
/// Dashboard is only ever held together with a live session; the
/// reducer's guard forces a fallback to landing otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Auth,
    Dashboard,
}

/// Combined portal state.
pub struct PortalState<S: KeyValueStore> {
    pub(crate) store: S,
    pub(crate) users_key: String,
    pub(crate) session_key: String,

    pub registry: AccountRegistry,
    pub sessions: SessionManager,
    pub catalog: CourseCatalog,

    pub view: View,
    pub mode: AuthMode,
    pub forms: AuthForms,
    pub status: Option<StatusMessage>,
    pub panels: ExpandedPanels,
}

impl<S: KeyValueStore> PortalState<S> {
    /// Builds the aggregate, hydrating accounts and session from the
    /// store. A restored session boots straight to the dashboard;
    /// otherwise the portal opens on the landing page.
    pub fn new(store: S, config: &Config, catalog: CourseCatalog) -> Self {
        let users_key = config.users_key();
        let session_key = config.active_user_key();

        let registry = AccountRegistry::open(&store, &users_key);
        let sessions = SessionManager::open(&store, &session_key);
        let view = if sessions.is_signed_in() {
            View::Dashboard
        } else {
            View::Landing
        };

        Self {
            store,
            users_key,
            session_key,
            registry,
            sessions,
            catalog,
            view,
            mode: AuthMode::default(),
            forms: AuthForms::default(),
            status: None,
            panels: ExpandedPanels::default(),
        }
    }

    /// Read access to the backing store, mainly for embedders that share
    /// it with other components.
    pub fn store(&self) -> &S {
        &self.store
    }
}
