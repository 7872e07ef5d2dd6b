//! The active session and its gating rules.
//!
//! At most one session exists at a time (single-device, single-user
//! model). The manager owns the in-memory value; the store adapter only
//! holds a durable copy, deleted outright on sign-out.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::accounts::{Account, AccountRegistry, normalize_email};
use crate::storage::{self, KeyValueStore};

/// Login-time failure.
///
/// Unknown emails and wrong passwords map to the same variant so the
/// response cannot be used to enumerate registered accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "incorrect email or password"),
        }
    }
}

impl std::error::Error for AuthError {}

/// The currently authenticated user's live state.
///
/// Wraps an account snapshot frozen at authentication time; only
/// `last_login` is refreshed at the moment of login. Later registry
/// mutations never reach an existing session. Serializes transparently
/// as the snapshot, which is the persisted active-user payload shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session {
    account: Account,
}

impl Session {
    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn name(&self) -> &str {
        &self.account.name
    }

    pub fn email(&self) -> &str {
        &self.account.email
    }

    /// Set at authentication time; always present for sessions created
    /// by this process, optional only for restored legacy payloads.
    pub fn last_login(&self) -> Option<DateTime<Utc>> {
        self.account.last_login
    }
}

/// Owner of the single active-session value.
#[derive(Debug, Default)]
pub struct SessionManager {
    active: Option<Session>,
}

impl SessionManager {
    /// Restores the persisted session, if any.
    ///
    /// A missing or corrupt payload means no session.
    pub fn open(store: &dyn KeyValueStore, key: &str) -> Self {
        Self {
            active: storage::load_slot(store, key),
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.active.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.active.is_some()
    }

    /// Authenticates against the registry and activates a session.
    ///
    /// Absent account and password mismatch fail identically. On success
    /// the matched account's `last_login` is stamped through the
    /// registry, and the session slot is written with the post-update
    /// snapshot before this returns.
    pub fn authenticate(
        &mut self,
        registry: &mut AccountRegistry,
        store: &dyn KeyValueStore,
        users_key: &str,
        session_key: &str,
        email: &str,
        password: &str,
    ) -> Result<&Session, AuthError> {
        let normalized = normalize_email(email);
        let mut snapshot = match registry.find_by_email(&normalized) {
            Some(account) if account.password == password => account.clone(),
            _ => return Err(AuthError::InvalidCredentials),
        };

        let timestamp = Utc::now();
        snapshot.last_login = Some(timestamp);
        registry.record_login(store, users_key, &normalized, timestamp);

        let session = Session { account: snapshot };
        storage::save_slot(store, session_key, &session);
        Ok(&*self.active.insert(session))
    }

    /// Clears the session and deletes the persisted slot.
    ///
    /// Returns the session that just ended, if there was one.
    pub fn sign_out(&mut self, store: &dyn KeyValueStore, session_key: &str) -> Option<Session> {
        store.remove(session_key);
        self.active.take()
    }

    /// Drops the in-memory session without touching the store.
    ///
    /// Used when the durable session disappears out from under us.
    pub fn invalidate(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::MemoryStore;

    use super::*;

    const USERS_KEY: &str = "deejoft-portal-users";
    const SESSION_KEY: &str = "deejoft-portal-active-user";

    fn registry_with_jane(store: &MemoryStore) -> AccountRegistry {
        let mut registry = AccountRegistry::default();
        registry
            .register(store, USERS_KEY, "Jane Doe", "Jane@X.com", "password1")
            .unwrap();
        registry
    }

    #[test]
    fn test_authenticate_success_stamps_last_login() {
        let store = MemoryStore::new();
        let mut registry = registry_with_jane(&store);
        let mut sessions = SessionManager::default();

        let session = sessions
            .authenticate(
                &mut registry,
                &store,
                USERS_KEY,
                SESSION_KEY,
                "JANE@x.com",
                "password1",
            )
            .unwrap();

        assert_eq!(session.email(), "jane@x.com");
        assert!(session.last_login().is_some());
        // The registry account was updated in place
        assert!(registry.accounts()[0].last_login.is_some());
        // The durable copy exists
        assert!(store.load(SESSION_KEY).is_some());
    }

    #[test]
    fn test_wrong_password_and_unknown_email_fail_identically() {
        let store = MemoryStore::new();
        let mut registry = registry_with_jane(&store);
        let mut sessions = SessionManager::default();

        let wrong_password = sessions
            .authenticate(
                &mut registry,
                &store,
                USERS_KEY,
                SESSION_KEY,
                "jane@x.com",
                "wrong",
            )
            .unwrap_err();
        let unknown_email = sessions
            .authenticate(
                &mut registry,
                &store,
                USERS_KEY,
                SESSION_KEY,
                "nobody@x.com",
                "password1",
            )
            .unwrap_err();

        assert_eq!(wrong_password, unknown_email);
        assert!(sessions.current().is_none());
        // Failed attempts never touch the registry
        assert!(registry.accounts()[0].last_login.is_none());
        assert!(store.load(SESSION_KEY).is_none());
    }

    #[test]
    fn test_sign_out_clears_session_and_slot() {
        let store = MemoryStore::new();
        let mut registry = registry_with_jane(&store);
        let mut sessions = SessionManager::default();

        sessions
            .authenticate(
                &mut registry,
                &store,
                USERS_KEY,
                SESSION_KEY,
                "jane@x.com",
                "password1",
            )
            .unwrap();
        assert!(sessions.is_signed_in());

        let ended = sessions.sign_out(&store, SESSION_KEY);
        assert_eq!(ended.unwrap().email(), "jane@x.com");
        assert!(sessions.current().is_none());
        assert!(store.load(SESSION_KEY).is_none());
    }

    #[test]
    fn test_session_round_trips_through_store() {
        let store = MemoryStore::new();
        let mut registry = registry_with_jane(&store);
        let mut sessions = SessionManager::default();

        sessions
            .authenticate(
                &mut registry,
                &store,
                USERS_KEY,
                SESSION_KEY,
                "jane@x.com",
                "password1",
            )
            .unwrap();

        let restored = SessionManager::open(&store, SESSION_KEY);
        assert_eq!(restored.current(), sessions.current());
    }

    #[test]
    fn test_session_payload_is_flat_account_shape() {
        let store = MemoryStore::new();
        let mut registry = registry_with_jane(&store);
        let mut sessions = SessionManager::default();

        sessions
            .authenticate(
                &mut registry,
                &store,
                USERS_KEY,
                SESSION_KEY,
                "jane@x.com",
                "password1",
            )
            .unwrap();

        let raw = store.load(SESSION_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["email"], "jane@x.com");
        assert!(value.get("lastLogin").is_some());
        assert!(value.get("createdAt").is_some());
        // Flat object, no nested account wrapper
        assert!(value.get("account").is_none());
    }

    #[test]
    fn test_corrupt_session_slot_means_signed_out() {
        let store = MemoryStore::new();
        store.save(SESSION_KEY, "{ definitely not json");

        let sessions = SessionManager::open(&store, SESSION_KEY);
        assert!(sessions.current().is_none());
    }
}
