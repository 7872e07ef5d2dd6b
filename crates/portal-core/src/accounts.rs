//! Registered accounts and the uniqueness rules around them.
//!
//! The registry is an in-memory mirror of the persisted user list;
//! every mutation writes straight back through the store adapter.
//! Persisted records keep the original camelCase field names so old
//! payloads keep loading.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::{self, KeyValueStore};

/// Trims and lowercases an email address.
///
/// The normalized form is the uniqueness key for the registry; every
/// lookup and every stored account goes through this.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// A registered user's persisted credentials and metadata.
///
/// Passwords are plaintext: this is a local-only simulated account
/// store, not a security system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub name: String,
    /// Normalized email; unique within the registry.
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    /// Stamped on each successful login; absent until the first one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

/// Signup-time registry failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterError {
    /// An account with the same normalized email already exists.
    DuplicateEmail,
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterError::DuplicateEmail => {
                write!(f, "an account with this email already exists")
            }
        }
    }
}

impl std::error::Error for RegisterError {}

/// In-memory mirror of all registered accounts.
///
/// Insertion order is preserved; it carries no meaning beyond display.
/// There are no delete or edit operations.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    accounts: Vec<Account>,
}

impl AccountRegistry {
    /// Hydrates the registry from the users slot.
    ///
    /// A missing or corrupt payload yields an empty registry.
    pub fn open(store: &dyn KeyValueStore, key: &str) -> Self {
        Self {
            accounts: storage::load_slot(store, key).unwrap_or_default(),
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Exact match on the normalized email.
    pub fn find_by_email(&self, email: &str) -> Option<&Account> {
        let needle = normalize_email(email);
        self.accounts.iter().find(|account| account.email == needle)
    }

    /// Registers a new account and persists the updated list.
    ///
    /// Fails when the normalized email is already taken; the registry
    /// and the persisted slot stay untouched in that case.
    pub fn register(
        &mut self,
        store: &dyn KeyValueStore,
        key: &str,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<&Account, RegisterError> {
        let normalized = normalize_email(email);
        if self.accounts.iter().any(|account| account.email == normalized) {
            return Err(RegisterError::DuplicateEmail);
        }

        self.accounts.push(Account {
            name: name.trim().to_string(),
            email: normalized,
            password: password.to_string(),
            created_at: Utc::now(),
            last_login: None,
        });
        storage::save_slot(store, key, &self.accounts);

        Ok(self.accounts.last().expect("account was just appended"))
    }

    /// Stamps `last_login` on the matching account and persists.
    ///
    /// Unknown emails are ignored; nothing is written in that case.
    pub fn record_login(
        &mut self,
        store: &dyn KeyValueStore,
        key: &str,
        email: &str,
        timestamp: DateTime<Utc>,
    ) {
        let needle = normalize_email(email);
        if let Some(account) = self
            .accounts
            .iter_mut()
            .find(|account| account.email == needle)
        {
            account.last_login = Some(timestamp);
            storage::save_slot(store, key, &self.accounts);
        }
    }
}
