//! Core domain for the portal: durable storage, the account registry,
//! session management, configuration, and the course catalog.
//!
//! Everything here is synchronous and single-threaded. The only shared
//! resource is the key-value store, and every mutation writes through
//! to it before control returns to the caller.

pub mod accounts;
pub mod catalog;
pub mod config;
pub mod paths;
pub mod session;
pub mod storage;
