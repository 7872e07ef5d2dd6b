//! View-state management for the portal.
//!
//! Pure state plus a reducer: construct a [`PortalState`] once at
//! startup, feed it [`PortalEvent`]s through [`update`], and render
//! whatever view the state says. No rendering lives in this crate.

pub mod events;
pub mod features;
pub mod state;
pub mod update;

pub use events::PortalEvent;
pub use features::{auth, dashboard};
pub use state::{PortalState, View};
pub use update::update;
