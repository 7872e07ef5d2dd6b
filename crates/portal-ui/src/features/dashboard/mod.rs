//! Dashboard feature: expanded course panel tracking.

mod state;

pub use state::ExpandedPanels;
