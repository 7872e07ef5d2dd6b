//! Expanded panel state.
//!
//! Tracks which course accordions are open on the dashboard. Transient
//! by contract: never persisted, seeded with the first course on login,
//! emptied on sign-out.

use std::collections::BTreeSet;

/// Set of course titles currently expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedPanels {
    open: BTreeSet<String>,
}

impl ExpandedPanels {
    pub fn is_expanded(&self, title: &str) -> bool {
        self.open.contains(title)
    }

    /// Expands a collapsed panel, collapses an expanded one.
    pub fn toggle(&mut self, title: &str) {
        if !self.open.remove(title) {
            self.open.insert(title.to_string());
        }
    }

    /// Replaces the set with exactly one open panel.
    pub fn reset_to(&mut self, title: &str) {
        self.open.clear();
        self.open.insert(title.to_string());
    }

    pub fn clear(&mut self) {
        self.open.clear();
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.open.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut panels = ExpandedPanels::default();
        assert!(!panels.is_expanded("DevOps"));

        panels.toggle("DevOps");
        assert!(panels.is_expanded("DevOps"));

        panels.toggle("DevOps");
        assert!(!panels.is_expanded("DevOps"));
        assert!(panels.is_empty());
    }

    #[test]
    fn test_reset_to_leaves_exactly_one_panel() {
        let mut panels = ExpandedPanels::default();
        panels.toggle("DevOps");
        panels.toggle("Cybersecurity");

        panels.reset_to("Website Development");
        assert_eq!(panels.len(), 1);
        assert!(panels.is_expanded("Website Development"));
        assert!(!panels.is_expanded("DevOps"));
    }
}
