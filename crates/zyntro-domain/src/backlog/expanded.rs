use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::sprint::SprintId;

/// Sprint groups the user has toggled open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpandedGroups {
    ids: BTreeSet<SprintId>,
}

impl ExpandedGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Flip a group open or closed. Returns the new state.
    pub fn toggle(&mut self, id: impl Into<SprintId>) -> bool {
        let id = id.into();
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn expand(&mut self, id: impl Into<SprintId>) {
        self.ids.insert(id.into());
    }

    pub fn collapse(&mut self, id: &str) {
        self.ids.remove(id);
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<S: Into<SprintId>> FromIterator<S> for ExpandedGroups {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut expanded = ExpandedGroups::new();
        assert!(expanded.toggle("s1"));
        assert!(expanded.is_expanded("s1"));
        assert!(!expanded.toggle("s1"));
        assert!(!expanded.is_expanded("s1"));
    }

    #[test]
    fn test_expand_collapse() {
        let mut expanded: ExpandedGroups = ["s1", "s2"].into_iter().collect();
        assert_eq!(expanded.len(), 2);

        expanded.expand("s1");
        assert_eq!(expanded.len(), 2);

        expanded.collapse("s2");
        expanded.collapse("missing");
        assert!(expanded.is_expanded("s1"));
        assert!(!expanded.is_expanded("s2"));
    }

    #[test]
    fn test_serializes_as_list() {
        let expanded: ExpandedGroups = ["b", "a"].into_iter().collect();
        assert_eq!(serde_json::to_string(&expanded).unwrap(), r#"["a","b"]"#);
    }
}
