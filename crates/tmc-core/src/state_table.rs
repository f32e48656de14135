//! Insertion-ordered table of unique state names.

use std::collections::HashMap;

/// Ordered set of state names in first-seen order.
///
/// Declared states are inserted first; names synthesized from templates are
/// appended as expansion reaches them. Re-inserting a known name leaves the
/// table untouched.
///
/// # Examples
/// ```
/// use tmc_core::StateTable;
/// let mut states = StateTable::default();
/// assert_eq!(states.insert("q0"), 0);
/// assert_eq!(states.insert("q1"), 1);
/// assert_eq!(states.insert("q0"), 0);
/// assert_eq!(states.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateTable {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl StateTable {
    /// Insert `name` unless already present and return its position.
    pub fn insert(&mut self, name: impl Into<String>) -> usize {
        let name = name.into();
        if let Some(&position) = self.positions.get(&name) {
            return position;
        }
        let position = self.names.len();
        self.positions.insert(name.clone(), position);
        self.names.push(name);
        position
    }

    /// Whether `name` is already registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Position of `name`, if registered.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Number of registered states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no state has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over the names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for StateTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = Self::default();
        for name in iter {
            table.insert(name);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_seen_order() {
        let table: StateTable = ["start", "halt", "reject"].into_iter().collect();
        assert_eq!(table.iter().collect::<Vec<_>>(), vec!["start", "halt", "reject"]);
    }

    #[test]
    fn reinsertion_is_idempotent() {
        let mut table: StateTable = ["a", "b"].into_iter().collect();
        assert_eq!(table.insert("a"), 0);
        assert_eq!(table.insert("c"), 2);
        assert_eq!(table.insert("b"), 1);
        assert_eq!(table.len(), 3);
        assert_eq!(table.position("c"), Some(2));
        assert!(table.contains("b"));
        assert!(!table.contains("d"));
    }

    #[test]
    fn collapses_repeated_declarations() {
        let table: StateTable = ["q", "q", "r", "q"].into_iter().collect();
        assert_eq!(table.iter().collect::<Vec<_>>(), vec!["q", "r"]);
    }
}
