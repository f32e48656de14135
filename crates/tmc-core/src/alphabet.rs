//! Ordered tape alphabet with reverse symbol lookup.

use std::collections::HashMap;

/// Ordered, duplicate-free tape alphabet.
///
/// Positions are zero-based and follow declaration order. The index is built
/// once before any directive is expanded and is read-only afterwards.
///
/// # Examples
/// ```
/// use tmc_core::AlphabetIndex;
/// let alphabet = AlphabetIndex::new(["0", "1", "_"]).unwrap_or_default();
/// assert_eq!(alphabet.position("1"), Some(1));
/// assert_eq!(alphabet.symbol(2), Some("_"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlphabetIndex {
    symbols: Vec<String>,
    positions: HashMap<String, usize>,
}

impl AlphabetIndex {
    /// Build an index from symbols in declaration order.
    ///
    /// # Errors
    /// Returns the first symbol that appears more than once.
    pub fn new<I, S>(symbols: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::default();
        for symbol in symbols {
            let symbol = symbol.into();
            if index.positions.contains_key(&symbol) {
                return Err(symbol);
            }
            index.positions.insert(symbol.clone(), index.symbols.len());
            index.symbols.push(symbol);
        }
        Ok(index)
    }

    /// Position of `symbol`, if it belongs to the alphabet.
    #[must_use]
    pub fn position(&self, symbol: &str) -> Option<usize> {
        self.positions.get(symbol).copied()
    }

    /// Symbol text stored at `position`.
    #[must_use]
    pub fn symbol(&self, position: usize) -> Option<&str> {
        self.symbols.get(position).map(String::as_str)
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the alphabet declares no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate over the symbols in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_positions_in_declaration_order() {
        let Ok(alphabet) = AlphabetIndex::new(["a", "b", "c"]) else {
            panic!("alphabet should build");
        };
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.position("a"), Some(0));
        assert_eq!(alphabet.position("c"), Some(2));
        assert_eq!(alphabet.position("d"), None);
        assert_eq!(alphabet.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn rejects_repeated_symbols() {
        assert_eq!(AlphabetIndex::new(["a", "b", "a"]), Err("a".to_string()));
    }

    #[test]
    fn supports_multi_character_symbols() {
        let Ok(alphabet) = AlphabetIndex::new(["blank", "#", "10"]) else {
            panic!("alphabet should build");
        };
        assert_eq!(alphabet.position("10"), Some(2));
        assert_eq!(alphabet.symbol(0), Some("blank"));
        assert_eq!(alphabet.symbol(3), None);
    }
}
