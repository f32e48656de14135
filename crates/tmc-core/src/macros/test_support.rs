//! Test helpers for asserting macro resolution outcomes.
use super::symbol_set::{SymbolSet, resolve_symbol_set};
use crate::alphabet::AlphabetIndex;
use crate::errors::MacroError;

pub(crate) fn alphabet(symbols: &[&str]) -> AlphabetIndex {
    match AlphabetIndex::new(symbols.iter().copied()) {
        Ok(alphabet) => alphabet,
        Err(symbol) => panic!("test alphabet repeats `{symbol}`"),
    }
}

pub(crate) fn resolve_ok(field: &str, alphabet: &AlphabetIndex) -> SymbolSet {
    match resolve_symbol_set(field, alphabet) {
        Ok(set) => set,
        Err(err) => panic!("field should resolve: {err}"),
    }
}

pub(crate) fn resolve_err(field: &str, alphabet: &AlphabetIndex) -> MacroError {
    match resolve_symbol_set(field, alphabet) {
        Ok(set) => panic!("field should fail to resolve, got {set:?}"),
        Err(err) => err,
    }
}
