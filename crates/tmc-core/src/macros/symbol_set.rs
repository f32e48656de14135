//! Resolution of read and write symbol fields into alphabet positions.

use crate::alphabet::AlphabetIndex;
use crate::errors::MacroError;

/// How a field's alternatives pair with the opposite field of a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PairingMode {
    /// A bare symbol without brackets.
    Single,
    /// `(a|b)`: alternatives pair 1:1 by position.
    Positional,
    /// `{a|b}` or `[a|b]`: every read alternative pairs with every write
    /// alternative.
    CrossProduct,
}

/// Alphabet positions referenced by one field, with their pairing mode.
///
/// `indices` is never empty and keeps the order written in the field, or
/// alphabet order for wildcards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolSet {
    /// Referenced alphabet positions.
    pub indices: Vec<usize>,
    /// Pairing mode selected by the enclosing bracket.
    pub mode: PairingMode,
}

const BRACKETS: [(char, char, PairingMode); 3] = [
    ('(', ')', PairingMode::Positional),
    ('{', '}', PairingMode::CrossProduct),
    ('[', ']', PairingMode::CrossProduct),
];

const WILDCARD: &str = "*";
const EXCLUSION_OPEN: &str = "*-(";
const EXCLUSION_CLOSE: char = ')';

/// Resolve a read or write field against `alphabet`.
///
/// # Errors
/// Returns [`MacroError`] when the brackets are unbalanced, a wildcard is
/// malformed, a symbol is not in the alphabet, an unbracketed field lists
/// several alternatives, or a wildcard exclusion leaves nothing.
///
/// # Examples
/// ```
/// use tmc_core::{AlphabetIndex, PairingMode, resolve_symbol_set};
/// let alphabet = AlphabetIndex::new(["0", "1", "_"]).unwrap_or_default();
/// let set = resolve_symbol_set("{*-(_)}", &alphabet);
/// assert_eq!(set.map(|s| (s.indices, s.mode)), Ok((vec![0, 1], PairingMode::CrossProduct)));
/// ```
pub fn resolve_symbol_set(field: &str, alphabet: &AlphabetIndex) -> Result<SymbolSet, MacroError> {
    // An exclusion is only meaningful inside brackets.
    if field.starts_with(EXCLUSION_OPEN) {
        return Err(MacroError::MalformedWildcard {
            field: field.to_string(),
        });
    }
    let (mode, body) = split_brackets(field)?;
    let indices = match mode {
        PairingMode::Single => {
            if body.contains('|') {
                return Err(MacroError::UnbracketedAlternatives {
                    field: field.to_string(),
                });
            }
            vec![lookup(body, field, alphabet)?]
        }
        PairingMode::Positional => resolve_body(body, field, alphabet)?,
        PairingMode::CrossProduct => dedup_in_order(resolve_body(body, field, alphabet)?),
    };
    if indices.is_empty() {
        return Err(MacroError::EmptySymbolSet {
            field: field.to_string(),
        });
    }
    Ok(SymbolSet { indices, mode })
}

fn split_brackets(field: &str) -> Result<(PairingMode, &str), MacroError> {
    for (open, close, mode) in BRACKETS {
        if let Some(rest) = field.strip_prefix(open) {
            return rest
                .strip_suffix(close)
                .map(|body| (mode, body))
                .ok_or_else(|| MacroError::MalformedBracket {
                    field: field.to_string(),
                });
        }
    }
    if field.ends_with([')', '}', ']']) {
        return Err(MacroError::MalformedBracket {
            field: field.to_string(),
        });
    }
    Ok((PairingMode::Single, field))
}

fn resolve_body(body: &str, field: &str, alphabet: &AlphabetIndex) -> Result<Vec<usize>, MacroError> {
    if body.starts_with(WILDCARD) {
        return resolve_wildcard(body, field, alphabet);
    }
    lookup_all(body, field, alphabet)
}

fn resolve_wildcard(
    body: &str,
    field: &str,
    alphabet: &AlphabetIndex,
) -> Result<Vec<usize>, MacroError> {
    if body == WILDCARD {
        return Ok((0..alphabet.len()).collect());
    }
    let excluded = body
        .strip_prefix(EXCLUSION_OPEN)
        .and_then(|rest| rest.strip_suffix(EXCLUSION_CLOSE))
        .ok_or_else(|| MacroError::MalformedWildcard {
            field: field.to_string(),
        })?;
    let excluded = lookup_all(excluded, field, alphabet)?;
    Ok((0..alphabet.len())
        .filter(|position| !excluded.contains(position))
        .collect())
}

fn lookup_all(list: &str, field: &str, alphabet: &AlphabetIndex) -> Result<Vec<usize>, MacroError> {
    list.split('|')
        .map(|symbol| lookup(symbol, field, alphabet))
        .collect()
}

fn lookup(symbol: &str, field: &str, alphabet: &AlphabetIndex) -> Result<usize, MacroError> {
    alphabet
        .position(symbol)
        .ok_or_else(|| MacroError::UnknownSymbol {
            symbol: symbol.to_string(),
            field: field.to_string(),
        })
}

fn dedup_in_order(indices: Vec<usize>) -> Vec<usize> {
    let mut seen = Vec::with_capacity(indices.len());
    for index in indices {
        if !seen.contains(&index) {
            seen.push(index);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::macros::test_support::{alphabet, resolve_err, resolve_ok};
    use rstest::rstest;

    #[test]
    fn resolves_bare_symbol() {
        let set = resolve_ok("1", &alphabet(&["0", "1", "_"]));
        assert_eq!(set.indices, vec![1]);
        assert_eq!(set.mode, PairingMode::Single);
    }

    #[rstest]
    #[case("(b|a)", vec![1, 0], PairingMode::Positional)]
    #[case("{c|a}", vec![2, 0], PairingMode::CrossProduct)]
    #[case("[a|c|b]", vec![0, 2, 1], PairingMode::CrossProduct)]
    #[case("(a)", vec![0], PairingMode::Positional)]
    fn keeps_written_order(
        #[case] field: &str,
        #[case] expected: Vec<usize>,
        #[case] mode: PairingMode,
    ) {
        let set = resolve_ok(field, &alphabet(&["a", "b", "c"]));
        assert_eq!(set.indices, expected);
        assert_eq!(set.mode, mode);
    }

    #[rstest]
    #[case("{*}", PairingMode::CrossProduct)]
    #[case("[*]", PairingMode::CrossProduct)]
    #[case("(*)", PairingMode::Positional)]
    fn wildcard_expands_to_whole_alphabet(#[case] field: &str, #[case] mode: PairingMode) {
        let set = resolve_ok(field, &alphabet(&["a", "b", "c", "d"]));
        assert_eq!(set.indices, vec![0, 1, 2, 3]);
        assert_eq!(set.mode, mode);
    }

    #[rstest]
    #[case("{*-(b)}", vec![0, 2, 3])]
    #[case("[*-(d|a)]", vec![1, 2])]
    #[case("(*-(c))", vec![0, 1, 3])]
    fn wildcard_exclusion_preserves_alphabet_order(
        #[case] field: &str,
        #[case] expected: Vec<usize>,
    ) {
        assert_eq!(resolve_ok(field, &alphabet(&["a", "b", "c", "d"])).indices, expected);
    }

    #[test]
    fn cross_product_collapses_repeats() {
        assert_eq!(resolve_ok("{b|a|b}", &alphabet(&["a", "b"])).indices, vec![1, 0]);
    }

    #[test]
    fn positional_keeps_repeats() {
        assert_eq!(resolve_ok("(b|a|b)", &alphabet(&["a", "b"])).indices, vec![1, 0, 1]);
    }

    #[test]
    fn bare_star_outside_brackets_is_a_literal_symbol() {
        assert_eq!(resolve_ok("*", &alphabet(&["a", "*"])).indices, vec![1]);
        assert_eq!(resolve_ok("*-a", &alphabet(&["a", "*-a"])).indices, vec![1]);
    }

    #[rstest]
    #[case("(a|b")]
    #[case("{a|b)")]
    #[case("[a")]
    #[case("a|b}")]
    #[case("a)")]
    #[case("(")]
    fn rejects_malformed_brackets(#[case] field: &str) {
        assert_eq!(
            resolve_err(field, &alphabet(&["a", "b"])),
            MacroError::MalformedBracket {
                field: field.to_string()
            }
        );
    }

    #[rstest]
    #[case("{*-a}")]
    #[case("{* }")]
    #[case("{*-(a}")]
    #[case("{*- (a)}")]
    #[case("{**}")]
    #[case("*-(a)")]
    #[case("*-(a|b")]
    fn rejects_malformed_wildcards(#[case] field: &str) {
        assert_eq!(
            resolve_err(field, &alphabet(&["a", "b"])),
            MacroError::MalformedWildcard {
                field: field.to_string()
            }
        );
    }

    #[rstest]
    #[case("x", "x")]
    #[case("{a|x}", "x")]
    #[case("{*-(x)}", "x")]
    #[case("(a|)", "")]
    fn rejects_unknown_symbols(#[case] field: &str, #[case] symbol: &str) {
        assert_eq!(
            resolve_err(field, &alphabet(&["a", "b"])),
            MacroError::UnknownSymbol {
                symbol: symbol.to_string(),
                field: field.to_string(),
            }
        );
    }

    #[test]
    fn rejects_alternatives_without_brackets() {
        assert_eq!(
            resolve_err("a|b", &alphabet(&["a", "b"])),
            MacroError::UnbracketedAlternatives {
                field: "a|b".to_string()
            }
        );
    }

    #[test]
    fn rejects_exclusion_of_every_symbol() {
        assert_eq!(
            resolve_err("{*-(b|a)}", &alphabet(&["a", "b"])),
            MacroError::EmptySymbolSet {
                field: "{*-(b|a)}".to_string()
            }
        );
    }
}
