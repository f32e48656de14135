//! State-name templates with an embedded symbol substitution marker.

/// Which matched symbol, if any, is spliced into a templated state name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Substitution {
    /// The state name is used verbatim.
    None,
    /// `(*r)`: splice in the symbol read by the transition.
    FromReadSymbol,
    /// `(*w)`: splice in the symbol written by the transition.
    FromWriteSymbol,
}

/// A state-name field split around its substitution marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTemplate {
    /// Text before the marker, or the whole name without one.
    pub prefix: String,
    /// Text after the marker; empty without one.
    pub postfix: String,
    /// Symbol spliced between prefix and postfix.
    pub substitution: Substitution,
}

const MARKERS: [(&str, Substitution); 2] = [
    ("(*r)", Substitution::FromReadSymbol),
    ("(*w)", Substitution::FromWriteSymbol),
];

/// Split a state-name field at its first `(*r)` or `(*w)` marker.
///
/// Anything that is not exactly one of the two markers, such as `(*x)` or an
/// unterminated `(*r`, stays part of the literal name.
///
/// # Examples
/// ```
/// use tmc_core::{Substitution, resolve_state_template};
/// let template = resolve_state_template("carry(*w)left");
/// assert_eq!(template.prefix, "carry");
/// assert_eq!(template.postfix, "left");
/// assert_eq!(template.substitution, Substitution::FromWriteSymbol);
/// ```
#[must_use]
pub fn resolve_state_template(field: &str) -> StateTemplate {
    for (start, _) in field.match_indices("(*") {
        let (prefix, tail) = field.split_at(start);
        let marker = MARKERS.iter().find_map(|(marker, substitution)| {
            tail.strip_prefix(*marker)
                .map(|postfix| (*substitution, postfix))
        });
        if let Some((substitution, postfix)) = marker {
            return StateTemplate {
                prefix: prefix.to_string(),
                postfix: postfix.to_string(),
                substitution,
            };
        }
    }
    StateTemplate {
        prefix: field.to_string(),
        postfix: String::new(),
        substitution: Substitution::None,
    }
}
