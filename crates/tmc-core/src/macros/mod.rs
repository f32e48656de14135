//! Directive macro resolution and expansion.

mod directive;
mod expand;
mod symbol_set;
mod template;
#[cfg(test)]
pub(crate) mod test_support;

use tracing::{debug, warn};

use crate::alphabet::AlphabetIndex;
use crate::errors::MacroError;
use crate::state_table::StateTable;
use crate::transition::TransitionRecord;

pub use directive::{Directive, ResolvedDirective};
pub use expand::{expand, materialize};
pub use symbol_set::{PairingMode, SymbolSet, resolve_symbol_set};
pub use template::{StateTemplate, Substitution, resolve_state_template};

/// Resolve and expand one directive, appending its records to
/// `transitions`.
///
/// Returns the number of records appended. Nothing is appended when the
/// directive fails.
///
/// # Errors
/// Returns the first [`MacroError`] raised while resolving or expanding.
pub fn compile_directive(
    directive: &Directive<'_>,
    alphabet: &AlphabetIndex,
    states: &mut StateTable,
    transitions: &mut Vec<TransitionRecord>,
) -> Result<usize, MacroError> {
    let resolved = directive.resolve(alphabet)?;
    for name in resolved.literal_states() {
        if !states.contains(name) {
            warn!(state = name, "directive refers to an undeclared state");
        }
    }
    let records = expand(&resolved, alphabet, states)?;
    let count = records.len();
    debug!(
        origin = directive.origin,
        read = directive.read,
        write = directive.write,
        records = count,
        "expanded directive"
    );
    transitions.extend(records);
    Ok(count)
}
