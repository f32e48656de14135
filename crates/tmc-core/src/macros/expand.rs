//! Expansion of resolved directives into concrete transition records.

use crate::alphabet::AlphabetIndex;
use crate::errors::MacroError;
use crate::state_table::StateTable;
use crate::transition::TransitionRecord;

use super::directive::ResolvedDirective;
use super::symbol_set::{PairingMode, SymbolSet};
use super::template::{StateTemplate, Substitution};

/// Produce the concrete state name for `template` under one symbol pair.
///
/// Templated names are registered in `states`; literal names are returned
/// as written and left for the declared state list to provide.
///
/// # Errors
/// Returns [`MacroError::SymbolOutOfRange`] when the substituted position is
/// not part of `alphabet`.
///
/// # Examples
/// ```
/// use tmc_core::{AlphabetIndex, StateTable, materialize, resolve_state_template};
/// let alphabet = AlphabetIndex::new(["0", "1"]).unwrap_or_default();
/// let mut states = StateTable::default();
/// let name = materialize(&resolve_state_template("q(*r)done"), 1, 0, &alphabet, &mut states);
/// assert_eq!(name.as_deref(), Ok("q1done"));
/// assert!(states.contains("q1done"));
/// ```
pub fn materialize(
    template: &StateTemplate,
    read_symbol: usize,
    write_symbol: usize,
    alphabet: &AlphabetIndex,
    states: &mut StateTable,
) -> Result<String, MacroError> {
    let position = match template.substitution {
        Substitution::None => return Ok(template.prefix.clone()),
        Substitution::FromReadSymbol => read_symbol,
        Substitution::FromWriteSymbol => write_symbol,
    };
    let symbol = alphabet
        .symbol(position)
        .ok_or(MacroError::SymbolOutOfRange { position })?;
    let name = format!("{}{symbol}{}", template.prefix, template.postfix);
    states.insert(name.as_str());
    Ok(name)
}

/// Expand a resolved directive into its transition records.
///
/// Single fields yield one record, positional lists pair alternatives by
/// index, and cross-product lists emit every read alternative against every
/// write alternative with the read list as the outer loop. For each record
/// the origin name is materialized before the destination name.
///
/// # Errors
/// Returns [`MacroError::PairingLengthMismatch`] for positional lists of
/// different lengths, or any error raised by [`materialize`].
pub fn expand(
    directive: &ResolvedDirective,
    alphabet: &AlphabetIndex,
    states: &mut StateTable,
) -> Result<Vec<TransitionRecord>, MacroError> {
    let pairs = symbol_pairs(directive.read(), directive.write())?;
    let mut records = Vec::with_capacity(pairs.len());
    for (read_symbol, write_symbol) in pairs {
        let origin_state = materialize(
            directive.origin(),
            read_symbol,
            write_symbol,
            alphabet,
            states,
        )?;
        let destination_state = materialize(
            directive.destination(),
            read_symbol,
            write_symbol,
            alphabet,
            states,
        )?;
        records.push(TransitionRecord {
            origin_state,
            read_symbol,
            destination_state,
            write_symbol,
            movement: directive.movement(),
        });
    }
    Ok(records)
}

fn symbol_pairs(read: &SymbolSet, write: &SymbolSet) -> Result<Vec<(usize, usize)>, MacroError> {
    match read.mode {
        PairingMode::Single | PairingMode::Positional => {
            if read.indices.len() != write.indices.len() {
                return Err(MacroError::PairingLengthMismatch {
                    read_count: read.indices.len(),
                    write_count: write.indices.len(),
                });
            }
            Ok(read
                .indices
                .iter()
                .copied()
                .zip(write.indices.iter().copied())
                .collect())
        }
        PairingMode::CrossProduct => Ok(read
            .indices
            .iter()
            .flat_map(|&r| write.indices.iter().map(move |&w| (r, w)))
            .collect()),
    }
}
