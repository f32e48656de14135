//! Directive fields and their resolved macro form.

use crate::alphabet::AlphabetIndex;
use crate::errors::MacroError;
use crate::transition::Movement;

use super::symbol_set::{SymbolSet, resolve_symbol_set};
use super::template::{StateTemplate, Substitution, resolve_state_template};

/// The five raw fields of one `D:` line, whitespace already stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    /// Origin state field, possibly templated.
    pub origin: &'a str,
    /// Read symbol field.
    pub read: &'a str,
    /// Destination state field, possibly templated.
    pub destination: &'a str,
    /// Write symbol field.
    pub write: &'a str,
    /// Movement field.
    pub movement: &'a str,
}

impl<'a> Directive<'a> {
    /// Build a directive from fields in source order: origin, read,
    /// destination, write, movement.
    #[must_use]
    pub fn from_fields([origin, read, destination, write, movement]: [&'a str; 5]) -> Self {
        Self {
            origin,
            read,
            destination,
            write,
            movement,
        }
    }

    /// Resolve all fields and check that read and write pairing agree.
    ///
    /// # Errors
    /// Returns the first [`MacroError`] raised by the symbol fields, a
    /// [`MacroError::PairingModeMismatch`] when the bracket kinds differ, or
    /// [`MacroError::InvalidMovement`].
    pub fn resolve(&self, alphabet: &AlphabetIndex) -> Result<ResolvedDirective, MacroError> {
        let read = resolve_symbol_set(self.read, alphabet)?;
        let write = resolve_symbol_set(self.write, alphabet)?;
        let origin = resolve_state_template(self.origin);
        let destination = resolve_state_template(self.destination);

        if read.mode != write.mode {
            return Err(MacroError::PairingModeMismatch {
                read: self.read.to_string(),
                write: self.write.to_string(),
            });
        }
        let movement = self.movement.parse::<Movement>()?;

        Ok(ResolvedDirective {
            origin,
            destination,
            read,
            write,
            movement,
        })
    }
}

/// A directive whose fields resolved cleanly and whose read and write
/// fields share one pairing mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDirective {
    origin: StateTemplate,
    destination: StateTemplate,
    read: SymbolSet,
    write: SymbolSet,
    movement: Movement,
}

impl ResolvedDirective {
    /// Origin state template.
    #[must_use]
    pub fn origin(&self) -> &StateTemplate {
        &self.origin
    }

    /// Destination state template.
    #[must_use]
    pub fn destination(&self) -> &StateTemplate {
        &self.destination
    }

    /// Resolved read symbols.
    #[must_use]
    pub fn read(&self) -> &SymbolSet {
        &self.read
    }

    /// Resolved write symbols.
    #[must_use]
    pub fn write(&self) -> &SymbolSet {
        &self.write
    }

    /// Head movement shared by every expanded record.
    #[must_use]
    pub fn movement(&self) -> Movement {
        self.movement
    }

    /// Literal state names the directive refers to without a marker.
    pub fn literal_states(&self) -> impl Iterator<Item = &str> {
        [&self.origin, &self.destination]
            .into_iter()
            .filter(|template| template.substitution == Substitution::None)
            .map(|template| template.prefix.as_str())
    }
}
