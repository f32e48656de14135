//! Line-oriented program format: `S:` states, `G:` alphabet, `D:` directives.
//!
//! A program starts with the declared state list and the tape alphabet,
//! followed by one directive per line:
//!
//! ```text
//! S: q0,q1,halt
//! G: 0,1,_
//! D: q0,{0|1},q1(*r)x,{_},>
//! ```
//!
//! Compilation is all-or-nothing: the first failing line aborts with a
//! [`CompileError`] and no partial table is returned.

use std::fmt;

use tracing::debug;

use crate::alphabet::AlphabetIndex;
use crate::errors::CompileError;
use crate::macros::{Directive, compile_directive};
use crate::state_table::StateTable;
use crate::transition::TransitionRecord;

const STATES_TAG: &str = "S:";
const ALPHABET_TAG: &str = "G:";
const DIRECTIVE_TAG: &str = "D:";
const DIRECTIVE_FIELDS: usize = 5;
/// Characters that would turn a rendered symbol back into a macro.
const RESERVED_SYMBOL_CHARS: [char; 7] = ['|', '(', ')', '{', '}', '[', ']'];

/// A fully expanded transition table with its state and alphabet lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledProgram {
    states: StateTable,
    alphabet: AlphabetIndex,
    transitions: Vec<TransitionRecord>,
}

impl CompiledProgram {
    /// Declared states followed by synthesized ones, in first-seen order.
    #[must_use]
    pub fn states(&self) -> &StateTable {
        &self.states
    }

    /// The tape alphabet, unchanged by compilation.
    #[must_use]
    pub fn alphabet(&self) -> &AlphabetIndex {
        &self.alphabet
    }

    /// Expanded transitions in directive order.
    #[must_use]
    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }
}

impl fmt::Display for CompiledProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{STATES_TAG} {}", join(self.states.iter()))?;
        writeln!(f, "{ALPHABET_TAG} {}", join(self.alphabet.iter()))?;
        for record in &self.transitions {
            let read = self.alphabet.symbol(record.read_symbol).ok_or(fmt::Error)?;
            let write = self.alphabet.symbol(record.write_symbol).ok_or(fmt::Error)?;
            writeln!(
                f,
                "{DIRECTIVE_TAG} {},{read},{},{write},{}",
                record.origin_state, record.destination_state, record.movement
            )?;
        }
        Ok(())
    }
}

fn join<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(",")
}

/// Compile a complete program source.
///
/// Blank lines after the headers are ignored; trailing whitespace, including
/// `\r`, is stripped from every line.
///
/// # Errors
/// Returns [`CompileError`] for malformed headers or directive lines, for a
/// program without directives, and, tagged with its line, for the first
/// directive whose macros fail to resolve or expand.
///
/// # Examples
/// ```
/// use tmc_core::compile_program;
/// let source = "S: q0,done\nG: 0,1\nD: q0,{*},done,{0},-\n";
/// let program = compile_program(source).unwrap_or_else(|err| panic!("{err}"));
/// assert_eq!(program.transitions().len(), 2);
/// assert_eq!(
///     program.to_string(),
///     "S: q0,done\nG: 0,1\nD: q0,0,done,0,-\nD: q0,1,done,0,-\n"
/// );
/// ```
pub fn compile_program(source: &str) -> Result<CompiledProgram, CompileError> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(index, text)| (index + 1, text.trim_end()));

    let (line, text) = lines.next().unwrap_or((1, ""));
    let mut states = parse_state_list(text, line)?;
    let (line, text) = lines.next().unwrap_or((2, ""));
    let alphabet = parse_alphabet(text, line)?;

    let mut transitions = Vec::new();
    let mut directives = 0usize;
    for (line, text) in lines.filter(|(_, text)| !text.trim().is_empty()) {
        let directive = parse_directive(text, line)?;
        compile_directive(&directive, &alphabet, &mut states, &mut transitions)
            .map_err(|error| CompileError::at_line(line, error))?;
        directives += 1;
    }
    if directives == 0 {
        return Err(CompileError::MissingDirectives);
    }

    debug!(
        directives,
        states = states.len(),
        transitions = transitions.len(),
        "compiled program"
    );
    Ok(CompiledProgram {
        states,
        alphabet,
        transitions,
    })
}

/// Parse the `S:` header into the initial state table.
///
/// Repeated names collapse onto their first occurrence.
///
/// # Errors
/// Returns [`CompileError::MissingHeader`] or [`CompileError::EmptyListEntry`].
pub fn parse_state_list(text: &str, line: usize) -> Result<StateTable, CompileError> {
    Ok(header_entries(text, line, STATES_TAG)?.into_iter().collect())
}

/// Parse the `G:` header into the alphabet index.
///
/// # Errors
/// Returns [`CompileError::MissingHeader`], [`CompileError::EmptyListEntry`],
/// [`CompileError::ReservedSymbol`] or [`CompileError::DuplicateSymbol`].
pub fn parse_alphabet(text: &str, line: usize) -> Result<AlphabetIndex, CompileError> {
    let entries = header_entries(text, line, ALPHABET_TAG)?;
    if let Some(symbol) = entries
        .iter()
        .find(|entry| entry.contains(RESERVED_SYMBOL_CHARS))
    {
        return Err(CompileError::ReservedSymbol {
            line,
            symbol: (*symbol).to_string(),
        });
    }
    AlphabetIndex::new(entries).map_err(|symbol| CompileError::DuplicateSymbol { line, symbol })
}

/// Split a `D:` line into its five trimmed fields.
///
/// # Errors
/// Returns [`CompileError::MalformedDirective`] when the tag is missing or
/// the line does not hold exactly five fields.
pub fn parse_directive(text: &str, line: usize) -> Result<Directive<'_>, CompileError> {
    let malformed = || CompileError::MalformedDirective {
        line,
        text: text.to_string(),
    };
    let body = text.strip_prefix(DIRECTIVE_TAG).ok_or_else(malformed)?;
    let fields: Vec<&str> = body.split(',').map(str::trim).collect();
    let fields = <[&str; DIRECTIVE_FIELDS]>::try_from(fields.as_slice()).map_err(|_| malformed())?;
    Ok(Directive::from_fields(fields))
}

fn header_entries<'a>(
    text: &'a str,
    line: usize,
    tag: &'static str,
) -> Result<Vec<&'a str>, CompileError> {
    let list = text
        .strip_prefix(tag)
        .ok_or(CompileError::MissingHeader { line, tag })?
        .trim();
    let entries: Vec<&str> = list.split(',').map(str::trim).collect();
    if entries.iter().any(|entry| entry.is_empty()) {
        return Err(CompileError::EmptyListEntry {
            line,
            list: list.to_string(),
        });
    }
    Ok(entries)
}
