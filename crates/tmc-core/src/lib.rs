//! Macro resolution and transition expansion for Turing-machine programs.
//!
//! The crate turns compact `D:` directives, which may enumerate symbols with
//! positional `(a|b)` or cross-product `{a|b}` lists, cover the alphabet with
//! `{*}` or `{*-(a|b)}` wildcards, and splice matched symbols into state
//! names through `(*r)`/`(*w)` markers, into one explicit transition record
//! per concrete read/write combination.

mod alphabet;
mod errors;
mod macros;
mod program;
mod state_table;
mod transition;

pub use alphabet::AlphabetIndex;
pub use errors::{CompileError, MacroError};
pub use macros::{
    Directive, PairingMode, ResolvedDirective, StateTemplate, Substitution, SymbolSet,
    compile_directive, expand, materialize, resolve_state_template, resolve_symbol_set,
};
pub use program::{
    CompiledProgram, compile_program, parse_alphabet, parse_directive, parse_state_list,
};
pub use state_table::StateTable;
pub use transition::{Movement, TransitionRecord};
