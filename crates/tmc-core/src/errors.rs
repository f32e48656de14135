//! Error types shared by the macro resolution and program modules.

use thiserror::Error;

/// Errors surfaced while resolving and expanding a single directive.
///
/// Every variant carries the offending field text so diagnostics can point
/// at the exact macro that failed.
///
/// # Examples
/// ```
/// use tmc_core::MacroError;
/// let err = MacroError::UnknownSymbol {
///     symbol: "x".into(),
///     field: "{a|x}".into(),
/// };
/// assert_eq!(err.to_string(), "unknown symbol `x` in field `{a|x}`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacroError {
    /// A referenced symbol is not part of the alphabet.
    #[error("unknown symbol `{symbol}` in field `{field}`")]
    UnknownSymbol {
        /// The symbol text that failed the lookup.
        symbol: String,
        /// The complete field the symbol was taken from.
        field: String,
    },
    /// An opening bracket without its closer, or a closer without its opener.
    #[error("malformed bracket in field `{field}`")]
    MalformedBracket {
        /// The offending field.
        field: String,
    },
    /// A bracket body starting with `*` that is neither `*` nor `*-(...)`.
    #[error("malformed wildcard in field `{field}`, expected `*` or `*-(a|b|...)`")]
    MalformedWildcard {
        /// The offending field.
        field: String,
    },
    /// An unbracketed field listing more than one alternative.
    #[error("field `{field}` lists alternatives without brackets")]
    UnbracketedAlternatives {
        /// The offending field.
        field: String,
    },
    /// A wildcard exclusion removed every alphabet symbol.
    #[error("field `{field}` excludes every alphabet symbol")]
    EmptySymbolSet {
        /// The offending field.
        field: String,
    },
    /// Read and write fields of one directive use different bracket kinds.
    #[error("read field `{read}` and write field `{write}` use different pairing modes")]
    PairingModeMismatch {
        /// The read field text.
        read: String,
        /// The write field text.
        write: String,
    },
    /// Positional pairing with unequal alternative counts.
    #[error(
        "positional pairing needs equal counts, read field has {read_count} \
         and write field has {write_count}"
    )]
    PairingLengthMismatch {
        /// Number of read alternatives.
        read_count: usize,
        /// Number of write alternatives.
        write_count: usize,
    },
    /// A symbol position does not belong to the alphabet in use.
    #[error("symbol position {position} is outside the alphabet")]
    SymbolOutOfRange {
        /// The offending position.
        position: usize,
    },
    /// The movement field is not `<`, `>` or `-`.
    #[error("invalid movement `{field}`, expected one of `<`, `>`, `-`")]
    InvalidMovement {
        /// The offending field.
        field: String,
    },
}

/// Errors surfaced while compiling a complete program source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// A header line is missing or does not start with its tag.
    #[error("line {line}: expected a `{tag} ` header")]
    MissingHeader {
        /// One-based source line.
        line: usize,
        /// The expected tag, `S:` or `G:`.
        tag: &'static str,
    },
    /// A comma-separated header list contains an empty entry.
    #[error("line {line}: empty entry in list `{list}`")]
    EmptyListEntry {
        /// One-based source line.
        line: usize,
        /// The list text after the tag.
        list: String,
    },
    /// The alphabet declares the same symbol twice.
    #[error("line {line}: alphabet symbol `{symbol}` is declared twice")]
    DuplicateSymbol {
        /// One-based source line.
        line: usize,
        /// The repeated symbol.
        symbol: String,
    },
    /// An alphabet symbol contains a character reserved by the field grammar.
    #[error(
        "line {line}: alphabet symbol `{symbol}` contains one of the reserved characters `|()[]{{}}`"
    )]
    ReservedSymbol {
        /// One-based source line.
        line: usize,
        /// The offending symbol.
        symbol: String,
    },
    /// A directive line does not have the `D: a,b,c,d,e` shape.
    #[error("line {line}: malformed directive `{text}`, expected `D: state,read,state,write,move`")]
    MalformedDirective {
        /// One-based source line.
        line: usize,
        /// The raw line.
        text: String,
    },
    /// The program has headers but no directive lines.
    #[error("program contains no directives")]
    MissingDirectives,
    /// A directive failed macro resolution or expansion.
    #[error("line {line}: {error}")]
    Directive {
        /// One-based source line.
        line: usize,
        /// The underlying macro failure.
        error: MacroError,
    },
}

impl CompileError {
    /// Attach a source line to a macro failure.
    #[must_use]
    pub fn at_line(line: usize, error: MacroError) -> Self {
        Self::Directive { line, error }
    }
}
