//! Concrete transition records and head movement.

use std::fmt;
use std::str::FromStr;

use crate::errors::MacroError;

/// Direction the tape head moves after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    /// Move one cell to the left (`<`).
    Left,
    /// Move one cell to the right (`>`).
    Right,
    /// Keep the head in place (`-`).
    Stay,
}

impl Movement {
    /// The single-character form used in program text.
    ///
    /// # Examples
    ///
    /// ```
    /// use tmc_core::Movement;
    ///
    /// assert_eq!(Movement::Left.as_char(), '<');
    /// assert_eq!(Movement::Stay.as_char(), '-');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Left => '<',
            Self::Right => '>',
            Self::Stay => '-',
        }
    }
}

impl FromStr for Movement {
    type Err = MacroError;

    fn from_str(field: &str) -> Result<Self, Self::Err> {
        match field {
            "<" => Ok(Self::Left),
            ">" => Ok(Self::Right),
            "-" => Ok(Self::Stay),
            _ => Err(MacroError::InvalidMovement {
                field: field.to_string(),
            }),
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One fully expanded transition.
///
/// Symbols are alphabet positions; state names are already materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRecord {
    /// State the machine must be in.
    pub origin_state: String,
    /// Alphabet position read under the head.
    pub read_symbol: usize,
    /// State entered after the transition.
    pub destination_state: String,
    /// Alphabet position written under the head.
    pub write_symbol: usize,
    /// Head movement after writing.
    pub movement: Movement,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("<", Movement::Left)]
    #[case(">", Movement::Right)]
    #[case("-", Movement::Stay)]
    fn parses_movement_symbols(#[case] input: &str, #[case] expected: Movement) {
        assert_eq!(input.parse::<Movement>(), Ok(expected));
        assert_eq!(expected.to_string(), input);
    }

    #[rstest]
    #[case("")]
    #[case("L")]
    #[case("<<")]
    #[case("> ")]
    fn rejects_other_movement_text(#[case] input: &str) {
        assert_eq!(
            input.parse::<Movement>(),
            Err(MacroError::InvalidMovement {
                field: input.to_string()
            })
        );
    }
}
