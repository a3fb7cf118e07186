use std::fmt;

use thiserror::Error;

/// Which of the three per-call arenas ran out of room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArenaKind {
    /// Tree nodes (operators and bound literals)
    Nodes,
    /// Literal values collected while scanning
    Values,
    /// Open leaf slots awaiting a literal
    Leaves,
}

impl fmt::Display for ArenaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ArenaKind::Nodes => "node",
            ArenaKind::Values => "value",
            ArenaKind::Leaves => "leaf",
        })
    }
}

/// Everything that can go wrong while turning text into a number.
///
/// Every variant is terminal for the call that produced it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// An arena would exceed its fixed capacity
    #[error("Out of memory: {arena} arena is limited to {capacity} entries")]
    OutOfCapacity { arena: ArenaKind, capacity: usize },

    /// Fewer literals than open leaf slots
    #[error("Not enough operands")]
    NotEnoughOperands,

    /// More literals than open leaf slots
    #[error("Too many operands")]
    TooManyOperands,

    /// No literal, constant, operator or keyword starts here
    #[error("Lexical error at offset {offset}: unexpected {fragment:?}")]
    Lexical { offset: usize, fragment: String },

    /// A `)` with no matching `(`
    #[error("Unbalanced parentheses: unmatched ')' at offset {offset}")]
    UnmatchedParenthesis { offset: usize },

    /// Input ended with `depth` parentheses still open
    #[error("Unbalanced parentheses: {depth} '(' left open")]
    UnclosedParenthesis { depth: u32 },

    /// Input rejected before scanning
    #[error("Input too long: {len} bytes exceeds the limit of {max}")]
    InputTooLong { len: usize, max: usize },
}

impl EvalError {
    /// The short, static description of this error's kind
    pub fn message(&self) -> &'static str {
        match self {
            EvalError::OutOfCapacity { .. } => "Out of memory",
            EvalError::NotEnoughOperands => "Not enough operands",
            EvalError::TooManyOperands => "Too many operands",
            EvalError::Lexical { .. } => "Lexical error",
            EvalError::UnmatchedParenthesis { .. } | EvalError::UnclosedParenthesis { .. } => {
                "Unbalanced parentheses"
            }
            EvalError::InputTooLong { .. } => "Input too long",
        }
    }
}

/// Result alias used across the wcalc crates
pub type EvalResult<T> = Result<T, EvalError>;
