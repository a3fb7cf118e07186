//! Token types handed from the scanner to the tree builder.

use std::f64::consts;
use std::fmt;

use wcalc_ast::{BinaryOperator, UnaryOperator};

/// Represents a token's location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// The 1-based line number
    pub line: usize,
    /// The 1-based column number, counted in characters
    pub column: usize,
    /// The 0-based byte offset from the start of the source
    pub offset: usize,
}

/// Zero-arity keywords that stand in for a literal value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// `pi`
    Pi,
    /// `e`, unless followed by `xp`
    E,
    /// A fresh pseudo-random value in `[0, 1)` each time it appears
    Rand,
}

impl Constant {
    /// The fixed value of this constant, or `None` for `rand`
    pub fn fixed_value(self) -> Option<f64> {
        match self {
            Constant::Pi => Some(consts::PI),
            Constant::E => Some(consts::E),
            Constant::Rand => None,
        }
    }

    /// The spelling the scanner accepts
    pub fn keyword(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
            Constant::Rand => "rand",
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// What a recognised lexical unit means to the tree builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// A decimal literal, already converted
    Number(f64),
    /// `pi`, `e` or `rand`
    Constant(Constant),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// A prefix function or negation
    Unary(UnaryOperator),
    /// An infix operator
    Binary(BinaryOperator),
}

/// A single lexical unit together with its source text and position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'source> {
    /// What the token means
    pub kind: TokenKind,
    /// The exact source text matched
    pub lexeme: &'source str,
    /// Where the lexeme starts
    pub location: Location,
}

impl<'source> Token<'source> {
    /// Create a token from its parts
    pub fn new(kind: TokenKind, lexeme: &'source str, location: Location) -> Self {
        Self {
            kind,
            lexeme,
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_values() {
        assert_eq!(Constant::Pi.fixed_value(), Some(std::f64::consts::PI));
        assert_eq!(Constant::E.fixed_value(), Some(std::f64::consts::E));
        assert_eq!(Constant::Rand.fixed_value(), None);
        assert_eq!(Constant::Rand.to_string(), "rand");
    }
}
