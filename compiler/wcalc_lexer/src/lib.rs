//! wcalc lexical analyzer
//!
//! Scans an expression one lexical unit at a time: numbers, the constants
//! `pi`, `e` and `rand`, parentheses, and the operator symbols and keywords.
//! No token vector is built; the parser pulls tokens from [`Lexer`] and acts
//! on each as it arrives.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lexer;
pub mod logos_token;
pub mod token;

// Re-export the main types for convenience
pub use lexer::Lexer;
pub use logos_token::LogosToken;
pub use token::{Constant, Location, Token, TokenKind};
