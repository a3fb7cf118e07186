//! Operator-precedence parser for wcalc expressions.
//!
//! [`parse`] pulls tokens from the lexer and feeds them straight into a
//! [`TreeBuilder`]; there is no intermediate token list. All storage comes
//! from a caller-owned [`Scratch`], so a parse never touches shared state.

mod binder;
pub mod builder;
pub mod parser;
pub mod scratch;

pub use builder::TreeBuilder;
pub use parser::parse;
pub use scratch::Scratch;
