//! Expression tree and memory model for the wcalc evaluator.
//!
//! This crate defines the node types the tree builder produces, the
//! fixed-capacity [`Arena`] they are allocated from, the [`Visitor`] used to
//! fold a finished tree, and the [`EvalError`] shared by every stage.

pub mod arena;
pub mod ast;
pub mod error;
pub mod visit;

// Re-export commonly used types
pub use arena::{Arena, CapacityError, Id};
pub use ast::{BinaryOperator, Node, NodeId, Precedence, Slot, Tree, UnaryOperator};
pub use error::{ArenaKind, EvalError, EvalResult};
pub use visit::{SExprPrinter, Visitor};
