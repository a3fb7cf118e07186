//! wcalc: a small arithmetic expression evaluator.
//!
//! Text goes in, one `f64` comes out:
//!
//! ```
//! assert_eq!(wcalc::evaluate("(2 + 3) * 4"), Ok(20.0));
//! assert_eq!(wcalc::evaluate("2 ^ 3 ^ 2"), Ok(512.0));
//! assert!(wcalc::evaluate("2 +").is_err());
//! ```
//!
//! The expression is scanned once, left to right. Operators are inserted
//! into the tree as they are seen, literals are bound to the remaining open
//! slots at the end, and the finished tree is folded into a value. All
//! memory comes from three fixed-capacity arenas owned by the call, so an
//! oversized expression fails fast with [`EvalError::OutOfCapacity`].

pub mod calculator;
pub mod config;
pub mod eval;

pub use calculator::Calculator;
pub use config::CalcConfig;
pub use eval::{eval, Evaluator};
pub use wcalc_ast::{ArenaKind, EvalError, EvalResult, Tree};

/// Evaluate `text` with default limits and fresh, call-scoped arenas.
pub fn evaluate(text: &str) -> EvalResult<f64> {
    Calculator::new().evaluate(text)
}
