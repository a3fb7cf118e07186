//! Visitor pattern for walking a closed expression [`Tree`](crate::ast::Tree).
//!
//! [`Tree::accept`](crate::ast::Tree::accept) drives the traversal in
//! post-order, so a visitor only ever combines already-visited operands.

use crate::ast::{BinaryOperator, UnaryOperator};

/// Folds an expression tree bottom-up.
pub trait Visitor {
    /// The value produced for each subtree
    type Output;

    fn visit_literal(&mut self, value: f64) -> Self::Output;

    fn visit_unary(&mut self, op: UnaryOperator, operand: Self::Output) -> Self::Output;

    fn visit_binary(
        &mut self,
        op: BinaryOperator,
        left: Self::Output,
        right: Self::Output,
    ) -> Self::Output;
}

/// Renders a tree as a prefix S-expression, e.g. `(* (+ 2 3) 4)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SExprPrinter;

impl Visitor for SExprPrinter {
    type Output = String;

    fn visit_literal(&mut self, value: f64) -> String {
        format!("{value}")
    }

    fn visit_unary(&mut self, op: UnaryOperator, operand: String) -> String {
        format!("({op} {operand})")
    }

    fn visit_binary(&mut self, op: BinaryOperator, left: String, right: String) -> String {
        format!("({op} {left} {right})")
    }
}
