// Tree evaluator: a post-order fold producing one f64.

use wcalc_ast::{BinaryOperator, Tree, UnaryOperator, Visitor};

/// Folds a closed tree into its numeric value.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Visitor for Evaluator {
    type Output = f64;

    fn visit_literal(&mut self, value: f64) -> f64 {
        value
    }

    fn visit_unary(&mut self, op: UnaryOperator, operand: f64) -> f64 {
        apply_unary(op, operand)
    }

    fn visit_binary(&mut self, op: BinaryOperator, left: f64, right: f64) -> f64 {
        apply_binary(op, left, right)
    }
}

/// Evaluate a closed tree. IEEE results such as `inf` and `NaN` pass through.
pub fn eval(tree: &Tree<'_>) -> f64 {
    tree.accept(&mut Evaluator)
}

pub fn apply_unary(op: UnaryOperator, x: f64) -> f64 {
    match op {
        UnaryOperator::Neg => -x,
        UnaryOperator::Abs => x.abs(),
        UnaryOperator::Sqrt => x.sqrt(),
        UnaryOperator::Exp => x.exp(),
        UnaryOperator::Ld => x.ln() / 2f64.ln(),
        UnaryOperator::Ln => x.ln(),
        UnaryOperator::Lg => x.log10(),
        UnaryOperator::Sin => x.sin(),
        UnaryOperator::Cos => x.cos(),
        UnaryOperator::Tan => x.tan(),
        UnaryOperator::Asin => x.asin(),
        UnaryOperator::Acos => x.acos(),
        UnaryOperator::Atan => x.atan(),
    }
}

/// `Mod` keeps the sign of `x`; `Log` is the logarithm of `y` to base `x`.
pub fn apply_binary(op: BinaryOperator, x: f64, y: f64) -> f64 {
    match op {
        BinaryOperator::Add => x + y,
        BinaryOperator::Sub => x - y,
        BinaryOperator::Mul => x * y,
        BinaryOperator::Div => x / y,
        BinaryOperator::Mod => x % y,
        BinaryOperator::Pow => x.powf(y),
        BinaryOperator::Log => y.ln() / x.ln(),
    }
}
