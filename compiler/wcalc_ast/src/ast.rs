// Expression tree for wcalc.
// Nodes live in an `Arena<Node>` and point at each other by index.

use std::fmt;

use crate::arena::{Arena, Id};
use crate::visit::{SExprPrinter, Visitor};

/// Index of a node inside the node arena
pub type NodeId = Id<Node>;

/// Number of precedence values reserved for one parenthesis level.
///
/// Must be even and greater than every base precedence.
pub const PRECEDENCE_LEVELS: u64 = 8;

pub const PREC_ADD: u64 = 0;
pub const PREC_MUL: u64 = 2;
pub const PREC_POW: u64 = 3;
pub const PREC_LOG: u64 = 5;
pub const PREC_UNARY: u64 = 7;

/// Binding strength of an operator at a given parenthesis depth.
///
/// Even values associate to the left, odd values to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(u64);

impl Precedence {
    pub fn new(depth: u32, base: u64) -> Self {
        Precedence(u64::from(depth) * PRECEDENCE_LEVELS + base)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn is_right_associative(self) -> bool {
        self.0 % 2 == 1
    }
}

/// Operators taking a single operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Neg,
    Abs,
    Sqrt,
    Exp,
    /// Logarithm base 2
    Ld,
    /// Natural logarithm
    Ln,
    /// Logarithm base 10
    Lg,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
}

impl UnaryOperator {
    pub const ALL: [UnaryOperator; 13] = [
        UnaryOperator::Neg,
        UnaryOperator::Abs,
        UnaryOperator::Sqrt,
        UnaryOperator::Exp,
        UnaryOperator::Ld,
        UnaryOperator::Ln,
        UnaryOperator::Lg,
        UnaryOperator::Sin,
        UnaryOperator::Cos,
        UnaryOperator::Tan,
        UnaryOperator::Asin,
        UnaryOperator::Acos,
        UnaryOperator::Atan,
    ];

    pub fn base_precedence(self) -> u64 {
        PREC_UNARY
    }

    /// Canonical spelling, as accepted by the scanner
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::Neg => "neg",
            UnaryOperator::Abs => "abs",
            UnaryOperator::Sqrt => "sqrt",
            UnaryOperator::Exp => "exp",
            UnaryOperator::Ld => "ld",
            UnaryOperator::Ln => "ln",
            UnaryOperator::Lg => "lg",
            UnaryOperator::Sin => "sin",
            UnaryOperator::Cos => "cos",
            UnaryOperator::Tan => "tan",
            UnaryOperator::Asin => "asin",
            UnaryOperator::Acos => "acos",
            UnaryOperator::Atan => "atan",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Operators taking two operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    /// `x log y` is the logarithm of `y` to base `x`
    Log,
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 7] = [
        BinaryOperator::Add,
        BinaryOperator::Sub,
        BinaryOperator::Mul,
        BinaryOperator::Div,
        BinaryOperator::Mod,
        BinaryOperator::Pow,
        BinaryOperator::Log,
    ];

    pub fn base_precedence(self) -> u64 {
        match self {
            BinaryOperator::Add | BinaryOperator::Sub => PREC_ADD,
            BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod => PREC_MUL,
            BinaryOperator::Pow => PREC_POW,
            BinaryOperator::Log => PREC_LOG,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
            BinaryOperator::Pow => "^",
            BinaryOperator::Log => "log",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A node of the expression tree.
///
/// Child links stay `None` only while the tree is under construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Literal(f64),
    Unary {
        op: UnaryOperator,
        precedence: Precedence,
        right: Option<NodeId>,
    },
    Binary {
        op: BinaryOperator,
        precedence: Precedence,
        left: Option<NodeId>,
        right: Option<NodeId>,
    },
}

impl Node {
    pub fn literal(value: f64) -> Self {
        Node::Literal(value)
    }

    /// An operand-less unary node at parenthesis depth `depth`
    pub fn unary(op: UnaryOperator, depth: u32) -> Self {
        Node::Unary {
            op,
            precedence: Precedence::new(depth, op.base_precedence()),
            right: None,
        }
    }

    /// An operand-less binary node at parenthesis depth `depth`
    pub fn binary(op: BinaryOperator, depth: u32) -> Self {
        Node::Binary {
            op,
            precedence: Precedence::new(depth, op.base_precedence()),
            left: None,
            right: None,
        }
    }

    /// Operator precedence; literals have none
    pub fn precedence(&self) -> Option<Precedence> {
        match self {
            Node::Literal(_) => None,
            Node::Unary { precedence, .. } | Node::Binary { precedence, .. } => Some(*precedence),
        }
    }

    pub fn right(&self) -> Option<NodeId> {
        match self {
            Node::Literal(_) => None,
            Node::Unary { right, .. } | Node::Binary { right, .. } => *right,
        }
    }
}

/// A child position in the tree, addressed by owner node and side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The root pointer of the tree itself
    Root,
    Left(NodeId),
    Right(NodeId),
}

/// A fully bound expression tree borrowing its node arena.
#[derive(Debug, Clone, Copy)]
pub struct Tree<'a> {
    nodes: &'a Arena<Node>,
    root: NodeId,
}

impl<'a> Tree<'a> {
    /// Wrap a node arena whose every child link, reachable from `root`, is set.
    pub fn new(nodes: &'a Arena<Node>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &'a Node {
        self.nodes.get(id)
    }

    /// Number of nodes in the backing arena
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk the tree in post-order, left operand before right.
    ///
    /// The walk keeps its own stack, so nesting depth is limited only by the
    /// node arena.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        let mut pending = vec![Step::Enter(self.root)];
        let mut results: Vec<V::Output> = Vec::new();

        while let Some(step) = pending.pop() {
            match step {
                Step::Enter(id) => match self.node(id) {
                    Node::Literal(value) => results.push(visitor.visit_literal(*value)),
                    Node::Unary { right, .. } => {
                        pending.push(Step::Apply(id));
                        pending.push(Step::Enter(bound(*right)));
                    }
                    Node::Binary { left, right, .. } => {
                        pending.push(Step::Apply(id));
                        pending.push(Step::Enter(bound(*right)));
                        pending.push(Step::Enter(bound(*left)));
                    }
                },
                Step::Apply(id) => match self.node(id) {
                    Node::Literal(_) => unreachable!("literals are applied on entry"),
                    Node::Unary { op, .. } => {
                        let operand = take(&mut results);
                        results.push(visitor.visit_unary(*op, operand));
                    }
                    Node::Binary { op, .. } => {
                        let rhs = take(&mut results);
                        let lhs = take(&mut results);
                        results.push(visitor.visit_binary(*op, lhs, rhs));
                    }
                },
            }
        }
        take(&mut results)
    }
}

enum Step {
    Enter(NodeId),
    Apply(NodeId),
}

fn bound(link: Option<NodeId>) -> NodeId {
    match link {
        Some(id) => id,
        None => unreachable!("open leaf slot in a closed tree"),
    }
}

fn take<T>(results: &mut Vec<T>) -> T {
    match results.pop() {
        Some(value) => value,
        None => unreachable!("every operator has its operands evaluated first"),
    }
}

impl fmt::Display for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.accept(&mut SExprPrinter))
    }
}
