//! Single-pass operator-precedence tree construction.
//!
//! Operators are inserted as they are scanned. Each new operator walks the
//! right spine from the root until it meets a node that binds at least as
//! tightly, then takes over that position and adopts whatever was there.
//! Literal values are not placed in the tree yet: they are collected in the
//! value arena, and every position still waiting for one is recorded as an
//! open leaf slot for the binder to fill once scanning ends.

use wcalc_ast::{Arena, BinaryOperator, EvalResult, Node, NodeId, Slot, Tree, UnaryOperator};

use crate::binder;
use crate::scratch::Scratch;

/// Incrementally builds an expression tree inside a [`Scratch`].
pub struct TreeBuilder<'s> {
    scratch: &'s mut Scratch,
    root: Option<NodeId>,
}

impl<'s> TreeBuilder<'s> {
    /// Take over `scratch`, clearing it, with the root as the only open slot.
    pub fn new(scratch: &'s mut Scratch) -> EvalResult<Self> {
        scratch.reset();
        scratch.open_leaf(Slot::Root)?;
        Ok(Self {
            scratch,
            root: None,
        })
    }

    /// Queue a literal; it fills the next open leaf slot when bound.
    pub fn push_value(&mut self, value: f64) -> EvalResult<()> {
        self.scratch.push_value(value)
    }

    pub fn push_unary(&mut self, op: UnaryOperator, depth: u32) -> EvalResult<NodeId> {
        let id = self.scratch.alloc_node(Node::unary(op, depth))?;
        self.insert(id)?;
        Ok(id)
    }

    pub fn push_binary(&mut self, op: BinaryOperator, depth: u32) -> EvalResult<NodeId> {
        let id = self.scratch.alloc_node(Node::binary(op, depth))?;
        self.insert(id)?;
        Ok(id)
    }

    /// Number of literals still needed to close the tree
    pub fn open_leaves(&self) -> usize {
        self.scratch.leaves.len()
    }

    pub fn pending_values(&self) -> usize {
        self.scratch.values.len()
    }

    /// Bind the collected literals and hand back the closed tree.
    pub fn finish(self) -> EvalResult<Tree<'s>> {
        binder::bind(self.scratch, self.root)
    }

    fn insert(&mut self, id: NodeId) -> EvalResult<()> {
        let nodes = &self.scratch.nodes;
        let new = nodes.get(id);
        let Some(prec) = new.precedence() else {
            unreachable!("literals are bound after scanning, never inserted");
        };

        // Walk the right spine past everything that binds more loosely. A
        // right-associative operator also passes its equal, so the later
        // operator ends up deeper.
        let mut slot = Slot::Root;
        let mut current = self.root;
        while let Some(existing) = current {
            let node = nodes.get(existing);
            let descend = node
                .precedence()
                .is_some_and(|p| p < prec || (prec.is_right_associative() && p == prec));
            if !descend {
                break;
            }
            slot = Slot::Right(existing);
            current = node.right();
        }

        let is_unary = matches!(new, Node::Unary { .. });
        log::trace!(
            "insert {:?} (precedence {}) at {:?}, adopting {:?}",
            id,
            prec.value(),
            slot,
            current
        );

        match current {
            Some(existing) if is_unary => attach(&mut self.scratch.nodes, Slot::Right(id), existing),
            Some(existing) => {
                attach(&mut self.scratch.nodes, Slot::Left(id), existing);
                self.scratch.open_leaf(Slot::Right(id))?;
            }
            None => {
                // At the frontier: the newest open slot is the one just reached.
                let Some(last) = self.scratch.leaves.last_mut() else {
                    unreachable!("the leaf sequence starts with the root slot");
                };
                if is_unary {
                    *last = Slot::Right(id);
                } else {
                    *last = Slot::Left(id);
                    self.scratch.open_leaf(Slot::Right(id))?;
                }
            }
        }

        match slot {
            Slot::Root => self.root = Some(id),
            owner => attach(&mut self.scratch.nodes, owner, id),
        }
        Ok(())
    }
}

/// Point the child link named by `slot` at `child`.
pub(crate) fn attach(nodes: &mut Arena<Node>, slot: Slot, child: NodeId) {
    match slot {
        Slot::Left(owner) => match nodes.get_mut(owner) {
            Node::Binary { left, .. } => *left = Some(child),
            other => unreachable!("left slot on {other:?}"),
        },
        Slot::Right(owner) => match nodes.get_mut(owner) {
            Node::Unary { right, .. } | Node::Binary { right, .. } => *right = Some(child),
            other => unreachable!("right slot on {other:?}"),
        },
        Slot::Root => unreachable!("the root link is owned by the builder"),
    }
}
