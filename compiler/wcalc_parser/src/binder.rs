//! Closes a tree by pairing collected literals with open leaf slots.

use wcalc_ast::{EvalError, EvalResult, Node, NodeId, Slot, Tree};

use crate::builder::attach;
use crate::scratch::Scratch;

/// Materialise the i-th collected value as a literal node in the i-th open
/// leaf slot. The counts must match exactly.
pub(crate) fn bind(scratch: &mut Scratch, mut root: Option<NodeId>) -> EvalResult<Tree<'_>> {
    let values = scratch.values.len();
    let leaves = scratch.leaves.len();
    if values > leaves {
        log::debug!("{values} literals for {leaves} open slots");
        return Err(EvalError::TooManyOperands);
    }
    if values < leaves {
        log::debug!("{values} literals for {leaves} open slots");
        return Err(EvalError::NotEnoughOperands);
    }

    for i in 0..leaves {
        let value = scratch.values.as_slice()[i];
        let slot = scratch.leaves.as_slice()[i];
        let literal = scratch.alloc_node(Node::literal(value))?;
        match slot {
            Slot::Root => root = Some(literal),
            owner => attach(&mut scratch.nodes, owner, literal),
        }
    }

    // The root slot is either bound above or was taken by the first operator.
    let Some(root) = root else {
        unreachable!("a balanced tree always has a root");
    };
    let scratch: &Scratch = scratch;
    Ok(Tree::new(&scratch.nodes, root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TreeBuilder;
    use pretty_assertions::assert_eq;
    use wcalc_ast::BinaryOperator;

    #[test]
    fn test_single_literal_binds_to_root() {
        let mut scratch = Scratch::with_capacity(4);
        let mut builder = TreeBuilder::new(&mut scratch).unwrap();
        builder.push_value(42.0).unwrap();
        let tree = builder.finish().unwrap();

        assert_eq!(tree.node(tree.root()), &Node::Literal(42.0));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_count_mismatch() {
        let mut scratch = Scratch::with_capacity(4);
        let builder = TreeBuilder::new(&mut scratch).unwrap();
        assert_eq!(builder.finish().unwrap_err(), EvalError::NotEnoughOperands);

        let mut builder = TreeBuilder::new(&mut scratch).unwrap();
        builder.push_value(1.0).unwrap();
        builder.push_value(2.0).unwrap();
        assert_eq!(builder.finish().unwrap_err(), EvalError::TooManyOperands);
    }

    #[test]
    fn test_literal_nodes_need_room() {
        // 1 operator + 2 literals do not fit in 2 nodes
        let mut scratch = Scratch::with_capacity(2);
        let mut builder = TreeBuilder::new(&mut scratch).unwrap();
        builder.push_value(1.0).unwrap();
        builder.push_binary(BinaryOperator::Sub, 0).unwrap();
        builder.push_value(2.0).unwrap();
        assert!(matches!(
            builder.finish(),
            Err(EvalError::OutOfCapacity { .. })
        ));
    }
}
