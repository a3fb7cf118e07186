use wcalc_ast::{Arena, ArenaKind, EvalError, EvalResult, Node, NodeId, Slot};

/// The three arenas one evaluation works in.
///
/// A `Scratch` belongs to exactly one call at a time. It is emptied when a
/// new tree builder takes it, so it can be reused across calls without
/// leaking state from one expression into the next.
#[derive(Debug, Clone)]
pub struct Scratch {
    pub(crate) nodes: Arena<Node>,
    pub(crate) values: Arena<f64>,
    pub(crate) leaves: Arena<Slot>,
}

impl Scratch {
    /// Allocate three arenas of `capacity` entries each
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            values: Arena::with_capacity(capacity),
            leaves: Arena::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub fn reset(&mut self) {
        self.nodes.reset();
        self.values.reset();
        self.leaves.reset();
    }

    pub fn nodes(&self) -> &Arena<Node> {
        &self.nodes
    }

    /// Literal values collected so far, in encounter order
    pub fn values(&self) -> &[f64] {
        self.values.as_slice()
    }

    /// Open leaf slots, in the order they were opened
    pub fn leaves(&self) -> &[Slot] {
        self.leaves.as_slice()
    }

    pub(crate) fn alloc_node(&mut self, node: Node) -> EvalResult<NodeId> {
        self.nodes
            .alloc(node)
            .map_err(|e| out_of_capacity(ArenaKind::Nodes, e.capacity))
    }

    pub(crate) fn push_value(&mut self, value: f64) -> EvalResult<()> {
        self.values
            .alloc(value)
            .map(drop)
            .map_err(|e| out_of_capacity(ArenaKind::Values, e.capacity))
    }

    pub(crate) fn open_leaf(&mut self, slot: Slot) -> EvalResult<()> {
        self.leaves
            .alloc(slot)
            .map(drop)
            .map_err(|e| out_of_capacity(ArenaKind::Leaves, e.capacity))
    }
}

fn out_of_capacity(arena: ArenaKind, capacity: usize) -> EvalError {
    log::debug!("{arena} arena exhausted at {capacity} entries");
    EvalError::OutOfCapacity { arena, capacity }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_each_arena_reports_itself() {
        let mut scratch = Scratch::with_capacity(1);
        scratch.push_value(1.0).unwrap();
        assert_eq!(
            scratch.push_value(2.0),
            Err(EvalError::OutOfCapacity {
                arena: ArenaKind::Values,
                capacity: 1
            })
        );

        scratch.open_leaf(Slot::Root).unwrap();
        assert_eq!(
            scratch.open_leaf(Slot::Root),
            Err(EvalError::OutOfCapacity {
                arena: ArenaKind::Leaves,
                capacity: 1
            })
        );

        scratch.alloc_node(Node::literal(1.0)).unwrap();
        assert!(matches!(
            scratch.alloc_node(Node::literal(2.0)),
            Err(EvalError::OutOfCapacity {
                arena: ArenaKind::Nodes,
                ..
            })
        ));
    }

    #[test]
    fn test_reset_empties_all_arenas() {
        let mut scratch = Scratch::with_capacity(4);
        scratch.push_value(1.0).unwrap();
        scratch.open_leaf(Slot::Root).unwrap();
        scratch.alloc_node(Node::literal(1.0)).unwrap();
        scratch.reset();

        assert!(scratch.values().is_empty());
        assert!(scratch.leaves().is_empty());
        assert!(scratch.nodes().is_empty());
        assert_eq!(scratch.capacity(), 4);
    }
}
