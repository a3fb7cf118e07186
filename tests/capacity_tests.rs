// Fixed-capacity arenas: exhaustion is reported, never a panic
use pretty_assertions::assert_eq;
use tests::{evaluate_with_capacity, init_test_logger};
use wcalc::{ArenaKind, EvalError};

fn exhausted(arena: ArenaKind, capacity: usize) -> Result<f64, EvalError> {
    Err(EvalError::OutOfCapacity { arena, capacity })
}

#[test]
fn test_node_arena_boundary() {
    init_test_logger();
    // seven operators plus the bound literal fill eight node entries
    assert_eq!(evaluate_with_capacity("~~~~~~~1", 8), Ok(-1.0));
    assert_eq!(
        evaluate_with_capacity("~~~~~~~~1", 8),
        exhausted(ArenaKind::Nodes, 8)
    );
}

#[test]
fn test_value_arena_boundary() {
    assert_eq!(
        evaluate_with_capacity("1 2 3 4 5 6 7 8", 8),
        Err(EvalError::TooManyOperands)
    );
    assert_eq!(
        evaluate_with_capacity("1 2 3 4 5 6 7 8 9", 8),
        exhausted(ArenaKind::Values, 8)
    );
}

#[test]
fn test_leaf_arena_boundary() {
    // every binary operator opens one more leaf slot
    assert_eq!(
        evaluate_with_capacity("1+1+1+1+1+1+1+1", 16),
        Ok(8.0)
    );
    assert_eq!(
        evaluate_with_capacity("1+1+1+1+1+1+1+1+1", 8),
        exhausted(ArenaKind::Leaves, 8)
    );
}

#[test]
fn test_zero_capacity_rejects_everything() {
    assert_eq!(evaluate_with_capacity("1", 0), exhausted(ArenaKind::Leaves, 0));
}

#[test]
fn test_exhaustion_message() {
    let err = evaluate_with_capacity("1 2 3", 2).unwrap_err();
    assert_eq!(err.message(), "Out of memory");
    assert_eq!(
        err.to_string(),
        "Out of memory: value arena is limited to 2 entries"
    );
}

#[test]
fn test_default_capacity_accepts_max_length_input() {
    // 511 bytes: 256 literals and 255 operators
    let text = "1*".repeat(255) + "1";
    assert_eq!(text.len(), 511);
    assert_eq!(wcalc::evaluate(&text), Ok(1.0));
}
