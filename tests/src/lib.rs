//! Shared helpers for the wcalc integration tests.

use std::sync::Once;

use wcalc::{CalcConfig, Calculator, EvalResult};

static INIT: Once = Once::new();

/// Route `log` output through the test harness, once per binary
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    });
}

/// Assert that `actual` is within a relative `1e-12` of `expected`
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-12 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

/// Evaluate under a calculator whose arenas hold `capacity` entries each
pub fn evaluate_with_capacity(text: &str, capacity: usize) -> EvalResult<f64> {
    let config = CalcConfig {
        capacity,
        ..CalcConfig::default()
    };
    Calculator::with_config(config).evaluate(text)
}

/// Grouping of `text` as an S-expression, or the error's display text
pub fn grouping(text: &str) -> String {
    let mut calc = Calculator::new();
    match calc.parse(text) {
        Ok(tree) => tree.to_string(),
        Err(err) => format!("error: {err}"),
    }
}
