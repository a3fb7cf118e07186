use rand::rngs::ThreadRng;
use rand::Rng;
use wcalc_ast::{EvalError, EvalResult, Tree};
use wcalc_parser::Scratch;

use crate::config::CalcConfig;
use crate::eval::eval;

/// A reusable evaluator owning its own arenas and random source.
///
/// The arenas are emptied at the start of every call, so results never
/// depend on earlier inputs. Use one `Calculator` per thread.
#[derive(Debug)]
pub struct Calculator<R = ThreadRng> {
    config: CalcConfig,
    scratch: Scratch,
    rng: R,
}

impl Calculator<ThreadRng> {
    pub fn new() -> Self {
        Self::with_config(CalcConfig::default())
    }

    pub fn with_config(config: CalcConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl Default for Calculator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Calculator<R> {
    /// Use `rng` for every `rand` constant in later inputs.
    ///
    /// Limits above [`CalcConfig::MAX_CAPACITY`] or
    /// [`CalcConfig::MAX_INPUT_LEN`] are clamped.
    pub fn with_rng(config: CalcConfig, rng: R) -> Self {
        let bounded = config.bounded();
        if bounded != config {
            log::warn!("limits clamped from {config:?} to {bounded:?}");
        }
        let config = bounded;
        Self {
            config,
            scratch: Scratch::with_capacity(config.capacity),
            rng,
        }
    }

    pub fn config(&self) -> CalcConfig {
        self.config
    }

    /// Build the closed expression tree for `text` without evaluating it.
    pub fn parse(&mut self, text: &str) -> EvalResult<Tree<'_>> {
        if text.len() > self.config.max_input_len {
            return Err(EvalError::InputTooLong {
                len: text.len(),
                max: self.config.max_input_len,
            });
        }
        wcalc_parser::parse(text, &mut self.scratch, &mut self.rng)
    }

    pub fn evaluate(&mut self, text: &str) -> EvalResult<f64> {
        match self.parse(text) {
            Ok(tree) => {
                let value = eval(&tree);
                log::debug!("{text:?} = {value} ({} nodes)", tree.len());
                Ok(value)
            }
            Err(err) => {
                log::debug!("{text:?} rejected: {err}");
                Err(err)
            }
        }
    }
}
