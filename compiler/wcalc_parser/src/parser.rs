use rand::Rng;
use wcalc_ast::{EvalError, EvalResult, Tree};
use wcalc_lexer::{Constant, Lexer, TokenKind};

use crate::builder::TreeBuilder;
use crate::scratch::Scratch;

/// Scan `text` and build its closed expression tree inside `scratch`.
///
/// Tokens are acted on as soon as they are recognised; the first error
/// stops the scan. Constants are resolved here, so every `rand` in the
/// input draws its own value from `rng`.
pub fn parse<'s, R: Rng>(
    text: &str,
    scratch: &'s mut Scratch,
    rng: &mut R,
) -> EvalResult<Tree<'s>> {
    let mut builder = TreeBuilder::new(scratch)?;
    let mut depth: u32 = 0;

    for token in Lexer::new(text) {
        let token = token?;
        match token.kind {
            TokenKind::Number(value) => builder.push_value(value)?,
            TokenKind::Constant(constant) => builder.push_value(constant_value(constant, rng))?,
            TokenKind::LeftParen => depth = depth.saturating_add(1),
            TokenKind::RightParen => {
                depth = depth.checked_sub(1).ok_or(EvalError::UnmatchedParenthesis {
                    offset: token.location.offset,
                })?;
            }
            TokenKind::Unary(op) => {
                builder.push_unary(op, depth)?;
            }
            TokenKind::Binary(op) => {
                builder.push_binary(op, depth)?;
            }
        }
    }

    if depth > 0 {
        log::debug!("input ended inside {depth} parentheses");
        return Err(EvalError::UnclosedParenthesis { depth });
    }
    builder.finish()
}

fn constant_value<R: Rng>(constant: Constant, rng: &mut R) -> f64 {
    constant.fixed_value().unwrap_or_else(|| rng.gen::<f64>())
}
