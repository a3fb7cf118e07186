//! Lexer for wcalc expressions built on the `logos` crate.
//! Yields one token at a time so the tree builder can act on it immediately.

use std::ops::Range;

use logos::Logos;
use wcalc_ast::{BinaryOperator, EvalError, UnaryOperator};

use crate::logos_token::LogosToken;
use crate::token::{Constant, Location, Token, TokenKind};

/// Expression lexer
pub struct Lexer<'source> {
    /// The logos lexer instance
    logos_lexer: logos::Lexer<'source, LogosToken>,
    source: &'source str,
    /// Current line number (1-based)
    line: usize,
    /// Byte offset where the current line starts
    line_start: usize,
    /// Byte offset up to which `line` and `line_start` are accurate
    offset: usize,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given source text
    pub fn new(source: &'source str) -> Self {
        Self {
            logos_lexer: LogosToken::lexer(source),
            source,
            line: 1,
            line_start: 0,
            offset: 0,
        }
    }

    /// Byte offset just past the last token handed out
    pub fn position(&self) -> usize {
        self.logos_lexer.span().end
    }

    /// Advance line bookkeeping to `start` and report its location
    fn locate(&mut self, start: usize) -> Location {
        if start > self.offset {
            for (i, c) in self.source[self.offset..start].char_indices() {
                if c == '\n' {
                    self.line += 1;
                    self.line_start = self.offset + i + 1;
                }
            }
            self.offset = start;
        }
        Location {
            line: self.line,
            column: self.source[self.line_start..start].chars().count() + 1,
            offset: start,
        }
    }
}

/// Map a raw logos token to the kind the tree builder consumes
fn convert_token(token: LogosToken) -> TokenKind {
    match token {
        LogosToken::Number(value) => TokenKind::Number(value),

        LogosToken::Pi => TokenKind::Constant(Constant::Pi),
        LogosToken::E => TokenKind::Constant(Constant::E),
        LogosToken::Rand => TokenKind::Constant(Constant::Rand),

        LogosToken::LParen => TokenKind::LeftParen,
        LogosToken::RParen => TokenKind::RightParen,

        LogosToken::Plus => TokenKind::Binary(BinaryOperator::Add),
        LogosToken::Minus => TokenKind::Binary(BinaryOperator::Sub),
        LogosToken::Star => TokenKind::Binary(BinaryOperator::Mul),
        LogosToken::Slash => TokenKind::Binary(BinaryOperator::Div),
        LogosToken::Percent => TokenKind::Binary(BinaryOperator::Mod),
        LogosToken::Caret | LogosToken::DoubleStar => TokenKind::Binary(BinaryOperator::Pow),
        LogosToken::Log => TokenKind::Binary(BinaryOperator::Log),

        LogosToken::Tilde | LogosToken::Underscore | LogosToken::Neg => {
            TokenKind::Unary(UnaryOperator::Neg)
        }
        LogosToken::Abs => TokenKind::Unary(UnaryOperator::Abs),
        LogosToken::Sqrt => TokenKind::Unary(UnaryOperator::Sqrt),
        LogosToken::Exp => TokenKind::Unary(UnaryOperator::Exp),
        LogosToken::Ld => TokenKind::Unary(UnaryOperator::Ld),
        LogosToken::Ln => TokenKind::Unary(UnaryOperator::Ln),
        LogosToken::Lg => TokenKind::Unary(UnaryOperator::Lg),
        LogosToken::Sin => TokenKind::Unary(UnaryOperator::Sin),
        LogosToken::Cos => TokenKind::Unary(UnaryOperator::Cos),
        LogosToken::Tan => TokenKind::Unary(UnaryOperator::Tan),
        LogosToken::Asin => TokenKind::Unary(UnaryOperator::Asin),
        LogosToken::Acos => TokenKind::Unary(UnaryOperator::Acos),
        LogosToken::Atan => TokenKind::Unary(UnaryOperator::Atan),

        // skipped by the automaton, never produced
        LogosToken::Whitespace => unreachable!("whitespace is skipped"),
    }
}

/// Widen `span` to whole characters; an error span may end inside one
fn char_span(source: &str, span: Range<usize>) -> Range<usize> {
    let mut start = span.start.min(source.len());
    while !source.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = span.end.clamp(start, source.len());
    while !source.is_char_boundary(end) {
        end += 1;
    }
    start..end
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Result<Token<'source>, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.logos_lexer.next()?;
        let span = char_span(self.source, self.logos_lexer.span());
        let source = self.source;
        let lexeme = &source[span.clone()];
        let location = self.locate(span.start);

        let item = match logos_token {
            Ok(token) => Ok(Token::new(convert_token(token), lexeme, location)),
            Err(()) => Err(EvalError::Lexical {
                offset: location.offset,
                fragment: lexeme.to_string(),
            }),
        };

        #[cfg(feature = "logging")]
        {
            match &item {
                Ok(token) => log::trace!(
                    "token {:?} {:?} at {}:{}",
                    token.kind,
                    lexeme,
                    location.line,
                    location.column
                ),
                Err(err) => log::debug!("lexer stopped: {err}"),
            }
        }

        Some(item)
    }
}
