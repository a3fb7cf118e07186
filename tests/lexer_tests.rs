// Token stream checks against the public lexer
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use wcalc_ast::{BinaryOperator, EvalError, UnaryOperator};
use wcalc_lexer::{Constant, Lexer, TokenKind};

fn kinds(input: &str) -> Vec<TokenKind> {
    Lexer::new(input)
        .map(|t| t.expect("valid input").kind)
        .collect()
}

#[test]
fn test_expression_tokens() {
    assert_eq!(
        kinds("sqrt(2.5e1) ** pi log e"),
        vec![
            TokenKind::Unary(UnaryOperator::Sqrt),
            TokenKind::LeftParen,
            TokenKind::Number(25.0),
            TokenKind::RightParen,
            TokenKind::Binary(BinaryOperator::Pow),
            TokenKind::Constant(Constant::Pi),
            TokenKind::Binary(BinaryOperator::Log),
            TokenKind::Constant(Constant::E),
        ]
    );
}

#[test]
fn test_keywords_need_no_separators() {
    assert_eq!(
        kinds("exp1+ln2"),
        vec![
            TokenKind::Unary(UnaryOperator::Exp),
            TokenKind::Number(1.0),
            TokenKind::Binary(BinaryOperator::Add),
            TokenKind::Unary(UnaryOperator::Ln),
            TokenKind::Number(2.0),
        ]
    );
}

#[test]
fn test_locations_span_lines() {
    let tokens: Vec<_> = Lexer::new("1 +\n  2")
        .map(|t| t.expect("valid input").location)
        .collect();
    assert_eq!(
        tokens
            .iter()
            .map(|l| (l.line, l.column, l.offset))
            .collect::<Vec<_>>(),
        vec![(1, 1, 0), (1, 3, 2), (2, 3, 6)]
    );
}

#[test]
fn test_unknown_character_is_reported_with_offset() {
    let err = Lexer::new("1 + $")
        .find_map(Result::err)
        .expect("lexical error");
    assert_eq!(
        err,
        EvalError::Lexical {
            offset: 4,
            fragment: "$".to_string()
        }
    );
}

#[test]
fn test_multibyte_character_is_reported_whole() {
    let err = Lexer::new("2 × 3")
        .find_map(Result::err)
        .expect("lexical error");
    assert_eq!(
        err,
        EvalError::Lexical {
            offset: 2,
            fragment: "×".to_string()
        }
    );
}

proptest! {
    #[test]
    fn lexing_never_panics(input in "\\PC{0,64}") {
        for token in Lexer::new(&input) {
            let _ = token;
        }
    }

    #[test]
    fn integers_lex_to_their_value(n in 0u64..1_000_000_000) {
        prop_assert_eq!(kinds(&n.to_string()), vec![TokenKind::Number(n as f64)]);
    }
}
