//! The logos automaton behind [`Lexer`](crate::Lexer).

use logos::Logos;

/// Raw token type recognised by the logos automaton.
///
/// Keywords are plain literal tokens, so overlapping spellings such as
/// `asin`/`abs`/`atan` or `e`/`exp` resolve by longest match.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[allow(missing_docs)] // variants are named after their spelling
pub enum LogosToken {
    // --- Numbers: the callback extends the match over fraction and exponent ---
    #[regex(r"[0-9]+|\.[0-9]", lex_number)]
    Number(f64),

    // --- Nullary constants ---
    #[token("pi")]
    Pi,
    #[token("e")]
    E,
    #[token("rand")]
    Rand,

    // --- Grouping ---
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    // --- Binary operators ---
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("**")]
    DoubleStar,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,
    #[token("log")]
    Log,

    // --- Unary operators ---
    #[token("~")]
    Tilde,
    #[token("_")]
    Underscore,
    #[token("neg")]
    Neg,
    #[token("abs")]
    Abs,
    #[token("sqrt")]
    Sqrt,
    #[token("exp")]
    Exp,
    #[token("ld")]
    Ld,
    #[token("ln")]
    Ln,
    #[token("lg")]
    Lg,
    #[token("sin")]
    Sin,
    #[token("cos")]
    Cos,
    #[token("tan")]
    Tan,
    #[token("asin")]
    Asin,
    #[token("acos")]
    Acos,
    #[token("atan")]
    Atan,

    // --- Whitespace (skipped) ---
    #[regex(r"[ \t\n\r\f\x0B]+", logos::skip)]
    Whitespace,
}

/// Extend a number match the way `strtod` reads decimal input: an optional
/// fraction after integer digits, then an exponent only if it has digits.
fn lex_number(lex: &mut logos::Lexer<'_, LogosToken>) -> Option<f64> {
    let rest = lex.remainder().as_bytes();
    let mut len = if lex.slice().starts_with('.') {
        count_digits(rest)
    } else if rest.first() == Some(&b'.') {
        1 + count_digits(&rest[1..])
    } else {
        0
    };

    if matches!(rest.get(len), Some(b'e' | b'E')) {
        let mut exponent = len + 1;
        if matches!(rest.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let digits = count_digits(&rest[exponent..]);
        if digits > 0 {
            len = exponent + digits;
        }
    }

    lex.bump(len);
    lex.slice().parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
