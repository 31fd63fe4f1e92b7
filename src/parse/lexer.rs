use super::ast::{is_dice_marker, Dice, MAX_CONSTANT_DIGITS};
use crate::common::Sign;
use logos::{Lexer as LogosLexer, Logos};
use logos_iter::{LogosIter, PeekableLexer};
use std::fmt;

pub(crate) type Lexer<'a> = PeekableLexer<'a, LogosLexer<'a, TokenKind>, TokenKind>;

pub(crate) fn lexer(s: &str) -> Lexer {
    TokenKind::lexer(s).peekable_lexer()
}

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub enum TokenKind {
    #[regex(r"[0-9]+", constant)]
    Integer,

    #[regex(r"[0-9]*[dD]([0-9]+|%)", |lex| lex.slice().parse::<Dice>().is_ok())]
    Dice,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    #[error]
    Error,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "<integer>",
            Self::Dice => "<dice>",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Error => "<error>",
        }
    }

    pub fn as_sign(&self) -> Option<Sign> {
        Some(match self {
            Self::Plus => Sign::Pos,
            Self::Minus => Sign::Neg,
            _ => return None,
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// A run of digits is only a constant when nothing could still turn it into a dice literal.
fn constant(lex: &mut LogosLexer<TokenKind>) -> bool {
    lex.slice().len() <= MAX_CONSTANT_DIGITS && !lex.remainder().starts_with(continues_node)
}

fn continues_node(c: char) -> bool {
    is_dice_marker(c) || c.is_ascii_digit()
}
