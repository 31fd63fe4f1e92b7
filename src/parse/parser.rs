use super::{ast::*, lexer::*};
use crate::common::*;
use logos_iter::LogosIter;
use std::fmt;
use std::num::ParseIntError;
use std::ops::Range;

type PResult<T> = Result<T, ParseError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("error at position {} ({slice:?}): {kind}", .span.start)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Range<usize>,
    pub slice: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    UnexpectedToken {
        found: TokenKind,
        expected: Vec<TokenKind>,
    },
    UnexpectedEnd {
        expected: Vec<TokenKind>,
    },
    InvalidToken,
    InvalidConstant(ParseIntError),
    InvalidDice(ParseDiceError),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { found, expected } => {
                write!(f, "unexpected token: found {}, expected ", found)?;
                fmt_expected(expected, f)
            }
            Self::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of input, expected ")?;
                fmt_expected(expected, f)
            }
            Self::InvalidToken => f.write_str("not a constant, dice literal or operator"),
            Self::InvalidConstant(why) => write!(f, "invalid constant: {}", why),
            Self::InvalidDice(why) => write!(f, "invalid dice literal: {}", why),
        }
    }
}

fn fmt_expected(expected: &[TokenKind], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let len = expected.len();

    if expected.is_empty() {
        Ok(())
    } else if len == 1 {
        f.write_str(expected[0].as_str())
    } else if len == 2 {
        write!(f, "{} or {}", expected[0], expected[1])
    } else {
        for exp in &expected[..len - 1] {
            write!(f, "{}, ", exp)?;
        }
        write!(f, "or {}", expected[len - 1])
    }
}

/// Parses an expression without whitespace into its signed nodes.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    const NODES: &'static [TokenKind] = &[TokenKind::Integer, TokenKind::Dice];

    const ADDITION_OPS: &'static [TokenKind] = &[TokenKind::Plus, TokenKind::Minus];

    pub fn new(s: &'a str) -> Self {
        Self { lexer: lexer(s) }
    }

    pub fn parse(mut self) -> PResult<Expression> {
        let expr = self.parse_expression()?;
        if self.lexer.peek().is_some() {
            return self.unexpected_token(Self::ADDITION_OPS.to_vec());
        }
        Ok(expr)
    }

    fn advance(&mut self) -> Option<TokenKind> {
        self.lexer.next()
    }

    fn peek_sign(&mut self) -> Option<Sign> {
        self.lexer.peek().and_then(TokenKind::as_sign)
    }

    fn error<T>(&mut self, kind: ParseErrorKind) -> PResult<T> {
        Err(ParseError {
            kind,
            span: self.lexer.span(),
            slice: self.lexer.slice().to_string(),
        })
    }

    fn unexpected_token<T>(&mut self, expected: Vec<TokenKind>) -> PResult<T> {
        match self.advance() {
            Some(TokenKind::Error) => self.error(ParseErrorKind::InvalidToken),
            Some(found) => self.error(ParseErrorKind::UnexpectedToken { found, expected }),
            None => self.error(ParseErrorKind::UnexpectedEnd { expected }),
        }
    }

    fn parse_expression(&mut self) -> PResult<Expression> {
        let first = self.parse_node()?;
        let mut nodes = NonEmpty::new(SignedNode::new(Sign::Pos, first));

        while let Some(sign) = self.peek_sign() {
            self.advance();
            let node = self.parse_node()?;
            nodes.push(SignedNode::new(sign, node));
        }

        Ok(Expression::new(nodes))
    }

    fn parse_node(&mut self) -> PResult<Node> {
        match self.lexer.peek() {
            Some(TokenKind::Integer) => self.parse_constant(),
            Some(TokenKind::Dice) => self.parse_dice(),
            _ => self.unexpected_token(Self::NODES.to_vec()),
        }
    }

    fn parse_constant(&mut self) -> PResult<Node> {
        self.advance();
        match self.lexer.slice().parse() {
            Ok(x) => Ok(Node::Constant(x)),
            Err(why) => self.error(ParseErrorKind::InvalidConstant(why)),
        }
    }

    fn parse_dice(&mut self) -> PResult<Node> {
        self.advance();
        match self.lexer.slice().parse() {
            Ok(dice) => Ok(Node::Dice(dice)),
            Err(why) => self.error(ParseErrorKind::InvalidDice(why)),
        }
    }
}
