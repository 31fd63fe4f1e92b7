use crate::common::*;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

pub(crate) const MAX_CONSTANT_DIGITS: usize = 8;
pub(crate) const MAX_COUNT_DIGITS: usize = 4;
pub(crate) const MAX_SIDES_DIGITS: usize = 4;

pub(crate) fn is_dice_marker(c: char) -> bool {
    c == 'd' || c == 'D'
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    nodes: NonEmpty<SignedNode>,
}

impl Expression {
    pub(crate) fn new(nodes: NonEmpty<SignedNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[SignedNode] {
        &self.nodes
    }

    pub fn into_nodes(self) -> NonEmpty<SignedNode> {
        self.nodes
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.nodes.first().node, f)?;
        for node in self.nodes.iter().skip(1) {
            fmt::Display::fmt(node, f)?;
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SignedNode {
    pub sign: Sign,
    pub node: Node,
}

impl SignedNode {
    pub fn new(sign: Sign, node: Node) -> Self {
        Self { sign, node }
    }
}

impl fmt::Display for SignedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign, self.node)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Node {
    Constant(UInt),
    Dice(Dice),
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(x) => fmt::Display::fmt(x, f),
            Self::Dice(dice) => fmt::Display::fmt(dice, f),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dice {
    pub num: Num,
    pub sides: Sides,
}

impl Dice {
    pub const fn new(num: Num, sides: Sides) -> Self {
        Self { num, sides }
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.num, self.sides)
    }
}

/// Parses a single dice literal such as `3d6`, `d20` or `2D%`.
///
/// The count defaults to 1 when omitted and may be 0. Both the count and the number of sides are
/// limited to four digits, and the number of sides must be greater than zero.
impl FromStr for Dice {
    type Err = ParseDiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (num, sides) = s
            .split_once(is_dice_marker)
            .ok_or(ParseDiceError::NoDelimiter)?;
        if num.len() > MAX_COUNT_DIGITS {
            return Err(ParseDiceError::NumTooLong);
        }
        if sides.len() > MAX_SIDES_DIGITS {
            return Err(ParseDiceError::SidesTooLong);
        }
        let num = if num.is_empty() {
            1
        } else {
            num.parse().map_err(ParseDiceError::InvalidNum)?
        };
        let sides = sides.parse().map_err(ParseDiceError::InvalidSides)?;
        Ok(Self::new(num, sides))
    }
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseDiceError {
    #[error("cannot parse string as dice without 'd' delimiter")]
    NoDelimiter,
    #[error("the number of dice cannot have more than four digits")]
    NumTooLong,
    #[error("the number of sides cannot have more than four digits")]
    SidesTooLong,
    #[error("invalid number of dice: {0}")]
    InvalidNum(ParseIntError),
    #[error("invalid number of sides: {0}")]
    InvalidSides(ParseIntError),
}
