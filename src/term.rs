use crate::common::*;
use crate::parse::ast::{Node, SignedNode};
use crate::roll::Roller;
use std::fmt;

#[cfg(feature = "logging")]
use log::trace;

/// One signed constant or dice group of an expression.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Term {
    sign: Sign,
    node: Node,
}

impl Term {
    pub const fn new(sign: Sign, node: Node) -> Self {
        Self { sign, node }
    }

    pub const fn sign(&self) -> Sign {
        self.sign
    }

    pub const fn node(&self) -> Node {
        self.node
    }

    /// The number of dice rolled for this term, or 0 for a constant.
    pub const fn dice_count(&self) -> UInt {
        match self.node {
            Node::Constant(_) => 0,
            Node::Dice(dice) => dice.num,
        }
    }

    /// The number of faces on each die, or the magnitude of a constant.
    pub const fn sides(&self) -> UInt {
        match self.node {
            Node::Constant(x) => x,
            Node::Dice(dice) => dice.sides.get().get(),
        }
    }

    /// Smallest and largest magnitude, with every die showing 1 and every die showing its highest
    /// face.
    fn magnitudes(&self) -> (Int, Int) {
        match self.node {
            Node::Constant(x) => (Int::from(x), Int::from(x)),
            Node::Dice(dice) => {
                let num = Int::from(dice.num);
                (num, num * Int::from(dice.sides.get().get()))
            }
        }
    }

    /// The lowest value this term can take. A subtracted dice group is lowest when every die
    /// shows its highest face.
    pub fn min(&self) -> Int {
        let (low, high) = self.magnitudes();
        match self.sign {
            Sign::Pos => low,
            Sign::Neg => -high,
        }
    }

    /// The highest value this term can take.
    pub fn max(&self) -> Int {
        let (low, high) = self.magnitudes();
        match self.sign {
            Sign::Pos => high,
            Sign::Neg => -low,
        }
    }

    pub fn roll<R: Roller>(&self, roller: &mut R) -> Int {
        let magnitude = match self.node {
            Node::Constant(x) => Int::from(x),
            Node::Dice(dice) => roller.roll_dice(dice),
        };
        let value = self.sign.apply(magnitude);

        #[cfg(feature = "logging")]
        {
            trace!("rolled {} for term {}", value, self);
        }

        value
    }
}

impl From<SignedNode> for Term {
    fn from(node: SignedNode) -> Self {
        Self::new(node.sign, node.node)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign, self.node)
    }
}
