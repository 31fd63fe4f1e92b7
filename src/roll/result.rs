use crate::common::Int;
use std::fmt;

/// One evaluation of an expression.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollResult {
    /// The total of every term.
    pub roll: Int,
    /// The signed value of each term, in the order the terms were written.
    pub dice: Vec<Int>,
}

impl RollResult {
    pub fn new(dice: Vec<Int>) -> Self {
        Self {
            roll: dice.iter().sum(),
            dice,
        }
    }
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.roll)?;
        for (i, value) in self.dice.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}
