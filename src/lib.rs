//! Parses and rolls dice expressions such as `2d10 + d6 - 7 + 2`.
//!
//! An expression is a sum of constants and dice groups (`NdM`, `dM`, `Nd%`) joined by `+` and
//! `-`. Whitespace is ignored. Parsing happens once; the result knows its bounds and can be rolled
//! any number of times.
//!
//! ```
//! let mut expr = dice_expression::build("2d20 - 7 + 9").unwrap();
//! assert_eq!((expr.min(), expr.max()), (4, 42));
//!
//! let total = expr.evaluate();
//! assert!((4..=42).contains(&total));
//!
//! let result = expr.roll();
//! assert_eq!(result.dice[1], -7);
//! assert_eq!(result.dice[2], 9);
//! ```

mod common;
mod error;
mod expr;
pub mod parse;
pub mod roll;
mod term;

#[cfg(test)]
mod test_strategies;

pub use common::{Int, NonEmpty, NonZeroUInt, Num, Sides, Sign, UInt};
pub use error::{Error, Result};
pub use expr::DiceExpression;
pub use parse::ast::{Dice, Node};
pub use roll::{RollResult, Roller};
pub use term::Term;

/// Parses `input` into an expression rolled with a freshly seeded [StdRng](rand::rngs::StdRng).
pub fn build(input: &str) -> Result<DiceExpression> {
    DiceExpression::new(input)
}
