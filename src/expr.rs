use crate::common::*;
use crate::error::{Error, Result};
use crate::parse;
use crate::roll::{RollResult, Roller};
use crate::term::Term;
use rand::{rngs::StdRng, SeedableRng};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "logging")]
use log::debug;

/// A parsed dice expression such as `2d10 + d6 - 7 + 2`.
///
/// The terms and their bounds are fixed once the expression is built. Every call to
/// [roll](Self::roll) or [evaluate](Self::evaluate) draws fresh values from the expression's own
/// roller, which is why both take `&mut self`.
///
/// ```
/// # use dice_expression::DiceExpression;
/// let mut expr = DiceExpression::new("2d20 - 7 + 9").unwrap();
/// assert_eq!(expr.min(), 4);
/// assert_eq!(expr.max(), 42);
///
/// let result = expr.roll();
/// assert_eq!(result.dice.len(), 3);
/// assert!(expr.min() <= result.roll && result.roll <= expr.max());
/// ```
#[derive(Debug)]
pub struct DiceExpression<R = StdRng> {
    terms: NonEmpty<Term>,
    min: Int,
    max: Int,
    roller: R,
}

impl DiceExpression<StdRng> {
    /// Parses `input` and seeds a new generator for it from the operating system.
    ///
    /// # Errors
    /// [Error::MissingInput] if `input` is empty, [Error::InvalidExpression] if it is not a valid
    /// dice expression.
    pub fn new(input: &str) -> Result<Self> {
        Self::with_roller(input, StdRng::from_entropy())
    }

    /// Like [new](Self::new), treating `None` as missing input.
    pub fn from_input(input: Option<&str>) -> Result<Self> {
        input.map_or(Err(Error::MissingInput), Self::new)
    }

    /// Builds an expression from a loosely typed value, such as a field of a JSON message.
    ///
    /// `null` and `""` are missing input, strings are parsed, and anything else is the wrong type.
    #[cfg(feature = "serde")]
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        use serde_json::Value;

        let found = match value {
            Value::Null => return Err(Error::MissingInput),
            Value::String(s) => return Self::new(s),
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };
        Err(Error::InvalidType { found })
    }
}

impl<R: Roller> DiceExpression<R> {
    pub fn with_roller(input: &str, roller: R) -> Result<Self> {
        if input.is_empty() {
            return Err(Error::MissingInput);
        }

        let ast = parse::parse(input).map_err(|source| Error::InvalidExpression {
            input: input.to_owned(),
            source,
        })?;
        let terms = ast.into_nodes().mapped(Term::from);
        let min: Int = terms.iter().map(Term::min).sum();
        let max: Int = terms.iter().map(Term::max).sum();

        #[cfg(feature = "logging")]
        {
            debug!(
                "built {:?} as {} with {} terms, bounds {}..={}",
                input,
                DisplayTerms(&terms),
                terms.len(),
                min,
                max
            );
        }

        Ok(Self {
            terms,
            min,
            max,
            roller,
        })
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The lowest possible total: every added die shows 1 and every subtracted die its highest
    /// face.
    pub fn min(&self) -> Int {
        self.min
    }

    /// The highest possible total.
    pub fn max(&self) -> Int {
        self.max
    }

    /// Rolls every term once, keeping the value of each term.
    pub fn roll(&mut self) -> RollResult {
        let dice = self
            .terms
            .iter()
            .map(|term| term.roll(&mut self.roller))
            .collect();
        let result = RollResult::new(dice);

        #[cfg(feature = "logging")]
        {
            debug!("rolled {} for {}", result, self);
        }

        result
    }

    /// Rolls every term once and returns only the total.
    pub fn evaluate(&mut self) -> Int {
        self.roll().roll
    }

    pub fn roller_mut(&mut self) -> &mut R {
        &mut self.roller
    }

    pub fn into_roller(self) -> R {
        self.roller
    }
}

impl FromStr for DiceExpression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl<R> fmt::Display for DiceExpression<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&DisplayTerms(&self.terms), f)
    }
}

// The leading sign is implicit.
struct DisplayTerms<'a>(&'a [Term]);

impl fmt::Display for DisplayTerms<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.0.iter().enumerate() {
            if i == 0 {
                fmt::Display::fmt(&term.node(), f)?;
            } else {
                fmt::Display::fmt(term, f)?;
            }
        }
        Ok(())
    }
}
