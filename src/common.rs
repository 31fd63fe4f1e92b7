use std::fmt::{self, Write};
use std::num::{NonZeroU32, ParseIntError};
use std::str::FromStr;

/// The type of every total, bound and per-term value.
pub type Int = i64;
pub type UInt = u32;
pub type NonZeroUInt = NonZeroU32;

/// The number of dice in a group. A group of zero dice is allowed and always rolls 0.
pub type Num = UInt;

pub type NonEmpty<T> = vec1::Vec1<T>;

const PERCENTILE_SIDES: NonZeroUInt = match NonZeroUInt::new(100) {
    Some(x) => x,
    None => unreachable!(),
};

/// The number of faces on each die of a group.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sides {
    Poly(NonZeroUInt),
    /// `%`, shorthand for a hundred-sided die.
    Percentile,
}

impl Sides {
    pub const fn get(self) -> NonZeroUInt {
        match self {
            Self::Poly(x) => x,
            Self::Percentile => PERCENTILE_SIDES,
        }
    }
}

impl fmt::Display for Sides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Poly(x) => fmt::Display::fmt(x, f),
            Self::Percentile => f.write_char('%'),
        }
    }
}

impl From<NonZeroUInt> for Sides {
    fn from(x: NonZeroUInt) -> Self {
        Self::Poly(x)
    }
}

impl TryFrom<UInt> for Sides {
    type Error = <NonZeroUInt as TryFrom<UInt>>::Error;

    fn try_from(value: UInt) -> Result<Self, Self::Error> {
        NonZeroUInt::try_from(value).map(Self::Poly)
    }
}

impl FromStr for Sides {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "%" {
            Ok(Self::Percentile)
        } else {
            s.parse().map(Self::Poly)
        }
    }
}

/// The operator written in front of a term. The first term of an expression is always `Pos`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    Pos,
    Neg,
}

impl Sign {
    pub const fn apply(self, x: Int) -> Int {
        match self {
            Self::Pos => x,
            Self::Neg => -x,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Self::Pos => '+',
            Self::Neg => '-',
        };
        f.write_char(c)
    }
}
