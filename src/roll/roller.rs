use crate::common::{Int, NonZeroUInt, UInt};
use crate::parse::ast::Dice;
use rand::{
    distributions::{DistIter, Distribution, Uniform},
    Rng,
};

/// A source of die faces. Every [Rng] is a roller drawing uniformly from `1..=sides`.
pub trait Roller {
    type Faces<'a>: Iterator<Item = UInt> + 'a
    where
        Self: 'a;

    /// One face of a die with `sides` faces.
    fn roll(&mut self, sides: NonZeroUInt) -> UInt;

    /// One face for every die of the group.
    fn faces(&mut self, dice: Dice) -> Self::Faces<'_>;

    fn roll_dice(&mut self, dice: Dice) -> Int {
        self.faces(dice).map(Int::from).sum()
    }
}

impl<R: Rng> Roller for R {
    type Faces<'a> = std::iter::Take<DistIter<Uniform<UInt>, &'a mut Self, UInt>>
    where
        Self: 'a;

    fn roll(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }

    fn faces(&mut self, dice: Dice) -> Self::Faces<'_> {
        Uniform::new_inclusive(1, dice.sides.get().get())
            .sample_iter(self)
            .take(dice.num as usize)
    }
}

#[cfg(test)]
pub(crate) use cycling::CyclingRoller;
