mod result;
mod roller;

pub use result::RollResult;
pub use roller::Roller;

#[cfg(test)]
pub(crate) use roller::CyclingRoller;
