use crate::*;

/// A seat at the table, numbered from zero.
#[derive(
    Clone,
    Copy,
    Default,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Seat(u8);

impl Seat {
    /// The seat after this one among `players` seats.
    pub fn next(self, players: usize) -> Self {
        Self::from((usize::from(self) + 1) % players)
    }
}

impl From<usize> for Seat {
    fn from(index: usize) -> Self {
        Self(u8::try_from(index).expect("at most 256 seats"))
    }
}

impl From<Seat> for usize {
    fn from(seat: Seat) -> Self {
        seat.0 as usize
    }
}

impl Player for Seat {}

impl std::fmt::Debug for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Payoff<Seat> {
    /// Two-seat zero-sum payoff: `x` to seat 0 and `-x` to seat 1.
    pub fn zero_sum(x: Utility) -> Self {
        Self::from([(Seat::from(0), x), (Seat::from(1), -x)])
    }
}
