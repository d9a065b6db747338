use hearth_core::Nearest;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Indicates how the radius search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// Every house was located; the radius is the exact minimum.
    Covered,

    /// A house lies farther than the configured radius limit.
    LimitExceeded,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The house that determines the radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binding {
    /// Position of the house in the input sequence.
    pub index: usize,

    /// The house coordinate.
    pub house: i64,

    /// The heater closest to the house.
    pub nearest: Nearest,
}

/// The result of a radius search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// Final search status.
    pub status: Status,

    /// Largest nearest-heater distance among the located houses.
    pub radius: u64,

    /// First located house attaining `radius`, if any house was located.
    pub binding: Option<Binding>,

    /// Number of houses located before the search finished.
    pub houses: usize,
}
