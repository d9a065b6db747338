#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The heater closest to a house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Nearest {
    /// Coordinate of the closest heater.
    pub heater: i64,

    /// Distance from the house to that heater.
    pub distance: u64,
}

impl Nearest {
    /// Creates the nearest-heater record for `house` served by `heater`.
    #[must_use]
    pub fn new(house: i64, heater: i64) -> Self {
        Self {
            heater,
            distance: house.abs_diff(heater),
        }
    }

    /// Returns whichever of `self` and `other` is closer.
    ///
    /// On a tie the heater with the lower coordinate wins.
    #[must_use]
    pub fn closer(self, other: Self) -> Self {
        match self.distance.cmp(&other.distance) {
            std::cmp::Ordering::Less => self,
            std::cmp::Ordering::Greater => other,
            std::cmp::Ordering::Equal if self.heater <= other.heater => self,
            std::cmp::Ordering::Equal => other,
        }
    }
}
