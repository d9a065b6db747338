#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the radius search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Largest radius the caller's heaters can reach, if bounded.
    ///
    /// When set, the search stops at the first house farther than this from
    /// every heater. A house exactly at the limit is covered.
    pub radius_limit: Option<u64>,
}

impl Config {
    /// Returns a config that stops once any house needs more than `limit`.
    #[must_use]
    pub fn with_radius_limit(limit: u64) -> Self {
        Self {
            radius_limit: Some(limit),
        }
    }

    /// Returns `true` if `distance` exceeds the configured limit.
    pub(super) fn exceeds_limit(&self, distance: u64) -> bool {
        self.radius_limit.is_some_and(|limit| distance > limit)
    }
}
