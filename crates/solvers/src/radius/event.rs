use hearth_core::Nearest;

/// Events emitted by the radius search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A house was located against the heaters.
    Located {
        /// Position of the house in the input sequence.
        index: usize,

        /// The house coordinate.
        house: i64,

        /// The heater closest to the house.
        nearest: Nearest,

        /// Running radius, including this house.
        radius: u64,
    },
}

impl Event {
    /// Returns the house coordinate this event refers to.
    #[must_use]
    pub fn house(&self) -> i64 {
        match self {
            Self::Located { house, .. } => *house,
        }
    }

    /// Returns the running radius at this event.
    #[must_use]
    pub fn radius(&self) -> u64 {
        match self {
            Self::Located { radius, .. } => *radius,
        }
    }
}
