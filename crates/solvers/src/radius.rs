//! Minimum heating radius for houses and heaters on a line.
//!
//! # Algorithm
//!
//! The heater coordinates are sorted once into a [`Heaters`] set. Each house
//! is then located with a lower-bound binary search: only the first heater
//! at or after the house and the heater just before it can be closest, so
//! the house needs the smaller of those two distances. The answer is the
//! largest such distance over all houses, since one radius must serve every
//! house at once.
//!
//! Work is `O(M log M)` to sort `M` heaters plus `O(N log M)` for `N` houses.
//! Coordinates are `i64` and distances `u64`, so every distance is exact.
//!
//! # Observer Events
//!
//! [`solve`] emits one [`Event::Located`] per house, in input order, after
//! the house's nearest heater is known. Observers can return
//! [`Action::StopEarly`] to halt immediately.
//!
//! # Example
//!
//! ```
//! use hearth_solvers::radius::find_minimum_radius;
//!
//! let radius = find_minimum_radius(&[1, 2, 3, 4], &[1, 4]).unwrap();
//! assert_eq!(radius, 1);
//! ```

mod action;
mod config;
mod error;
mod event;
mod search;
mod solution;


pub use action::Action;
pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use solution::{Binding, Solution, Status};

pub use hearth_core::Heaters;

use hearth_core::Observer;

use search::search;

/// Finds the minimum radius that covers every house.
///
/// Neither slice is modified; the heaters are sorted into an owned copy.
/// Returns `Ok(0)` when there are no houses.
///
/// # Errors
///
/// Returns [`Error::EmptyHeaters`] if `heaters` is empty.
pub fn find_minimum_radius<T>(houses: &[T], heaters: &[T]) -> Result<u64, Error>
where
    T: Copy + Into<i64>,
{
    let heaters = Heaters::new(heaters.iter().copied())?;
    let solution = solve_unobserved(houses.iter().copied(), &heaters, &Config::default());
    Ok(solution.radius)
}

/// Searches for the minimum radius that covers every house.
///
/// The observer receives an [`Event`] for each located house.
/// See the [module docs](self) for details on event timing.
///
/// Without a radius limit or an observer stop, the returned solution has
/// [`Status::Covered`] and its radius is the exact minimum.
pub fn solve<I, Obs>(houses: I, heaters: &Heaters, config: &Config, observer: Obs) -> Solution
where
    I: IntoIterator,
    I::Item: Into<i64>,
    Obs: Observer<Event, Action>,
{
    search(houses.into_iter().map(Into::into), heaters, config, observer)
}

/// Searches for the minimum radius without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
pub fn solve_unobserved<I>(houses: I, heaters: &Heaters, config: &Config) -> Solution
where
    I: IntoIterator,
    I::Item: Into<i64>,
{
    solve(houses, heaters, config, ())
}
