//! Core types for the Hearth workspace.
//!
//! This crate defines the shared abstractions the solvers build on:
//!
//! - [`Heaters`]: an owned, sorted, non-empty set of heater coordinates
//! - [`Nearest`]: the heater closest to a house and the distance to it
//! - [`Observer`]: receives solver events and optionally returns control actions

mod heaters;
mod nearest;
mod observer;

pub use heaters::{Heaters, HeatersError};
pub use nearest::Nearest;
pub use observer::Observer;
