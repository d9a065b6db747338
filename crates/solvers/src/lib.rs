//! Solvers for the Hearth workspace.
//!
//! # Solvers
//!
//! - [`radius`]: minimum heating radius that covers every house

pub mod radius;
