//! Tours over a [`Map`](crate::map::Map).
//!
//! - [`Run`]: an owned, finished (or partial) tour as returned by the solvers.
//! - [`TourBuilder`]: a mutable tour anchored at city 0 supporting push, pop
//!   and reset with exact length restoration. The exact solver drives its
//!   backtracking search through one, and callers can use it to assemble a
//!   tour by hand.
//! - [`tour_length`]: recomputes the closed length of an arbitrary path.

mod builder;
mod run;

pub use builder::TourBuilder;
pub use run::{tour_length, Run, RunReport};
