//! Exact solver.
//!
//! Depth-first enumeration of every Hamiltonian cycle that starts at city 0.
//! Cities are tried in ascending id order and a complete cycle replaces the
//! incumbent only when it is strictly shorter, so among equally short cycles
//! the first one enumerated wins. There is no pruning: all `(n-1)!`
//! orderings are closed and measured, reflections included.
//!
//! Running time grows factorially and there is no timeout. Keep maps at or
//! below [`RECOMMENDED_MAX_CITIES`], or set [`ExactConfig::max_cities`] to
//! have larger maps rejected up front.

mod config;
mod runner;

pub use config::{ExactConfig, RECOMMENDED_MAX_CITIES};
pub use runner::{solve_exact, ExactResult, ExactRunner};
