//! Nearest-neighbor heuristic.
//!
//! Starting from city 0, repeatedly step to the closest unvisited city, then
//! close the loop. `O(n²)`, deterministic, and generally longer than the
//! optimal cycle (never shorter).

mod runner;

pub use runner::{solve_nearest_neighbor, NearestNeighborRunner};
