//! Exact and heuristic solvers for small symmetric Euclidean TSP instances.
//!
//! - **Distance map** ([`map`]): a fixed city list plus its dense,
//!   eagerly computed pairwise distance matrix.
//! - **Tours** ([`tour`]): the [`Run`](tour::Run) result record and an
//!   incremental [`TourBuilder`](tour::TourBuilder) with exact undo.
//! - **Exact solver** ([`exact`]): exhaustive backtracking enumeration of
//!   every Hamiltonian cycle anchored at city 0.
//! - **Nearest neighbor** ([`nearest`]): greedy tour construction.
//! - **Comparison** ([`compare`]): both solvers against one map, with the
//!   heuristic's optimality gap.
//! - **Instances** ([`instance`]): seeded random city sets.
//!
//! # Example
//!
//! ```
//! use u_tsp::exact::solve_exact;
//! use u_tsp::map::{City, Map};
//! use u_tsp::nearest::solve_nearest_neighbor;
//!
//! let map = Map::build(vec![
//!     City::new("A", 0.0, 0.0),
//!     City::new("B", 0.0, 10.0),
//!     City::new("C", 10.0, 10.0),
//!     City::new("D", 10.0, 0.0),
//! ])
//! .unwrap();
//!
//! let best = solve_exact(&map).unwrap();
//! let greedy = solve_nearest_neighbor(&map).unwrap();
//! assert_eq!(best.length, 40.0);
//! assert!(greedy.length >= best.length);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for cities, runs, configs and results.
//! - `parallel`: [`compare::compare`] runs both solvers concurrently with rayon.

pub mod compare;
pub mod error;
pub mod exact;
pub mod instance;
pub mod map;
pub mod nearest;
pub mod tour;

pub use error::{Result, TspError};
