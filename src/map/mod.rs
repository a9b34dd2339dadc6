//! Distance map.
//!
//! A [`Map`] owns a fixed list of [`City`] records and the dense matrix of
//! pairwise Euclidean distances between them. The matrix is computed once,
//! eagerly, when the map is built and is read-only afterwards, so a single
//! map can be shared by any number of solver invocations.

mod matrix;
mod types;

pub use matrix::Map;
pub use types::{City, CityId};
