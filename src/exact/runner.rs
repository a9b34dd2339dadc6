//! Exhaustive backtracking search.
//!
//! # Algorithm
//!
//! 1. Anchor the working tour at city 0.
//! 2. If every city is placed, close the loop and compare against the best.
//! 3. Otherwise, for each unvisited city in ascending id order: push it,
//!    recurse, pop it.
//!
//! The working tour is a single [`TourBuilder`] mutated in place; the best
//! cycle lives in a separate buffer that is only written on improvement.

use super::config::ExactConfig;
use crate::error::{Result, TspError};
use crate::map::{CityId, Map};
use crate::tour::{Run, TourBuilder};

/// Result of an exact search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactResult {
    /// The shortest cycle found.
    pub run: Run,

    /// Number of complete cycles closed and measured.
    pub cycles_evaluated: u64,

    /// Number of times the incumbent was replaced.
    pub improvements: usize,
}

/// Executes the exact search.
pub struct ExactRunner;

impl ExactRunner {
    /// Finds a minimum-length Hamiltonian cycle starting at city 0.
    ///
    /// A single-city map yields the trivial run `[0]` of length 0.
    ///
    /// # Errors
    ///
    /// - [`TspError::InvalidConfig`] if `config` does not validate.
    /// - [`TspError::TooManyCities`] if `config.max_cities` is set and the
    ///   map exceeds it.
    pub fn run(map: &Map, config: &ExactConfig) -> Result<ExactResult> {
        config.validate().map_err(TspError::InvalidConfig)?;

        let n = map.size();
        if let Some(limit) = config.max_cities {
            if n > limit {
                return Err(TspError::TooManyCities { cities: n, limit });
            }
        }

        if n == 1 {
            log::debug!("exact search on a single-city map, returning trivial run");
            return Ok(ExactResult {
                run: Run::new(vec![0], 0.0),
                cycles_evaluated: 1,
                improvements: 1,
            });
        }

        let mut tour = TourBuilder::new(map);
        let mut best = Best {
            path: Vec::with_capacity(n),
            length: f64::INFINITY,
            cycles: 0,
            improvements: 0,
        };

        search(&mut tour, &mut best);

        log::info!(
            "exact search over {n} cities: length {} after {} cycles ({} improvements)",
            best.length,
            best.cycles,
            best.improvements
        );

        Ok(ExactResult {
            run: Run::new(best.path, best.length),
            cycles_evaluated: best.cycles,
            improvements: best.improvements,
        })
    }
}

/// Finds a minimum-length Hamiltonian cycle with the default configuration.
///
/// No size limit applies; the call takes `(n-1)!` steps.
///
/// # Examples
///
/// ```
/// use u_tsp::map::{City, Map};
/// use u_tsp::exact::solve_exact;
///
/// let map = Map::build(vec![
///     City::new("A", 0.0, 0.0),
///     City::new("B", 5.0, 0.0),
///     City::new("C", 10.0, 0.0),
/// ])
/// .unwrap();
/// let run = solve_exact(&map).unwrap();
/// assert_eq!(run.length, 20.0);
/// ```
pub fn solve_exact(map: &Map) -> Result<Run> {
    ExactRunner::run(map, &ExactConfig::default()).map(|result| result.run)
}

/// Incumbent cycle plus search counters.
struct Best {
    path: Vec<CityId>,
    length: f64,
    cycles: u64,
    improvements: usize,
}

fn search(tour: &mut TourBuilder<'_>, best: &mut Best) {
    if tour.is_complete() {
        let length = tour.length();
        best.cycles += 1;
        // The first closed cycle is always taken, even at infinite length.
        if best.path.is_empty() || length < best.length {
            best.path.clear();
            best.path.extend_from_slice(tour.path());
            best.length = length;
            best.improvements += 1;
            log::debug!("new best cycle {:?} with length {length}", best.path);
        }
        return;
    }

    for city in 0..tour.map().size() {
        if tour.is_visited(city) {
            continue;
        }
        tour.push_unchecked(city);
        search(tour, best);
        tour.pop();
    }
}
