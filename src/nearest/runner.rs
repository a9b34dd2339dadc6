//! Greedy tour construction.

use crate::error::Result;
use crate::map::{CityId, Map};
use crate::tour::{Run, TourBuilder};

/// Executes the nearest-neighbor heuristic.
pub struct NearestNeighborRunner;

impl NearestNeighborRunner {
    /// Builds a greedy tour starting at city 0.
    ///
    /// At each step the unvisited city closest to the last placed one is
    /// appended. Candidates are scanned in ascending id order with a strict
    /// comparison, so equidistant cities resolve to the lowest id.
    ///
    /// A single-city map yields the trivial run `[0]` of length 0.
    pub fn run(map: &Map) -> Result<Run> {
        let mut tour = TourBuilder::new(map);

        while !tour.is_complete() {
            let Some(next) = nearest_unvisited(&tour) else {
                break;
            };
            log::trace!(
                "nearest neighbor step {} -> {next} ({})",
                tour.last(),
                map.distance(tour.last(), next)
            );
            tour.push_unchecked(next);
        }

        let run = tour.to_run();
        log::info!(
            "nearest neighbor over {} cities: length {}",
            map.size(),
            run.length
        );
        Ok(run)
    }
}

/// Builds a greedy nearest-neighbor tour starting at city 0.
///
/// # Examples
///
/// ```
/// use u_tsp::map::{City, Map};
/// use u_tsp::nearest::solve_nearest_neighbor;
///
/// let map = Map::build(vec![
///     City::new("A", 0.0, 0.0),
///     City::new("B", 0.0, 10.0),
///     City::new("C", 10.0, 10.0),
///     City::new("D", 10.0, 0.0),
/// ])
/// .unwrap();
/// let run = solve_nearest_neighbor(&map).unwrap();
/// assert_eq!(run.path, vec![0, 1, 2, 3]);
/// assert_eq!(run.length, 40.0);
/// ```
pub fn solve_nearest_neighbor(map: &Map) -> Result<Run> {
    NearestNeighborRunner::run(map)
}

/// Closest unvisited city to the last placed one.
///
/// The first unvisited city seeds the scan, so a city is returned whenever
/// one remains, even if every candidate distance is infinite.
fn nearest_unvisited(tour: &TourBuilder<'_>) -> Option<CityId> {
    let row = tour.map().row(tour.last());
    let mut nearest = None;
    let mut best = f64::INFINITY;
    for (city, &d) in row.iter().enumerate() {
        if tour.is_visited(city) {
            continue;
        }
        if nearest.is_none() || d < best {
            best = d;
            nearest = Some(city);
        }
    }
    nearest
}
