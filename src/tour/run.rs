//! Tour results.

use std::collections::HashSet;
use std::fmt;

use crate::error::{Result, TspError};
use crate::map::{CityId, Map};

/// Relative tolerance used when checking a stored length against a
/// recomputed one.
const LENGTH_TOLERANCE: f64 = 1e-9;

/// A tour: an ordered, duplicate-free sequence of city ids plus its length.
///
/// `length` is the sum of consecutive edge distances. Once the tour holds
/// every city of its map, it also includes the closing edge back to
/// `path[0]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Run {
    /// Visiting order.
    pub path: Vec<CityId>,
    /// Total length of the placed edges.
    pub length: f64,
}

impl Run {
    pub(crate) fn new(path: Vec<CityId>, length: f64) -> Self {
        Self { path, length }
    }

    /// Number of cities currently placed.
    pub fn size(&self) -> usize {
        self.path.len()
    }

    /// Returns `true` if every city of `map` is on the tour.
    pub fn is_complete(&self, map: &Map) -> bool {
        self.path.len() == map.size()
    }

    /// Edges of the tour in visiting order, including the closing edge when
    /// the tour is complete and has at least two cities.
    pub fn edges<'a>(&'a self, map: &Map) -> impl Iterator<Item = (CityId, CityId)> + 'a {
        let closing = match (self.path.first(), self.path.last()) {
            (Some(&first), Some(&last)) if self.path.len() >= 2 && self.is_complete(map) => {
                Some((last, first))
            }
            _ => None,
        };
        self.path
            .windows(2)
            .map(|w| (w[0], w[1]))
            .chain(closing)
    }

    /// Formats the tour as city names in visiting order followed by the
    /// total length.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::map::{City, Map};
    /// use u_tsp::exact::solve_exact;
    ///
    /// let map = Map::build(vec![
    ///     City::new("A", 0.0, 0.0),
    ///     City::new("B", 0.0, 10.0),
    ///     City::new("C", 10.0, 10.0),
    ///     City::new("D", 10.0, 0.0),
    /// ])
    /// .unwrap();
    /// let run = solve_exact(&map).unwrap();
    /// assert_eq!(run.report(&map).to_string(), "A B C D 40");
    /// ```
    pub fn report<'a>(&'a self, map: &'a Map) -> RunReport<'a> {
        RunReport { run: self, map }
    }

    /// Checks the run against `map`.
    ///
    /// Verifies that ids are in range and distinct, that the run is no
    /// longer than the map, and that `length` matches the recomputed edge
    /// sum (closing edge included when complete).
    pub fn validate(&self, map: &Map) -> Result<()> {
        if self.path.len() > map.size() {
            return Err(TspError::InvalidTour(format!(
                "run holds {} cities but the map only has {}",
                self.path.len(),
                map.size()
            )));
        }
        check_ids(map, &self.path)?;

        let expected: f64 = self.edges(map).map(|(a, b)| map.distance(a, b)).sum();
        let tolerance = LENGTH_TOLERANCE * expected.abs().max(1.0);
        if (expected - self.length).abs() > tolerance {
            return Err(TspError::InvalidTour(format!(
                "stored length {} does not match recomputed length {}",
                self.length, expected
            )));
        }
        Ok(())
    }
}

/// Display adapter returned by [`Run::report`].
pub struct RunReport<'a> {
    run: &'a Run,
    map: &'a Map,
}

impl fmt::Display for RunReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &id in &self.run.path {
            write!(f, "{} ", self.map.city(id).name)?;
        }
        write!(f, "{}", self.run.length)
    }
}

/// Length of the closed tour visiting `path` in order.
///
/// `path` must be a permutation of every city id on the map.
///
/// # Examples
///
/// ```
/// use u_tsp::map::{City, Map};
/// use u_tsp::tour::tour_length;
///
/// let map = Map::build(vec![
///     City::new("A", 0.0, 0.0),
///     City::new("B", 5.0, 0.0),
///     City::new("C", 10.0, 0.0),
/// ])
/// .unwrap();
/// assert_eq!(tour_length(&map, &[0, 1, 2]).unwrap(), 20.0);
/// assert!(tour_length(&map, &[0, 1]).is_err());
/// ```
pub fn tour_length(map: &Map, path: &[CityId]) -> Result<f64> {
    if path.len() != map.size() {
        return Err(TspError::InvalidTour(format!(
            "path length ({}) does not match number of cities ({})",
            path.len(),
            map.size()
        )));
    }
    check_ids(map, path)?;

    let open: f64 = path.windows(2).map(|w| map.distance(w[0], w[1])).sum();
    Ok(open + map.distance(path[path.len() - 1], path[0]))
}

fn check_ids(map: &Map, path: &[CityId]) -> Result<()> {
    if let Some(&city) = path.iter().find(|&&c| c >= map.size()) {
        return Err(TspError::CityOutOfRange {
            city,
            size: map.size(),
        });
    }
    let distinct: HashSet<CityId> = path.iter().copied().collect();
    if distinct.len() != path.len() {
        return Err(TspError::InvalidTour("path contains duplicate cities".into()));
    }
    Ok(())
}
