//! Incremental tour construction with exact undo.

use super::run::Run;
use crate::error::{Result, TspError};
use crate::map::{CityId, Map};

/// A partial tour anchored at city 0.
///
/// Keeps a visited marker per city and the accumulated open length after
/// each placed city. Popping a city truncates that history, so the length
/// goes back to its previous value bit for bit rather than by subtraction.
///
/// # Examples
///
/// ```
/// use u_tsp::map::{City, Map};
/// use u_tsp::tour::TourBuilder;
///
/// let map = Map::build(vec![
///     City::new("A", 0.0, 0.0),
///     City::new("B", 0.0, 10.0),
///     City::new("C", 10.0, 10.0),
/// ])
/// .unwrap();
///
/// let mut tour = TourBuilder::new(&map);
/// tour.push(1).unwrap();
/// assert_eq!(tour.length(), 10.0);
/// tour.push(2).unwrap();
/// assert!(tour.is_complete());
/// assert!((tour.length() - (20.0 + 200f64.sqrt())).abs() < 1e-12);
///
/// assert_eq!(tour.pop(), Some(2));
/// assert_eq!(tour.length(), 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct TourBuilder<'a> {
    map: &'a Map,
    path: Vec<CityId>,
    visited: Vec<bool>,
    /// `prefix[k]` is the open length of `path[..=k]`.
    prefix: Vec<f64>,
}

impl<'a> TourBuilder<'a> {
    /// Starts a tour at city 0.
    pub fn new(map: &'a Map) -> Self {
        let n = map.size();
        let mut path = Vec::with_capacity(n);
        let mut visited = vec![false; n];
        let mut prefix = Vec::with_capacity(n);
        path.push(0);
        visited[0] = true;
        prefix.push(0.0);
        Self {
            map,
            path,
            visited,
            prefix,
        }
    }

    pub fn map(&self) -> &'a Map {
        self.map
    }

    /// Appends `city` to the tour.
    ///
    /// # Errors
    ///
    /// - [`TspError::CityOutOfRange`] if `city` is not on the map.
    /// - [`TspError::AlreadyVisited`] if `city` is already placed.
    pub fn push(&mut self, city: CityId) -> Result<()> {
        if city >= self.map.size() {
            return Err(TspError::CityOutOfRange {
                city,
                size: self.map.size(),
            });
        }
        if self.visited[city] {
            return Err(TspError::AlreadyVisited(city));
        }
        self.push_unchecked(city);
        Ok(())
    }

    /// Appends an in-range, unvisited city.
    #[inline]
    pub(crate) fn push_unchecked(&mut self, city: CityId) {
        let last = self.path[self.path.len() - 1];
        let open = self.open_length() + self.map.distance(last, city);
        self.path.push(city);
        self.prefix.push(open);
        self.visited[city] = true;
    }

    /// Removes the most recently placed city. The start city is never removed.
    #[inline]
    pub fn pop(&mut self) -> Option<CityId> {
        if self.path.len() <= 1 {
            return None;
        }
        let city = self.path.pop()?;
        self.prefix.pop();
        self.visited[city] = false;
        Some(city)
    }

    /// Drops every city except the start.
    pub fn reset(&mut self) {
        for &city in &self.path[1..] {
            self.visited[city] = false;
        }
        self.path.truncate(1);
        self.prefix.truncate(1);
    }

    /// Number of cities placed, start included.
    pub fn size(&self) -> usize {
        self.path.len()
    }

    pub fn path(&self) -> &[CityId] {
        &self.path
    }

    pub fn last(&self) -> CityId {
        self.path[self.path.len() - 1]
    }

    /// # Panics
    ///
    /// Panics if `city` is out of range.
    #[inline]
    pub fn is_visited(&self, city: CityId) -> bool {
        self.visited[city]
    }

    pub fn is_complete(&self) -> bool {
        self.path.len() == self.map.size()
    }

    /// Length of the placed edges, without the closing edge.
    #[inline]
    pub fn open_length(&self) -> f64 {
        self.prefix[self.prefix.len() - 1]
    }

    /// Length of the tour, including the closing edge once complete.
    #[inline]
    pub fn length(&self) -> f64 {
        if self.is_complete() {
            self.open_length() + self.map.distance(self.last(), self.path[0])
        } else {
            self.open_length()
        }
    }

    /// Snapshot of the current tour.
    pub fn to_run(&self) -> Run {
        Run::new(self.path.clone(), self.length())
    }
}
