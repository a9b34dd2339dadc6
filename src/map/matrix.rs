//! Dense distance matrix over a fixed city list.

use super::types::{distance, City, CityId};
use crate::error::{Result, TspError};

/// A fixed set of cities plus their complete pairwise distance matrix.
///
/// Distances are stored row-major in a single `n * n` buffer. Each unordered
/// pair is computed once and mirrored, so `distance(i, j) == distance(j, i)`
/// holds bit for bit.
///
/// # Examples
///
/// ```
/// use u_tsp::map::{City, Map};
///
/// let map = Map::build(vec![
///     City::new("A", 0.0, 0.0),
///     City::new("B", 3.0, 4.0),
///     City::new("C", 0.0, 8.0),
/// ])
/// .unwrap();
///
/// assert_eq!(map.size(), 3);
/// assert!((map.distance(0, 1) - 5.0).abs() < 1e-12);
/// assert_eq!(map.distance(2, 2), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Map {
    towns: Vec<City>,
    data: Vec<f64>,
}

impl Map {
    /// Builds the map and its distance matrix.
    ///
    /// # Errors
    ///
    /// - [`TspError::EmptyMap`] if `cities` is empty.
    /// - [`TspError::InvalidCoordinate`] if any coordinate is NaN or infinite.
    pub fn build(cities: Vec<City>) -> Result<Self> {
        if cities.is_empty() {
            return Err(TspError::EmptyMap);
        }
        if let Some((city, town)) = cities.iter().enumerate().find(|(_, t)| !t.is_finite()) {
            return Err(TspError::InvalidCoordinate {
                city,
                name: town.name.clone(),
            });
        }

        let n = cities.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = distance(cities[i].x, cities[i].y, cities[j].x, cities[j].y);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }

        log::debug!("built distance map over {n} cities");

        Ok(Self {
            towns: cities,
            data,
        })
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.towns.len()
    }

    /// Cities indexed by id.
    pub fn towns(&self) -> &[City] {
        &self.towns
    }

    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn city(&self, id: CityId) -> &City {
        &self.towns[id]
    }

    /// Distance between two cities.
    ///
    /// # Panics
    ///
    /// Panics if either id is out of range.
    #[inline]
    pub fn distance(&self, from: CityId, to: CityId) -> f64 {
        self.data[from * self.towns.len() + to]
    }

    /// All distances from `from`, indexed by destination id.
    pub fn row(&self, from: CityId) -> &[f64] {
        let n = self.towns.len();
        &self.data[from * n..(from + 1) * n]
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        let n = self.size();
        for i in 0..n {
            for j in (i + 1)..n {
                if (self.distance(i, j) - self.distance(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Finds the city closest to `(x, y)` that lies strictly within `radius`.
    ///
    /// Equidistant candidates resolve to the lowest id.
    pub fn nearest_city(&self, x: f64, y: f64, radius: f64) -> Option<CityId> {
        let mut nearest = None;
        let mut best = radius;
        for (id, town) in self.towns.iter().enumerate() {
            let d = distance(x, y, town.x, town.y);
            if d < best {
                best = d;
                nearest = Some(id);
            }
        }
        nearest
    }
}
