//! City records.

/// Index of a city within its map's city list.
pub type CityId = usize;

/// A named point on the plane.
///
/// # Examples
///
/// ```
/// use u_tsp::map::City;
///
/// let a = City::new("A", 0.0, 0.0);
/// let b = City::new("B", 3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Human-readable name, used in reports.
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl City {
    /// Creates a city at `(x, y)`.
    pub fn new(name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        distance(self.x, self.y, other.x, other.y)
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Euclidean distance between two points.
///
/// `hypot` avoids squaring, so finite separations never overflow.
pub(crate) fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x1 - x2).hypot(y1 - y2)
}
