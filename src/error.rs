//! Error type shared by every solver entry point.

use crate::map::CityId;
use thiserror::Error;

/// Errors produced while building maps, validating tours, or solving.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// A map needs at least one city.
    #[error("cannot build a map without cities")]
    EmptyMap,

    /// A city coordinate is NaN or infinite.
    #[error("city {city} ({name}) has a non-finite coordinate")]
    InvalidCoordinate { city: CityId, name: String },

    /// The exact solver refuses maps above its configured cap.
    #[error("exact search over {cities} cities exceeds the limit of {limit}")]
    TooManyCities { cities: usize, limit: usize },

    /// A configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A tour violates one of the run invariants.
    #[error("invalid tour: {0}")]
    InvalidTour(String),

    /// A city id does not exist on the map.
    #[error("city {city} is out of range for a map of {size} cities")]
    CityOutOfRange { city: CityId, size: usize },

    /// A city was pushed twice onto the same tour.
    #[error("city {0} is already on the tour")]
    AlreadyVisited(CityId),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TspError>;
