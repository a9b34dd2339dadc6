//! Seeded random instances.
//!
//! Cities are placed on distinct integer grid points of a
//! `[0, width] × [0, height]` rectangle and named `C0, C1, …` in draw order.
//! The same configuration always produces the same cities.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{self, TspError};
use crate::map::City;

/// Configuration for random instance generation.
///
/// # Examples
///
/// ```
/// use u_tsp::instance::{generate, InstanceConfig};
///
/// let config = InstanceConfig::default().with_cities(8).with_seed(7);
/// let cities = generate(&config).unwrap();
/// assert_eq!(cities.len(), 8);
/// assert_eq!(cities[0].name, "C0");
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstanceConfig {
    /// Number of cities to draw.
    pub cities: usize,
    /// Largest x coordinate.
    pub width: u32,
    /// Largest y coordinate.
    pub height: u32,
    /// Random seed.
    pub seed: u64,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            cities: 10,
            width: 1000,
            height: 1000,
            seed: 42,
        }
    }
}

impl InstanceConfig {
    /// Sets the number of cities.
    pub fn with_cities(mut self, n: usize) -> Self {
        self.cities = n;
        self
    }

    /// Sets the largest x coordinate.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Sets the largest y coordinate.
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.cities == 0 {
            return Err("cities must be at least 1".into());
        }
        let slots = (u64::from(self.width) + 1).saturating_mul(u64::from(self.height) + 1);
        if self.cities as u64 > slots {
            return Err(format!(
                "a {}x{} grid holds {slots} distinct points, {} requested",
                self.width, self.height, self.cities
            ));
        }
        Ok(())
    }
}

/// Draws `config.cities` cities at distinct grid points.
pub fn generate(config: &InstanceConfig) -> error::Result<Vec<City>> {
    config.validate().map_err(TspError::InvalidConfig)?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut taken: HashSet<(u32, u32)> = HashSet::with_capacity(config.cities);
    let mut cities = Vec::with_capacity(config.cities);

    while cities.len() < config.cities {
        let pos = (
            rng.random_range(0..=config.width),
            rng.random_range(0..=config.height),
        );
        if !taken.insert(pos) {
            continue;
        }
        cities.push(City::new(
            format!("C{}", cities.len()),
            f64::from(pos.0),
            f64::from(pos.1),
        ));
    }

    log::debug!(
        "generated {} cities on a {}x{} grid (seed {})",
        cities.len(),
        config.width,
        config.height,
        config.seed
    );
    Ok(cities)
}
