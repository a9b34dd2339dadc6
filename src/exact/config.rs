//! Exact solver configuration.

/// Largest map the exact search finishes on in reasonable time
/// (11! ≈ 4·10⁷ cycles). Not enforced unless passed to
/// [`ExactConfig::with_max_cities`].
pub const RECOMMENDED_MAX_CITIES: usize = 12;

/// Configuration for the exact solver.
///
/// The default places no limit on the map size; the search always runs to
/// completion, taking `(n-1)!` steps. Callers needing bounded latency opt in
/// to a cap.
///
/// # Examples
///
/// ```
/// use u_tsp::exact::{ExactConfig, RECOMMENDED_MAX_CITIES};
///
/// let config = ExactConfig::default().with_max_cities(RECOMMENDED_MAX_CITIES);
/// assert_eq!(config.max_cities, Some(12));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactConfig {
    /// Maps with more cities than this are rejected before searching.
    /// `None` = no limit.
    pub max_cities: Option<usize>,
}

impl ExactConfig {
    /// Sets the largest map size the solver accepts.
    pub fn with_max_cities(mut self, n: usize) -> Self {
        self.max_cities = Some(n);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_cities == Some(0) {
            return Err("max_cities must be at least 1".into());
        }
        Ok(())
    }
}
