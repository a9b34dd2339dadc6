//! Side-by-side exact and heuristic solutions.
//!
//! Both solvers read the same [`Map`] and keep their working state private,
//! so with the `parallel` feature they run concurrently via `rayon::join`.

use crate::error::Result;
use crate::exact::{ExactConfig, ExactResult, ExactRunner};
use crate::map::Map;
use crate::nearest::NearestNeighborRunner;
use crate::tour::Run;

/// The optimal cycle and the nearest-neighbor tour for one map.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    pub exact: ExactResult,
    pub heuristic: Run,
}

impl Comparison {
    /// Relative excess of the heuristic tour over the optimum.
    ///
    /// `0.0` means the heuristic found an optimal tour. Also `0.0` when the
    /// optimum has zero length.
    pub fn gap(&self) -> f64 {
        let optimal = self.exact.run.length;
        if optimal > 0.0 {
            self.heuristic.length / optimal - 1.0
        } else {
            0.0
        }
    }
}

/// Solves `map` with both solvers.
///
/// # Examples
///
/// ```
/// use u_tsp::compare::compare;
/// use u_tsp::exact::ExactConfig;
/// use u_tsp::map::{City, Map};
///
/// let map = Map::build(vec![
///     City::new("A", 0.0, 0.0),
///     City::new("B", 0.0, 10.0),
///     City::new("C", 10.0, 10.0),
///     City::new("D", 10.0, 0.0),
/// ])
/// .unwrap();
/// let comparison = compare(&map, &ExactConfig::default()).unwrap();
/// assert_eq!(comparison.gap(), 0.0);
/// ```
pub fn compare(map: &Map, config: &ExactConfig) -> Result<Comparison> {
    let (exact, heuristic) = solve_both(map, config);
    let comparison = Comparison {
        exact: exact?,
        heuristic: heuristic?,
    };
    log::info!(
        "optimal length {}, nearest neighbor length {} (gap {:.2}%)",
        comparison.exact.run.length,
        comparison.heuristic.length,
        comparison.gap() * 100.0
    );
    Ok(comparison)
}

#[cfg(feature = "parallel")]
fn solve_both(map: &Map, config: &ExactConfig) -> (Result<ExactResult>, Result<Run>) {
    rayon::join(
        || ExactRunner::run(map, config),
        || NearestNeighborRunner::run(map),
    )
}

#[cfg(not(feature = "parallel"))]
fn solve_both(map: &Map, config: &ExactConfig) -> (Result<ExactResult>, Result<Run>) {
    (
        ExactRunner::run(map, config),
        NearestNeighborRunner::run(map),
    )
}
