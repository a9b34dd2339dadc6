#![allow(dead_code)]

use u_tsp::map::{City, Map};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn map_of(points: &[(f64, f64)]) -> Map {
    let cities = points
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| City::new(format!("C{i}"), x, y))
        .collect();
    Map::build(cities).expect("valid cities")
}

/// Shortest closed tour over `points`, by brute force over every ordering
/// (rotations included), computed straight from the coordinates.
pub fn brute_force_optimum(points: &[(f64, f64)]) -> f64 {
    fn closed_length(points: &[(f64, f64)], order: &[usize]) -> f64 {
        let n = order.len();
        (0..n)
            .map(|k| {
                let (x1, y1) = points[order[k]];
                let (x2, y2) = points[order[(k + 1) % n]];
                (x1 - x2).hypot(y1 - y2)
            })
            .sum()
    }

    fn permute(points: &[(f64, f64)], order: &mut Vec<usize>, k: usize, best: &mut f64) {
        if k == order.len() {
            *best = best.min(closed_length(points, order));
            return;
        }
        for i in k..order.len() {
            order.swap(k, i);
            permute(points, order, k + 1, best);
            order.swap(k, i);
        }
    }

    let mut order: Vec<usize> = (0..points.len()).collect();
    let mut best = f64::INFINITY;
    permute(points, &mut order, 0, &mut best);
    best
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}
