mod common;

use common::{approx_eq, brute_force_optimum, init_logger, map_of};
use u_tsp::compare::compare;
use u_tsp::exact::{solve_exact, ExactConfig, ExactRunner, RECOMMENDED_MAX_CITIES};
use u_tsp::instance::{generate, InstanceConfig};
use u_tsp::map::{City, Map};
use u_tsp::nearest::solve_nearest_neighbor;
use u_tsp::tour::TourBuilder;
use u_tsp::TspError;

const SQUARE: [(f64, f64); 4] = [(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)];

#[test]
fn square_both_solvers_find_perimeter() {
    init_logger();
    let map = map_of(&SQUARE);

    let exact = solve_exact(&map).unwrap();
    assert_eq!(exact.size(), 4);
    assert!(approx_eq(exact.length, 40.0));

    let greedy = solve_nearest_neighbor(&map).unwrap();
    assert_eq!(greedy.size(), 4);
    assert!(approx_eq(greedy.length, 40.0));
}

#[test]
fn huge_but_finite_coordinates() {
    init_logger();
    let map = map_of(&[(-1e200, 0.0), (1e200, 0.0), (0.0, 1e200)]);
    let exact = solve_exact(&map).unwrap();
    let greedy = solve_nearest_neighbor(&map).unwrap();
    assert_eq!(exact.size(), 3);
    assert_eq!(greedy.size(), 3);
    assert!(exact.length.is_finite());
    assert!(greedy.length >= exact.length);
}

#[test]
fn collinear_out_and_back() {
    init_logger();
    let map = map_of(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
    let exact = solve_exact(&map).unwrap();
    assert!(approx_eq(exact.length, 20.0));
}

#[test]
fn single_city_is_trivial_and_stable() {
    init_logger();
    let map = map_of(&[(42.0, -7.0)]);
    for _ in 0..3 {
        let exact = solve_exact(&map).unwrap();
        let greedy = solve_nearest_neighbor(&map).unwrap();
        assert_eq!(exact.path, vec![0]);
        assert_eq!(exact.length, 0.0);
        assert_eq!(greedy.path, vec![0]);
        assert_eq!(greedy.length, 0.0);
    }
}

#[test]
fn empty_set_is_rejected() {
    for _ in 0..3 {
        assert_eq!(Map::build(Vec::new()).unwrap_err(), TspError::EmptyMap);
    }
}

#[test]
fn nine_cities_match_brute_force() {
    init_logger();
    let points = [
        (12.0, 44.0),
        (87.0, 3.0),
        (55.0, 61.0),
        (9.0, 90.0),
        (70.0, 70.0),
        (33.0, 18.0),
        (95.0, 52.0),
        (41.0, 97.0),
        (64.0, 29.0),
    ];
    let map = map_of(&points);
    let result = ExactRunner::run(&map, &ExactConfig::default()).unwrap();
    assert_eq!(result.cycles_evaluated, 40_320);
    assert!(approx_eq(result.run.length, brute_force_optimum(&points)));
    assert!(result.run.validate(&map).is_ok());
}

#[test]
fn generated_instance_comparison() {
    init_logger();
    let cities = generate(&InstanceConfig::default().with_cities(8).with_seed(2024)).unwrap();
    let map = Map::build(cities).unwrap();
    let comparison = compare(&map, &ExactConfig::default()).unwrap();

    assert!(comparison.exact.run.validate(&map).is_ok());
    assert!(comparison.heuristic.validate(&map).is_ok());
    assert!(comparison.heuristic.length >= comparison.exact.run.length);
    assert!(comparison.gap() >= 0.0);
}

#[test]
fn report_lists_names_then_length() {
    let map = Map::build(vec![
        City::new("Paris", 0.0, 0.0),
        City::new("Lille", 0.0, 10.0),
        City::new("Metz", 10.0, 10.0),
        City::new("Dijon", 10.0, 0.0),
    ])
    .unwrap();
    let run = solve_exact(&map).unwrap();
    assert_eq!(run.report(&map).to_string(), "Paris Lille Metz Dijon 40");
}

#[test]
fn hand_built_tour_matches_solver() {
    let map = map_of(&SQUARE);
    let mut tour = TourBuilder::new(&map);

    // pick each city by clicking near it
    for (x, y) in [(0.5, 9.5), (9.6, 9.8), (9.9, 0.2)] {
        let city = map.nearest_city(x, y, 2.0).expect("a city under the cursor");
        tour.push(city).unwrap();
    }
    assert!(tour.is_complete());

    let run = tour.to_run();
    assert_eq!(run, solve_exact(&map).unwrap());
}

#[test]
fn exact_cap_is_opt_in() {
    let cities = generate(&InstanceConfig::default().with_cities(13)).unwrap();
    let map = Map::build(cities).unwrap();
    let config = ExactConfig::default().with_max_cities(RECOMMENDED_MAX_CITIES);
    assert_eq!(
        ExactRunner::run(&map, &config).unwrap_err(),
        TspError::TooManyCities {
            cities: 13,
            limit: 12
        }
    );
    // the heuristic has no cap
    let greedy = solve_nearest_neighbor(&map).unwrap();
    assert_eq!(greedy.size(), 13);
}
