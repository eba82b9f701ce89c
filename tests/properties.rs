use std::sync::Arc;

use proptest::prelude::*;

use grid_routing::constraints::configure;
use grid_routing::distance::DistanceMatrix;
use grid_routing::engine::local::LocalEngine;
use grid_routing::engine::{RoutingEngine, SearchParameters};
use grid_routing::models::{Geography, ScaleFactor};
use grid_routing::report::render;
use grid_routing::search::solve;

fn raw_points(max_len: usize) -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((-50i64..50, -50i64..50), 1..max_len)
}

fn scale() -> impl Strategy<Value = (i64, i64)> {
    (1i64..200, 1i64..200)
}

proptest! {
    #[test]
    fn test_matrix_symmetric_with_zero_diagonal(points in raw_points(12), (w, h) in scale()) {
        let geo = Geography::new(&points, ScaleFactor::new(w, h).unwrap(), 1).unwrap();
        let dm = DistanceMatrix::manhattan(&geo);
        prop_assert!(dm.is_symmetric());
        for i in 0..dm.location_count() {
            prop_assert_eq!(dm.distance_between(i, i), 0);
            for j in 0..dm.location_count() {
                prop_assert!(dm.distance_between(i, j) >= 0);
            }
        }
    }

    #[test]
    fn test_triangle_inequality(points in raw_points(8), (w, h) in scale()) {
        let geo = Geography::new(&points, ScaleFactor::new(w, h).unwrap(), 1).unwrap();
        let dm = DistanceMatrix::manhattan(&geo);
        let n = dm.location_count();
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    prop_assert!(
                        dm.distance_between(i, k)
                            <= dm.distance_between(i, j) + dm.distance_between(j, k)
                    );
                }
            }
        }
    }

    #[test]
    fn test_scaling_is_deterministic(points in raw_points(12), (w, h) in scale()) {
        let scale = ScaleFactor::new(w, h).unwrap();
        let first = Geography::new(&points, scale, 2).unwrap();
        let second = Geography::new(&points, scale, 2).unwrap();
        prop_assert_eq!(first.locations(), second.locations());

        for (i, &(x, y)) in points.iter().enumerate() {
            let location = first.coordinate_of(i).unwrap();
            prop_assert_eq!(location.x(), x * w);
            prop_assert_eq!(location.y(), y * h);
        }
        prop_assert_eq!(
            DistanceMatrix::manhattan(&first),
            DistanceMatrix::manhattan(&second)
        );
    }

    #[test]
    fn test_reported_routes_are_consistent(
        points in raw_points(9),
        vehicles in 1usize..4,
        span in 0i64..3,
    ) {
        let geo = Geography::new(&points, ScaleFactor::new(114, 80).unwrap(), vehicles).unwrap();
        let metric = Arc::new(DistanceMatrix::manhattan(&geo));
        let mut model = LocalEngine
            .new_model(geo.location_count(), vehicles, geo.depot_index())
            .unwrap();
        configure(&mut model, &metric, i64::MAX / 4, span).unwrap();

        let outcome = solve(&model, &SearchParameters::default()).unwrap();
        let assignment = outcome.assignment().unwrap();
        let report = render(&geo, &model, assignment).unwrap();

        let depot = geo.depot_index();
        let mut visits = 0;
        for route in report.routes() {
            let stops = route.stops();
            prop_assert_eq!(stops.first(), Some(&depot));
            prop_assert_eq!(stops.last(), Some(&depot));
            let edges: i64 = stops
                .windows(2)
                .map(|w| metric.distance_between(w[0], w[1]))
                .sum();
            prop_assert_eq!(edges, route.distance());
            visits += route.num_visits();
        }
        prop_assert_eq!(visits, geo.location_count() - 1);
    }
}
