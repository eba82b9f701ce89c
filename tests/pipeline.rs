use std::collections::HashSet;
use std::sync::Arc;

use grid_routing::constraints::{configure, DISTANCE_DIMENSION};
use grid_routing::distance::DistanceMatrix;
use grid_routing::engine::local::LocalEngine;
use grid_routing::engine::{FirstSolutionStrategy, RoutingEngine, RoutingModel, SearchParameters};
use grid_routing::error::RoutingError;
use grid_routing::models::{Geography, ScaleFactor};
use grid_routing::report::{render, Report};
use grid_routing::scenario::{run, ScenarioConfig};
use grid_routing::search::solve;

fn two_stop(budget: i64) -> ScenarioConfig {
    ScenarioConfig {
        locations: vec![(5, 0), (2, 0), (8, 0)],
        vehicles: 1,
        max_distance_per_vehicle: budget,
        global_span_coefficient: 0,
        ..ScenarioConfig::reference()
    }
}

fn assert_well_formed(report: &Report, geography: &Geography, budget: i64) {
    let metric = DistanceMatrix::manhattan(geography);
    let depot = geography.depot_index();
    let mut visited = HashSet::new();

    for route in report.routes() {
        let stops = route.stops();
        assert_eq!(stops.first(), Some(&depot));
        assert_eq!(stops.last(), Some(&depot));
        assert!(route.distance() <= budget, "route over budget: {route:?}");

        let edges: i64 = stops
            .windows(2)
            .map(|w| metric.distance_between(w[0], w[1]))
            .sum();
        assert_eq!(edges, route.distance());

        for &stop in &stops[1..stops.len() - 1] {
            assert_ne!(stop, depot);
            assert!(visited.insert(stop), "stop {stop} visited twice");
        }
    }

    assert_eq!(visited.len(), geography.location_count() - 1);
}

#[test]
fn test_two_stop_scenario() {
    let report = run(&LocalEngine, &two_stop(10_000))
        .expect("well formed")
        .expect("feasible");

    assert_eq!(report.objective(), 1368);
    assert_eq!(report.routes().len(), 1);
    let stops = report.routes()[0].stops();
    assert!(stops == [0, 1, 2, 0] || stops == [0, 2, 1, 0]);
    assert_eq!(report.routes()[0].distance(), 1368);
    assert!(report.to_string().contains("Distance of the route: 1368m"));
}

#[test]
fn test_two_stop_every_strategy() {
    for strategy in [
        FirstSolutionStrategy::PathCheapestArc,
        FirstSolutionStrategy::ParallelCheapestInsertion,
        FirstSolutionStrategy::Savings,
    ] {
        let config = ScenarioConfig {
            first_solution_strategy: strategy,
            ..two_stop(10_000)
        };
        let report = run(&LocalEngine, &config)
            .expect("well formed")
            .expect("feasible");
        assert_eq!(report.routes()[0].distance(), 1368, "{strategy:?}");
    }
}

#[test]
fn test_budget_boundary() {
    // exactly the shortest tour still fits
    assert!(run(&LocalEngine, &two_stop(1368))
        .expect("well formed")
        .is_some());
    assert!(run(&LocalEngine, &two_stop(1367))
        .expect("well formed")
        .is_none());
}

#[test]
fn test_depot_only() {
    let config = ScenarioConfig {
        locations: vec![(4, 4)],
        vehicles: 3,
        ..ScenarioConfig::reference()
    };
    let report = run(&LocalEngine, &config)
        .expect("well formed")
        .expect("feasible");

    assert_eq!(report.objective(), 0);
    assert_eq!(report.routes().len(), 3);
    for route in report.routes() {
        assert_eq!(route.stops(), &[0, 0]);
        assert_eq!(route.distance(), 0);
        assert!(route.is_empty());
    }
}

#[test]
fn test_infeasible_budget() {
    let config = ScenarioConfig {
        max_distance_per_vehicle: 1000,
        ..ScenarioConfig::reference()
    };
    assert!(run(&LocalEngine, &config).expect("well formed").is_none());
}

#[test]
fn test_reference_scenario() {
    let config = ScenarioConfig::reference();
    let geography = config.geography().expect("valid");

    for strategy in [
        FirstSolutionStrategy::PathCheapestArc,
        FirstSolutionStrategy::ParallelCheapestInsertion,
        FirstSolutionStrategy::Savings,
    ] {
        let config = ScenarioConfig {
            first_solution_strategy: strategy,
            ..ScenarioConfig::reference()
        };
        let report = run(&LocalEngine, &config)
            .expect("well formed")
            .expect("feasible");
        assert_eq!(report.routes().len(), 4);
        assert_well_formed(&report, &geography, 3000);
    }
}

#[test]
fn test_span_coefficient_shortens_longest_route() {
    let flat = ScenarioConfig {
        global_span_coefficient: 0,
        ..ScenarioConfig::reference()
    };
    let balanced = ScenarioConfig::reference();

    let flat = run(&LocalEngine, &flat)
        .expect("well formed")
        .expect("feasible");
    let balanced = run(&LocalEngine, &balanced)
        .expect("well formed")
        .expect("feasible");

    assert!(balanced.max_route_distance() <= flat.max_route_distance());
}

#[test]
fn test_objective_includes_span_term() {
    let config = ScenarioConfig::reference();
    let report = run(&LocalEngine, &config)
        .expect("well formed")
        .expect("feasible");
    assert_eq!(
        report.objective(),
        report.total_distance() + 100 * report.max_route_distance()
    );
}

#[test]
fn test_duplicate_configuration() {
    let geography = ScenarioConfig::reference().geography().expect("valid");
    let metric = Arc::new(DistanceMatrix::manhattan(&geography));
    let mut model = LocalEngine
        .new_model(geography.location_count(), geography.vehicle_count(), 0)
        .expect("valid");

    configure(&mut model, &metric, 3000, 100).expect("configured");
    let err = configure(&mut model, &metric, 3000, 100).unwrap_err();
    assert!(matches!(err, RoutingError::Configuration(_)));
    assert_eq!(
        model
            .dimension(DISTANCE_DIMENSION)
            .map(|d| d.global_span_cost_coefficient()),
        Some(100)
    );
}

#[test]
fn test_manual_pipeline_matches_run() {
    let config = ScenarioConfig::reference();
    let geography = config.geography().expect("valid");
    let metric = Arc::new(DistanceMatrix::manhattan(&geography));
    let mut model = LocalEngine
        .new_model(geography.location_count(), geography.vehicle_count(), 0)
        .expect("valid");
    configure(&mut model, &metric, 3000, 100).expect("configured");

    let outcome = solve(&model, &SearchParameters::default()).expect("well formed");
    let assignment = outcome.assignment().expect("feasible");
    let manual = render(&geography, &model, assignment).expect("valid");

    let piped = run(&LocalEngine, &config)
        .expect("well formed")
        .expect("feasible");
    assert_eq!(manual, piped);
}

#[test]
fn test_scale_factor_rejected() {
    assert!(matches!(
        ScaleFactor::new(-114, 80),
        Err(RoutingError::InvalidConfiguration(_))
    ));
}
