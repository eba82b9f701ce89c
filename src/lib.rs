//! # grid-routing
//!
//! Distance-budgeted vehicle routing on a city-block grid: scaled grid
//! coordinates, a Manhattan metric, a per-vehicle distance dimension with
//! a global span cost, and a pluggable routing engine.
//!
//! ## Modules
//!
//! - [`models`]: Geography, scaled locations and reported routes
//! - [`distance`]: Manhattan distance matrix and the transit callback trait
//! - [`engine`]: Routing engine contract plus the in-process [`engine::local`] engine
//! - [`constraints`]: Registers the metric as arc cost and `"Distance"` dimension
//! - [`search`]: Solve orchestration (`Solved` or `Infeasible`)
//! - [`report`]: Per-vehicle routes and distances from an assignment
//! - [`scenario`]: Serializable whole-run configuration and pipeline
//! - [`error`]: Error type shared by every fallible operation
//!
//! ## Example
//!
//! ```
//! use grid_routing::engine::local::LocalEngine;
//! use grid_routing::scenario::{run, ScenarioConfig};
//!
//! let report = run(&LocalEngine, &ScenarioConfig::reference())
//!     .unwrap()
//!     .expect("feasible");
//! println!("{report}");
//! ```

pub mod constraints;
pub mod distance;
pub mod engine;
pub mod error;
pub mod models;
pub mod report;
pub mod scenario;
pub mod search;
