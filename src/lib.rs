//! spot-route-planner core
//!
//! Orders a set of points of interest into a visiting route by greedily
//! balancing time efficiency against proximity, and summarizes the result.

pub mod traits;
pub mod error;
pub mod catalog;
pub mod hubeny;
pub mod ranking;
pub mod solver;
pub mod stats;
pub mod polyline;

pub use hubeny::pairwise_distance_km;
pub use solver::optimize_route;
pub use stats::route_statistics;
