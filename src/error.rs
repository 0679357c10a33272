//! Error types for the route planner.

use thiserror::Error;

/// Errors surfaced by catalog construction, route building and statistics.
///
/// The planner never recovers from these itself; callers decide whether to
/// prompt the user or fall back to other data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    /// A referenced spot identifier is absent from the catalog.
    #[error("spot '{0}' not found in catalog")]
    NotFound(String),
    /// Input that cannot be routed (bad coordinates, duplicates, empty catalog).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
