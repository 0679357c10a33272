//! Core domain traits for the route planner.
//!
//! These are intentionally minimal. The bundled [`Catalog`](crate::catalog::Catalog)
//! implements them, but apps holding their own spot records can implement
//! them directly.

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::catalog::Location;
use crate::error::{PlannerError, Result};

/// Unique identifier for planner entities.
pub trait Id: Clone + Eq + Hash + Debug + Display {}

impl<T> Id for T where T: Clone + Eq + Hash + Debug + Display {}

/// A spot is a single place that can be visited on a route.
pub trait Spot {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Location coordinates (lat, lng) in degrees.
    fn location(&self) -> (f64, f64);

    /// Minimum time needed to visit, in minutes.
    fn minimum_duration_minutes(&self) -> u32;

    /// Recommendation score, 1 (lowest) to 5 (highest).
    fn recommend_score(&self) -> u8;
}

/// Read-only lookup of spots by identifier.
pub trait SpotCatalog {
    type Spot: Spot;

    fn spot(&self, id: &<Self::Spot as Spot>::Id) -> Option<&Self::Spot>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Like [`SpotCatalog::spot`], but a miss is a [`PlannerError::NotFound`].
    fn require(&self, id: &<Self::Spot as Spot>::Id) -> Result<&Self::Spot> {
        self.spot(id)
            .ok_or_else(|| PlannerError::NotFound(id.to_string()))
    }
}

impl<I, S> SpotCatalog for HashMap<I, S>
where
    I: Id,
    S: Spot<Id = I>,
{
    type Spot = S;

    fn spot(&self, id: &I) -> Option<&S> {
        self.get(id)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

/// Supplies the user's current position, if one could be captured.
///
/// Acquisition, permissions and timeouts belong to the implementor; the
/// planner only sees a coordinate or nothing.
pub trait LocationProvider {
    fn current_location(&self) -> Option<Location>;
}

/// A fixed reading (or the lack of one) is itself a provider.
impl LocationProvider for Option<Location> {
    fn current_location(&self) -> Option<Location> {
        *self
    }
}

/// Provides a distance matrix (kilometres) for a set of locations.
///
/// The matrix is indexed by the provided location order.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> Vec<Vec<f64>>;
}
