//! Polyline representation for route geometries.
//!
//! The planner hands routes to a map renderer as decoded coordinate
//! sequences. Encoding to a compact wire format, if any, happens in the
//! renderer.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ranking::SpotId;
use crate::traits::{Spot, SpotCatalog};

const DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir/";

/// A polyline representing a route geometry as decoded coordinates.
///
/// Each point is a (latitude, longitude) tuple, one per stop, in visiting
/// order. Segments are straight lines, not road geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Looks up each stop of `route` and collects its coordinates.
    pub fn from_route<C: SpotCatalog>(catalog: &C, route: &[SpotId<C>]) -> Result<Self> {
        let points = route
            .iter()
            .map(|id| catalog.require(id).map(|spot| spot.location()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { points })
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Builds a Google Maps directions link visiting every stop in order.
///
/// Returns `None` for an empty route.
pub fn directions_url<C: SpotCatalog>(
    catalog: &C,
    route: &[SpotId<C>],
) -> Result<Option<String>> {
    let polyline = Polyline::from_route(catalog, route)?;
    if polyline.is_empty() {
        return Ok(None);
    }
    let waypoints = polyline
        .points()
        .iter()
        .map(|(lat, lng)| format!("{},{}", lat, lng))
        .collect::<Vec<_>>()
        .join("/");
    Ok(Some(format!("{}{}", DIRECTIONS_BASE_URL, waypoints)))
}
