//! Summary numbers for a finished route.

use serde::Serialize;
use tracing::info;

use crate::error::{PlannerError, Result};
use crate::hubeny::hubeny_km;
use crate::ranking::SpotId;
use crate::traits::{Spot, SpotCatalog};

/// Aggregate metrics of a route. All zeros for an empty route.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteStats {
    pub total_spots: usize,
    pub total_time_minutes: u64,
    /// Sum of consecutive leg distances, rounded to 2 decimals.
    pub total_distance_km: f64,
    /// Rounded to 1 decimal.
    pub average_recommend_score: f64,
    /// Recommendation points per hour of visiting, rounded to 2 decimals.
    pub efficiency_score: f64,
}

/// One row of the per-stop itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg<I> {
    /// 1-based position in the route.
    pub order: usize,
    pub spot: I,
    pub minimum_duration_minutes: u32,
    /// `None` after the last stop.
    pub distance_to_next_km: Option<f64>,
}

pub fn route_statistics<C: SpotCatalog>(
    catalog: &C,
    route: &[SpotId<C>],
) -> Result<RouteStats> {
    if route.is_empty() {
        return Ok(RouteStats::default());
    }

    let mut total_time: u64 = 0;
    let mut total_score: u64 = 0;
    for id in route {
        let spot = catalog.require(id)?;
        total_time += u64::from(spot.minimum_duration_minutes());
        total_score += u64::from(spot.recommend_score());
    }
    let total_distance = leg_distances(catalog, route)?.iter().sum::<f64>();

    if total_time == 0 {
        return Err(PlannerError::InvalidInput(
            "route has zero total visit time".to_string(),
        ));
    }

    let stats = RouteStats {
        total_spots: route.len(),
        total_time_minutes: total_time,
        total_distance_km: round_to(total_distance, 2),
        average_recommend_score: round_to(total_score as f64 / route.len() as f64, 1),
        efficiency_score: round_to(total_score as f64 / (total_time as f64 / 60.0), 2),
    };
    info!(
        spots = stats.total_spots,
        minutes = stats.total_time_minutes,
        km = stats.total_distance_km,
        "route statistics"
    );
    Ok(stats)
}

/// Per-stop breakdown with the distance to the following stop.
pub fn route_legs<C: SpotCatalog>(
    catalog: &C,
    route: &[SpotId<C>],
) -> Result<Vec<RouteLeg<SpotId<C>>>> {
    let distances = leg_distances(catalog, route)?;
    route
        .iter()
        .enumerate()
        .map(|(i, id)| {
            Ok(RouteLeg {
                order: i + 1,
                spot: id.clone(),
                minimum_duration_minutes: catalog.require(id)?.minimum_duration_minutes(),
                distance_to_next_km: distances.get(i).copied(),
            })
        })
        .collect()
}

/// Distances of the N-1 legs between consecutive stops.
fn leg_distances<C: SpotCatalog>(catalog: &C, route: &[SpotId<C>]) -> Result<Vec<f64>> {
    route
        .windows(2)
        .map(|pair| {
            let from = catalog.require(&pair[0])?.location();
            let to = catalog.require(&pair[1])?.location();
            Ok(hubeny_km(from, to))
        })
        .collect()
}

/// Rounds to `decimals` places, halves to even.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
