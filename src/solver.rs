//! Greedy route builder.
//!
//! Each step ranks the remaining spots twice, by time efficiency and by
//! proximity to the current stop, and takes the lowest rank sum. Rankings are
//! recomputed from scratch on every step, so a route over N spots costs
//! O(N²) distance evaluations; [`PlannerOptions::max_candidates`] caps N.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::Location;
use crate::error::{PlannerError, Result};
use crate::hubeny::check_coordinates;
use crate::ranking::{
    combined_best, rank_by_proximity, rank_by_time_efficiency, ProximityReference, SpotId,
};
use crate::traits::{LocationProvider, Spot, SpotCatalog};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerOptions {
    /// Maximum number of candidates accepted per call. `None` means unbounded.
    pub max_candidates: Option<usize>,
    /// Reject non-finite or out-of-range coordinates before routing.
    pub validate_coordinates: bool,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            max_candidates: None,
            validate_coordinates: true,
        }
    }
}

/// Progress of a [`RouteBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    NoStopsChosen,
    MidRoute,
    Complete,
}

/// Step-by-step greedy sequencing over a borrowed catalog.
///
/// Ties are broken by the order of the candidate list passed to
/// [`RouteBuilder::new`]: the earliest listed candidate wins.
#[derive(Debug)]
pub struct RouteBuilder<'a, C: SpotCatalog> {
    catalog: &'a C,
    start: Option<Location>,
    remaining: Vec<SpotId<C>>,
    route: Vec<SpotId<C>>,
}

impl<'a, C: SpotCatalog> RouteBuilder<'a, C> {
    pub fn new(
        catalog: &'a C,
        candidates: &[SpotId<C>],
        start: Option<Location>,
        options: &PlannerOptions,
    ) -> Result<Self> {
        if let Some(max) = options.max_candidates {
            if candidates.len() > max {
                warn!(candidates = candidates.len(), max, "too many candidates for one route");
                return Err(PlannerError::InvalidInput(format!(
                    "{} candidates exceeds the limit of {}",
                    candidates.len(),
                    max
                )));
            }
        }

        if !candidates.is_empty() && catalog.is_empty() {
            return Err(PlannerError::InvalidInput(
                "cannot route candidates over an empty catalog".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(candidates.len());
        for id in candidates {
            if !seen.insert(id) {
                return Err(PlannerError::InvalidInput(format!("duplicate candidate '{id}'")));
            }
        }

        if options.validate_coordinates {
            if let Some(location) = start {
                location.validate().inspect_err(|err| {
                    warn!(%err, "rejecting start location");
                })?;
            }
            for id in candidates {
                check_coordinates(catalog.require(id)?.location()).inspect_err(|err| {
                    warn!(spot = %id, %err, "rejecting candidate coordinates");
                })?;
            }
        }

        Ok(Self {
            catalog,
            start,
            remaining: candidates.to_vec(),
            route: Vec::with_capacity(candidates.len()),
        })
    }

    pub fn state(&self) -> BuildState {
        if self.remaining.is_empty() {
            BuildState::Complete
        } else if self.route.is_empty() {
            BuildState::NoStopsChosen
        } else {
            BuildState::MidRoute
        }
    }

    /// Stops chosen so far, in visiting order.
    pub fn route(&self) -> &[SpotId<C>] {
        &self.route
    }

    /// Candidates not yet placed, in their original relative order.
    pub fn remaining(&self) -> &[SpotId<C>] {
        &self.remaining
    }

    /// Chooses and appends the next stop. Returns `None` once complete.
    pub fn step(&mut self) -> Result<Option<SpotId<C>>> {
        let chosen = match self.state() {
            BuildState::Complete => return Ok(None),
            BuildState::NoStopsChosen => self.first_stop()?,
            BuildState::MidRoute => self.next_stop()?,
        };
        let Some(next) = chosen else {
            return Ok(None);
        };

        if let Some(position) = self.remaining.iter().position(|id| *id == next) {
            self.remaining.remove(position);
        }
        self.route.push(next.clone());
        Ok(Some(next))
    }

    /// Runs to completion and returns the route.
    pub fn finish(mut self) -> Result<Vec<SpotId<C>>> {
        while self.step()?.is_some() {}
        info!(stops = self.route.len(), "route built");
        Ok(self.route)
    }

    fn first_stop(&self) -> Result<Option<SpotId<C>>> {
        match self.start {
            Some(location) => {
                let proximity = rank_by_proximity(
                    self.catalog,
                    &ProximityReference::Location(location),
                    &self.remaining,
                )?;
                let efficiency = rank_by_time_efficiency(self.catalog, &self.remaining)?;
                let best = combined_best(&self.remaining, &efficiency, &proximity);
                if let Some((id, score)) = &best {
                    debug!(
                        spot = %id,
                        score,
                        lat = location.lat,
                        lon = location.lon,
                        "first stop from user location"
                    );
                }
                Ok(best.map(|(id, _)| id))
            }
            None => {
                let mut best: Option<(&SpotId<C>, u8)> = None;
                for id in &self.remaining {
                    let score = self.catalog.require(id)?.recommend_score();
                    match best {
                        Some((_, best_score)) if score <= best_score => {}
                        _ => best = Some((id, score)),
                    }
                }
                if let Some((id, score)) = best {
                    debug!(spot = %id, recommend_score = score, "first stop by recommendation");
                }
                Ok(best.map(|(id, _)| id.clone()))
            }
        }
    }

    fn next_stop(&self) -> Result<Option<SpotId<C>>> {
        let Some(current) = self.route.last() else {
            return Ok(None);
        };
        let efficiency = rank_by_time_efficiency(self.catalog, &self.remaining)?;
        let proximity = rank_by_proximity(
            self.catalog,
            &ProximityReference::Spot(current.clone()),
            &self.remaining,
        )?;
        let best = combined_best(&self.remaining, &efficiency, &proximity);
        if let Some((id, score)) = &best {
            debug!(
                from = %current,
                spot = %id,
                score,
                remaining = self.remaining.len() - 1,
                "next stop"
            );
        }
        Ok(best.map(|(id, _)| id))
    }
}

/// Orders `selected` into a visiting route with default options.
///
/// With a `start` location the first stop balances nearness to the user
/// against time efficiency; without one it is the highest-recommended spot.
///
/// # Examples
///
/// ```
/// use spot_route_planner::catalog::{Catalog, Point};
/// use spot_route_planner::solver::optimize_route;
///
/// # fn main() -> Result<(), spot_route_planner::error::PlannerError> {
/// let catalog = Catalog::from_points(vec![
///     Point::new("A", 33.30, 130.90, 60, 5, "")?,
///     Point::new("B", 33.31, 130.91, 30, 3, "")?,
/// ])?;
/// let route = optimize_route(&catalog, &["B".to_string(), "A".to_string()], None)?;
/// assert_eq!(route, vec!["A".to_string(), "B".to_string()]);
/// # Ok(())
/// # }
/// ```
pub fn optimize_route<C: SpotCatalog>(
    catalog: &C,
    selected: &[SpotId<C>],
    start: Option<Location>,
) -> Result<Vec<SpotId<C>>> {
    optimize_route_with(catalog, selected, start, &PlannerOptions::default())
}

pub fn optimize_route_with<C: SpotCatalog>(
    catalog: &C,
    selected: &[SpotId<C>],
    start: Option<Location>,
    options: &PlannerOptions,
) -> Result<Vec<SpotId<C>>> {
    if selected.len() <= 1 {
        return Ok(selected.to_vec());
    }
    RouteBuilder::new(catalog, selected, start, options)?.finish()
}

/// Reads the provider once and routes with whatever it returned.
pub fn optimize_route_with_provider<C, P>(
    catalog: &C,
    selected: &[SpotId<C>],
    provider: &P,
    options: &PlannerOptions,
) -> Result<Vec<SpotId<C>>>
where
    C: SpotCatalog,
    P: LocationProvider + ?Sized,
{
    let start = provider.current_location();
    if start.is_none() {
        debug!("no user location, seeding by recommendation");
    }
    optimize_route_with(catalog, selected, start, options)
}
