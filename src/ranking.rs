//! Ordinal rankings of candidate spots along a single criterion.
//!
//! Ranks are 1-based (1 = best) and cover exactly the candidates they were
//! computed over. Sorting is stable, so equal keys keep the order in which
//! the caller listed the candidates.

use std::collections::HashMap;

use crate::catalog::Location;
use crate::error::Result;
use crate::hubeny::hubeny_km;
use crate::traits::{Id, Spot, SpotCatalog};

/// Identifier type of the spots held by catalog `C`.
pub type SpotId<C> = <<C as SpotCatalog>::Spot as Spot>::Id;

/// Mapping from candidate id to rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking<I: Id> {
    ranks: HashMap<I, usize>,
}

impl<I: Id> Ranking<I> {
    /// Every candidate tied for first place.
    pub fn flat(candidates: &[I]) -> Self {
        Self {
            ranks: candidates.iter().map(|id| (id.clone(), 1)).collect(),
        }
    }

    /// Ranks 1..=N in the order given.
    fn from_sorted<'a>(sorted: impl Iterator<Item = &'a I>) -> Self
    where
        I: 'a,
    {
        Self {
            ranks: sorted
                .enumerate()
                .map(|(i, id)| (id.clone(), i + 1))
                .collect(),
        }
    }

    pub fn rank(&self, id: &I) -> Option<usize> {
        self.ranks.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// What "near" is measured from when ranking by proximity.
#[derive(Debug, Clone, PartialEq)]
pub enum ProximityReference<I> {
    /// No current spot and no user location: every candidate ranks 1.
    Unknown,
    /// The most recently visited spot.
    Spot(I),
    /// A raw position, typically the user's.
    Location(Location),
}

/// Ranks candidates by recommendation score per minute of visit, descending.
pub fn rank_by_time_efficiency<C>(
    catalog: &C,
    candidates: &[SpotId<C>],
) -> Result<Ranking<SpotId<C>>>
where
    C: SpotCatalog,
{
    let mut scored = Vec::with_capacity(candidates.len());
    for id in candidates {
        let spot = catalog.require(id)?;
        scored.push((id, time_efficiency(spot)));
    }

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    Ok(Ranking::from_sorted(scored.into_iter().map(|(id, _)| id)))
}

/// Ranks candidates by distance from `reference`, ascending.
pub fn rank_by_proximity<C>(
    catalog: &C,
    reference: &ProximityReference<SpotId<C>>,
    candidates: &[SpotId<C>],
) -> Result<Ranking<SpotId<C>>>
where
    C: SpotCatalog,
{
    let origin = match reference {
        ProximityReference::Unknown => {
            // Still reject unknown candidates so the caller sees NotFound.
            for id in candidates {
                catalog.require(id)?;
            }
            return Ok(Ranking::flat(candidates));
        }
        ProximityReference::Spot(id) => catalog.require(id)?.location(),
        ProximityReference::Location(location) => location.coords(),
    };

    let mut distances = Vec::with_capacity(candidates.len());
    for id in candidates {
        let spot = catalog.require(id)?;
        distances.push((id, hubeny_km(origin, spot.location())));
    }

    distances.sort_by(|a, b| a.1.total_cmp(&b.1));

    Ok(Ranking::from_sorted(distances.into_iter().map(|(id, _)| id)))
}

/// Picks the candidate with the lowest summed rank.
///
/// Ties go to the candidate listed first. Returns the winner and its score,
/// or `None` when `candidates` is empty.
pub fn combined_best<I: Id>(
    candidates: &[I],
    efficiency: &Ranking<I>,
    proximity: &Ranking<I>,
) -> Option<(I, usize)> {
    let mut best: Option<(&I, usize)> = None;
    for id in candidates {
        let score = efficiency.rank(id).unwrap_or(usize::MAX / 2)
            + proximity.rank(id).unwrap_or(usize::MAX / 2);
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((id, score)),
        }
    }
    best.map(|(id, score)| (id.clone(), score))
}

fn time_efficiency<S: Spot>(spot: &S) -> f64 {
    f64::from(spot.recommend_score()) / f64::from(spot.minimum_duration_minutes())
}
