//! Ellipsoidal distance between coordinates (Hubeny's formula, WGS84).
//!
//! More accurate than a spherical great-circle estimate at city scale,
//! and cheap enough to recompute on every greedy step.

use rayon::prelude::*;

use crate::error::{PlannerError, Result};
use crate::traits::DistanceMatrixProvider;

/// WGS84 semi-major axis in metres.
pub const WGS84_A: f64 = 6_378_137.0;

/// WGS84 semi-minor axis in metres.
pub const WGS84_B: f64 = 6_356_752.314245;

/// Distance in kilometres between two (lat, lng) pairs given in degrees.
pub fn hubeny_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lng1_rad = lng1.to_radians();
    let lat2_rad = lat2.to_radians();
    let lng2_rad = lng2.to_radians();

    let mean_lat = (lat1_rad + lat2_rad) / 2.0;
    let dy = lat1_rad - lat2_rad;
    let dx = lng1_rad - lng2_rad;

    let e2 = (WGS84_A.powi(2) - WGS84_B.powi(2)) / WGS84_A.powi(2);
    let w2 = 1.0 - e2 * mean_lat.sin().powi(2);

    // Meridional and transverse (prime vertical) radii of curvature.
    let m = WGS84_A * (1.0 - e2) / w2.powf(1.5);
    let n = WGS84_A / w2.sqrt();

    let metres = ((dy * m).powi(2) + (dx * n * mean_lat.cos()).powi(2)).sqrt();
    metres / 1000.0
}

/// Flat-argument form of [`hubeny_km`] for ad hoc queries.
///
/// No validation is done; NaN in gives NaN out.
pub fn pairwise_distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    hubeny_km((lat1, lon1), (lat2, lon2))
}

/// [`hubeny_km`] with both endpoints checked first.
pub fn checked_distance_km(from: (f64, f64), to: (f64, f64)) -> Result<f64> {
    check_coordinates(from)?;
    check_coordinates(to)?;
    Ok(hubeny_km(from, to))
}

/// Rejects non-finite coordinates and ones outside [-90, 90] x [-180, 180].
pub(crate) fn check_coordinates((lat, lng): (f64, f64)) -> Result<()> {
    if !lat.is_finite() || !lng.is_finite() {
        return Err(PlannerError::InvalidInput(format!(
            "non-finite coordinate ({lat}, {lng})"
        )));
    }
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(PlannerError::InvalidInput(format!(
            "coordinate ({lat}, {lng}) out of range"
        )));
    }
    Ok(())
}

/// Hubeny-based distance matrix provider.
///
/// Rows are computed in parallel; each cell is a straight ellipsoidal
/// distance, not a road distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct HubenyMatrix;

impl DistanceMatrixProvider for HubenyMatrix {
    fn matrix_for(&self, locations: &[(f64, f64)]) -> Vec<Vec<f64>> {
        locations
            .par_iter()
            .enumerate()
            .map(|(i, from)| {
                locations
                    .iter()
                    .enumerate()
                    .map(|(j, to)| if i == j { 0.0 } else { hubeny_km(*from, *to) })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hubeny_same_point() {
        let dist = hubeny_km((33.3225, 130.9425), (33.3225, 130.9425));
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn test_hubeny_short_hop() {
        // Mameda-machi to Kangien ruins, a short walk in Hita.
        let dist = pairwise_distance_km(33.3225, 130.9425, 33.3219, 130.9438);
        assert!(dist > 0.13 && dist < 0.14, "expected ~0.135 km, got {}", dist);
    }

    #[test]
    fn test_hubeny_known_distance() {
        // Tokyo Station (35.6812, 139.7671) to Osaka Station (34.7025, 135.4959)
        // Straight-line distance ~403 km
        let dist = hubeny_km((35.6812, 139.7671), (34.7025, 135.4959));
        assert!(dist > 395.0 && dist < 410.0, "Tokyo to Osaka should be ~403km, got {}", dist);
    }

    #[test]
    fn test_hubeny_symmetric() {
        let a = (33.30, 130.90);
        let b = (33.31, 130.91);
        let ab = hubeny_km(a, b);
        let ba = hubeny_km(b, a);
        assert!((ab - ba).abs() <= 1e-9 * ab);
    }

    #[test]
    fn test_checked_distance_rejects_nan_and_range() {
        assert!(checked_distance_km((f64::NAN, 0.0), (0.0, 0.0)).is_err());
        assert!(checked_distance_km((0.0, 0.0), (0.0, f64::INFINITY)).is_err());
        assert!(checked_distance_km((0.0, 181.0), (0.0, 0.0)).is_err());
        assert!(checked_distance_km((33.30, 130.90), (33.31, 130.91)).is_ok());
    }

    #[test]
    fn test_matrix_diagonal_is_zero() {
        let locations = vec![(33.30, 130.90), (33.31, 130.91), (33.29, 130.89)];
        let matrix = HubenyMatrix.matrix_for(&locations);

        for i in 0..locations.len() {
            assert_eq!(matrix[i][i], 0.0, "Diagonal should be zero");
        }
    }

    #[test]
    fn test_matrix_symmetric() {
        let locations = vec![(33.30, 130.90), (33.31, 130.91)];
        let matrix = HubenyMatrix.matrix_for(&locations);

        assert!((matrix[0][1] - matrix[1][0]).abs() < 1e-12, "Matrix should be symmetric");
        assert!(matrix[0][1] > 1.0 && matrix[0][1] < 2.0);
    }

    #[test]
    fn test_matrix_empty() {
        assert!(HubenyMatrix.matrix_for(&[]).is_empty());
    }
}
