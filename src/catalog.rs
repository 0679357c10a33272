//! Spot catalog: the reference data a route is computed over.
//!
//! The catalog is loaded by the host application (spreadsheet, demo data,
//! JSON) and handed to the planner read-only.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::hubeny::check_coordinates;
use crate::traits::{Spot, SpotCatalog};

/// Highest recommendation score a spot can carry.
pub const MAX_RECOMMEND_SCORE: u8 = 5;

/// A bare latitude/longitude pair, e.g. the user's current position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }

    /// Rejects non-finite or out-of-range coordinates.
    pub fn validate(&self) -> Result<()> {
        check_coordinates(self.coords())
    }
}

impl From<(f64, f64)> for Location {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

/// A named point of interest.
///
/// The name doubles as the identifier; there is no numeric id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub minimum_duration_minutes: u32,
    pub recommend_score: u8,
    #[serde(default)]
    pub description: String,
}

impl Point {
    /// Validates and constructs a [`Point`].
    ///
    /// # Examples
    ///
    /// ```
    /// use spot_route_planner::catalog::Point;
    ///
    /// # fn main() -> Result<(), spot_route_planner::error::PlannerError> {
    /// let point = Point::new("Mameda-machi", 33.3225, 130.9425, 60, 5, "Old merchant quarter")?;
    /// assert_eq!(point.name, "Mameda-machi");
    /// assert!(Point::new("Nowhere", 33.0, 130.0, 0, 3, "").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        name: impl Into<String>,
        lat: f64,
        lon: f64,
        minimum_duration_minutes: u32,
        recommend_score: u8,
        description: impl Into<String>,
    ) -> Result<Self> {
        let point = Self {
            name: name.into(),
            lat,
            lon,
            minimum_duration_minutes,
            recommend_score,
            description: description.into(),
        };
        point.validate()?;
        Ok(point)
    }

    pub fn validate(&self) -> Result<()> {
        check_coordinates((self.lat, self.lon)).map_err(|err| match err {
            PlannerError::InvalidInput(msg) => {
                PlannerError::InvalidInput(format!("spot '{}': {}", self.name, msg))
            }
            other => other,
        })?;
        if self.minimum_duration_minutes == 0 {
            return Err(PlannerError::InvalidInput(format!(
                "spot '{}' has a zero minimum duration",
                self.name
            )));
        }
        if !(1..=MAX_RECOMMEND_SCORE).contains(&self.recommend_score) {
            return Err(PlannerError::InvalidInput(format!(
                "spot '{}' has recommend score {} outside 1..={}",
                self.name, self.recommend_score, MAX_RECOMMEND_SCORE
            )));
        }
        Ok(())
    }
}

impl Spot for Point {
    type Id = String;

    fn id(&self) -> &String {
        &self.name
    }

    fn location(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }

    fn minimum_duration_minutes(&self) -> u32 {
        self.minimum_duration_minutes
    }

    fn recommend_score(&self) -> u8 {
        self.recommend_score
    }
}

/// Listing filter over a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub min_recommend_score: u8,
    pub max_duration_minutes: u32,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            min_recommend_score: 1,
            max_duration_minutes: 300,
        }
    }
}

impl CatalogFilter {
    pub fn matches(&self, point: &Point) -> bool {
        point.recommend_score >= self.min_recommend_score
            && point.minimum_duration_minutes <= self.max_duration_minutes
    }
}

/// Insertion-ordered collection of [`Point`]s keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Catalog {
    points: Vec<Point>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting invalid points and duplicate names.
    pub fn from_points(points: Vec<Point>) -> Result<Self> {
        let mut index = HashMap::with_capacity(points.len());
        for (i, point) in points.iter().enumerate() {
            point.validate()?;
            if index.insert(point.name.clone(), i).is_some() {
                return Err(PlannerError::InvalidInput(format!(
                    "duplicate spot name '{}'",
                    point.name
                )));
            }
        }
        Ok(Self { points, index })
    }

    pub fn get(&self, name: &str) -> Option<&Point> {
        self.index.get(name).map(|&i| &self.points[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Spot names in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.points.iter().map(|point| point.name.clone()).collect()
    }

    /// Points passing `filter`, in insertion order.
    pub fn filter(&self, filter: &CatalogFilter) -> Vec<&Point> {
        self.points.iter().filter(|point| filter.matches(point)).collect()
    }

    /// Mean coordinate of all points; `None` for an empty catalog.
    pub fn center(&self) -> Option<Location> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len() as f64;
        let (lat_sum, lon_sum) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(lat, lon), point| (lat + point.lat, lon + point.lon));
        Some(Location::new(lat_sum / n, lon_sum / n))
    }
}

impl SpotCatalog for Catalog {
    type Spot = Point;

    fn spot(&self, id: &String) -> Option<&Point> {
        self.get(id)
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}

impl TryFrom<Vec<Point>> for Catalog {
    type Error = PlannerError;

    fn try_from(points: Vec<Point>) -> Result<Self> {
        Self::from_points(points)
    }
}

impl From<Catalog> for Vec<Point> {
    fn from(catalog: Catalog) -> Self {
        catalog.points
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
