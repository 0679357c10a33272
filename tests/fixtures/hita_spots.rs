//! Sightseeing spots in Hita City, Oita, used as a realistic catalog.
//!
//! Ten spots: a tight cluster around the old Mameda merchant quarter plus
//! two outlying ones (Onta pottery village, Kakeai rice terraces).

use spot_route_planner::catalog::{Catalog, Location, Point};

/// A named spot with coordinates, visit length and recommendation.
#[derive(Debug, Clone)]
pub struct DemoSpot {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub minutes: u32,
    pub score: u8,
    pub description: &'static str,
}

impl DemoSpot {
    pub const fn new(
        name: &'static str,
        lat: f64,
        lon: f64,
        minutes: u32,
        score: u8,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            lat,
            lon,
            minutes,
            score,
            description,
        }
    }

    pub fn location(&self) -> Location {
        Location::new(self.lat, self.lon)
    }

    pub fn to_point(&self) -> Point {
        Point::new(
            self.name,
            self.lat,
            self.lon,
            self.minutes,
            self.score,
            self.description,
        )
        .expect("fixture spots are valid")
    }
}

// ============================================================================
// Central Hita (walkable)
// ============================================================================

pub const MAMEDA: DemoSpot = DemoSpot::new(
    "Mameda-machi",
    33.3225,
    130.9425,
    60,
    5,
    "Merchant quarter with Edo-period streetscape",
);
pub const KANGIEN: DemoSpot = DemoSpot::new(
    "Kangien Ruins",
    33.3219,
    130.9438,
    45,
    4,
    "Site of Japan's largest private academy",
);
pub const GION_HALL: DemoSpot = DemoSpot::new(
    "Hita Gion Yamaboko Hall",
    33.3228,
    130.9420,
    30,
    3,
    "Floats from the Hita Gion festival",
);
pub const HIROSE_MUSEUM: DemoSpot = DemoSpot::new(
    "Hirose Museum",
    33.3215,
    130.9445,
    40,
    4,
    "Local history and culture",
);
pub const MAMEDA_DISTRICT: DemoSpot = DemoSpot::new(
    "Mameda Preservation District",
    33.3220,
    130.9430,
    90,
    5,
    "Important preservation district for groups of traditional buildings",
);
pub const TENRYO_MUSEUM: DemoSpot = DemoSpot::new(
    "Tenryo Townscape Museum",
    33.3230,
    130.9415,
    30,
    3,
    "History of Hita as a shogunate domain",
);
pub const TAKATSUKA: DemoSpot = DemoSpot::new(
    "Takatsuka Atago Jizo",
    33.3156,
    130.9523,
    30,
    3,
    "Shrine known for prosperity blessings",
);
pub const HITA_ONSEN: DemoSpot = DemoSpot::new(
    "Hita Onsen",
    33.3198,
    130.9412,
    180,
    4,
    "Historic hot spring town",
);

// ============================================================================
// Outlying
// ============================================================================

pub const ONTA: DemoSpot = DemoSpot::new(
    "Onta Pottery Village",
    33.2845,
    130.8923,
    120,
    5,
    "Traditional pottery village",
);
pub const KAKEAI: DemoSpot = DemoSpot::new(
    "Kakeai Rice Terraces",
    33.2456,
    130.8734,
    45,
    4,
    "Terraced rice fields",
);

/// All spots in catalog order.
pub const HITA_SPOTS: &[DemoSpot] = &[
    MAMEDA,
    KANGIEN,
    GION_HALL,
    HIROSE_MUSEUM,
    MAMEDA_DISTRICT,
    ONTA,
    TENRYO_MUSEUM,
    KAKEAI,
    TAKATSUKA,
    HITA_ONSEN,
];

pub fn hita_catalog() -> Catalog {
    Catalog::from_points(HITA_SPOTS.iter().map(DemoSpot::to_point).collect())
        .expect("fixture names are unique")
}

pub fn names(spots: &[DemoSpot]) -> Vec<String> {
    spots.iter().map(|spot| spot.name.to_string()).collect()
}
