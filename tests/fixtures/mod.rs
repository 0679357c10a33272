//! Test fixtures for spot-route-planner.
//!
//! Provides realistic test data:
//! - Sightseeing spots around Hita City, Oita
//! - Helpers to build catalogs and candidate lists

#![allow(dead_code)]

pub mod hita_spots;

pub use hita_spots::*;
