use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::GeoPoint;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub type CoordinateTable = HashMap<String, GeoPoint>;

/// Base locations of the regions covered by the sample datasets.
pub fn default_coordinates() -> CoordinateTable {
    [
        ("Delhi", 28.7041, 77.1025),
        ("Punjab", 31.1471, 75.3412),
        ("Assam", 26.2006, 92.9376),
        ("Maharashtra", 19.7515, 75.7139),
        ("Sikkim", 27.5330, 88.5122),
        ("Rajasthan", 27.0238, 74.2179),
    ]
    .into_iter()
    .map(|(region, lat, lon)| (region.to_string(), GeoPoint::new(lat, lon)))
    .collect()
}

/// Great-circle distance in kilometres.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let (lat1, lon1) = (from.lat.to_radians(), from.lon.to_radians());
    let (lat2, lon2) = (to.lat.to_radians(), to.lon.to_radians());
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * a.sqrt().min(1.0).asin() * EARTH_RADIUS_KM
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RouteCondition {
    UnknownOrigin(String),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub stops: Vec<String>,
    pub total_distance_km: f64,
    /// Destinations dropped for lack of coordinates.
    pub unresolved: Vec<String>,
    pub condition: Option<RouteCondition>,
}

/// Orders destinations nearest-first by direct distance from `origin`.
///
/// Legs are not chained: the total is the sum of origin-to-destination
/// distances. Repeated destinations are visited once.
pub fn optimize<S: AsRef<str>>(origin: &str, destinations: &[S], coordinates: &CoordinateTable) -> RoutePlan {
    let Some(start) = coordinates.get(origin).copied() else {
        warn!(origin, "route origin has no known coordinates");
        return RoutePlan {
            condition: Some(RouteCondition::UnknownOrigin(origin.to_string())),
            ..RoutePlan::default()
        };
    };

    let mut seen: HashSet<&str> = HashSet::new();
    let mut legs: Vec<(&str, f64)> = Vec::new();
    let mut unresolved = Vec::new();

    for destination in destinations.iter().map(AsRef::as_ref) {
        if !seen.insert(destination) {
            continue;
        }
        match coordinates.get(destination) {
            Some(point) => legs.push((destination, haversine_km(start, *point))),
            None => unresolved.push(destination.to_string()),
        }
    }

    legs.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)));

    RoutePlan {
        total_distance_km: legs.iter().map(|(_, distance)| distance).sum(),
        stops: legs.into_iter().map(|(name, _)| name.to_string()).collect(),
        unresolved,
        condition: None,
    }
}

pub fn round_km(distance: f64) -> f64 {
    (distance * 100.0).round() / 100.0
}
