//! An in-process engine approximating travel costs over great-circle
//! distances, available behind the `embedded-router` feature.

#[cfg(test)]
#[path = "../../tests/unit/routing/embedded_test.rs"]
mod embedded_test;

use crate::error::Error;
use crate::models::CostMatrix;
use crate::models::common::{Coordinates, Cost};
use crate::routing::Router;

/// Average speeds in meters per second per supported profile.
const PROFILE_SPEEDS: &[(&str, f64)] = &[("car", 13.9), ("bike", 4.2), ("foot", 1.4)];

/// Computes approximated travel durations without an external server.
#[derive(Clone, Debug)]
pub struct EmbeddedEngine {
    profile: String,
    speed: f64,
}

impl EmbeddedEngine {
    /// Creates an engine for a profile with a known speed.
    pub fn new(profile: &str) -> Result<Self, Error> {
        PROFILE_SPEEDS
            .iter()
            .find(|(name, _)| *name == profile)
            .map(|(_, speed)| Self { profile: profile.to_string(), speed: *speed })
            .ok_or_else(|| Error::routing(format!("unknown profile: {profile}")))
    }
}

impl Router for EmbeddedEngine {
    fn profile(&self) -> &str {
        &self.profile
    }

    fn travel_matrix(&self, locations: &[Coordinates]) -> Result<CostMatrix, Error> {
        let mut matrix = CostMatrix::new(locations.len());

        for (i, from) in locations.iter().enumerate() {
            for (j, to) in locations.iter().enumerate() {
                if i != j {
                    matrix.set(i, j, (get_distance(from, to) / self.speed).round() as Cost);
                }
            }
        }

        Ok(matrix)
    }
}

/// Gets distance between two points in meters using the haversine formula.
fn get_distance(p1: &Coordinates, p2: &Coordinates) -> f64 {
    let d_lat = (p1.lat - p2.lat).to_radians();
    let d_lon = (p1.lon - p2.lon).to_radians();

    let lat1 = p1.lat.to_radians();
    let lat2 = p2.lat.to_radians();

    let a = (d_lat / 2.).sin().powi(2) + (d_lon / 2.).sin().powi(2) * lat1.cos() * lat2.cos();
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    wgs84_earth_radius(d_lat) * c
}

#[inline(always)]
fn wgs84_earth_radius(lat: f64) -> f64 {
    // semi-axes of WGS-84 geoidal reference
    const WGS84_A: f64 = 6_378_137.0; // major semiaxis [m]
    const WGS84_B: f64 = 6_356_752.3; // minor semiaxis [m]

    let an = WGS84_A * WGS84_A * lat.cos();
    let bn = WGS84_B * WGS84_B * lat.sin();
    let ad = WGS84_A * lat.cos();
    let bd = WGS84_B * lat.sin();

    ((an * an + bn * bn) / (ad * ad + bd * bd)).sqrt()
}
