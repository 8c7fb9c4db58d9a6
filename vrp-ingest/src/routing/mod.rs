//! Routing backend selection and the thin clients used to obtain travel
//! costs when no explicit matrix is supplied.

#[cfg(test)]
#[path = "../../tests/unit/routing/resolve_test.rs"]
mod resolve_test;

mod osrm;
pub use self::osrm::OsrmClient;

mod ors;
pub use self::ors::OrsClient;

#[cfg(feature = "embedded-router")]
mod embedded;
#[cfg(feature = "embedded-router")]
pub use self::embedded::EmbeddedEngine;

use log::debug;

use crate::config::Config;
use crate::error::Error;
use crate::models::CostMatrix;
use crate::models::common::{Coordinates, Cost};

/// A routing backend kind, selected out of band.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RouterKind {
    /// An osrm-routed http server, keyed by profile.
    Osrm,
    /// An in-process approximation engine.
    Embedded,
    /// An openrouteservice http server, keyed by profile.
    Ors,
}

/// Computes travel costs for the locations of a problem.
pub trait Router: std::fmt::Debug {
    /// Returns the profile the backend was resolved for.
    fn profile(&self) -> &str;

    /// Computes a square travel cost matrix over given locations.
    fn travel_matrix(&self, locations: &[Coordinates]) -> Result<CostMatrix, Error>;
}

/// Resolves the routing backend for the problem's common profile.
pub(crate) fn resolve_router(config: &Config, profile: &str) -> Result<Box<dyn Router>, Error> {
    debug!("resolving {:?} router for profile '{}'", config.router, profile);

    match config.router {
        RouterKind::Osrm => {
            let server = lookup_server(config, profile)?;
            Ok(Box::new(OsrmClient::new(profile, server)?))
        }
        RouterKind::Embedded => resolve_embedded(profile),
        RouterKind::Ors => {
            let server = lookup_server(config, profile)?;
            Ok(Box::new(OrsClient::new(profile, server)?))
        }
    }
}

fn lookup_server<'a>(config: &'a Config, profile: &str) -> Result<&'a str, Error> {
    config
        .servers
        .get(profile)
        .map(String::as_str)
        .ok_or_else(|| Error::input(format!("Invalid profile: {profile}.")))
}

#[cfg(feature = "embedded-router")]
fn resolve_embedded(profile: &str) -> Result<Box<dyn Router>, Error> {
    EmbeddedEngine::new(profile)
        .map(|engine| Box::new(engine) as Box<dyn Router>)
        .map_err(|_| Error::routing(format!("Invalid profile: {profile}")))
}

#[cfg(not(feature = "embedded-router"))]
fn resolve_embedded(_profile: &str) -> Result<Box<dyn Router>, Error> {
    // Mirrors the http variants' selection entry point when the engine is
    // not compiled in.
    Err(Error::routing("compiled without the 'embedded-router' feature."))
}

/// Converts an http durations table into a square cost matrix.
pub(crate) fn durations_to_matrix(durations: &[Vec<f64>], size: usize) -> Result<CostMatrix, Error> {
    if durations.len() != size {
        return Err(Error::routing(format!("unexpected table size: {} instead of {size}", durations.len())));
    }

    let mut matrix = CostMatrix::new(size);
    for (i, row) in durations.iter().enumerate() {
        if row.len() != size {
            return Err(Error::routing(format!("unexpected table row length at {i}")));
        }
        for (j, duration) in row.iter().enumerate() {
            matrix.set(i, j, duration.round() as Cost);
        }
    }

    Ok(matrix)
}
