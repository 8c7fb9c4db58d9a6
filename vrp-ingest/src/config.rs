//! Out-of-band configuration injected into the ingestion pipeline.

use std::collections::HashMap;

use crate::models::common::Priority;
use crate::routing::RouterKind;

/// A routing profile assigned to vehicles which do not declare one.
pub const DEFAULT_PROFILE: &str = "car";

/// An inclusive upper bound for job priorities.
pub const DEFAULT_MAX_PRIORITY: Priority = 100;

/// Bundles process-wide ingestion settings: the routing backend selection,
/// the profile to server mapping for http backends and problem defaults.
#[derive(Clone, Debug)]
pub struct Config {
    /// A routing backend to attach to the parsed problem.
    pub router: RouterKind,
    /// Maps a routing profile to the base url of the server handling it.
    pub servers: HashMap<String, String>,
    /// Whether detailed route geometry should be rendered on output.
    pub geometry: bool,
    /// A profile assigned to vehicles without an explicit one.
    pub default_profile: String,
    /// An inclusive upper bound accepted for job priorities.
    pub max_priority: Priority,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            router: RouterKind::Osrm,
            servers: HashMap::from([(DEFAULT_PROFILE.to_string(), "http://localhost:5000".to_string())]),
            geometry: false,
            default_profile: DEFAULT_PROFILE.to_string(),
            max_priority: DEFAULT_MAX_PRIORITY,
        }
    }
}
