//! An osrm-routed http table client.

use serde::Deserialize;

use crate::error::Error;
use crate::models::CostMatrix;
use crate::models::common::Coordinates;
use crate::routing::{Router, durations_to_matrix};

/// A request timeout applied to table queries.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// A client for the table service of an osrm-routed instance.
#[derive(Debug)]
pub struct OsrmClient {
    profile: String,
    base_url: String,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct TableResponse {
    durations: Option<Vec<Vec<f64>>>,
}

impl OsrmClient {
    /// Creates a client bound to a profile and a server base url.
    pub fn new(profile: &str, base_url: &str) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|err| Error::routing(err.to_string()))?;

        Ok(Self { profile: profile.to_string(), base_url: base_url.to_string(), client })
    }
}

impl Router for OsrmClient {
    fn profile(&self) -> &str {
        &self.profile
    }

    fn travel_matrix(&self, locations: &[Coordinates]) -> Result<CostMatrix, Error> {
        if locations.is_empty() {
            return Ok(CostMatrix::new(0));
        }

        let coords =
            locations.iter().map(|c| format!("{:.6},{:.6}", c.lon, c.lat)).collect::<Vec<_>>().join(";");
        let url = format!("{}/table/v1/{}/{}?annotations=duration", self.base_url, self.profile, coords);

        let response = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<TableResponse>())
            .map_err(|err| Error::routing(err.to_string()))?;

        let durations =
            response.durations.ok_or_else(|| Error::routing("missing durations in table response"))?;

        durations_to_matrix(&durations, locations.len())
    }
}
