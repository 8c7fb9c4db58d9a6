//! An openrouteservice matrix client.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::models::CostMatrix;
use crate::models::common::Coordinates;
use crate::routing::{Router, durations_to_matrix};

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// A client for the matrix service of an openrouteservice instance.
#[derive(Debug)]
pub struct OrsClient {
    profile: String,
    base_url: String,
    client: reqwest::blocking::Client,
}

#[derive(Debug, Serialize)]
struct MatrixRequest<'a> {
    locations: Vec<[f64; 2]>,
    metrics: &'a [&'a str],
}

#[derive(Debug, Deserialize)]
struct MatrixResponse {
    durations: Option<Vec<Vec<f64>>>,
}

impl OrsClient {
    /// Creates a client bound to a profile and a server base url.
    pub fn new(profile: &str, base_url: &str) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|err| Error::routing(err.to_string()))?;

        Ok(Self { profile: profile.to_string(), base_url: base_url.to_string(), client })
    }
}

impl Router for OrsClient {
    fn profile(&self) -> &str {
        &self.profile
    }

    fn travel_matrix(&self, locations: &[Coordinates]) -> Result<CostMatrix, Error> {
        if locations.is_empty() {
            return Ok(CostMatrix::new(0));
        }

        let request = MatrixRequest {
            locations: locations.iter().map(|c| [c.lon, c.lat]).collect(),
            metrics: &["duration"],
        };
        let url = format!("{}/v2/matrix/{}", self.base_url, self.profile);

        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<MatrixResponse>())
            .map_err(|err| Error::routing(err.to_string()))?;

        let durations =
            response.durations.ok_or_else(|| Error::routing("missing durations in matrix response"))?;

        durations_to_matrix(&durations, locations.len())
    }
}
