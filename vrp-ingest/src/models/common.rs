#[cfg(test)]
#[path = "../../tests/unit/models/common_test.rs"]
mod common_test;

use std::collections::HashSet;

/// A unique identifier of a job, break or vehicle.
pub type Id = u64;

/// A location index within a cost matrix.
pub type Index = usize;

/// A duration or timestamp in seconds.
pub type Duration = u64;

/// A cost of travel between two locations.
pub type Cost = u64;

/// A job priority; bigger values mean more important jobs.
pub type Priority = u32;

/// A skill required by a job or provided by a vehicle.
pub type Skill = u32;

/// A set of skills used for vehicle/job compatibility filtering.
pub type Skills = HashSet<Skill>;

/// A geographic coordinate pair, `[lon, lat]` on the wire.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    /// Longitude.
    pub lon: f64,
    /// Latitude.
    pub lat: f64,
}

/// A fixed-length non-negative vector representing capacity or demand.
///
/// Every amount within one problem has the same length, imposed by the first
/// vehicle's capacity declaration.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Amount(Vec<u64>);

impl Amount {
    /// Creates an amount from raw components.
    pub fn new(values: Vec<u64>) -> Self {
        Self(values)
    }

    /// Creates a zero amount of given dimensionality.
    pub fn zeros(size: usize) -> Self {
        Self(vec![0; size])
    }

    /// Returns amount dimensionality.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the amount has no dimensions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns components as a slice.
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }
}

impl std::ops::Index<usize> for Amount {
    type Output = u64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// A time window with inclusive integer bounds, ordered by `(start, end)`.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct TimeWindow {
    /// A window start.
    pub start: Duration,
    /// A window end.
    pub end: Duration,
}

impl TimeWindow {
    /// Creates a time window from raw bounds.
    pub fn new(start: Duration, end: Duration) -> Self {
        Self { start, end }
    }
}

impl Default for TimeWindow {
    /// An unrestricted window covering the whole planning horizon.
    fn default() -> Self {
        Self { start: 0, end: Duration::MAX }
    }
}

/// A place a step happens at: a matrix reference, raw coordinates or both.
///
/// At least one representation is set by construction. Both are set in
/// explicit-matrix mode when coordinates are supplied for output geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    index: Option<Index>,
    coordinates: Option<Coordinates>,
}

impl Location {
    /// Creates a location from a matrix index only.
    pub fn from_index(index: Index) -> Self {
        Self { index: Some(index), coordinates: None }
    }

    /// Creates a location from raw coordinates only.
    pub fn from_coordinates(coordinates: Coordinates) -> Self {
        Self { index: None, coordinates: Some(coordinates) }
    }

    /// Creates a location carrying both a matrix index and coordinates.
    pub fn with_coordinates(index: Index, coordinates: Coordinates) -> Self {
        Self { index: Some(index), coordinates: Some(coordinates) }
    }

    /// Returns the matrix index, if any.
    pub fn index(&self) -> Option<Index> {
        self.index
    }

    /// Returns the coordinates, if any.
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }
}
