use crate::models::common::{Amount, Duration, Id, Location, Skills, TimeWindow};
use crate::models::job::JobKind;

/// Caller imposed constraints on when a step's service must occur.
///
/// The three constraints are independent: any combination may be set and no
/// mutual-exclusivity check is applied at ingestion time.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ForcedService {
    /// Service must start exactly at this time.
    pub at: Option<Duration>,
    /// Service must start no earlier than this time.
    pub after: Option<Duration>,
    /// Service must start no later than this time.
    pub before: Option<Duration>,
}

/// A scheduled driver break.
#[derive(Clone, Debug)]
pub struct Break {
    /// A break id.
    pub id: Id,
    /// A non-empty list of time windows sorted ascending.
    pub time_windows: Vec<TimeWindow>,
    /// A break duration.
    pub service: Duration,
    /// An arbitrary caller supplied description.
    pub description: String,
}

/// A target of a pre-assigned vehicle step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StepKind {
    /// A route start boundary.
    Start,
    /// A route end boundary.
    End,
    /// A reference to a job by id.
    Job {
        /// A referenced job id.
        id: Id,
        /// A role of the referenced job.
        kind: JobKind,
    },
    /// A reference to a break by id.
    Break {
        /// A referenced break id.
        id: Id,
    },
}

/// A single entry of a pre-assigned vehicle plan, kept in declaration order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VehicleStep {
    /// A step target.
    pub kind: StepKind,
    /// Optional timing constraints for the step's service.
    pub forced_service: ForcedService,
}

/// A vehicle with its working constraints and an optional pre-assigned plan.
#[derive(Clone, Debug)]
pub struct Vehicle {
    /// A vehicle id.
    pub id: Id,
    /// An optional start location.
    pub start: Option<Location>,
    /// An optional end location.
    pub end: Option<Location>,
    /// A vehicle capacity.
    pub capacity: Amount,
    /// Skills provided by the vehicle.
    pub skills: Skills,
    /// A vehicle working time window.
    pub time_window: TimeWindow,
    /// Breaks sorted by their first time window; equal first windows keep
    /// declaration order.
    pub breaks: Vec<Break>,
    /// An arbitrary caller supplied description.
    pub description: String,
    /// A routing profile the vehicle travels with.
    pub profile: String,
    /// An ordered pre-assigned plan, empty when not supplied.
    pub steps: Vec<VehicleStep>,
}
