use crate::models::common::{Amount, Duration, Id, Location, Priority, Skills, TimeWindow};

/// A role a job plays within the plan.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum JobKind {
    /// An independent single-stop job.
    Single,
    /// A pickup leg of a shipment.
    Pickup,
    /// A delivery leg of a shipment.
    Delivery,
}

/// A single service stop with its demands and constraints.
#[derive(Clone, Debug)]
pub struct Job {
    /// A job id.
    pub id: Id,
    /// A role this job plays.
    pub kind: JobKind,
    /// A place the job happens at.
    pub location: Location,
    /// A service duration at the job location.
    pub service: Duration,
    /// An amount dropped off at the job location.
    pub delivery: Amount,
    /// An amount picked up at the job location.
    pub pickup: Amount,
    /// Skills required to serve the job.
    pub skills: Skills,
    /// A job priority.
    pub priority: Priority,
    /// A non-empty list of time windows sorted ascending.
    pub time_windows: Vec<TimeWindow>,
    /// An arbitrary caller supplied description.
    pub description: String,
}

/// A linked pickup and delivery pair sharing one amount vector, one skill
/// set and one priority value.
#[derive(Clone, Debug)]
pub struct Shipment {
    /// A pickup leg.
    pub pickup: Job,
    /// A delivery leg.
    pub delivery: Job,
}
