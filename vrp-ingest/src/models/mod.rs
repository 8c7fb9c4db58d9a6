//! Defines the in-memory problem model produced by the ingestion pipeline.

pub mod common;

mod input;
pub use self::input::Input;

mod job;
pub use self::job::{Job, JobKind, Shipment};

mod matrix;
pub use self::matrix::CostMatrix;

mod vehicle;
pub use self::vehicle::{Break, ForcedService, StepKind, Vehicle, VehicleStep};
