use crate::models::job::{Job, Shipment};
use crate::models::matrix::CostMatrix;
use crate::models::vehicle::Vehicle;
use crate::routing::Router;

/// An aggregate problem model owning all vehicles, jobs and shipments, an
/// optional explicit cost matrix and the resolved routing backend.
///
/// Constructed empty with a fixed amount dimensionality, populated
/// incrementally by the reader and immutable to later readers once returned.
#[derive(Debug)]
pub struct Input {
    amount_size: usize,
    geometry: bool,
    vehicles: Vec<Vehicle>,
    jobs: Vec<Job>,
    shipments: Vec<Shipment>,
    matrix: Option<CostMatrix>,
    router: Option<Box<dyn Router>>,
}

impl Input {
    /// Creates an empty input with a fixed amount dimensionality.
    pub fn new(amount_size: usize) -> Self {
        Self {
            amount_size,
            geometry: false,
            vehicles: vec![],
            jobs: vec![],
            shipments: vec![],
            matrix: None,
            router: None,
        }
    }

    pub(crate) fn set_geometry(&mut self, geometry: bool) {
        self.geometry = geometry;
    }

    pub(crate) fn add_vehicle(&mut self, vehicle: Vehicle) {
        debug_assert_eq!(vehicle.capacity.len(), self.amount_size);
        self.vehicles.push(vehicle);
    }

    pub(crate) fn add_job(&mut self, job: Job) {
        debug_assert_eq!(job.delivery.len(), self.amount_size);
        debug_assert_eq!(job.pickup.len(), self.amount_size);
        self.jobs.push(job);
    }

    pub(crate) fn add_shipment(&mut self, pickup: Job, delivery: Job) {
        self.shipments.push(Shipment { pickup, delivery });
    }

    pub(crate) fn set_matrix(&mut self, matrix: CostMatrix) {
        self.matrix = Some(matrix);
    }

    pub(crate) fn set_router(&mut self, router: Box<dyn Router>) {
        self.router = Some(router);
    }

    /// Returns the problem wide amount dimensionality.
    pub fn amount_size(&self) -> usize {
        self.amount_size
    }

    /// Returns true when detailed route geometry was requested.
    pub fn geometry(&self) -> bool {
        self.geometry
    }

    /// Returns all vehicles in declaration order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Returns all single jobs in declaration order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Returns all shipments in declaration order.
    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    /// Returns the explicit cost matrix, if one was supplied.
    pub fn matrix(&self) -> Option<&CostMatrix> {
        self.matrix.as_ref()
    }

    /// Returns the resolved routing backend.
    pub fn router(&self) -> Option<&dyn Router> {
        self.router.as_deref()
    }
}
