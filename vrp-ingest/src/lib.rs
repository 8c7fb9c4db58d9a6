//! This crate ingests loosely-structured json problem definitions (locations,
//! vehicles, jobs, shipments, time constraints, an optional precomputed cost
//! matrix) and turns them into a fully validated in-memory [`models::Input`]
//! model ready for consumption by a route optimization engine.
//!
//! It is the boundary between untrusted external input and the solver: every
//! invariant the solver relies on is enforced here, once, so downstream
//! components can assume well-formed data.

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod config;
mod error;
pub mod format;
pub mod models;
pub mod routing;

pub use crate::config::Config;
pub use crate::error::{Error, ErrorKind};
pub use crate::format::read_input;
