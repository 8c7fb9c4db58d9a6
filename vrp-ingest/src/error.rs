//! An error taxonomy shared by the ingestion pipeline and routing backends.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A coarse classification of ingestion failures.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// Malformed or inconsistent caller data. Never retried.
    Input,
    /// Routing backend resolution or configuration failure.
    Routing,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Input => write!(f, "input"),
            ErrorKind::Routing => write!(f, "routing"),
        }
    }
}

/// An error returned by the ingestion pipeline.
///
/// Carries the kind and a human readable message naming the offending field
/// and, where available, the offending entity id.
#[derive(Clone, Debug, Eq, Error, PartialEq, Serialize)]
#[error("{kind} error: {message}")]
pub struct Error {
    /// An error kind.
    pub kind: ErrorKind,
    /// A human readable message.
    pub message: String,
}

impl Error {
    /// Creates an input error.
    pub fn input(message: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Input, message: message.into() }
    }

    /// Creates a routing error.
    pub fn routing(message: impl Into<String>) -> Self {
        Self { kind: ErrorKind::Routing, message: message.into() }
    }
}
