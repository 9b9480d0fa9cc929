//! Error taxonomy for the geocoding core.
//!
//! Every error surfaces synchronously to the direct caller. Nothing is
//! swallowed or logged-and-continued; retry policy belongs to the caller.

use std::fmt;

/// Errors produced by resolution parsing, request building, the geocoding
/// service and reconciliation.
#[derive(Debug)]
pub enum GeoError {
    /// Malformed resolution string or numeric code.
    InvalidResolution(String),
    /// A request builder invariant was violated; no network call was made.
    MalformedRequest(String),
    /// Transport or service-level failure, with the upstream HTTP status
    /// when one was received.
    Service {
        status: Option<u16>,
        message: String,
    },
    /// The response shape does not match the submitted queries or ids.
    /// Always fatal to the call; no partial result is returned.
    Reconciliation { expected: usize, actual: usize },
    /// An id from the deduplicated request set is absent from the
    /// enrichment response.
    MissingFeature(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidResolution(token) => {
                write!(f, "Invalid resolution: '{}'", token)
            }
            Self::MalformedRequest(msg) => write!(f, "Malformed request: {}", msg),
            Self::Service { status, message } => match status {
                Some(code) => write!(f, "Geocoding service error ({}): {}", code, message),
                None => write!(f, "Geocoding service error: {}", message),
            },
            Self::Reconciliation { expected, actual } => write!(
                f,
                "Response does not match the request: expected {} answers, got {}",
                expected, actual
            ),
            Self::MissingFeature(id) => {
                write!(f, "Feature with id '{}' is missing from the response", id)
            }
        }
    }
}

impl std::error::Error for GeoError {}
