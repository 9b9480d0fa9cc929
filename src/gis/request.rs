//! Request descriptors for the geocoding service.
//!
//! A `GeoRequest` is the single equality-comparable artifact describing one
//! outbound call: what kind of lookup, for which queries or ids, and which
//! payloads to include. It is built through `RequestBuilder`, which
//! validates the invariants once, at `build()`.

use crate::error::GeoError;
use crate::resolution::{LevelKind, Resolution};
use serde::Serialize;

/// Kind of lookup issued to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    /// Free-text search over place names.
    Search,
    /// Follow-up lookup keyed by previously resolved feature ids.
    Explicit,
}

/// Enrichment payload requested from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadKind {
    Centroids,
    Limits,
    Boundaries,
}

/// One user-supplied search term at a fixed ordinal position.
///
/// Queries are never deduplicated: duplicates are meaningful and become
/// duplicate output rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<String>,
    /// Narrowing context, e.g. the parent region to search within.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl RegionQuery {
    pub fn new(request: &str) -> Self {
        Self {
            request: Some(request.to_string()),
            scope: None,
        }
    }

    /// A query with no search term. The service echoes the feature's own
    /// name, which then labels the output row.
    pub fn empty() -> Self {
        Self {
            request: None,
            scope: None,
        }
    }

    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scope = Some(scope.to_string());
        self
    }
}

/// An immutable request descriptor, ready for the transport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoRequest {
    pub kind: RequestKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<LevelKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub queries: Vec<RegionQuery>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
    pub payload: Vec<PayloadKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
}

/// Builder for `GeoRequest`. Validation happens once, in `build()`.
#[derive(Debug, Default, Clone)]
pub struct RequestBuilder {
    kind: Option<RequestKind>,
    level: Option<LevelKind>,
    queries: Vec<RegionQuery>,
    ids: Vec<String>,
    payload: Vec<PayloadKind>,
    resolution: Option<Resolution>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_kind(mut self, kind: RequestKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn set_level(mut self, level: LevelKind) -> Self {
        self.level = Some(level);
        self
    }

    pub fn set_queries(mut self, queries: Vec<RegionQuery>) -> Self {
        self.queries = queries;
        self
    }

    pub fn set_ids(mut self, ids: Vec<String>) -> Self {
        self.ids = ids;
        self
    }

    pub fn set_payload(mut self, payload: Vec<PayloadKind>) -> Self {
        self.payload = payload;
        self
    }

    pub fn set_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = Some(resolution);
        self
    }

    /// Finalize the descriptor.
    ///
    /// Fails with `MalformedRequest` if the kind is missing, an explicit
    /// request carries no ids, the payload list holds duplicates, or
    /// boundaries are requested without a resolution.
    pub fn build(self) -> Result<GeoRequest, GeoError> {
        let kind = self
            .kind
            .ok_or_else(|| GeoError::MalformedRequest("request kind is not set".into()))?;

        if kind == RequestKind::Explicit && self.ids.is_empty() {
            return Err(GeoError::MalformedRequest(
                "explicit request requires at least one id".into(),
            ));
        }

        for (i, payload) in self.payload.iter().enumerate() {
            if self.payload[..i].contains(payload) {
                return Err(GeoError::MalformedRequest(format!(
                    "duplicate payload kind: {:?}",
                    payload
                )));
            }
        }

        if self.payload.contains(&PayloadKind::Boundaries) && self.resolution.is_none() {
            return Err(GeoError::MalformedRequest(
                "boundaries request requires a resolution".into(),
            ));
        }

        Ok(GeoRequest {
            kind,
            level: self.level,
            queries: self.queries,
            ids: self.ids,
            payload: self.payload,
            resolution: self.resolution,
        })
    }
}
