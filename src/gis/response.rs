//! Response model: resolved features and the wire reply.
//!
//! A `Feature` is one resolved geographic entity. An `Answer` carries all
//! candidate features for one submitted query: ambiguous queries yield
//! more than one, unmatched queries yield none. Features are immutable
//! value objects; enrichment never mutates a previously returned one.

use serde::{Deserialize, Serialize};

/// A centroid coordinate, degrees lon/lat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// A bounding rectangle, degrees lon/lat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoRect {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

/// A single resolved geographic feature.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    id: String,
    /// The service's echo of what it matched.
    #[serde(default)]
    query: String,
    name: String,
    #[serde(default)]
    centroid: Option<GeoPoint>,
    #[serde(default)]
    limit: Option<GeoRect>,
    /// Opaque GeoJSON geometry object.
    #[serde(default)]
    boundary: Option<serde_json::Value>,
    #[serde(default)]
    highlights: Vec<String>,
}

impl Feature {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn centroid(&self) -> Option<GeoPoint> {
        self.centroid
    }

    pub fn limit(&self) -> Option<GeoRect> {
        self.limit
    }

    pub fn boundary(&self) -> Option<&serde_json::Value> {
        self.boundary.as_ref()
    }

    pub fn highlights(&self) -> &[String] {
        &self.highlights
    }
}

/// Step-by-step construction of a `Feature`.
#[derive(Debug, Default, Clone)]
pub struct FeatureBuilder {
    id: String,
    query: String,
    name: String,
    centroid: Option<GeoPoint>,
    limit: Option<GeoRect>,
    boundary: Option<serde_json::Value>,
    highlights: Vec<String>,
}

impl FeatureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn set_query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    pub fn set_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn set_centroid(mut self, centroid: GeoPoint) -> Self {
        self.centroid = Some(centroid);
        self
    }

    pub fn set_limit(mut self, limit: GeoRect) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn set_boundary(mut self, boundary: serde_json::Value) -> Self {
        self.boundary = Some(boundary);
        self
    }

    pub fn set_highlights(mut self, highlights: Vec<String>) -> Self {
        self.highlights = highlights;
        self
    }

    /// Finalize. Id and name are required.
    pub fn build(self) -> Feature {
        assert!(!self.id.is_empty(), "feature id must be set");
        assert!(!self.name.is_empty(), "feature name must be set");
        Feature {
            id: self.id,
            query: self.query,
            name: self.name,
            centroid: self.centroid,
            limit: self.limit,
            boundary: self.boundary,
            highlights: self.highlights,
        }
    }
}

/// All candidate features for one submitted query, in service order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Answer {
    pub features: Vec<Feature>,
}

impl Answer {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }
}

/// A successful service response: one answer per submitted query or id,
/// in submission order.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoResponse {
    pub answers: Vec<Answer>,
}

/// The wire reply, discriminated by the `status` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ServiceReply {
    Success(GeoResponse),
    Error { message: String },
}
