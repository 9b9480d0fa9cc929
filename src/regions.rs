//! Region reconciliation engine.
//!
//! Binds flat service responses back onto the original, duplicate-preserving,
//! positionally-ordered query sequence. Identical follow-up ids are fetched
//! once per batch and re-expanded across every duplicate row; deduplication
//! happens only on the network call, never on the output.

use crate::error::GeoError;
use crate::gis::request::{PayloadKind, RegionQuery, RequestBuilder, RequestKind};
use crate::gis::response::{Answer, Feature};
use crate::gis::service::GeocodingService;
use crate::resolution::{LevelKind, Resolution};
use crate::table::{RegionRow, RegionTable};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// A reconciled result set: one answer per query, positionally aligned.
///
/// `queries.len() == answers.len()` holds for every `Regions` value; the
/// pairing at index `i` is the unit of reconciliation. Queries and answers
/// are owned exclusively and never mutated after construction.
#[derive(Debug)]
pub struct Regions {
    level: LevelKind,
    queries: Vec<RegionQuery>,
    answers: Vec<Answer>,
    service: Arc<GeocodingService>,
}

impl Regions {
    /// Pair queries with their answers.
    ///
    /// A length mismatch here is a programming defect, not a service
    /// condition, and panics.
    pub fn new(
        level: LevelKind,
        queries: Vec<RegionQuery>,
        answers: Vec<Answer>,
        service: Arc<GeocodingService>,
    ) -> Self {
        assert_eq!(
            queries.len(),
            answers.len(),
            "queries and answers must be positionally aligned"
        );
        Self {
            level,
            queries,
            answers,
            service,
        }
    }

    /// Initial resolution: send the raw queries verbatim (duplicates and
    /// empty entries included) and zip the answers back positionally.
    pub fn geocode(
        service: Arc<GeocodingService>,
        level: LevelKind,
        queries: Vec<RegionQuery>,
    ) -> Result<Self, GeoError> {
        let request = RequestBuilder::new()
            .set_kind(RequestKind::Search)
            .set_level(level)
            .set_queries(queries.clone())
            .build()?;

        let response = service.do_request(&request)?;
        if response.answers.len() != queries.len() {
            return Err(GeoError::Reconciliation {
                expected: queries.len(),
                actual: response.answers.len(),
            });
        }

        Ok(Self::new(level, queries, response.answers, service))
    }

    pub fn level(&self) -> LevelKind {
        self.level
    }

    pub fn queries(&self) -> &[RegionQuery] {
        &self.queries
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Resolved ids across all rows, deduplicated, first-occurrence order.
    pub fn unique_ids(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut ids = Vec::new();
        for feature in self.answers.iter().flat_map(|a| &a.features) {
            if seen.insert(feature.id().to_string()) {
                ids.push(feature.id().to_string());
            }
        }
        ids
    }

    /// Centroid enrichment.
    pub fn centroids(&self) -> Result<RegionTable, GeoError> {
        self.enrich(PayloadKind::Centroids, None)
    }

    /// Bounding-rectangle enrichment.
    pub fn limits(&self) -> Result<RegionTable, GeoError> {
        self.enrich(PayloadKind::Limits, None)
    }

    /// Boundary-geometry enrichment at the given resolution.
    pub fn boundaries(&self, resolution: Resolution) -> Result<RegionTable, GeoError> {
        self.enrich(PayloadKind::Boundaries, Some(resolution))
    }

    fn enrich(
        &self,
        payload: PayloadKind,
        resolution: Option<Resolution>,
    ) -> Result<RegionTable, GeoError> {
        let ids = self.unique_ids();
        // Nothing resolved means nothing to fetch; zero-answer queries
        // contribute zero rows, silently.
        if ids.is_empty() {
            return Ok(RegionTable::default());
        }
        debug!(
            rows = self.answers.iter().map(|a| a.features.len()).sum::<usize>(),
            unique = ids.len(),
            payload = ?payload,
            "enriching regions"
        );

        let mut builder = RequestBuilder::new()
            .set_kind(RequestKind::Explicit)
            .set_ids(ids.clone())
            .set_payload(vec![payload]);
        if let Some(resolution) = resolution {
            builder = builder.set_resolution(resolution);
        }
        let request = builder.build()?;

        let response = self.service.do_request(&request)?;
        if response.answers.len() != ids.len() {
            return Err(GeoError::Reconciliation {
                expected: ids.len(),
                actual: response.answers.len(),
            });
        }

        let mut by_id: HashMap<&str, &Feature> = HashMap::new();
        for feature in response.answers.iter().flat_map(|a| &a.features) {
            by_id.insert(feature.id(), feature);
        }

        let mut rows = Vec::new();
        for (query, answer) in self.queries.iter().zip(&self.answers) {
            for feature in &answer.features {
                let enriched = by_id
                    .get(feature.id())
                    .ok_or_else(|| GeoError::MissingFeature(feature.id().to_string()))?;
                rows.push(make_row(query, enriched));
            }
        }
        Ok(RegionTable::new(rows))
    }

    /// The base table: request, id and found name per exploded row, from
    /// the answers already at hand. No network call.
    pub fn to_table(&self) -> RegionTable {
        let mut rows = Vec::new();
        for (query, answer) in self.queries.iter().zip(&self.answers) {
            for feature in &answer.features {
                rows.push(make_row(query, feature));
            }
        }
        RegionTable::new(rows)
    }

    /// Decompose into one single-query result set per original query, for
    /// consumers that need per-query grouping rather than a flat table.
    pub fn as_list(&self) -> Vec<Regions> {
        self.queries
            .iter()
            .zip(&self.answers)
            .map(|(query, answer)| {
                Regions::new(
                    self.level,
                    vec![query.clone()],
                    vec![answer.clone()],
                    Arc::clone(&self.service),
                )
            })
            .collect()
    }
}

/// The displayed label is the original query when it is non-empty,
/// otherwise the feature's own name.
fn select_request(query: &RegionQuery, feature: &Feature) -> String {
    match &query.request {
        Some(request) if !request.is_empty() => request.clone(),
        _ => feature.name().to_string(),
    }
}

fn make_row(query: &RegionQuery, feature: &Feature) -> RegionRow {
    RegionRow {
        request: select_request(query, feature),
        id: feature.id().to_string(),
        found_name: feature.name().to_string(),
        centroid: feature.centroid(),
        limit: feature.limit(),
        boundary: feature.boundary().cloned(),
    }
}
