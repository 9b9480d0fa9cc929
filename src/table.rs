//! Row-aligned tabular view of reconciled regions.
//!
//! One row per exploded (query-occurrence, feature) pair, in stable order:
//! original query order, then answer order within a query. Columns:
//! `request`, `id`, `found_name`, plus whichever geometry fields the
//! enrichment attached.

use crate::gis::response::{GeoPoint, GeoRect};
use serde::Serialize;
use std::fmt;

/// One output row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionRow {
    /// The original query string, or the feature's own name when the
    /// query was empty.
    pub request: String,
    pub id: String,
    pub found_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centroid: Option<GeoPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<GeoRect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boundary: Option<serde_json::Value>,
}

/// The reconciled table. Duplicate queries keep duplicate rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegionTable {
    rows: Vec<RegionRow>,
}

impl RegionTable {
    pub fn new(rows: Vec<RegionRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[RegionRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RegionRow> {
        self.rows.iter()
    }

    /// The `request` column.
    pub fn requests(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.request.as_str()).collect()
    }

    /// The `id` column.
    pub fn ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.id.as_str()).collect()
    }

    /// The `found_name` column.
    pub fn found_names(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.found_name.as_str()).collect()
    }

    pub fn centroids(&self) -> Vec<Option<GeoPoint>> {
        self.rows.iter().map(|r| r.centroid).collect()
    }

    pub fn limits(&self) -> Vec<Option<GeoRect>> {
        self.rows.iter().map(|r| r.limit).collect()
    }
}

impl<'a> IntoIterator for &'a RegionTable {
    type Item = &'a RegionRow;
    type IntoIter = std::slice::Iter<'a, RegionRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

fn geometry_cell(row: &RegionRow) -> String {
    if let Some(point) = row.centroid {
        return format!("({:.4}, {:.4})", point.lon, point.lat);
    }
    if let Some(rect) = row.limit {
        return format!(
            "[{:.2}, {:.2} .. {:.2}, {:.2}]",
            rect.min_lon, rect.min_lat, rect.max_lon, rect.max_lat
        );
    }
    if let Some(boundary) = &row.boundary {
        let kind = boundary
            .get("type")
            .and_then(|t| t.as_str())
            .unwrap_or("geometry");
        return format!("<{}>", kind);
    }
    String::from("-")
}

impl fmt::Display for RegionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut request_width = "request".len();
        let mut id_width = "id".len();
        let mut name_width = "found_name".len();
        for row in &self.rows {
            request_width = request_width.max(row.request.len());
            id_width = id_width.max(row.id.len());
            name_width = name_width.max(row.found_name.len());
        }

        writeln!(
            f,
            "{:request_width$}  {:id_width$}  {:name_width$}  geometry",
            "request", "id", "found_name"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:request_width$}  {:id_width$}  {:name_width$}  {}",
                row.request,
                row.id,
                row.found_name,
                geometry_cell(row)
            )?;
        }
        Ok(())
    }
}
