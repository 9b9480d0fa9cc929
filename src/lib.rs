//! Georegions — place-name to geographic region resolution.
//!
//! Resolves free-form place-name queries ("rus", "united states") into
//! geographic features with stable ids, canonical names and geometries by
//! delegating to a geocoding service, then reconciles the answers into a
//! row-aligned table that preserves the original query order, duplicates
//! included. Follow-up enrichment (centroids, limits, boundaries) fetches
//! each distinct id once and re-expands the result across duplicate rows.

pub mod error;
pub mod gis;
pub mod regions;
pub mod resolution;
pub mod table;

pub use error::GeoError;
pub use gis::{GeocodingService, RegionQuery};
pub use regions::Regions;
pub use resolution::{coerce_resolution, parse_resolution, LevelKind, Resolution};
pub use table::{RegionRow, RegionTable};
