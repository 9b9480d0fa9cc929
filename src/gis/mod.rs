//! Wire-facing subsystem: request descriptors, response model, and the
//! client façade over the geocoding transport.

pub mod request;
pub mod response;
pub mod service;

pub use request::{GeoRequest, PayloadKind, RegionQuery, RequestBuilder, RequestKind};
pub use response::{Answer, Feature, FeatureBuilder, GeoPoint, GeoRect, GeoResponse, ServiceReply};
pub use service::{GeocodingService, GeocodingTransport, HttpTransport};
