//! Geocoding client façade.
//!
//! `GeocodingService` is the single entry point the reconciliation engine
//! talks to: one synchronous call, one parsed response. It owns no
//! reconciliation or deduplication logic. The transport behind it is a
//! trait so tests substitute canned replies without touching the network.

use crate::error::GeoError;
use crate::gis::request::GeoRequest;
use crate::gis::response::{GeoResponse, ServiceReply};
use tracing::debug;

const USER_AGENT: &str = concat!("georegions/", env!("CARGO_PKG_VERSION"));

/// The narrow seam between the core and the wire.
pub trait GeocodingTransport: Send + Sync {
    fn send(&self, request: &GeoRequest) -> Result<ServiceReply, GeoError>;
}

/// Blocking HTTP transport posting JSON request descriptors.
pub struct HttpTransport {
    url: String,
}

impl HttpTransport {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

impl GeocodingTransport for HttpTransport {
    fn send(&self, request: &GeoRequest) -> Result<ServiceReply, GeoError> {
        let response = ureq::post(&self.url)
            .set("User-Agent", USER_AGENT)
            .send_json(request)
            .map_err(|e| match e {
                ureq::Error::Status(code, response) => GeoError::Service {
                    status: Some(code),
                    message: response.status_text().to_string(),
                },
                other => GeoError::Service {
                    status: None,
                    message: other.to_string(),
                },
            })?;

        response.into_json().map_err(|e| GeoError::Service {
            status: None,
            message: format!("invalid reply: {}", e),
        })
    }
}

/// Call-and-wait façade over a geocoding transport.
pub struct GeocodingService {
    transport: Box<dyn GeocodingTransport>,
}

impl std::fmt::Debug for GeocodingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingService").finish_non_exhaustive()
    }
}

impl GeocodingService {
    /// Service talking HTTP to the given endpoint.
    pub fn new(url: &str) -> Self {
        Self::with_transport(Box::new(HttpTransport::new(url)))
    }

    /// Service over a specific transport (for testing).
    pub fn with_transport(transport: Box<dyn GeocodingTransport>) -> Self {
        Self { transport }
    }

    /// Execute one request and fully consume its response.
    ///
    /// Service-level error replies surface as `GeoError::Service`; no
    /// retry happens here.
    pub fn do_request(&self, request: &GeoRequest) -> Result<GeoResponse, GeoError> {
        debug!(
            kind = ?request.kind,
            queries = request.queries.len(),
            ids = request.ids.len(),
            "sending geocoding request"
        );

        match self.transport.send(request)? {
            ServiceReply::Success(response) => {
                debug!(answers = response.answers.len(), "geocoding reply received");
                Ok(response)
            }
            ServiceReply::Error { message } => Err(GeoError::Service {
                status: None,
                message,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gis::request::{RequestBuilder, RequestKind};
    use crate::gis::response::Answer;

    struct CannedTransport {
        reply: ServiceReply,
    }

    impl GeocodingTransport for CannedTransport {
        fn send(&self, _request: &GeoRequest) -> Result<ServiceReply, GeoError> {
            Ok(self.reply.clone())
        }
    }

    fn explicit_request() -> GeoRequest {
        RequestBuilder::new()
            .set_kind(RequestKind::Explicit)
            .set_ids(vec!["1".into()])
            .build()
            .unwrap()
    }

    #[test]
    fn test_success_reply_passes_through() {
        let service = GeocodingService::with_transport(Box::new(CannedTransport {
            reply: ServiceReply::Success(GeoResponse {
                answers: vec![Answer::new(vec![])],
            }),
        }));

        let response = service.do_request(&explicit_request()).unwrap();
        assert_eq!(response.answers.len(), 1);
    }

    #[test]
    fn test_error_reply_becomes_service_error() {
        let service = GeocodingService::with_transport(Box::new(CannedTransport {
            reply: ServiceReply::Error {
                message: "unknown level".into(),
            },
        }));

        let err = service.do_request(&explicit_request()).unwrap_err();
        assert!(matches!(
            err,
            GeoError::Service { status: None, message } if message == "unknown level"
        ));
    }

    #[test]
    fn test_transport_failure_propagates() {
        struct FailingTransport;
        impl GeocodingTransport for FailingTransport {
            fn send(&self, _request: &GeoRequest) -> Result<ServiceReply, GeoError> {
                Err(GeoError::Service {
                    status: Some(502),
                    message: "Bad Gateway".into(),
                })
            }
        }

        let service = GeocodingService::with_transport(Box::new(FailingTransport));
        let err = service.do_request(&explicit_request()).unwrap_err();
        assert!(matches!(err, GeoError::Service { status: Some(502), .. }));
    }
}
