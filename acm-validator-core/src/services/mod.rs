//! Service layer

mod export_service;
mod import_service;
mod record_reconciler;
mod validation_record_extractor;
mod zone_resolver;

pub use export_service::ExportService;
pub use import_service::{ImportOptions, ImportService};
pub use record_reconciler::{RecordReconciler, VALIDATION_RECORD_TTL};
pub use validation_record_extractor::ValidationRecordExtractor;
pub use zone_resolver::ZoneResolver;

use std::sync::Arc;

use acm_validator_provider::{CertificateSource, HostedZoneSource, RecordSetSink};

/// Service context holding every dependency.
///
/// The binary builds this once and injects the AWS adapters (or test mocks).
pub struct ServiceContext {
    /// Certificate inventory (ACM)
    pub certificate_source: Arc<dyn CertificateSource>,
    /// Hosted zone inventory (Route 53)
    pub zone_source: Arc<dyn HostedZoneSource>,
    /// Record writes (Route 53)
    pub record_sink: Arc<dyn RecordSetSink>,
}

impl ServiceContext {
    /// Create a service context.
    #[must_use]
    pub fn new(
        certificate_source: Arc<dyn CertificateSource>,
        zone_source: Arc<dyn HostedZoneSource>,
        record_sink: Arc<dyn RecordSetSink>,
    ) -> Self {
        Self {
            certificate_source,
            zone_source,
            record_sink,
        }
    }
}
