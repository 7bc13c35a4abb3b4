//! Pending validation record extraction

use acm_validator_provider::{CertificateDetail, ValidationStatus};

use crate::types::ValidationRecord;

/// Turns a certificate's domain-validation entries into flat records.
pub struct ValidationRecordExtractor;

impl ValidationRecordExtractor {
    /// One record per `PENDING_VALIDATION` entry, in source order.
    ///
    /// Other statuses are skipped silently. A pending entry without a usable resource
    /// record is skipped with a warning.
    pub fn extract(detail: &CertificateDetail) -> Vec<ValidationRecord> {
        detail
            .domain_validation_options
            .iter()
            .filter(|option| option.validation_status == ValidationStatus::PendingValidation)
            .filter_map(|option| {
                let Some(rr) = &option.resource_record else {
                    log::warn!(
                        "{}: pending domain {} has no DNS resource record (method {}), skipped",
                        detail.arn,
                        option.domain_name,
                        option.validation_method.as_deref().unwrap_or("unknown")
                    );
                    return None;
                };

                match ValidationRecord::try_new(
                    option.domain_name.as_str(),
                    rr.name.as_str(),
                    rr.record_type.as_str(),
                    rr.value.as_str(),
                ) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        log::warn!(
                            "{}: pending domain {} skipped: {e}",
                            detail.arn,
                            option.domain_name
                        );
                        None
                    }
                }
            })
            .collect()
    }
}
