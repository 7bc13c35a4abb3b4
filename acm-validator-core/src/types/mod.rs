//! Domain types

mod record;
mod report;

pub use record::{ValidationRecord, ZoneMatch};
pub use report::{
    CertificateFailure, ExportOutput, ExportReport, ImportItem, ImportReport, ReconcileOutcome,
    RowRejection, SkipReason,
};

// Re-export the provider crate's public types
pub use acm_validator_provider::{
    CertificateDetail, CertificateSummary, ChangeInfo, DomainValidationOption, HostedZone,
    RecordSetChange, ResourceRecord, ValidationStatus,
};
