//! Export / import reports and per-record outcomes.

use serde::Serialize;

use acm_validator_provider::ChangeInfo;

use super::record::ValidationRecord;

/// Why a record was not written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SkipReason {
    /// No hosted zone name is a suffix of the domain.
    ZoneNotFound,
    /// Domain has fewer than two labels or an empty label.
    InvalidDomain,
    /// Dry run: the change was only logged.
    DryRun,
    /// Operator did not confirm.
    Declined,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::ZoneNotFound => "zone not found",
            Self::InvalidDomain => "invalid domain",
            Self::DryRun => "dry run",
            Self::Declined => "declined",
        };
        f.write_str(text)
    }
}

/// Outcome of reconciling one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "camelCase")]
pub enum ReconcileOutcome {
    /// The upsert was accepted by Route 53.
    Applied(ChangeInfo),
    /// Nothing was written.
    Skipped(SkipReason),
    /// The upsert call failed.
    Failed(String),
}

impl ReconcileOutcome {
    /// Whether the record was written.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

// ============ Export ============

/// A certificate whose detail could not be turned into records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateFailure {
    /// Certificate ARN.
    pub arn: String,
    /// Failure reason.
    pub reason: String,
}

/// Result of an export run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    /// Number of certificates listed.
    pub certificate_count: usize,
    /// Pending records, in certificate then validation-entry order.
    pub records: Vec<ValidationRecord>,
    /// Per-certificate failures; the run continued past each.
    pub failures: Vec<CertificateFailure>,
}

/// What an export run prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutput {
    /// The account holds no certificates.
    NoCertificates,
    /// Certificates exist but none has a pending record.
    NoPendingRecords,
    /// Tabular text, header included.
    Table(String),
}

impl ExportOutput {
    /// Informational message for the empty cases.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::NoCertificates => Some("No certificates found."),
            Self::NoPendingRecords => Some(
                "Found certificates, but none has records with 'PENDING_VALIDATION' status.",
            ),
            Self::Table(_) => None,
        }
    }
}

// ============ Import ============

/// A tabular row rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowRejection {
    /// 1-based line number in the input.
    pub line: usize,
    /// Why the row was rejected.
    pub reason: String,
}

/// Outcome for one imported record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportItem {
    /// The record as read.
    pub record: ValidationRecord,
    /// Id of the zone it resolved to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    /// What happened.
    pub outcome: ReconcileOutcome,
}

/// Result of an import run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    /// Number of zones in the inventory.
    pub zone_count: usize,
    /// One item per accepted row, in input order.
    pub items: Vec<ImportItem>,
    /// Rows rejected at parse time.
    pub rejected_rows: Vec<RowRejection>,
}

impl ImportReport {
    /// Records written.
    pub fn applied_count(&self) -> usize {
        self.items.iter().filter(|i| i.outcome.is_applied()).count()
    }

    /// Records skipped for `reason`.
    pub fn skipped_count(&self, reason: SkipReason) -> usize {
        self.items
            .iter()
            .filter(|i| i.outcome == ReconcileOutcome::Skipped(reason))
            .count()
    }

    /// Records whose upsert failed.
    pub fn failed_count(&self) -> usize {
        self.items
            .iter()
            .filter(|i| matches!(i.outcome, ReconcileOutcome::Failed(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(outcome: ReconcileOutcome) -> ImportItem {
        ImportItem {
            record: ValidationRecord::try_new("a.com", "_x.a.com.", "CNAME", "_y.aws.").unwrap(),
            zone_id: None,
            outcome,
        }
    }

    #[test]
    fn import_report_counts() {
        let report = ImportReport {
            zone_count: 1,
            items: vec![
                item(ReconcileOutcome::Applied(ChangeInfo {
                    id: "C1".to_string(),
                    status: "PENDING".to_string(),
                    submitted_at: None,
                })),
                item(ReconcileOutcome::Skipped(SkipReason::Declined)),
                item(ReconcileOutcome::Skipped(SkipReason::ZoneNotFound)),
                item(ReconcileOutcome::Skipped(SkipReason::Declined)),
                item(ReconcileOutcome::Failed("boom".to_string())),
            ],
            rejected_rows: vec![],
        };

        assert_eq!(report.applied_count(), 1);
        assert_eq!(report.skipped_count(SkipReason::Declined), 2);
        assert_eq!(report.skipped_count(SkipReason::DryRun), 0);
        assert_eq!(report.failed_count(), 1);
    }

    #[test]
    fn export_output_messages_are_distinct() {
        let none = ExportOutput::NoCertificates.message().unwrap();
        let no_pending = ExportOutput::NoPendingRecords.message().unwrap();
        assert_ne!(none, no_pending);
        assert!(ExportOutput::Table(String::new()).message().is_none());
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let json =
            serde_json::to_value(ReconcileOutcome::Skipped(SkipReason::ZoneNotFound)).unwrap();
        assert_eq!(json["status"], "skipped");
        assert_eq!(json["detail"], "zoneNotFound");
    }
}
