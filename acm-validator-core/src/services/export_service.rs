//! Pending validation record export

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::{ServiceContext, ValidationRecordExtractor};
use crate::tabular;
use crate::types::{CertificateFailure, ExportOutput, ExportReport};

/// Collects every pending validation record of the account.
pub struct ExportService {
    ctx: Arc<ServiceContext>,
}

impl ExportService {
    /// Create an export service.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Walk all certificates and extract their pending records.
    ///
    /// Listing failure is fatal. A certificate that cannot be described, or whose records
    /// cannot be written as tabular rows, is recorded in [`ExportReport::failures`] and
    /// the walk continues.
    pub async fn export(&self) -> CoreResult<ExportReport> {
        let summaries = self
            .ctx
            .certificate_source
            .list_certificates()
            .await
            .map_err(CoreError::CertificateInventory)?;

        log::info!("Found {} certificate(s)", summaries.len());

        let mut report = ExportReport {
            certificate_count: summaries.len(),
            ..Default::default()
        };

        for summary in summaries {
            let detail = match self
                .ctx
                .certificate_source
                .describe_certificate(&summary.arn)
                .await
            {
                Ok(detail) => detail,
                Err(e) => {
                    if e.is_expected() {
                        log::warn!("Failed to describe {}: {e}", summary.arn);
                    } else {
                        log::error!("Failed to describe {}: {e}", summary.arn);
                    }
                    report.failures.push(CertificateFailure {
                        arn: summary.arn,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let records = ValidationRecordExtractor::extract(&detail);
            log::debug!(
                "{} ({}): {} pending record(s)",
                summary.arn,
                summary.domain_name,
                records.len()
            );

            for record in records {
                if let Err(e) = tabular::check_writable(&record) {
                    log::warn!("{}: record {} not exportable: {e}", summary.arn, record.name());
                    report.failures.push(CertificateFailure {
                        arn: summary.arn.clone(),
                        reason: e.to_string(),
                    });
                    continue;
                }
                report.records.push(record);
            }
        }

        Ok(report)
    }

    /// What to print for `report`.
    pub fn render(report: &ExportReport) -> CoreResult<ExportOutput> {
        if report.certificate_count == 0 {
            return Ok(ExportOutput::NoCertificates);
        }
        if report.records.is_empty() {
            return Ok(ExportOutput::NoPendingRecords);
        }
        Ok(ExportOutput::Table(tabular::write_records(&report.records)?))
    }
}
