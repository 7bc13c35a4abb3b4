//! Validation record import

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::{RecordReconciler, ServiceContext, ZoneResolver};
use crate::tabular;
use crate::traits::Confirmer;
use crate::types::{ImportItem, ImportReport, ReconcileOutcome, SkipReason};

/// Import run options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Log intended changes without prompting or writing.
    pub dry_run: bool,
}

/// Publishes records read from tabular input into their hosted zones.
pub struct ImportService {
    ctx: Arc<ServiceContext>,
    reconciler: RecordReconciler,
}

impl ImportService {
    /// Create an import service.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            reconciler: RecordReconciler::new(Arc::clone(&ctx)),
            ctx,
        }
    }

    /// Import every row of `input`.
    ///
    /// A bad header or a failed zone listing aborts the run. Everything after that is
    /// per record: rejected rows, invalid domains, unmatched zones, declines and failed
    /// upserts are reported and the next record is processed.
    pub async fn import(
        &self,
        input: &str,
        options: ImportOptions,
        confirmer: &dyn Confirmer,
    ) -> CoreResult<ImportReport> {
        let table = tabular::parse(input)?;
        for rejection in &table.rejected {
            log::warn!("Line {} rejected: {}", rejection.line, rejection.reason);
        }

        let zones = self
            .ctx
            .zone_source
            .list_hosted_zones()
            .await
            .map_err(CoreError::ZoneInventory)?;
        log::info!(
            "Loaded {} hosted zone(s); {} record(s) to process",
            zones.len(),
            table.records.len()
        );

        let total = table.records.len();
        let mut items = Vec::with_capacity(total);

        for (index, (line, record)) in table.records.into_iter().enumerate() {
            log::info!(
                "==== [{}/{total}] line {line}: {} {} ({}) ====",
                index + 1,
                record.record_type(),
                record.name(),
                record.domain()
            );

            let (zone_id, outcome) = match ZoneResolver::resolve(record.domain(), &zones) {
                Ok(zone_match) => {
                    let zone_id = zone_match.zone().map(|z| z.id.clone());
                    let outcome = self
                        .reconciler
                        .reconcile(&record, &zone_match, options.dry_run, confirmer)
                        .await;
                    (zone_id, outcome)
                }
                Err(e) => {
                    log::warn!("Line {line}: {e}, skipped");
                    (None, ReconcileOutcome::Skipped(SkipReason::InvalidDomain))
                }
            };

            log::info!(
                "==== [{}/{total}] {}: {} ====",
                index + 1,
                record.name(),
                Self::describe(&outcome)
            );

            items.push(ImportItem {
                record,
                zone_id,
                outcome,
            });
        }

        Ok(ImportReport {
            zone_count: zones.len(),
            items,
            rejected_rows: table.rejected,
        })
    }

    fn describe(outcome: &ReconcileOutcome) -> String {
        match outcome {
            ReconcileOutcome::Applied(info) => {
                format!("applied (change {}, {})", info.id, info.status)
            }
            ReconcileOutcome::Skipped(reason) => format!("skipped ({reason})"),
            ReconcileOutcome::Failed(e) => format!("failed ({e})"),
        }
    }
}
