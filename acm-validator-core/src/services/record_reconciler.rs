//! Per-record write decision: dry-run, confirmation, then UPSERT

use std::sync::Arc;

use acm_validator_provider::RecordSetChange;

use crate::services::ServiceContext;
use crate::traits::Confirmer;
use crate::types::{ReconcileOutcome, SkipReason, ValidationRecord, ZoneMatch};

/// TTL of every validation record, in seconds.
pub const VALIDATION_RECORD_TTL: u32 = 600;

/// Decides whether and how a record is written to its zone.
pub struct RecordReconciler {
    ctx: Arc<ServiceContext>,
}

impl RecordReconciler {
    /// Create a record reconciler.
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// Reconcile one record against its resolved zone.
    ///
    /// At most one upsert is issued, and only after an affirmative confirmation outside
    /// dry-run mode. Upstream failures become [`ReconcileOutcome::Failed`].
    pub async fn reconcile(
        &self,
        record: &ValidationRecord,
        zone_match: &ZoneMatch,
        dry_run: bool,
        confirmer: &dyn Confirmer,
    ) -> ReconcileOutcome {
        let ZoneMatch::Matched(zone) = zone_match else {
            log::warn!(
                "No hosted zone for {} ({}), skipped",
                record.domain(),
                record.name()
            );
            return ReconcileOutcome::Skipped(SkipReason::ZoneNotFound);
        };

        let change = RecordSetChange {
            zone_id: zone.id.clone(),
            name: record.name().to_string(),
            record_type: record.record_type().to_string(),
            ttl: VALIDATION_RECORD_TTL,
            value: record.value().to_string(),
        };

        if dry_run {
            log::info!(
                "[dry-run] would UPSERT {} {} -> {} (TTL {}) in zone {} ({})",
                change.record_type,
                change.name,
                change.value,
                change.ttl,
                zone.name,
                zone.id
            );
            return ReconcileOutcome::Skipped(SkipReason::DryRun);
        }

        let prompt = format!(
            "UPSERT {} {} -> {} in zone {} ({})?",
            change.record_type, change.name, change.value, zone.name, zone.id
        );
        if !confirmer.confirm(&prompt) {
            log::info!("Declined {} in zone {}", change.name, zone.id);
            return ReconcileOutcome::Skipped(SkipReason::Declined);
        }

        match self.ctx.record_sink.upsert_record_set(&change).await {
            Ok(info) => {
                log::info!(
                    "UPSERT {} in zone {} submitted: change {} ({})",
                    change.name,
                    zone.id,
                    info.id,
                    info.status
                );
                ReconcileOutcome::Applied(info)
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("UPSERT {} in zone {} failed: {e}", change.name, zone.id);
                } else {
                    log::error!("UPSERT {} in zone {} failed: {e}", change.name, zone.id);
                }
                ReconcileOutcome::Failed(e.to_string())
            }
        }
    }
}
