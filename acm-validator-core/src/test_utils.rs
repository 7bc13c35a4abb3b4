//! Test helpers
//!
//! Mock adapters and factory functions for service tests.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use acm_validator_provider::{
    CertificateDetail, CertificateSource, CertificateSummary, ChangeInfo, DomainValidationOption,
    HostedZone, HostedZoneSource, ProviderError, RecordSetChange, RecordSetSink, ResourceRecord,
    Result, ValidationStatus,
};
use tokio::sync::RwLock;

use crate::services::ServiceContext;
use crate::traits::Confirmer;

fn mock_error(message: &str) -> ProviderError {
    ProviderError::Unknown {
        provider: "mock".to_string(),
        raw_code: Some(message.to_string()),
        raw_message: message.to_string(),
    }
}

// ===== MockCertificateSource =====

pub struct MockCertificateSource {
    summaries: RwLock<Vec<CertificateSummary>>,
    details: RwLock<HashMap<String, CertificateDetail>>,
    /// If `Some`, `list` returns this error
    list_error: RwLock<Option<String>>,
    /// ARNs whose `describe` fails
    failing_arns: RwLock<HashSet<String>>,
}

impl MockCertificateSource {
    pub fn new() -> Self {
        Self {
            summaries: RwLock::new(Vec::new()),
            details: RwLock::new(HashMap::new()),
            list_error: RwLock::new(None),
            failing_arns: RwLock::new(HashSet::new()),
        }
    }

    pub async fn add_certificate(&self, detail: CertificateDetail) {
        self.summaries.write().await.push(CertificateSummary {
            arn: detail.arn.clone(),
            domain_name: detail.domain_name.clone(),
        });
        self.details
            .write()
            .await
            .insert(detail.arn.clone(), detail);
    }

    pub async fn set_list_error(&self, err: Option<String>) {
        *self.list_error.write().await = err;
    }

    pub async fn fail_describe(&self, arn: &str) {
        self.failing_arns.write().await.insert(arn.to_string());
    }
}

#[async_trait]
impl CertificateSource for MockCertificateSource {
    async fn list_certificates(&self) -> Result<Vec<CertificateSummary>> {
        if let Some(ref msg) = *self.list_error.read().await {
            return Err(mock_error(msg));
        }
        Ok(self.summaries.read().await.clone())
    }

    async fn describe_certificate(&self, arn: &str) -> Result<CertificateDetail> {
        if self.failing_arns.read().await.contains(arn) {
            return Err(mock_error("ThrottlingException"));
        }
        self.details
            .read()
            .await
            .get(arn)
            .cloned()
            .ok_or_else(|| ProviderError::CertificateNotFound {
                provider: "mock".to_string(),
                arn: arn.to_string(),
                raw_message: None,
            })
    }
}

// ===== MockZoneSource =====

pub struct MockZoneSource {
    zones: RwLock<Vec<HostedZone>>,
    list_error: RwLock<Option<String>>,
    calls: RwLock<usize>,
}

impl MockZoneSource {
    pub fn new() -> Self {
        Self {
            zones: RwLock::new(Vec::new()),
            list_error: RwLock::new(None),
            calls: RwLock::new(0),
        }
    }

    pub async fn set_zones(&self, zones: Vec<HostedZone>) {
        *self.zones.write().await = zones;
    }

    pub async fn set_list_error(&self, err: Option<String>) {
        *self.list_error.write().await = err;
    }

    pub async fn call_count(&self) -> usize {
        *self.calls.read().await
    }
}

#[async_trait]
impl HostedZoneSource for MockZoneSource {
    async fn list_hosted_zones(&self) -> Result<Vec<HostedZone>> {
        *self.calls.write().await += 1;
        if let Some(ref msg) = *self.list_error.read().await {
            return Err(mock_error(msg));
        }
        Ok(self.zones.read().await.clone())
    }
}

// ===== MockRecordSink =====

/// Upsert-semantics record store: one entry per (zone, name, type).
pub struct MockRecordSink {
    records: RwLock<HashMap<(String, String, String), RecordSetChange>>,
    changes: RwLock<Vec<RecordSetChange>>,
    /// If `Some`, every upsert returns this error
    fail_all: RwLock<Option<String>>,
    /// Record names whose upsert fails
    failing_names: RwLock<HashSet<String>>,
}

impl MockRecordSink {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            changes: RwLock::new(Vec::new()),
            fail_all: RwLock::new(None),
            failing_names: RwLock::new(HashSet::new()),
        }
    }

    pub async fn set_fail(&self, err: Option<String>) {
        *self.fail_all.write().await = err;
    }

    pub async fn fail_for(&self, name: &str) {
        self.failing_names.write().await.insert(name.to_string());
    }

    /// Number of upsert calls, failed ones included.
    pub async fn call_count(&self) -> usize {
        self.changes.read().await.len()
    }

    /// Every change submitted, in call order.
    pub async fn changes(&self) -> Vec<RecordSetChange> {
        self.changes.read().await.clone()
    }

    /// Current record state.
    pub async fn records(&self) -> Vec<RecordSetChange> {
        self.records.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl RecordSetSink for MockRecordSink {
    async fn upsert_record_set(&self, change: &RecordSetChange) -> Result<ChangeInfo> {
        let call = {
            let mut changes = self.changes.write().await;
            changes.push(change.clone());
            changes.len()
        };

        if let Some(ref msg) = *self.fail_all.read().await {
            return Err(mock_error(msg));
        }
        if self.failing_names.read().await.contains(&change.name) {
            return Err(mock_error("InvalidChangeBatch"));
        }

        self.records.write().await.insert(
            (
                change.zone_id.clone(),
                change.name.clone(),
                change.record_type.clone(),
            ),
            change.clone(),
        );

        Ok(ChangeInfo {
            id: format!("C{call:04}"),
            status: "PENDING".to_string(),
            submitted_at: None,
        })
    }
}

// ===== RecordingConfirmer =====

/// Fixed answer that remembers every prompt.
pub struct RecordingConfirmer {
    answer: bool,
    prompts: Mutex<Vec<String>>,
}

impl RecordingConfirmer {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl Confirmer for RecordingConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer
    }
}

// ===== Factories =====

/// Build a `ServiceContext` over the given mocks.
pub fn create_test_context() -> (
    Arc<ServiceContext>,
    Arc<MockCertificateSource>,
    Arc<MockZoneSource>,
    Arc<MockRecordSink>,
) {
    let certificates = Arc::new(MockCertificateSource::new());
    let zones = Arc::new(MockZoneSource::new());
    let sink = Arc::new(MockRecordSink::new());

    let ctx = Arc::new(ServiceContext::new(
        certificates.clone(),
        zones.clone(),
        sink.clone(),
    ));

    (ctx, certificates, zones, sink)
}

/// Certificate detail; `domains` are (domain, status) pairs.
pub fn test_certificate(arn: &str, domains: &[(&str, ValidationStatus)]) -> CertificateDetail {
    CertificateDetail {
        arn: arn.to_string(),
        domain_name: domains.first().map(|(d, _)| (*d).to_string()).unwrap_or_default(),
        domain_validation_options: domains
            .iter()
            .map(|(domain, status)| DomainValidationOption {
                domain_name: (*domain).to_string(),
                validation_status: status.clone(),
                validation_method: Some("DNS".to_string()),
                resource_record: Some(ResourceRecord {
                    name: format!("_{}.{domain}.", domain.len()),
                    record_type: "CNAME".to_string(),
                    value: format!("_{}.acm-validations.aws.", domain.replace('.', "-")),
                }),
            })
            .collect(),
    }
}
