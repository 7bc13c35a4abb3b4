use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::{
    CertificateDetail, CertificateSummary, ChangeInfo, HostedZone, RecordSetChange,
};

/// Raw API error (internal).
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Error code (`__type` for ACM, `<Code>` for Route 53)
    pub code: Option<String>,
    /// Raw error message
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Extra context for error mapping (internal).
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Certificate ARN (for `CertificateNotFound`)
    pub arn: Option<String>,
    /// Hosted zone ID (for `HostedZoneNotFound`)
    pub zone_id: Option<String>,
    /// Record name (for `InvalidChangeBatch`)
    pub record_name: Option<String>,
}

/// Maps raw API errors of one service onto `ProviderError` (internal).
pub(crate) trait ProviderErrorMapper {
    /// Service identifier
    fn provider_name(&self) -> &'static str;

    /// Map a raw API error onto `ProviderError`.
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Shortcut: parse error
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Shortcut: unknown error (fallback)
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// Certificate inventory.
#[async_trait]
pub trait CertificateSource: Send + Sync {
    /// List certificates (first page of the inventory).
    async fn list_certificates(&self) -> Result<Vec<CertificateSummary>>;

    /// Fetch the domain-validation detail of one certificate.
    async fn describe_certificate(&self, arn: &str) -> Result<CertificateDetail>;
}

/// Hosted-zone inventory.
#[async_trait]
pub trait HostedZoneSource: Send + Sync {
    /// List hosted zones in provider order (first page of the inventory).
    async fn list_hosted_zones(&self) -> Result<Vec<HostedZone>>;
}

/// DNS mutation sink.
///
/// Implementations must apply create-or-replace semantics: submitting the same change
/// twice leaves the zone in the same state.
#[async_trait]
pub trait RecordSetSink: Send + Sync {
    /// Create or replace a single-value record set.
    async fn upsert_record_set(&self, change: &RecordSetChange) -> Result<ChangeInfo>;
}
