use serde::{Deserialize, Serialize};

// ============ Credentials ============

/// Static AWS credentials used to sign every request.
///
/// `Debug` redacts the secret parts so credentials can sit inside logged structures.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsCredentials {
    /// Access key id (`AKIA...` / `ASIA...`).
    pub access_key_id: String,
    /// Secret access key.
    pub secret_access_key: String,
    /// Session token for temporary credentials.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
}

impl AwsCredentials {
    /// Create long-term credentials (no session token).
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    /// Attach a session token.
    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }
}

impl std::fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"***")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "***"),
            )
            .finish()
    }
}

// ============ Certificates ============

/// One entry of the certificate inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateSummary {
    /// Certificate ARN.
    pub arn: String,
    /// Primary domain name of the certificate.
    pub domain_name: String,
}

/// Validation state of one domain on a certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStatus {
    /// Ownership proof has not been observed yet.
    PendingValidation,
    /// Domain validated.
    Success,
    /// Validation failed or timed out.
    Failed,
    /// Any status this crate does not know about.
    #[serde(other)]
    Unknown,
}

/// DNS record that proves control of a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    /// Fully-qualified record name (trailing dot).
    pub name: String,
    /// Record type, `CNAME` for ACM.
    pub record_type: String,
    /// Record value.
    pub value: String,
}

/// One domain-validation-option entry of a certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainValidationOption {
    /// Domain being validated.
    pub domain_name: String,
    /// Current validation state.
    pub validation_status: ValidationStatus,
    /// `DNS` or `EMAIL`, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_method: Option<String>,
    /// Record to publish; absent for e-mail validation or before ACM has generated it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_record: Option<ResourceRecord>,
}

/// Validation detail of one certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDetail {
    /// Certificate ARN.
    pub arn: String,
    /// Primary domain name.
    pub domain_name: String,
    /// Entries in the order returned by the service.
    pub domain_validation_options: Vec<DomainValidationOption>,
}

// ============ Hosted zones ============

/// A Route 53 hosted zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedZone {
    /// Zone id without the `/hostedzone/` prefix.
    pub id: String,
    /// Fully-qualified zone name with trailing dot (e.g. `"example.com."`).
    pub name: String,
    /// Whether the zone is a private (VPC) zone.
    #[serde(default)]
    pub private_zone: bool,
    /// Number of record sets, when reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_count: Option<u64>,
}

impl HostedZone {
    /// Create a public zone with no record count.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            private_zone: false,
            record_count: None,
        }
    }
}

// ============ Record changes ============

/// A create-or-replace change for a single-value record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSetChange {
    /// Target hosted zone id.
    pub zone_id: String,
    /// Fully-qualified record name.
    pub name: String,
    /// Record type.
    pub record_type: String,
    /// Time to live in seconds.
    pub ttl: u32,
    /// The single resource value.
    pub value: String,
}

/// Acknowledgement of a submitted change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeInfo {
    /// Change id without the `/change/` prefix.
    pub id: String,
    /// `PENDING` or `INSYNC`.
    pub status: String,
    /// Submission timestamp as returned by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
}
