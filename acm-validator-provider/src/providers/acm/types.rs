//! ACM API type definition

use serde::{Deserialize, Serialize};

// ============ Requests ============

/// Request payload for `ListCertificates`.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListCertificatesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,
}

/// Request payload for `DescribeCertificate`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCertificateRequest<'a> {
    pub certificate_arn: &'a str,
}

// ============ Responses ============

/// Response payload for `ListCertificates`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListCertificatesResponse {
    #[serde(default)]
    pub certificate_summary_list: Vec<AcmCertificateSummary>,
    pub next_token: Option<String>,
}

/// Summary item returned by `ListCertificates`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcmCertificateSummary {
    pub certificate_arn: String,
    pub domain_name: Option<String>,
}

/// Response payload for `DescribeCertificate`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCertificateResponse {
    pub certificate: AcmCertificate,
}

/// Certificate detail returned by `DescribeCertificate`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcmCertificate {
    pub certificate_arn: String,
    pub domain_name: Option<String>,
    pub domain_validation_options: Option<Vec<AcmDomainValidation>>,
}

/// One `DomainValidationOptions` entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcmDomainValidation {
    pub domain_name: String,
    pub validation_status: Option<String>,
    pub validation_method: Option<String>,
    pub resource_record: Option<AcmResourceRecord>,
}

/// `ResourceRecord` of a DNS-validated domain.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcmResourceRecord {
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    pub value: String,
}

/// Error payload of the JSON 1.1 protocol.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "__type")]
    pub error_type: Option<String>,
    #[serde(alias = "Message")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Error code without the `namespace#` prefix some services prepend.
    pub fn code(&self) -> Option<&str> {
        self.error_type
            .as_deref()
            .map(|t| t.rsplit('#').next().unwrap_or(t))
    }
}
