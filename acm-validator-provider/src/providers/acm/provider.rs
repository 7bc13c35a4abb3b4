//! ACM `CertificateSource` trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::{CertificateSource, ErrorContext};
use crate::types::{
    CertificateDetail, CertificateSummary, DomainValidationOption, ResourceRecord,
    ValidationStatus,
};

use super::AcmProvider;
use super::types::{
    AcmDomainValidation, DescribeCertificateRequest, DescribeCertificateResponse,
    ListCertificatesRequest, ListCertificatesResponse,
};

impl AcmProvider {
    /// 将 ACM 验证状态转换为内部状态
    /// ACM 状态：`PENDING_VALIDATION`, SUCCESS, FAILED
    pub(crate) fn convert_validation_status(status: Option<&str>) -> ValidationStatus {
        match status {
            Some("PENDING_VALIDATION") => ValidationStatus::PendingValidation,
            Some("SUCCESS") => ValidationStatus::Success,
            Some("FAILED") => ValidationStatus::Failed,
            _ => ValidationStatus::Unknown,
        }
    }

    fn convert_validation_option(option: AcmDomainValidation) -> DomainValidationOption {
        DomainValidationOption {
            domain_name: option.domain_name,
            validation_status: Self::convert_validation_status(option.validation_status.as_deref()),
            validation_method: option.validation_method,
            resource_record: option.resource_record.map(|rr| ResourceRecord {
                name: rr.name,
                record_type: rr.record_type,
                value: rr.value,
            }),
        }
    }
}

#[async_trait]
impl CertificateSource for AcmProvider {
    async fn list_certificates(&self) -> Result<Vec<CertificateSummary>> {
        let response: ListCertificatesResponse = self
            .call(
                "ListCertificates",
                &ListCertificatesRequest::default(),
                ErrorContext::default(),
            )
            .await?;

        if response.next_token.is_some() {
            log::warn!(
                "ListCertificates returned more than one page; only the first {} certificates are processed",
                response.certificate_summary_list.len()
            );
        }

        Ok(response
            .certificate_summary_list
            .into_iter()
            .map(|c| CertificateSummary {
                arn: c.certificate_arn,
                domain_name: c.domain_name.unwrap_or_default(),
            })
            .collect())
    }

    async fn describe_certificate(&self, arn: &str) -> Result<CertificateDetail> {
        let ctx = ErrorContext {
            arn: Some(arn.to_string()),
            ..Default::default()
        };
        let response: DescribeCertificateResponse = self
            .call(
                "DescribeCertificate",
                &DescribeCertificateRequest {
                    certificate_arn: arn,
                },
                ctx,
            )
            .await?;

        let certificate = response.certificate;
        Ok(CertificateDetail {
            arn: certificate.certificate_arn,
            domain_name: certificate.domain_name.unwrap_or_default(),
            domain_validation_options: certificate
                .domain_validation_options
                .unwrap_or_default()
                .into_iter()
                .map(Self::convert_validation_option)
                .collect(),
        })
    }
}
