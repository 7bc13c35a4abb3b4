//! ACM 错误映射
//!
//! 参考: <https://docs.aws.amazon.com/acm/latest/APIReference/CommonErrors.html>
//!
//! ## 错误码分类
//!
//! - **认证错误**：`UnrecognizedClientException`, `InvalidSignatureException`,
//!   `ExpiredTokenException`, `IncompleteSignature`, `InvalidClientTokenId`,
//!   `MissingAuthenticationToken`
//! - **权限拒绝**：`AccessDeniedException`
//! - **频率限制**：`ThrottlingException`, `RequestLimitExceeded`, `TooManyRequestsException`
//! - **证书不存在**：`ResourceNotFoundException`
//! - **参数错误**：`InvalidArnException`, `ValidationException`, `InvalidParameterException`
//! - **服务端错误**：`InternalFailure`, `ServiceUnavailable`

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{ACM_SERVICE, AcmProvider};

impl ProviderErrorMapper for AcmProvider {
    fn provider_name(&self) -> &'static str {
        ACM_SERVICE
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // ============ 认证错误 ============
            Some(
                "UnrecognizedClientException"
                | "InvalidSignatureException"
                | "ExpiredTokenException"
                | "IncompleteSignature"
                | "InvalidClientTokenId"
                | "MissingAuthenticationToken",
            ) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 权限拒绝 ============
            Some("AccessDeniedException") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // ============ 频率限制 ============
            Some("ThrottlingException" | "RequestLimitExceeded" | "TooManyRequestsException") => {
                ProviderError::RateLimited {
                    provider: self.provider_name().to_string(),
                    retry_after: None,
                    raw_message: Some(raw.message),
                }
            }

            // ============ 证书不存在 ============
            Some("ResourceNotFoundException") => ProviderError::CertificateNotFound {
                provider: self.provider_name().to_string(),
                arn: context.arn.unwrap_or_default(),
                raw_message: Some(raw.message),
            },

            // ============ 参数无效 ============
            Some("InvalidArnException") => ProviderError::InvalidParameter {
                provider: self.provider_name().to_string(),
                param: "CertificateArn".to_string(),
                detail: raw.message,
            },
            Some("ValidationException" | "InvalidParameterException") => {
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: "request".to_string(),
                    detail: raw.message,
                }
            }

            // ============ 服务端错误 ============
            Some("InternalFailure" | "ServiceUnavailable") => ProviderError::NetworkError {
                provider: self.provider_name().to_string(),
                detail: raw.message,
            },

            _ => self.unknown_error(raw),
        }
    }
}
