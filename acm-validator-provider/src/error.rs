use serde::{Deserialize, Serialize};

/// Unified error type for all ACM and Route 53 operations.
///
/// Each variant includes a `provider` field identifying which service produced the error
/// (`"acm"` or `"route53"`), plus variant-specific context. All variants are serializable
/// for structured error reporting.
///
/// Calls are attempted exactly once; transient variants ([`NetworkError`](Self::NetworkError),
/// [`Timeout`](Self::Timeout), [`RateLimited`](Self::RateLimited)) are surfaced to the caller
/// as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Service that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Service that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The signing credentials are invalid, expired or the signature was rejected.
    InvalidCredentials {
        /// Service that produced the error.
        provider: String,
        /// Original error message from the service, if available.
        raw_message: Option<String>,
    },

    /// The authenticated principal lacks permission for the requested operation.
    PermissionDenied {
        /// Service that produced the error.
        provider: String,
        /// Original error message from the service, if available.
        raw_message: Option<String>,
    },

    /// The API rate limit has been exceeded (HTTP 429 or a throttling error code).
    RateLimited {
        /// Service that produced the error.
        provider: String,
        /// Suggested wait time in seconds, if provided by the API.
        retry_after: Option<u64>,
        /// Original error message from the service, if available.
        raw_message: Option<String>,
    },

    /// The certificate ARN does not exist in the account/region.
    CertificateNotFound {
        /// Service that produced the error.
        provider: String,
        /// ARN that was looked up.
        arn: String,
        /// Original error message from the service, if available.
        raw_message: Option<String>,
    },

    /// The hosted zone id does not exist.
    HostedZoneNotFound {
        /// Service that produced the error.
        provider: String,
        /// Zone id that was targeted.
        zone_id: String,
        /// Original error message from the service, if available.
        raw_message: Option<String>,
    },

    /// Route 53 rejected the change batch (wrong zone for the name, conflicting CNAME, ...).
    InvalidChangeBatch {
        /// Service that produced the error.
        provider: String,
        /// Record name carried by the rejected change.
        record_name: String,
        /// Original error message from the service, if available.
        raw_message: Option<String>,
    },

    /// A request parameter is invalid.
    InvalidParameter {
        /// Service that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// Failed to parse the service's response.
    ParseError {
        /// Service that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Service that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// An unrecognized error from the service.
    ///
    /// Catch-all for error codes not mapped to a specific variant.
    Unknown {
        /// Service that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// Whether the error is expected (bad input, missing resource) rather than a fault.
    ///
    /// Log `true` at `warn` and `false` at `error`.
    /// New variants must be classified here.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::CertificateNotFound { .. }
                | Self::HostedZoneNotFound { .. }
                | Self::InvalidChangeBatch { .. }
                | Self::InvalidParameter { .. }
        )
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::PermissionDenied {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Permission denied: {msg}")
                } else {
                    write!(f, "[{provider}] Permission denied")
                }
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::CertificateNotFound { provider, arn, .. } => {
                write!(f, "[{provider}] Certificate '{arn}' not found")
            }
            Self::HostedZoneNotFound {
                provider,
                zone_id,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Hosted zone '{zone_id}' not found: {msg}")
                } else {
                    write!(f, "[{provider}] Hosted zone '{zone_id}' not found")
                }
            }
            Self::InvalidChangeBatch {
                provider,
                record_name,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(
                        f,
                        "[{provider}] Change for '{record_name}' rejected: {msg}"
                    )
                } else {
                    write!(f, "[{provider}] Change for '{record_name}' rejected")
                }
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => {
                write!(f, "[{provider}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ProviderError::NetworkError {
            provider: "acm".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "[acm] Network error: connection refused");
    }

    #[test]
    fn display_invalid_credentials_with_and_without_message() {
        let with = ProviderError::InvalidCredentials {
            provider: "acm".to_string(),
            raw_message: Some("The security token included in the request is invalid".into()),
        };
        assert_eq!(
            with.to_string(),
            "[acm] Invalid credentials: The security token included in the request is invalid"
        );

        let without = ProviderError::InvalidCredentials {
            provider: "route53".to_string(),
            raw_message: None,
        };
        assert_eq!(without.to_string(), "[route53] Invalid credentials");
    }

    #[test]
    fn display_certificate_not_found() {
        let e = ProviderError::CertificateNotFound {
            provider: "acm".to_string(),
            arn: "arn:aws:acm:us-east-1:123:certificate/abc".to_string(),
            raw_message: None,
        };
        assert_eq!(
            e.to_string(),
            "[acm] Certificate 'arn:aws:acm:us-east-1:123:certificate/abc' not found"
        );
    }

    #[test]
    fn display_invalid_change_batch() {
        let e = ProviderError::InvalidChangeBatch {
            provider: "route53".to_string(),
            record_name: "_x.example.com.".to_string(),
            raw_message: Some("RRSet with DNS name _x.example.com. is not permitted".into()),
        };
        assert_eq!(
            e.to_string(),
            "[route53] Change for '_x.example.com.' rejected: RRSet with DNS name _x.example.com. is not permitted"
        );
    }

    #[test]
    fn display_rate_limited_with_retry() {
        let e = ProviderError::RateLimited {
            provider: "route53".to_string(),
            retry_after: Some(30),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[route53] Rate limited (retry after 30s)");
    }

    #[test]
    fn display_unknown_uses_raw_message() {
        let e = ProviderError::Unknown {
            provider: "acm".to_string(),
            raw_code: Some("SomethingOdd".to_string()),
            raw_message: "something broke".to_string(),
        };
        assert_eq!(e.to_string(), "[acm] something broke");
    }

    #[test]
    fn serialize_is_tagged_by_code() {
        let e = ProviderError::HostedZoneNotFound {
            provider: "route53".to_string(),
            zone_id: "Z123".to_string(),
            raw_message: None,
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"HostedZoneNotFound\""));
        assert!(json.contains("\"zone_id\":\"Z123\""));

        let back: ProviderError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), e.to_string());
    }

    #[test]
    fn expected_errors_are_user_facing() {
        assert!(
            ProviderError::PermissionDenied {
                provider: "acm".into(),
                raw_message: None,
            }
            .is_expected()
        );
        assert!(
            !ProviderError::Timeout {
                provider: "acm".into(),
                detail: "30s".into(),
            }
            .is_expected()
        );
        assert!(
            !ProviderError::ParseError {
                provider: "route53".into(),
                detail: "bad xml".into(),
            }
            .is_expected()
        );
    }
}
