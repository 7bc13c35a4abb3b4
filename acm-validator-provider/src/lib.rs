//! # acm-validator-provider
//!
//! Thin AWS adapters for publishing ACM DNS-validation records: certificate inventory from
//! AWS Certificate Manager and hosted-zone inventory plus record upserts on Route 53.
//!
//! ## Services
//!
//! | Service | Adapter | Protocol | Trait(s) |
//! |---------|---------|----------|----------|
//! | ACM | [`AcmProvider`] | JSON 1.1 (`X-Amz-Target`) | [`CertificateSource`] |
//! | Route 53 | [`Route53Provider`] | REST/XML | [`HostedZoneSource`], [`RecordSetSink`] |
//!
//! Both sign with AWS Signature Version 4. Route 53 is a global service and is always
//! signed for `us-east-1`.
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: Use rustls.
//! - **`native-tls`**: Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use acm_validator_provider::{
//!     AcmProvider, AwsCredentials, CertificateSource, HostedZoneSource, Route53Provider,
//!     ValidationStatus,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = AwsCredentials::new("AKIA...", "secret");
//!     let acm = AcmProvider::new(credentials.clone(), "us-east-1")?;
//!     let route53 = Route53Provider::new(credentials)?;
//!
//!     for summary in acm.list_certificates().await? {
//!         let detail = acm.describe_certificate(&summary.arn).await?;
//!         for option in detail.domain_validation_options {
//!             if option.validation_status == ValidationStatus::PendingValidation {
//!                 println!("{} is pending", option.domain_name);
//!             }
//!         }
//!     }
//!
//!     for zone in route53.list_hosted_zones().await? {
//!         println!("{} {}", zone.id, zone.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). AWS error codes are
//! mapped to structured variants, for example:
//!
//! - [`ProviderError::InvalidCredentials`]: signature or key rejected
//! - [`ProviderError::CertificateNotFound`]: unknown certificate ARN
//! - [`ProviderError::InvalidChangeBatch`]: Route 53 refused the change
//! - [`ProviderError::RateLimited`]: throttled
//!
//! Requests are sent once; nothing is retried.

mod error;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export public traits (error mapping stays internal)
pub use traits::{CertificateSource, HostedZoneSource, RecordSetSink};

// Re-export types
pub use types::{
    AwsCredentials, CertificateDetail, CertificateSummary, ChangeInfo, DomainValidationOption,
    HostedZone, RecordSetChange, ResourceRecord, ValidationStatus,
};

// Re-export concrete adapters
pub use providers::{AcmProvider, AcmProviderBuilder, Route53Provider, Route53ProviderBuilder};
