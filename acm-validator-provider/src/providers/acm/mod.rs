//! AWS Certificate Manager adapter

mod error;
mod http;
mod provider;
/// ACM JSON 1.1 request/response types.
pub(crate) mod types;

use reqwest::{Client, Url};

use crate::error::Result;
use crate::providers::common::{create_http_client, parse_endpoint};
use crate::types::AwsCredentials;

/// Signing name of the ACM service.
pub(crate) const ACM_SERVICE: &str = "acm";
/// `X-Amz-Target` prefix of ACM actions.
pub(crate) const ACM_TARGET_PREFIX: &str = "CertificateManager";
/// Content type of the AWS JSON 1.1 protocol.
pub(crate) const ACM_CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// ACM certificate inventory.
///
/// Authenticates with AWS Signature Version 4 against the regional ACM endpoint.
///
/// # Construction
///
/// ```rust,no_run
/// use acm_validator_provider::{AcmProvider, AwsCredentials};
///
/// let provider = AcmProvider::builder(
///     AwsCredentials::new("AKIA...", "secret"),
///     "us-east-1",
/// )
/// .build()?;
/// # Ok::<(), acm_validator_provider::ProviderError>(())
/// ```
pub struct AcmProvider {
    pub(crate) client: Client,
    pub(crate) credentials: AwsCredentials,
    pub(crate) region: String,
    pub(crate) endpoint: Url,
}

/// Builder for [`AcmProvider`].
pub struct AcmProviderBuilder {
    credentials: AwsCredentials,
    region: String,
    endpoint: Option<String>,
}

impl AcmProviderBuilder {
    fn new(credentials: AwsCredentials, region: String) -> Self {
        Self {
            credentials,
            region,
            endpoint: None,
        }
    }

    /// Override the endpoint (default `https://acm.{region}.amazonaws.com`).
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Build the [`AcmProvider`] instance.
    pub fn build(self) -> Result<AcmProvider> {
        let endpoint = self
            .endpoint
            .unwrap_or_else(|| format!("https://acm.{}.amazonaws.com", self.region));

        Ok(AcmProvider {
            client: create_http_client(ACM_SERVICE)?,
            credentials: self.credentials,
            endpoint: parse_endpoint(&endpoint, ACM_SERVICE)?,
            region: self.region,
        })
    }
}

impl AcmProvider {
    /// Creates a provider for `region` with the default endpoint.
    pub fn new(credentials: AwsCredentials, region: impl Into<String>) -> Result<Self> {
        Self::builder(credentials, region).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(credentials: AwsCredentials, region: impl Into<String>) -> AcmProviderBuilder {
        AcmProviderBuilder::new(credentials, region.into())
    }

    /// Region requests are signed for.
    pub fn region(&self) -> &str {
        &self.region
    }
}
