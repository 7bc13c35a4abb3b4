//! AWS Route 53 adapter

mod error;
mod http;
mod provider;
/// Route 53 REST/XML request and response types.
pub(crate) mod types;

use reqwest::{Client, Url};

use crate::error::Result;
use crate::providers::common::{create_http_client, parse_endpoint};
use crate::types::AwsCredentials;

/// Signing name of the Route 53 service.
pub(crate) const ROUTE53_SERVICE: &str = "route53";
/// Route 53 is global; requests are always signed for this region.
pub(crate) const ROUTE53_SIGNING_REGION: &str = "us-east-1";
/// API version prefix of every Route 53 path.
pub(crate) const ROUTE53_API_VERSION: &str = "2013-04-01";
/// XML namespace of request documents.
pub(crate) const ROUTE53_XMLNS: &str = "https://route53.amazonaws.com/doc/2013-04-01/";
const ROUTE53_DEFAULT_ENDPOINT: &str = "https://route53.amazonaws.com";

/// Route 53 hosted-zone inventory and record-set writer.
pub struct Route53Provider {
    pub(crate) client: Client,
    pub(crate) credentials: AwsCredentials,
    pub(crate) endpoint: Url,
}

/// Builder for [`Route53Provider`].
pub struct Route53ProviderBuilder {
    credentials: AwsCredentials,
    endpoint: Option<String>,
}

impl Route53ProviderBuilder {
    fn new(credentials: AwsCredentials) -> Self {
        Self {
            credentials,
            endpoint: None,
        }
    }

    /// Override the endpoint (default `https://route53.amazonaws.com`).
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Build the [`Route53Provider`] instance.
    pub fn build(self) -> Result<Route53Provider> {
        let endpoint = self
            .endpoint
            .unwrap_or_else(|| ROUTE53_DEFAULT_ENDPOINT.to_string());

        Ok(Route53Provider {
            client: create_http_client(ROUTE53_SERVICE)?,
            credentials: self.credentials,
            endpoint: parse_endpoint(&endpoint, ROUTE53_SERVICE)?,
        })
    }
}

impl Route53Provider {
    /// Creates a provider against the global endpoint.
    pub fn new(credentials: AwsCredentials) -> Result<Self> {
        Self::builder(credentials).build()
    }

    /// Returns a builder for customizing the provider configuration.
    pub fn builder(credentials: AwsCredentials) -> Route53ProviderBuilder {
        Route53ProviderBuilder::new(credentials)
    }
}
