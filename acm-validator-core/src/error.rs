//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use acm_validator_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Hostname cannot be resolved to a zone (fewer than two labels or an empty label)
    #[error("Invalid domain: '{0}'")]
    InvalidDomain(String),

    /// A value object was built with missing data
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Tabular input or output violates the `Domain,Name,Type,Value` format
    #[error("Tabular format error: {0}")]
    TabularFormat(String),

    /// The certificate inventory could not be listed
    #[error("Failed to list certificates: {0}")]
    CertificateInventory(ProviderError),

    /// The hosted-zone inventory could not be listed
    #[error("Failed to list hosted zones: {0}")]
    ZoneInventory(ProviderError),
}

impl CoreError {
    /// Whether the error comes from user input or account state rather than a fault.
    ///
    /// Log `true` at `warn` and `false` at `error`. New variants must be classified here.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidDomain(_) | Self::ValidationError(_) | Self::TabularFormat(_) => true,
            Self::CertificateInventory(e) | Self::ZoneInventory(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
