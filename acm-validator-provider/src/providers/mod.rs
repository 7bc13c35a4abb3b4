//! AWS service adapters

/// Shared utilities used by the adapters.
pub mod common;
pub(crate) mod sigv4;

mod acm;
mod route53;

pub use acm::{AcmProvider, AcmProviderBuilder};
pub use route53::{Route53Provider, Route53ProviderBuilder};
