//! ACM Validator Core Library
//!
//! Business logic for publishing ACM DNS-validation records into Route 53:
//! - Export: certificate inventory → pending validation records → tabular text
//! - Import: tabular text → longest-suffix zone resolution → confirmed UPSERT
//!
//! Every AWS dependency is injected through [`ServiceContext`] as a trait object, so the
//! services run unchanged against the real adapters or in-memory mocks.

pub mod error;
pub mod services;
pub mod tabular;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::{Confirmer, FixedConfirmer, PromptConfirmer};
