//! Operator interaction abstraction trait definition

mod confirmer;

pub use confirmer::{Confirmer, FixedConfirmer, PromptConfirmer};
