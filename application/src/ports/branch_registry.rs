//! Bank branch registry port

use async_trait::async_trait;
use neuralcore_domain::{BranchRecord, Grounded};
use thiserror::Error;

/// Classified registry failures
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The registry does not know the code (HTTP 404).
    #[error("routing code not found")]
    NotFound,

    /// Any other non-success status.
    #[error("registry returned status {status}")]
    Unavailable { status: u16 },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid registry response: {0}")]
    InvalidResponse(String),
}

/// Lookup of a bank branch by routing code
///
/// The adapter maps the registry's field names onto [`BranchRecord`] and
/// attaches its provenance source.
#[async_trait]
pub trait BranchRegistryPort: Send + Sync {
    /// `code` is already trimmed and uppercased.
    async fn lookup(&self, code: &str) -> Result<Grounded<BranchRecord>, RegistryError>;
}
