//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use domain_console_gateway::GatewayError;

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Domain record not found (by id)
    #[error("Domain not found: {0}")]
    DomainNotFound(String),

    /// Form input rejected before any request was sent
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// An update was submitted without a record selected for editing
    #[error("No domain selected for editing")]
    NoSelection,

    /// Gateway error (network or non-success answer from the store)
    #[error("{0}")]
    Gateway(#[from] GatewayError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, resource does not exist, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::DomainNotFound(_) | Self::ValidationError(_) | Self::NoSelection => true,
            Self::Gateway(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
