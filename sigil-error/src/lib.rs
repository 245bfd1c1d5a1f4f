//! Unified error handling for Sigil
//!
//! This crate provides a single error type used across all Sigil components.
//! It uses thiserror for ergonomic error definitions with proper Display and Error trait impls.
//!
//! Note that "a signal is unavailable in this environment" is NOT an error:
//! probes report that through negative status codes on the signal itself.
//! `SigilError` covers only unexpected failures, which abort the whole
//! profile collection.

/// Result type alias using SigilError
pub type Result<T> = std::result::Result<T, SigilError>;

/// Unified error type for all Sigil operations
#[derive(thiserror::Error, Debug)]
pub enum SigilError {
    // ============================================================================
    // Registry Construction Errors
    // ============================================================================
    #[error("duplicate probe name in registry: {0}")]
    DuplicateProbe(String),

    #[error("empty probe name in registry")]
    EmptyProbeName,

    // ============================================================================
    // Aggregation Errors
    // ============================================================================
    #[error("probe '{name}' failed unexpectedly: {reason}")]
    ProbeFailed {
        name: String,
        reason: String,
    },

    // ============================================================================
    // Identity Derivation Errors
    // ============================================================================
    #[error("stable component '{0}' is not present in the profile")]
    UnknownStableComponent(String),

    #[error("canonicalization failed: {0}")]
    Canonicalize(#[from] serde_json::Error),

    // ============================================================================
    // Environment Errors
    // ============================================================================
    #[error("invalid environment snapshot: {0}")]
    Environment(String),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Generic(String),
}

impl SigilError {
    /// Create a generic error from a string
    pub fn generic(msg: impl Into<String>) -> Self {
        Self::Generic(msg.into())
    }

    /// Create a probe failure error
    pub fn probe_failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ProbeFailed {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an environment error from a string
    pub fn environment(msg: impl Into<String>) -> Self {
        Self::Environment(msg.into())
    }
}

// Allow converting from String to SigilError
impl From<String> for SigilError {
    fn from(s: String) -> Self {
        Self::Generic(s)
    }
}

// Allow converting from &str to SigilError
impl From<&str> for SigilError {
    fn from(s: &str) -> Self {
        Self::Generic(s.to_string())
    }
}
