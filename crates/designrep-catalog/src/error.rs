//! Error types for catalog loading and lookup.
//!
//! These DO propagate, unlike kernel verdicts: a missing entry or a
//! malformed document has no meaningful true/false answer.

/// Errors arising from catalog access.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog document is not valid JSON of the expected shape.
    #[error("malformed catalog JSON: {0}")]
    Parse(String),

    /// Reading the catalog source failed.
    #[error("catalog read error: {0}")]
    Io(String),

    /// No entry under the given canonical name.
    #[error("{name} not in database")]
    MissingEntry { name: String },

    /// The entry exists but has fewer realizations than requested.
    #[error("{name} has {available} known realization(s), index {index} requested")]
    NoSuchRealization {
        name: String,
        index: usize,
        available: usize,
    },
}
