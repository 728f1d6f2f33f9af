//! Error types for kernel operations.
//!
//! Only structural problems are errors here. "The candidate does not
//! verify" is never an error — that is the ordinary `false` verdict of the
//! verification predicates.

/// Errors arising from malformed groups or elements.
#[derive(Debug, thiserror::Error)]
pub enum KernelError {
    /// An invariant factor list that does not define a group.
    #[error("invalid group spec: {description}")]
    InvalidGroupSpec { description: String },

    /// An element value that cannot be mapped into the constructed group.
    #[error("invalid element: {description}")]
    InvalidElement { description: String },
}

impl KernelError {
    pub(crate) fn group_spec(description: impl Into<String>) -> Self {
        Self::InvalidGroupSpec {
            description: description.into(),
        }
    }

    pub(crate) fn element(description: impl Into<String>) -> Self {
        Self::InvalidElement {
            description: description.into(),
        }
    }
}
