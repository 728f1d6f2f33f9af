//! # designrep Kernel
//!
//! Exact verification of combinatorial design objects: a claimed
//! difference set, signed difference set, or circulant weighing matrix is
//! checked by direct group-ring computation, and a claimed covering design
//! by exhaustive subset enumeration.
//!
//! This crate is **catalog-agnostic**: it consumes already-parsed parameter
//! tuples and candidate objects and returns a verdict. Storage, lookup, and
//! presentation live elsewhere.
//!
//! ## Architecture
//!
//! ```text
//! FiniteAbelianGroup     ← Invariant factors [m₁,...,m_r], elements as
//!     │                    reduced tuples, component-wise arithmetic
//! RingElement            ← Formal sums Σ aᵢ·gᵢ over ZZ[G]: add, negate,
//!     │                    inverse map, exact convolution
//! verify (autocorr.)     ← One identity A·A⁽⁻¹⁾ = k·e + λ·(G − e),
//!     │                    specialized per design family
//! is_covering            ← Independent combinatorial check: every
//!                          t-subset of {1..v} lies in some block
//! ```
//!
//! All operations are pure and synchronous; every call builds its own
//! group and ring elements from scratch.

pub mod cover;
pub mod error;
pub mod group;
pub mod ring;
pub mod verify;

pub use cover::is_covering;
pub use error::KernelError;
pub use group::{ElementSpec, FiniteAbelianGroup, GroupElement};
pub use ring::RingElement;
pub use verify::{
    AutocorrelationTarget, Candidate, CoefficientRange, verify_autocorrelation,
    verify_difference_set, verify_signed_difference_set, verify_weighing_matrix,
};
