//! # designrep Catalog
//!
//! The storage-facing layer of designrep: canonical parameter names,
//! catalog records keyed by them, and loaders that turn a JSON document
//! into an owned catalog value.
//!
//! ## Architecture
//!
//! ```text
//! name        ← DS(v,k,λ,[G]) / SDS(...) / CW(n,s) / C(v,k,t) parsing
//!     │
//! record      ← Status {All,Yes,Open,No} + comment + realizations
//!     │
//! designs     ← Owned catalogs for the group-ring families, with
//!     │          kernel-backed realization verification
//! covers      ← Covering records (best size, lower bound) and block
//!                stores, verified through the kernel covering check
//! ```
//!
//! Loading is always explicit: `from_json_str`/`from_reader` return owned
//! values, so tests inject fixture catalogs and nothing lives at module
//! scope.

pub mod covers;
pub mod designs;
pub mod error;
pub mod name;
pub mod record;

pub use covers::{CoverBlocks, CoverCatalog};
pub use designs::{CwmCatalog, DesignCatalog, DiffSetCatalog, SignedCatalog};
pub use error::CatalogError;
pub use name::{CoverName, CwName, DesignKind, DesignName, NameError};
pub use record::{CoverRecord, DesignRecord, SignedPair, Status};
