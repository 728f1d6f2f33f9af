//! Covering-design catalog and block store.
//!
//! Coverings are stored in two documents: a record catalog mapping
//! `C(v,k,t)` to the best known size and lower bound, and a block store
//! mapping the same names to actual block lists. Verification runs the
//! kernel covering check against a stored block list.

use std::collections::BTreeMap;
use std::io::Read;

use designrep_kernel::is_covering;

use crate::designs::{parse_document, read_document};
use crate::error::CatalogError;
use crate::name::CoverName;
use crate::record::CoverRecord;

/// Catalog of `C(v,k,t)` records keyed by canonical name.
#[derive(Debug, Clone)]
pub struct CoverCatalog {
    entries: BTreeMap<String, CoverRecord>,
}

impl CoverCatalog {
    /// Parse a catalog from a JSON document mapping names to records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            entries: parse_document(json)?,
        })
    }

    /// Parse a catalog from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        Self::from_json_str(&read_document(reader)?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical names, in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Look up the record for a parsed name.
    pub fn get(&self, name: &CoverName) -> Option<&CoverRecord> {
        self.entries.get(&name.to_string())
    }
}

/// Store of actual block lists keyed by `C(v,k,t)` name.
#[derive(Debug, Clone)]
pub struct CoverBlocks {
    entries: BTreeMap<String, Vec<Vec<u32>>>,
}

impl CoverBlocks {
    /// Parse a block store from a JSON document mapping names to block
    /// lists.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            entries: parse_document(json)?,
        })
    }

    /// Parse a block store from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        Self::from_json_str(&read_document(reader)?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical names, in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// The stored block list for a name.
    pub fn get(&self, name: &CoverName) -> Option<&[Vec<u32>]> {
        self.entries.get(&name.to_string()).map(Vec::as_slice)
    }

    /// Run the kernel covering check on the stored block list.
    pub fn verify(&self, name: &CoverName) -> Result<bool, CatalogError> {
        let blocks = self.get(name).ok_or_else(|| CatalogError::MissingEntry {
            name: name.to_string(),
        })?;
        Ok(is_covering(name.v, name.k, name.t, blocks))
    }
}
