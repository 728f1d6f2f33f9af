//! Owned catalogs for the group-ring families.
//!
//! A catalog is loaded explicitly from a JSON document and owned by the
//! caller; lookups go through parsed parameter names, and realizations
//! feed directly into the kernel verifiers.

use std::collections::BTreeMap;
use std::io::Read;

use designrep_kernel::{
    ElementSpec, verify_difference_set, verify_signed_difference_set, verify_weighing_matrix,
};
use serde::de::DeserializeOwned;

use crate::error::CatalogError;
use crate::name::{CwName, DesignKind, DesignName};
use crate::record::{DesignRecord, SignedPair};

/// Catalog of `DS(...)`/`SDS(...)` records keyed by canonical name.
#[derive(Debug, Clone)]
pub struct DesignCatalog<R> {
    entries: BTreeMap<String, DesignRecord<R>>,
}

/// Difference-set catalog: realizations are plain element lists.
pub type DiffSetCatalog = DesignCatalog<Vec<ElementSpec>>;

/// Signed-difference-set catalog: realizations are `[P, N]` pairs.
pub type SignedCatalog = DesignCatalog<SignedPair>;

pub(crate) fn parse_document<R: DeserializeOwned>(
    json: &str,
) -> Result<BTreeMap<String, R>, CatalogError> {
    serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))
}

pub(crate) fn read_document(mut reader: impl Read) -> Result<String, CatalogError> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(|e| CatalogError::Io(e.to_string()))?;
    Ok(buf)
}

impl<R: DeserializeOwned> DesignCatalog<R> {
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
}

impl<R> DesignCatalog<R> {
    /// Number of parameter sets in the catalog.
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
    pub fn get(&self, name: &DesignName) -> Option<&DesignRecord<R>> {
        self.entries.get(&name.to_string())
    }

    /// Every group for which (v,k,λ) has an entry of the given kind.
    ///
    /// Mirrors browsing the catalog "for any group": keys that do not
    /// parse as design names are skipped.
    pub fn all_groups(&self, kind: DesignKind, v: u64, k: i64, lambda: i64) -> Vec<DesignName> {
        self.entries
            .keys()
            .filter_map(|key| key.parse::<DesignName>().ok())
            .filter(|name| {
                name.kind == kind && name.v == v && name.k == k && name.lambda == lambda
            })
            .collect()
    }

    /// The i-th stored realization for a name, with the invariant factors
    /// it is written in (the record's `G_rep` when present, the name's
    /// group otherwise).
    pub fn realization(&self, name: &DesignName, index: usize) -> Result<(Vec<u64>, &R), CatalogError> {
        let record = self.get(name).ok_or_else(|| CatalogError::MissingEntry {
            name: name.to_string(),
        })?;
        let realization =
            record
                .sets
                .get(index)
                .ok_or_else(|| CatalogError::NoSuchRealization {
                    name: name.to_string(),
                    index,
                    available: record.num_sets(),
                })?;
        let factors = record
            .g_rep
            .clone()
            .unwrap_or_else(|| name.group.clone());
        Ok((factors, realization))
    }
}

impl DiffSetCatalog {
    /// Verify the i-th stored realization against its own parameters.
    pub fn verify_realization(&self, name: &DesignName, index: usize) -> Result<bool, CatalogError> {
        let (factors, set) = self.realization(name, index)?;
        Ok(verify_difference_set(
            name.v,
            name.k,
            name.lambda,
            &factors,
            set,
        ))
    }
}

impl SignedCatalog {
    /// Verify the i-th stored realization against its own parameters.
    pub fn verify_realization(&self, name: &DesignName, index: usize) -> Result<bool, CatalogError> {
        let (factors, pair) = self.realization(name, index)?;
        Ok(verify_signed_difference_set(
            name.v,
            name.k,
            name.lambda,
            &factors,
            pair.plus(),
            pair.minus(),
        ))
    }
}

/// Catalog of `CW(n,s)` records keyed by canonical name.
///
/// The group is cyclic of order n by definition, so records carry no
/// `G_rep` and the verifier always runs over `[n]`.
#[derive(Debug, Clone)]
pub struct CwmCatalog {
    entries: BTreeMap<String, DesignRecord<SignedPair>>,
}

impl CwmCatalog {
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
    pub fn get(&self, name: &CwName) -> Option<&DesignRecord<SignedPair>> {
        self.entries.get(&name.to_string())
    }

    /// The i-th stored realization for a name.
    pub fn realization(&self, name: &CwName, index: usize) -> Result<&SignedPair, CatalogError> {
        let record = self.get(name).ok_or_else(|| CatalogError::MissingEntry {
            name: name.to_string(),
        })?;
        record
            .sets
            .get(index)
            .ok_or_else(|| CatalogError::NoSuchRealization {
                name: name.to_string(),
                index,
                available: record.num_sets(),
            })
    }

    /// Verify the i-th stored realization against its own parameters.
    pub fn verify_realization(&self, name: &CwName, index: usize) -> Result<bool, CatalogError> {
        let pair = self.realization(name, index)?;
        Ok(verify_weighing_matrix(
            name.n,
            name.s,
            pair.plus(),
            pair.minus(),
        ))
    }
}
