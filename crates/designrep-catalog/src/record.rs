//! Catalog records: existence status, provenance comment, realizations.
//!
//! A catalog document is a JSON object keyed by canonical parameter name;
//! each value is one record. Optional fields are genuinely optional in the
//! stored documents, so everything beyond `status` defaults. Unknown
//! fields (e.g. submission history on covering records) are ignored on
//! load.

use designrep_kernel::ElementSpec;
use serde::{Deserialize, Serialize};

/// Existence status of a parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Every object with these parameters is known (the listed
    /// realizations are exhaustive up to equivalence).
    All,

    /// At least one object exists.
    Yes,

    /// Existence is unresolved.
    Open,

    /// Known not to exist.
    No,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::All => "All",
            Self::Yes => "Yes",
            Self::Open => "Open",
            Self::No => "No",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(Self::All),
            "Yes" => Ok(Self::Yes),
            "Open" => Ok(Self::Open),
            "No" => Ok(Self::No),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

impl Status {
    /// Whether the record can carry realizations at all.
    pub fn admits_realizations(self) -> bool {
        matches!(self, Self::All | Self::Yes)
    }
}

/// A realization of a signed family: the `[P, N]` pair as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedPair(pub Vec<ElementSpec>, pub Vec<ElementSpec>);

impl SignedPair {
    /// Elements contributing +1.
    pub fn plus(&self) -> &[ElementSpec] {
        &self.0
    }

    /// Elements contributing −1.
    pub fn minus(&self) -> &[ElementSpec] {
        &self.1
    }
}

/// One record of a group-ring family catalog.
///
/// `R` is the stored realization shape: a plain element list for
/// difference sets, a [`SignedPair`] for signed difference sets and
/// circulant weighing matrices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignRecord<R> {
    pub status: Status,

    /// How the status is known (reference or construction note).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Known realizations, possibly empty even when status is Yes.
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub sets: Vec<R>,

    /// Alternate invariant factors the realizations are written in, when
    /// they differ from the factors in the parameter name.
    #[serde(default, rename = "G_rep", skip_serializing_if = "Option::is_none")]
    pub g_rep: Option<Vec<u64>>,
}

impl<R> DesignRecord<R> {
    /// Number of realizations stored for these parameters.
    pub fn num_sets(&self) -> usize {
        self.sets.len()
    }
}

/// One record of the covering-design catalog: the best known size and the
/// best known lower bound for `C(v,k,t)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverRecord {
    pub size: u64,

    #[serde(rename = "low_bd")]
    pub lower_bound: u64,
}

impl CoverRecord {
    /// Whether the covering number is settled (size meets the bound).
    pub fn is_settled(&self) -> bool {
        self.size == self.lower_bound
    }
}
