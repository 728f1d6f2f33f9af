//! Canonical parameter-name strings.
//!
//! Catalog documents are keyed by names like `DS(11,5,2,[11])`,
//! `SDS(89,12,1,[89])`, `CW(28,4)`, and `C(7,3,2)`. The canonical form
//! carries no spaces; parsing strips any before matching, so names written
//! with spaced factor lists round-trip to the canonical spelling.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

/// Errors from parameter-name parsing.
#[derive(Debug, thiserror::Error)]
pub enum NameError {
    #[error("not a valid parameter name: {0}")]
    Syntax(String),
}

/// Which group-ring family a `DS(...)`/`SDS(...)` name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignKind {
    DifferenceSet,
    SignedDifferenceSet,
}

impl DesignKind {
    fn prefix(self) -> &'static str {
        match self {
            Self::DifferenceSet => "DS",
            Self::SignedDifferenceSet => "SDS",
        }
    }
}

/// Parsed `DS(v,k,λ,[m₁,...])` or `SDS(v,k,λ,[m₁,...])` name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignName {
    pub kind: DesignKind,
    pub v: u64,
    pub k: i64,
    pub lambda: i64,
    /// Invariant factors of the ambient group.
    pub group: Vec<u64>,
}

impl DesignName {
    /// Name a design in the cyclic group of order v.
    pub fn cyclic(kind: DesignKind, v: u64, k: i64, lambda: i64) -> Self {
        Self {
            kind,
            v,
            k,
            lambda,
            group: vec![v],
        }
    }

    /// The design's order n = k − λ.
    pub fn order(&self) -> i64 {
        self.k - self.lambda
    }
}

impl std::fmt::Display for DesignName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({},{},{},[{}])",
            self.kind.prefix(),
            self.v,
            self.k,
            self.lambda,
            join(&self.group)
        )
    }
}

fn design_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(SDS|DS)\((\d+),(\d+),(\d+),\[(\d+(?:,\d+)*)\]\)$")
            .expect("design name regex must compile")
    })
}

impl FromStr for DesignName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, NameError> {
        let compact = s.replace(' ', "");
        let caps = design_name_re()
            .captures(&compact)
            .ok_or_else(|| NameError::Syntax(s.to_string()))?;
        let kind = match &caps[1] {
            "DS" => DesignKind::DifferenceSet,
            _ => DesignKind::SignedDifferenceSet,
        };
        let group = caps[5]
            .split(',')
            .map(|m| parse_int(m, s))
            .collect::<Result<Vec<u64>, NameError>>()?;
        Ok(Self {
            kind,
            v: parse_int(&caps[2], s)?,
            k: parse_int(&caps[3], s)?,
            lambda: parse_int(&caps[4], s)?,
            group,
        })
    }
}

/// Parsed `CW(n,s)` name. The second parameter is the weight root s, not
/// the weight k = s².
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CwName {
    pub n: u64,
    pub s: i64,
}

impl CwName {
    /// The matrix weight k = s².
    pub fn weight(&self) -> i64 {
        self.s * self.s
    }
}

impl std::fmt::Display for CwName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CW({},{})", self.n, self.s)
    }
}

fn cw_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^CW\((\d+),(\d+)\)$").expect("CW name regex must compile"))
}

impl FromStr for CwName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, NameError> {
        let compact = s.replace(' ', "");
        let caps = cw_name_re()
            .captures(&compact)
            .ok_or_else(|| NameError::Syntax(s.to_string()))?;
        Ok(Self {
            n: parse_int(&caps[1], s)?,
            s: parse_int(&caps[2], s)?,
        })
    }
}

/// Parsed `C(v,k,t)` covering-design name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverName {
    pub v: u32,
    pub k: u32,
    pub t: u32,
}

impl std::fmt::Display for CoverName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "C({},{},{})", self.v, self.k, self.t)
    }
}

fn cover_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^C\((\d+),(\d+),(\d+)\)$").expect("cover name regex must compile")
    })
}

impl FromStr for CoverName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, NameError> {
        let compact = s.replace(' ', "");
        let caps = cover_name_re()
            .captures(&compact)
            .ok_or_else(|| NameError::Syntax(s.to_string()))?;
        Ok(Self {
            v: parse_int(&caps[1], s)?,
            k: parse_int(&caps[2], s)?,
            t: parse_int(&caps[3], s)?,
        })
    }
}

fn parse_int<T: FromStr>(digits: &str, full: &str) -> Result<T, NameError> {
    digits
        .parse()
        .map_err(|_| NameError::Syntax(full.to_string()))
}

fn join(factors: &[u64]) -> String {
    factors
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ds_name_roundtrip() {
        let name: DesignName = "DS(11,5,2,[11])".parse().unwrap();
        assert_eq!(name.kind, DesignKind::DifferenceSet);
        assert_eq!((name.v, name.k, name.lambda), (11, 5, 2));
        assert_eq!(name.group, vec![11]);
        assert_eq!(name.order(), 3);
        assert_eq!(name.to_string(), "DS(11,5,2,[11])");
    }

    #[test]
    fn sds_name_parses() {
        let name: DesignName = "SDS(89,12,1,[89])".parse().unwrap();
        assert_eq!(name.kind, DesignKind::SignedDifferenceSet);
        assert_eq!(name.v, 89);
    }

    #[test]
    fn multi_factor_group_with_spaces() {
        let name: DesignName = "DS(16, 6, 2, [4, 4])".parse().unwrap();
        assert_eq!(name.group, vec![4, 4]);
        assert_eq!(name.to_string(), "DS(16,6,2,[4,4])");
    }

    #[test]
    fn cw_name_carries_weight_root() {
        let name: CwName = "CW(28,4)".parse().unwrap();
        assert_eq!((name.n, name.s), (28, 4));
        assert_eq!(name.weight(), 16);
        assert_eq!(name.to_string(), "CW(28,4)");
    }

    #[test]
    fn cover_name_roundtrip() {
        let name: CoverName = "C(7,3,2)".parse().unwrap();
        assert_eq!((name.v, name.k, name.t), (7, 3, 2));
        assert_eq!(name.to_string(), "C(7,3,2)");
    }

    #[test]
    fn malformed_names_rejected() {
        assert!("DS(7,3,1)".parse::<DesignName>().is_err()); // missing group
        assert!("DS(7,3,1,[])".parse::<DesignName>().is_err());
        assert!("CW(28)".parse::<CwName>().is_err());
        assert!("C(7,3)".parse::<CoverName>().is_err());
        assert!("DS(7,3,-1,[7])".parse::<DesignName>().is_err());
        assert!(
            "DS(99999999999999999999,3,1,[7])"
                .parse::<DesignName>()
                .is_err()
        );
    }
}
