//! Finite abelian groups given by invariant factors.
//!
//! A group G = Z_{m₁} ⊕ ... ⊕ Z_{m_r} is defined by its ordered factor
//! list [m₁,...,m_r]. Elements are integer tuples of matching length,
//! stored in canonical reduced form (each coordinate mod its factor), so
//! equality, ordering, and hashing all agree on the reduced representation.
//!
//! The catalog storage format writes elements of a cyclic group (r = 1) as
//! bare integers and elements of higher-rank groups as lists. [`ElementSpec`]
//! is the serde-facing shape that accepts both; [`FiniteAbelianGroup::element`]
//! normalizes either form into a [`GroupElement`].

use serde::{Deserialize, Serialize};

use crate::error::KernelError;

/// A finite abelian group Z_{m₁} ⊕ ... ⊕ Z_{m_r}.
///
/// The empty factor list defines the trivial group of order 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiniteAbelianGroup {
    factors: Vec<u64>,
}

/// An element of a [`FiniteAbelianGroup`], in canonical reduced form.
///
/// Coordinates are always in range: 0 ≤ coords[i] < factors[i]. Elements
/// are only constructed through [`FiniteAbelianGroup::element`] or the
/// group's arithmetic, so the invariant holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupElement {
    coords: Vec<u64>,
}

/// A group element as it appears in catalog storage: a bare integer for
/// cyclic groups, a coordinate list for general ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementSpec {
    Scalar(i64),
    Vector(Vec<i64>),
}

impl From<i64> for ElementSpec {
    fn from(value: i64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<i64>> for ElementSpec {
    fn from(coords: Vec<i64>) -> Self {
        Self::Vector(coords)
    }
}

impl From<&[i64]> for ElementSpec {
    fn from(coords: &[i64]) -> Self {
        Self::Vector(coords.to_vec())
    }
}

impl FiniteAbelianGroup {
    /// Construct the group with the given invariant factors.
    ///
    /// Every factor must be positive. The factor list is taken as given —
    /// no Smith-normal-form reduction is attempted, since catalog entries
    /// name their groups by an explicit factor list.
    pub fn new(factors: &[u64]) -> Result<Self, KernelError> {
        for (position, &factor) in factors.iter().enumerate() {
            if factor == 0 {
                return Err(KernelError::group_spec(format!(
                    "invariant factor at position {position} must be positive"
                )));
            }
        }
        let mut order: u64 = 1;
        for &factor in factors {
            order = order.checked_mul(factor).ok_or_else(|| {
                KernelError::group_spec("group order overflows u64".to_string())
            })?;
        }
        Ok(Self {
            factors: factors.to_vec(),
        })
    }

    /// The invariant factors [m₁,...,m_r].
    pub fn factors(&self) -> &[u64] {
        &self.factors
    }

    /// Number of invariant factors.
    pub fn rank(&self) -> usize {
        self.factors.len()
    }

    /// Group order m₁·...·m_r.
    pub fn order(&self) -> u64 {
        self.factors.iter().product()
    }

    /// The identity element (all-zero tuple).
    pub fn identity(&self) -> GroupElement {
        GroupElement {
            coords: vec![0; self.factors.len()],
        }
    }

    /// Normalize an [`ElementSpec`] into a reduced element of this group.
    ///
    /// Out-of-range coordinates (including negatives) are reduced mod the
    /// matching factor. A bare integer is accepted only for rank-1 groups;
    /// a coordinate list must match the rank exactly.
    pub fn element(&self, spec: impl Into<ElementSpec>) -> Result<GroupElement, KernelError> {
        let coords: Vec<i64> = match spec.into() {
            ElementSpec::Scalar(value) => {
                if self.rank() != 1 {
                    return Err(KernelError::element(format!(
                        "scalar element {value} for a rank-{} group",
                        self.rank()
                    )));
                }
                vec![value]
            }
            ElementSpec::Vector(coords) => {
                if coords.len() != self.rank() {
                    return Err(KernelError::element(format!(
                        "element has {} coordinates, group has rank {}",
                        coords.len(),
                        self.rank()
                    )));
                }
                coords
            }
        };

        let reduced = coords
            .iter()
            .zip(&self.factors)
            .map(|(&value, &factor)| value.rem_euclid(factor as i64) as u64)
            .collect();
        Ok(GroupElement { coords: reduced })
    }

    /// Component-wise sum a + b.
    pub fn add(&self, a: &GroupElement, b: &GroupElement) -> GroupElement {
        let coords = a
            .coords
            .iter()
            .zip(&b.coords)
            .zip(&self.factors)
            .map(|((&x, &y), &factor)| (x + y) % factor)
            .collect();
        GroupElement { coords }
    }

    /// Additive inverse −a (component-wise negation mod each factor).
    pub fn neg(&self, a: &GroupElement) -> GroupElement {
        let coords = a
            .coords
            .iter()
            .zip(&self.factors)
            .map(|(&x, &factor)| (factor - x) % factor)
            .collect();
        GroupElement { coords }
    }

    /// Scalar multiple t·a.
    pub fn scale(&self, t: i64, a: &GroupElement) -> GroupElement {
        let coords = a
            .coords
            .iter()
            .zip(&self.factors)
            .map(|(&x, &factor)| (t * x as i64).rem_euclid(factor as i64) as u64)
            .collect();
        GroupElement { coords }
    }

    /// Enumerate all elements, identity first, in odometer order (the last
    /// coordinate varies fastest).
    pub fn elements(&self) -> Elements<'_> {
        Elements {
            group: self,
            next: Some(vec![0; self.factors.len()]),
        }
    }
}

impl GroupElement {
    /// The reduced coordinate tuple.
    pub fn coords(&self) -> &[u64] {
        &self.coords
    }

    /// Whether this is the all-zero tuple.
    pub fn is_identity(&self) -> bool {
        self.coords.iter().all(|&x| x == 0)
    }
}

impl std::fmt::Display for GroupElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.coords.len() == 1 {
            return write!(f, "{}", self.coords[0]);
        }
        write!(f, "(")?;
        for (i, x) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{x}")?;
        }
        write!(f, ")")
    }
}

/// Iterator over all elements of a group. See [`FiniteAbelianGroup::elements`].
pub struct Elements<'a> {
    group: &'a FiniteAbelianGroup,
    next: Option<Vec<u64>>,
}

impl Iterator for Elements<'_> {
    type Item = GroupElement;

    fn next(&mut self) -> Option<GroupElement> {
        let current = self.next.take()?;
        let item = GroupElement {
            coords: current.clone(),
        };

        // Odometer increment with carry, most significant coordinate first.
        let mut coords = current;
        let mut position = coords.len();
        loop {
            if position == 0 {
                // Wrapped all the way around: enumeration is complete.
                self.next = None;
                break;
            }
            position -= 1;
            coords[position] += 1;
            if coords[position] < self.group.factors[position] {
                self.next = Some(coords);
                break;
            }
            coords[position] = 0;
        }
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_scalar_and_vector_forms_agree() {
        let g = FiniteAbelianGroup::new(&[7]).unwrap();
        let scalar = g.element(10).unwrap();
        let vector = g.element(vec![3]).unwrap();
        assert_eq!(scalar, vector);
        assert_eq!(scalar.coords(), &[3]);
    }

    #[test]
    fn negative_coordinates_normalize() {
        let g = FiniteAbelianGroup::new(&[5, 3]).unwrap();
        let e = g.element(vec![-1, -4]).unwrap();
        assert_eq!(e.coords(), &[4, 2]);
    }

    #[test]
    fn scalar_rejected_for_higher_rank() {
        let g = FiniteAbelianGroup::new(&[3, 3]).unwrap();
        assert!(matches!(
            g.element(1),
            Err(KernelError::InvalidElement { .. })
        ));
    }

    #[test]
    fn rank_mismatch_rejected() {
        let g = FiniteAbelianGroup::new(&[6]).unwrap();
        assert!(g.element(vec![1, 2]).is_err());
    }

    #[test]
    fn zero_factor_rejected() {
        assert!(matches!(
            FiniteAbelianGroup::new(&[4, 0]),
            Err(KernelError::InvalidGroupSpec { .. })
        ));
    }

    #[test]
    fn trivial_group() {
        let g = FiniteAbelianGroup::new(&[]).unwrap();
        assert_eq!(g.order(), 1);
        assert_eq!(g.elements().count(), 1);
        assert!(g.identity().is_identity());
    }

    #[test]
    fn add_neg_roundtrip() {
        let g = FiniteAbelianGroup::new(&[4, 6]).unwrap();
        let a = g.element(vec![3, 5]).unwrap();
        let sum = g.add(&a, &g.neg(&a));
        assert!(sum.is_identity());
    }

    #[test]
    fn enumeration_order_and_count() {
        let g = FiniteAbelianGroup::new(&[2, 3]).unwrap();
        let all: Vec<Vec<u64>> = g.elements().map(|e| e.coords().to_vec()).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![0, 2],
                vec![1, 0],
                vec![1, 1],
                vec![1, 2],
            ]
        );
    }

    #[test]
    fn scale_wraps() {
        let g = FiniteAbelianGroup::new(&[7]).unwrap();
        let a = g.element(3).unwrap();
        assert_eq!(g.scale(5, &a).coords(), &[1]); // 15 mod 7
        assert_eq!(g.scale(-1, &a), g.neg(&a));
    }

    #[test]
    fn element_spec_deserializes_both_forms() {
        let scalar: ElementSpec = serde_json::from_str("12").unwrap();
        assert_eq!(scalar, ElementSpec::Scalar(12));
        let vector: ElementSpec = serde_json::from_str("[1,0,2]").unwrap();
        assert_eq!(vector, ElementSpec::Vector(vec![1, 0, 2]));
    }
}
