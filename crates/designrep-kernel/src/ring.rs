//! The integral group ring ZZ[G].
//!
//! A [`RingElement`] is a formal sum Σ aᵢ·gᵢ with exact integer
//! coefficients, stored as a sparse map from group element to coefficient.
//! Zero coefficients are pruned, so absence means 0 and two elements are
//! equal exactly when they denote the same formal sum.
//!
//! Multiplication is convolution: the coefficient of g in A·B is
//! Σ_h A\[h\]·B\[g−h\]. Over an abelian group this is commutative, and the
//! defining identity of the design families lives here: a candidate A is
//! checked through its autocorrelation A·A⁽⁻¹⁾, where A⁽⁻¹⁾ replaces every
//! group element by its additive inverse while keeping coefficients.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::group::{FiniteAbelianGroup, GroupElement};

/// A formal integer-coefficient sum of group elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RingElement {
    coeffs: BTreeMap<GroupElement, i64>,
}

impl RingElement {
    /// The empty formal sum (all coefficients 0).
    pub fn zero() -> Self {
        Self::default()
    }

    /// The singleton sum 1·g.
    pub fn lift(g: GroupElement) -> Self {
        let mut coeffs = BTreeMap::new();
        coeffs.insert(g, 1);
        Self { coeffs }
    }

    /// Coefficient of g, defaulting to 0 for absent terms.
    pub fn coefficient(&self, g: &GroupElement) -> i64 {
        self.coeffs.get(g).copied().unwrap_or(0)
    }

    /// Whether this is the zero sum.
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Number of group elements with nonzero coefficient.
    pub fn support_len(&self) -> usize {
        self.coeffs.len()
    }

    /// Iterate over (element, coefficient) terms with nonzero coefficient.
    pub fn terms(&self) -> impl Iterator<Item = (&GroupElement, i64)> {
        self.coeffs.iter().map(|(g, &c)| (g, c))
    }

    /// Accumulate c into the coefficient of g, pruning if the sum is 0.
    pub fn add_term(&mut self, g: GroupElement, c: i64) {
        if c == 0 {
            return;
        }
        match self.coeffs.entry(g) {
            Entry::Vacant(slot) => {
                slot.insert(c);
            }
            Entry::Occupied(mut slot) => {
                *slot.get_mut() += c;
                if *slot.get() == 0 {
                    slot.remove();
                }
            }
        }
    }

    /// Pointwise sum A + B.
    pub fn add(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for (g, c) in other.terms() {
            out.add_term(g.clone(), c);
        }
        out
    }

    /// Formal negation −A (negate every coefficient; this is NOT the
    /// group-inverse map).
    pub fn neg(&self) -> Self {
        let coeffs = self.coeffs.iter().map(|(g, &c)| (g.clone(), -c)).collect();
        Self { coeffs }
    }

    /// The group-inverse image A⁽⁻¹⁾ = Σ aᵢ·(−gᵢ).
    pub fn inverse_map(&self, group: &FiniteAbelianGroup) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .map(|(g, &c)| (group.neg(g), c))
            .collect();
        Self { coeffs }
    }

    /// Convolution A·B: coefficient of g is Σ_h A\[h\]·B\[g−h\].
    ///
    /// Computed exactly over the supports, which is equivalent to summing
    /// over the full (finite) group since absent coefficients are 0.
    pub fn convolve(&self, group: &FiniteAbelianGroup, other: &Self) -> Self {
        let mut out = Self::zero();
        for (h, a) in self.terms() {
            for (x, b) in other.terms() {
                out.add_term(group.add(h, x), a * b);
            }
        }
        out
    }

    /// Apply the multiplier t: Σ aᵢ·gᵢ ↦ Σ aᵢ·(t·gᵢ).
    ///
    /// Terms whose images collide accumulate, so a non-unit multiplier can
    /// shrink the support.
    pub fn scale_elements(&self, group: &FiniteAbelianGroup, t: i64) -> Self {
        let mut out = Self::zero();
        for (g, c) in self.terms() {
            out.add_term(group.scale(t, g), c);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z7() -> FiniteAbelianGroup {
        FiniteAbelianGroup::new(&[7]).unwrap()
    }

    fn sum(group: &FiniteAbelianGroup, elements: &[i64]) -> RingElement {
        let mut a = RingElement::zero();
        for &e in elements {
            a.add_term(group.element(e).unwrap(), 1);
        }
        a
    }

    #[test]
    fn zero_has_no_terms() {
        let g = z7();
        assert!(RingElement::zero().is_zero());
        assert_eq!(RingElement::zero().coefficient(&g.identity()), 0);
    }

    #[test]
    fn add_cancels_to_zero() {
        let g = z7();
        let a = sum(&g, &[1, 2]);
        assert!(a.add(&a.neg()).is_zero());
    }

    #[test]
    fn repeated_terms_accumulate() {
        let g = z7();
        let a = sum(&g, &[3, 3]);
        assert_eq!(a.coefficient(&g.element(3).unwrap()), 2);
        assert_eq!(a.support_len(), 1);
    }

    #[test]
    fn convolution_commutes() {
        let g = z7();
        let a = sum(&g, &[1, 2, 4]);
        let b = sum(&g, &[0, 3]).neg();
        assert_eq!(a.convolve(&g, &b), b.convolve(&g, &a));
    }

    #[test]
    fn inverse_map_is_an_involution() {
        let g = z7();
        let a = sum(&g, &[1, 2, 4]).add(&sum(&g, &[5]).neg());
        assert_eq!(a.inverse_map(&g).inverse_map(&g), a);
    }

    #[test]
    fn lift_convolves_by_translation() {
        let g = z7();
        let a = sum(&g, &[1, 2]);
        let shift = RingElement::lift(g.element(3).unwrap());
        let shifted = a.convolve(&g, &shift);
        assert_eq!(shifted, sum(&g, &[4, 5]));
    }

    #[test]
    fn multiplier_map_permutes_support() {
        let g = z7();
        let a = sum(&g, &[1, 2, 4]);
        // 2 is a multiplier of the Fano difference set: 2·{1,2,4} = {2,4,1}.
        assert_eq!(a.scale_elements(&g, 2), a);
    }

    #[test]
    fn multiplier_map_accumulates_collisions() {
        let g = z7();
        let a = sum(&g, &[1, 2, 4]);
        let collapsed = a.scale_elements(&g, 0);
        assert_eq!(collapsed.coefficient(&g.identity()), 3);
        assert_eq!(collapsed.support_len(), 1);
    }
}
