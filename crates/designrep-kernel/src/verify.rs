//! Verification of difference-set-like objects.
//!
//! One algorithm serves three families. A candidate is turned into a
//! group-ring element A and checked against the autocorrelation identity
//!
//! ```text
//! A·A⁽⁻¹⁾ = peak·e + off_peak·(ΣG − e)
//! ```
//!
//! with the coefficient range and the two target values specialized per
//! family:
//!
//! | family                     | range     | peak | off-identity |
//! |----------------------------|-----------|------|--------------|
//! | difference set             | {0,1}     | k    | λ            |
//! | signed difference set      | {−1,0,1}  | k    | λ            |
//! | circulant weighing matrix  | {−1,0,1}  | s²   | 0            |
//!
//! Wrongness is never an error: a malformed candidate (group order ≠ v,
//! elements that do not fit the group, coefficients out of range) yields
//! the ordinary `false` verdict. Structural element errors raised by the
//! group engine are caught here and folded into that verdict.

use crate::error::KernelError;
use crate::group::{ElementSpec, FiniteAbelianGroup};
use crate::ring::RingElement;

/// A claimed design object, already parsed into element lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// A plain element list; every occurrence contributes +1.
    Set(Vec<ElementSpec>),

    /// A signed pair: P contributes +1 per occurrence, N contributes −1.
    /// Overlap between P and N cancels to 0, which is legal.
    Signed {
        plus: Vec<ElementSpec>,
        minus: Vec<ElementSpec>,
    },
}

/// Legal coefficient values for a candidate's group-ring representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoefficientRange {
    /// Unsigned families: every coefficient must be 0 or 1. A repeated
    /// element accumulates to 2 and is a defect.
    ZeroOne,

    /// Signed families: every coefficient must be −1, 0, or 1.
    SignedUnit,
}

impl CoefficientRange {
    fn permits(self, c: i64) -> bool {
        match self {
            Self::ZeroOne => c == 0 || c == 1,
            Self::SignedUnit => (-1..=1).contains(&c),
        }
    }
}

/// The specialized identity one family requires of A·A⁽⁻¹⁾.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutocorrelationTarget {
    pub range: CoefficientRange,
    /// Required value at the group identity.
    pub peak: i64,
    /// Required value at every non-identity element.
    pub off_peak: i64,
}

/// Check a candidate against the autocorrelation identity over the group
/// with the given invariant factors, requiring the group order to equal v.
///
/// Pure predicate: no side effects, no panics, same verdict on every call.
pub fn verify_autocorrelation(
    v: u64,
    factors: &[u64],
    candidate: &Candidate,
    target: &AutocorrelationTarget,
) -> bool {
    checked_verify(v, factors, candidate, target).unwrap_or(false)
}

/// Is `set` a (v,k,λ) difference set in the group with the given factors?
pub fn verify_difference_set(
    v: u64,
    k: i64,
    lambda: i64,
    factors: &[u64],
    set: &[ElementSpec],
) -> bool {
    verify_autocorrelation(
        v,
        factors,
        &Candidate::Set(set.to_vec()),
        &AutocorrelationTarget {
            range: CoefficientRange::ZeroOne,
            peak: k,
            off_peak: lambda,
        },
    )
}

/// Is (plus, minus) a (v,k,λ) signed difference set in the group with the
/// given factors?
pub fn verify_signed_difference_set(
    v: u64,
    k: i64,
    lambda: i64,
    factors: &[u64],
    plus: &[ElementSpec],
    minus: &[ElementSpec],
) -> bool {
    verify_autocorrelation(
        v,
        factors,
        &Candidate::Signed {
            plus: plus.to_vec(),
            minus: minus.to_vec(),
        },
        &AutocorrelationTarget {
            range: CoefficientRange::SignedUnit,
            peak: k,
            off_peak: lambda,
        },
    )
}

/// Is (plus, minus) the first row of a circulant weighing matrix CW(n,s)?
///
/// The group is cyclic of order n, the peak is the weight k = s², and all
/// off-identity autocorrelations must vanish (row orthogonality).
pub fn verify_weighing_matrix(n: u64, s: i64, plus: &[ElementSpec], minus: &[ElementSpec]) -> bool {
    verify_autocorrelation(
        n,
        &[n],
        &Candidate::Signed {
            plus: plus.to_vec(),
            minus: minus.to_vec(),
        },
        &AutocorrelationTarget {
            range: CoefficientRange::SignedUnit,
            peak: s * s,
            off_peak: 0,
        },
    )
}

fn checked_verify(
    v: u64,
    factors: &[u64],
    candidate: &Candidate,
    target: &AutocorrelationTarget,
) -> Result<bool, KernelError> {
    let group = FiniteAbelianGroup::new(factors)?;
    if group.order() != v {
        return Ok(false);
    }

    let a = lift_candidate(&group, candidate)?;

    // Absent coefficients are 0, legal in both ranges, so the support
    // suffices for the range check.
    if a.terms().any(|(_, c)| !target.range.permits(c)) {
        return Ok(false);
    }

    let autocorrelation = a.convolve(&group, &a.inverse_map(&group));
    for g in group.elements() {
        let required = if g.is_identity() {
            target.peak
        } else {
            target.off_peak
        };
        if autocorrelation.coefficient(&g) != required {
            return Ok(false);
        }
    }
    Ok(true)
}

fn lift_candidate(
    group: &FiniteAbelianGroup,
    candidate: &Candidate,
) -> Result<RingElement, KernelError> {
    let mut a = RingElement::zero();
    match candidate {
        Candidate::Set(elements) => {
            for spec in elements {
                a.add_term(group.element(spec.clone())?, 1);
            }
        }
        Candidate::Signed { plus, minus } => {
            for spec in plus {
                a.add_term(group.element(spec.clone())?, 1);
            }
            for spec in minus {
                a.add_term(group.element(spec.clone())?, -1);
            }
        }
    }
    Ok(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs(values: &[i64]) -> Vec<ElementSpec> {
        values.iter().map(|&v| ElementSpec::Scalar(v)).collect()
    }

    #[test]
    fn fano_difference_set_verifies() {
        assert!(verify_difference_set(7, 3, 1, &[7], &specs(&[1, 2, 4])));
    }

    #[test]
    fn fano_with_wrong_lambda_fails() {
        assert!(!verify_difference_set(7, 3, 2, &[7], &specs(&[1, 2, 4])));
    }

    #[test]
    fn verdict_is_order_invariant() {
        assert!(verify_difference_set(7, 3, 1, &[7], &specs(&[4, 1, 2])));
        assert!(verify_difference_set(7, 3, 1, &[7], &specs(&[2, 4, 1])));
    }

    #[test]
    fn duplicated_element_is_a_defect() {
        // {1,2,4,4} lifts to a coefficient of 2 at 4.
        assert!(!verify_difference_set(7, 3, 1, &[7], &specs(&[1, 2, 4, 4])));
    }

    #[test]
    fn group_order_mismatch_fails() {
        assert!(!verify_difference_set(7, 3, 1, &[11], &specs(&[1, 2, 4])));
    }

    #[test]
    fn rank_mismatched_element_fails_without_panicking() {
        let set = vec![
            ElementSpec::Vector(vec![1, 0]),
            ElementSpec::Scalar(2),
            ElementSpec::Scalar(4),
        ];
        assert!(!verify_difference_set(7, 3, 1, &[7], &set));
    }

    #[test]
    fn invalid_group_spec_fails_without_panicking() {
        assert!(!verify_difference_set(0, 3, 1, &[0], &specs(&[1, 2, 4])));
    }

    #[test]
    fn tuple_group_difference_set_verifies() {
        // The three involutions of Z2 ⊕ Z2 form a (4,3,2) difference set.
        let set = vec![
            ElementSpec::Vector(vec![0, 1]),
            ElementSpec::Vector(vec![1, 0]),
            ElementSpec::Vector(vec![1, 1]),
        ];
        assert!(verify_difference_set(4, 3, 2, &[2, 2], &set));
    }

    #[test]
    fn circulant_hadamard_of_order_four() {
        // First row (+,−,−,−): the classical CW(4,2).
        assert!(verify_weighing_matrix(
            4,
            2,
            &specs(&[0]),
            &specs(&[1, 2, 3])
        ));
    }

    #[test]
    fn weighing_matrix_off_peak_must_vanish() {
        // Same signed pair over Z7 has nonzero off-peak autocorrelations.
        assert!(!verify_weighing_matrix(
            7,
            2,
            &specs(&[0]),
            &specs(&[1, 2, 3])
        ));
    }

    #[test]
    fn signed_pair_with_cancellation_verifies() {
        // 6 appears in both P and N, cancelling to 0; the residue is the
        // Fano set, so this is a legal SDS(7,3,1).
        assert!(verify_signed_difference_set(
            7,
            3,
            1,
            &[7],
            &specs(&[1, 2, 4, 6]),
            &specs(&[6])
        ));
    }

    #[test]
    fn signed_coefficient_beyond_unit_fails() {
        // 1 appears twice in P with nothing cancelling it.
        assert!(!verify_signed_difference_set(
            7,
            3,
            1,
            &[7],
            &specs(&[1, 1, 2, 4]),
            &specs(&[])
        ));
    }

    #[test]
    fn verify_is_idempotent() {
        let set = specs(&[1, 2, 4]);
        let first = verify_difference_set(7, 3, 1, &[7], &set);
        let second = verify_difference_set(7, 3, 1, &[7], &set);
        assert_eq!(first, second);
    }
}
