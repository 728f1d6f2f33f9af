//! Covering design verification.
//!
//! A C(v,k,t) covering design is a family of k-subsets (blocks) of
//! {1,...,v} such that every t-subset of {1,...,v} lies in at least one
//! block. The check is purely combinatorial — no group structure — and
//! exhaustive: all C(v,t) t-subsets are enumerated in lexicographic order,
//! bailing out on the first uncovered one.
//!
//! Cost is O(C(v,t)·|blocks|) word operations with the per-block bitsets
//! below. That is acceptable: this is a verification tool for
//! research-scale parameters, not a hot path.

/// Does `blocks` cover every t-subset of {1,...,v}?
///
/// `k` is the nominal block size from the parameter name; the verdict does
/// not depend on it, and blocks of any size are accepted. Block entries
/// outside {1,...,v} are legal — they simply never help cover anything.
///
/// Edge cases: t > v holds vacuously (no t-subsets exist); an empty block
/// list fails whenever at least one t-subset exists, including t = 0.
pub fn is_covering(v: u32, k: u32, t: u32, blocks: &[Vec<u32>]) -> bool {
    let _ = k;
    if t > v {
        return true;
    }

    let words = (v as usize).div_ceil(64);
    let block_masks: Vec<Vec<u64>> = blocks.iter().map(|b| block_mask(v, words, b)).collect();

    // Lexicographic enumeration of t-subsets, short-circuiting on the
    // first subset no block contains.
    let mut subset: Vec<u32> = (1..=t).collect();
    loop {
        let mask = block_mask(v, words, &subset);
        if !block_masks.iter().any(|b| contains(b, &mask)) {
            return false;
        }
        if !next_subset(&mut subset, v) {
            return true;
        }
    }
}

/// Bitset of the in-range points of a block: point p sets bit p−1.
fn block_mask(v: u32, words: usize, block: &[u32]) -> Vec<u64> {
    let mut mask = vec![0u64; words];
    for &point in block {
        if (1..=v).contains(&point) {
            let bit = (point - 1) as usize;
            mask[bit / 64] |= 1 << (bit % 64);
        }
    }
    mask
}

fn contains(block: &[u64], subset: &[u64]) -> bool {
    block.iter().zip(subset).all(|(&b, &s)| (s & !b) == 0)
}

/// Advance to the next t-subset of {1,...,v} in lexicographic order.
/// Returns false when `subset` was the last one.
fn next_subset(subset: &mut [u32], v: u32) -> bool {
    let t = subset.len();
    let mut i = t;
    while i > 0 {
        i -= 1;
        if subset[i] < v - (t - 1 - i) as u32 {
            subset[i] += 1;
            for j in i + 1..t {
                subset[j] = subset[j - 1] + 1;
            }
            return true;
        }
    }
    false
}
