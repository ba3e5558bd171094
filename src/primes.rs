//! Prime implicant generation by rank-wise tabulation.
//!
//! Rank 0 holds one atomic implicant per minterm and don't-care. Each round
//! merges every pair of same-rank implicants that share a mask and differ in
//! exactly one cared-for bit; the merged cubes form the next rank. Implicants
//! that take part in no merge are prime.
//!
//! Within a rank, implicants are sorted by `(mask, ones, value)`. Two cubes can
//! only merge if their masks are equal and their positive-literal counts differ
//! by exactly one, so the pair scan stops as soon as it leaves that window.
//!
//! The tabulation is worst-case exponential in the number of points. No bound
//! beyond the 20-variable envelope of [`BooleanFunction`] is attempted.
//!
//! # Examples
//!
//! ```
//! use qmc_rs::function::BooleanFunction;
//! use qmc_rs::primes::prime_implicants;
//!
//! let f = BooleanFunction::new(2, [0, 1], []).unwrap();
//! let primes = prime_implicants(&f);
//! assert_eq!(primes.len(), 1);
//! assert_eq!(primes[0].to_expression(2), "A'");
//! ```

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::bitset::BitSet;
use crate::function::BooleanFunction;
use crate::implicant::Implicant;

/// Computes all prime implicants of `function`, sorted by `(mask, value)`.
///
/// An empty function (no minterms, no don't-cares) yields no implicants.
pub fn prime_implicants(function: &BooleanFunction) -> Vec<Implicant> {
    let seeds = function.minterms().union(function.dont_cares()).copied();
    let mut rank: Vec<Implicant> = seeds.map(Implicant::from_minterm).collect();
    let mut primes = Vec::new();
    let mut level = 0;

    while !rank.is_empty() {
        debug!("tabulation rank {}: {} implicants", level, rank.len());
        let (next, unmerged) = merge_rank(rank);
        trace!("rank {}: {} prime, {} merged", level, unmerged.len(), next.len());
        primes.extend(unmerged);
        rank = next;
        level += 1;
    }

    primes.sort();
    primes.dedup();
    debug!("found {} prime implicants", primes.len());
    primes
}

/// Runs one merge round. Returns the deduplicated next rank (sorted by
/// `(mask, value)`) and the implicants of this rank that did not merge.
fn merge_rank(mut rank: Vec<Implicant>) -> (Vec<Implicant>, Vec<Implicant>) {
    rank.sort_by_key(|t| (t.mask(), t.ones(), t.value()));

    let mut consumed = BitSet::new(rank.len());
    let mut next: BTreeMap<(u32, u32), Implicant> = BTreeMap::new();

    for i in 0..rank.len() {
        let (left, right) = rank.split_at(i + 1);
        let a = &left[i];
        for (offset, b) in right.iter().enumerate() {
            if b.mask() != a.mask() || b.ones() > a.ones() + 1 {
                break;
            }
            if b.ones() == a.ones() {
                continue;
            }
            if let Some(merged) = a.merge(b) {
                consumed.insert(i);
                consumed.insert(i + 1 + offset);
                match next.get_mut(&merged.key()) {
                    Some(existing) => existing.absorb(merged),
                    None => {
                        next.insert(merged.key(), merged);
                    }
                }
            }
        }
    }

    let unmerged = rank
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !consumed.contains(*i))
        .map(|(_, t)| t)
        .collect();
    (next.into_values().collect(), unmerged)
}
