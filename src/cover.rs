//! Coverage chart, essential prime implicants and minimal cover search.
//!
//! Only true minterms appear in the chart. Don't-cares help build larger
//! implicants but never have to be covered.
//!
//! The search for the remaining minterms is exact: it tries every combination
//! of `k` candidate implicants for `k = 1, 2, ...` and stops at the first `k`
//! that has a full cover, reporting all covers of that size. The search is
//! bounded by a caller-supplied cap on `k`.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace};

use crate::bitset::BitSet;
use crate::combinations::{binomial, Combinations};
use crate::implicant::Implicant;

/// Maps each true minterm to the indices of the prime implicants covering it.
#[derive(Debug, Clone, Default)]
pub struct CoverageChart {
    rows: BTreeMap<u32, Vec<usize>>,
}

impl CoverageChart {
    /// Builds the chart of `minterms` against `primes`.
    pub fn new(primes: &[Implicant], minterms: &BTreeSet<u32>) -> Self {
        let rows = minterms
            .iter()
            .map(|&m| {
                let coverers = primes
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.covered().contains(&m))
                    .map(|(i, _)| i)
                    .collect();
                (m, coverers)
            })
            .collect();
        Self { rows }
    }

    /// Indices of the primes covering `minterm`, or an empty slice if it is not in the chart.
    pub fn coverers(&self, minterm: u32) -> &[usize] {
        self.rows.get(&minterm).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterates over `(minterm, coverers)` in ascending minterm order.
    pub fn rows(&self) -> impl Iterator<Item = (u32, &[usize])> + '_ {
        self.rows.iter().map(|(&m, c)| (m, c.as_slice()))
    }

    /// Indices of primes that are the only coverer of some minterm, ascending.
    pub fn essential_indices(&self) -> BTreeSet<usize> {
        self.rows
            .values()
            .filter(|c| c.len() == 1)
            .map(|c| c[0])
            .collect()
    }
}

/// Finds the essential prime implicants and the minterms they leave uncovered.
///
/// Essentials keep the order of `primes`; uncovered minterms are ascending.
pub fn extract_essentials(primes: &[Implicant], minterms: &BTreeSet<u32>) -> (Vec<Implicant>, Vec<u32>) {
    let chart = CoverageChart::new(primes, minterms);
    let essentials: Vec<Implicant> = chart
        .essential_indices()
        .into_iter()
        .map(|i| primes[i].clone())
        .collect();

    let uncovered = minterms
        .iter()
        .copied()
        .filter(|m| !essentials.iter().any(|e| e.covered().contains(m)))
        .collect::<Vec<_>>();

    debug!(
        "{} essential prime implicants, {} minterms left uncovered",
        essentials.len(),
        uncovered.len()
    );
    (essentials, uncovered)
}

/// Result of the capped minimal cover search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverSearch {
    /// All minimal covers, each as essentials followed by one accepted combination.
    Found(Vec<Vec<Implicant>>),
    /// No combination of at most `cap` candidates covers the remaining minterms.
    CapExceeded { cap: usize },
}

impl CoverSearch {
    /// The solutions, or an empty list if the cap was exceeded.
    pub fn into_solutions(self) -> Vec<Vec<Implicant>> {
        match self {
            CoverSearch::Found(solutions) => solutions,
            CoverSearch::CapExceeded { .. } => Vec::new(),
        }
    }
}

/// Searches for every minimum-size cover of `uncovered` by non-essential primes.
///
/// If `uncovered` is empty, the essentials alone are the only solution (this
/// includes the empty function, whose single solution is the empty cover).
pub fn find_minimal_covers(
    primes: &[Implicant],
    essentials: &[Implicant],
    uncovered: &[u32],
    max_cover_size: usize,
) -> CoverSearch {
    if uncovered.is_empty() {
        return CoverSearch::Found(vec![essentials.to_vec()]);
    }

    // Candidate rows: which uncovered minterms (by position) each candidate covers
    let mut candidates: Vec<&Implicant> = Vec::new();
    let mut rows: Vec<BitSet> = Vec::new();
    for prime in primes {
        if essentials.contains(prime) {
            continue;
        }
        let row: BitSet = uncovered
            .iter()
            .enumerate()
            .filter(|(_, m)| prime.covered().contains(*m))
            .map(|(pos, _)| pos)
            .collect();
        if !row.is_empty() {
            candidates.push(prime);
            rows.push(row);
        }
    }
    debug!("cover search: {} candidates for {} minterms", candidates.len(), uncovered.len());

    let mut union = BitSet::new(uncovered.len());
    for k in 1..=max_cover_size.min(candidates.len()) {
        trace!("trying {} combinations of size {}", binomial(candidates.len(), k), k);
        let mut solutions = Vec::new();
        for combo in Combinations::new(candidates.len(), k) {
            union.clear();
            for &i in &combo {
                union.union_with(&rows[i]);
            }
            if union.len() == uncovered.len() {
                let mut solution = essentials.to_vec();
                solution.extend(combo.iter().map(|&i| candidates[i].clone()));
                solutions.push(solution);
            }
        }
        if !solutions.is_empty() {
            debug!("found {} minimal covers with {} extra terms", solutions.len(), k);
            return CoverSearch::Found(solutions);
        }
    }

    debug!("no cover within {} extra terms", max_cover_size);
    CoverSearch::CapExceeded { cap: max_cover_size }
}
