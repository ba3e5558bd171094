//! End-to-end exact minimization.
//!
//! [`Minimizer`] chains prime implicant generation, essential extraction and
//! the capped minimal cover search, and collects everything a report needs
//! into a [`MinimizationResult`].
//!
//! # Examples
//!
//! ```
//! use qmc_rs::function::BooleanFunction;
//! use qmc_rs::minimize::{CoverOutcome, Minimizer};
//!
//! let f = BooleanFunction::new(4, [0, 2, 4, 6, 8, 10, 12, 14], []).unwrap();
//! let result = Minimizer::default().minimize(&f);
//!
//! assert_eq!(result.outcome, CoverOutcome::Found);
//! assert_eq!(result.minimal_solutions.len(), 1);
//! assert_eq!(result.minimal_solutions[0][0].to_expression(4), "D'");
//! ```

use log::debug;

use crate::cover::{extract_essentials, find_minimal_covers, CoverSearch};
use crate::function::BooleanFunction;
use crate::implicant::Implicant;
use crate::primes::prime_implicants;

/// Whether the minimal cover search finished within its cap.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CoverOutcome {
    /// `minimal_solutions` holds every minimum-size cover.
    Found,
    /// No cover with at most `cap` non-essential terms exists; `minimal_solutions` is empty.
    CapExceeded { cap: usize },
}

/// Everything computed for one function.
#[derive(Debug, Clone)]
pub struct MinimizationResult {
    pub variable_count: usize,
    /// All prime implicants, sorted by `(mask, value)`.
    pub prime_implicants: Vec<Implicant>,
    /// Essential prime implicants, in prime order.
    pub essential_implicants: Vec<Implicant>,
    /// Minterms not covered by any essential implicant, ascending.
    pub uncovered_minterms: Vec<u32>,
    /// Minimum-size covers; all have the same number of terms.
    pub minimal_solutions: Vec<Vec<Implicant>>,
    pub outcome: CoverOutcome,
}

impl MinimizationResult {
    /// Number of terms in each minimal solution, if any was found.
    pub fn term_count(&self) -> Option<usize> {
        self.minimal_solutions.first().map(Vec::len)
    }

    /// The first minimal solution, if any.
    pub fn best(&self) -> Option<&[Implicant]> {
        self.minimal_solutions.first().map(Vec::as_slice)
    }
}

/// Exact two-level minimizer.
///
/// The only setting is the cap on the number of non-essential terms tried
/// by the cover search. It defaults to [`Minimizer::DEFAULT_MAX_COVER_SIZE`].
#[derive(Debug, Clone)]
pub struct Minimizer {
    max_cover_size: usize,
}

impl Default for Minimizer {
    fn default() -> Self {
        Self {
            max_cover_size: Self::DEFAULT_MAX_COVER_SIZE,
        }
    }
}

impl Minimizer {
    pub const DEFAULT_MAX_COVER_SIZE: usize = 6;

    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the largest number of non-essential terms the cover search tries.
    pub fn with_max_cover_size(mut self, max_cover_size: usize) -> Self {
        self.max_cover_size = max_cover_size;
        self
    }

    pub fn max_cover_size(&self) -> usize {
        self.max_cover_size
    }

    /// Minimizes `function`.
    pub fn minimize(&self, function: &BooleanFunction) -> MinimizationResult {
        debug!(
            "minimize(variables = {}, minterms = {}, dont_cares = {})",
            function.variable_count(),
            function.minterms().len(),
            function.dont_cares().len()
        );

        let primes = prime_implicants(function);
        let (essentials, uncovered) = extract_essentials(&primes, function.minterms());
        let search = find_minimal_covers(&primes, &essentials, &uncovered, self.max_cover_size);

        let (minimal_solutions, outcome) = match search {
            CoverSearch::Found(solutions) => (solutions, CoverOutcome::Found),
            CoverSearch::CapExceeded { cap } => (Vec::new(), CoverOutcome::CapExceeded { cap }),
        };

        MinimizationResult {
            variable_count: function.variable_count(),
            prime_implicants: primes,
            essential_implicants: essentials,
            uncovered_minterms: uncovered,
            minimal_solutions,
            outcome,
        }
    }
}
