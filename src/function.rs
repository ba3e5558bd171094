//! Boolean functions given by their true points and don't-care points.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::types::MAX_VARIABLES;

/// Reasons a point list does not describe a valid function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunctionError {
    #[error("variable count must be between 1 and {max}, got {0}", max = MAX_VARIABLES)]
    VariableCount(usize),

    #[error(
        "point {point} is out of range for {variable_count} variables (max {max})",
        max = max_point(.variable_count)
    )]
    OutOfRange { point: u32, variable_count: usize },

    #[error("point {0} is listed both as a minterm and as a don't-care")]
    Overlap(u32),
}

/// An incompletely specified Boolean function.
///
/// # Invariants
///
/// - `1 <= variable_count <= 20`
/// - every point is in `[0, 2^variable_count)`
/// - `minterms` and `dont_cares` are disjoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanFunction {
    variable_count: usize,
    minterms: BTreeSet<u32>,
    dont_cares: BTreeSet<u32>,
}

impl BooleanFunction {
    /// Creates a function from minterm and don't-care lists.
    ///
    /// Duplicate entries inside one list are collapsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_rs::function::BooleanFunction;
    ///
    /// let f = BooleanFunction::new(3, [0, 1, 2], [7]).unwrap();
    /// assert_eq!(f.variable_count(), 3);
    /// assert!(f.is_minterm(2));
    /// assert!(f.is_dont_care(7));
    ///
    /// assert!(BooleanFunction::new(2, [4], []).is_err());
    /// ```
    pub fn new(
        variable_count: usize,
        minterms: impl IntoIterator<Item = u32>,
        dont_cares: impl IntoIterator<Item = u32>,
    ) -> Result<Self, FunctionError> {
        check_variable_count(variable_count)?;
        let minterms = collect_points(variable_count, minterms)?;
        let dont_cares = collect_points(variable_count, dont_cares)?;
        if let Some(&point) = minterms.intersection(&dont_cares).next() {
            return Err(FunctionError::Overlap(point));
        }
        Ok(Self {
            variable_count,
            minterms,
            dont_cares,
        })
    }

    /// Creates a function from maxterm (false point) and don't-care lists.
    ///
    /// Every point that is neither a maxterm nor a don't-care becomes a minterm.
    pub fn from_maxterms(
        variable_count: usize,
        maxterms: impl IntoIterator<Item = u32>,
        dont_cares: impl IntoIterator<Item = u32>,
    ) -> Result<Self, FunctionError> {
        check_variable_count(variable_count)?;
        let maxterms = collect_points(variable_count, maxterms)?;
        let dont_cares = collect_points(variable_count, dont_cares)?;
        if let Some(&point) = maxterms.intersection(&dont_cares).next() {
            return Err(FunctionError::Overlap(point));
        }
        let minterms = (0..point_count(variable_count))
            .filter(|p| !maxterms.contains(p) && !dont_cares.contains(p))
            .collect();
        Ok(Self {
            variable_count,
            minterms,
            dont_cares,
        })
    }

    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    pub fn minterms(&self) -> &BTreeSet<u32> {
        &self.minterms
    }

    pub fn dont_cares(&self) -> &BTreeSet<u32> {
        &self.dont_cares
    }

    pub fn is_minterm(&self, point: u32) -> bool {
        self.minterms.contains(&point)
    }

    pub fn is_dont_care(&self, point: u32) -> bool {
        self.dont_cares.contains(&point)
    }

    /// Points that are neither true nor don't-care.
    pub fn maxterms(&self) -> impl Iterator<Item = u32> + '_ {
        (0..point_count(self.variable_count)).filter(move |p| !self.is_minterm(*p) && !self.is_dont_care(*p))
    }
}

fn max_point(variable_count: &usize) -> u64 {
    (1u64 << *variable_count) - 1
}

fn point_count(variable_count: usize) -> u32 {
    1u32 << variable_count
}

fn check_variable_count(variable_count: usize) -> Result<(), FunctionError> {
    if variable_count == 0 || variable_count > MAX_VARIABLES {
        return Err(FunctionError::VariableCount(variable_count));
    }
    Ok(())
}

fn collect_points(
    variable_count: usize,
    points: impl IntoIterator<Item = u32>,
) -> Result<BTreeSet<u32>, FunctionError> {
    let limit = point_count(variable_count);
    points
        .into_iter()
        .map(|point| {
            if point < limit {
                Ok(point)
            } else {
                Err(FunctionError::OutOfRange { point, variable_count })
            }
        })
        .collect()
}
