//! Product terms with a don't-care mask.
//!
//! An [`Implicant`] is a cube in the Boolean space: bit `i` of `mask` set means
//! the variable living at bit `i` is absent from the product, otherwise bit `i`
//! of `value` gives its polarity. Bits of `value` under the mask are always
//! zero, so `(value, mask)` is a canonical identity for the cube.
//!
//! # Examples
//!
//! ```
//! use qmc_rs::implicant::Implicant;
//!
//! let a = Implicant::from_minterm(0b100);
//! let b = Implicant::from_minterm(0b110);
//! let ab = a.merge(&b).unwrap();
//!
//! assert_eq!(ab.to_pattern(3), "1-0");
//! assert_eq!(ab.to_expression(3), "AC'");
//! assert!(ab.contains(0b100));
//! assert!(!ab.contains(0b101));
//! ```

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::types::Var;

/// A product term together with the points it was built from.
///
/// Equality, ordering and hashing only look at `(value, mask)`; the `covered`
/// set is derived data. Ordering is by `mask` first, then by `value`.
#[derive(Debug, Clone)]
pub struct Implicant {
    value: u32,
    mask: u32,
    covered: BTreeSet<u32>,
}

// Constructors
impl Implicant {
    /// An atomic implicant covering exactly one point.
    pub fn from_minterm(point: u32) -> Self {
        Self {
            value: point,
            mask: 0,
            covered: BTreeSet::from([point]),
        }
    }

    /// Builds an implicant from raw parts. Value bits under the mask are cleared.
    pub fn from_parts(value: u32, mask: u32, covered: BTreeSet<u32>) -> Self {
        Self {
            value: value & !mask,
            mask,
            covered,
        }
    }

    /// Combines two implicants that differ in exactly one cared-for bit.
    ///
    /// Returns `None` when the masks differ or the cared-for bits do not differ
    /// in exactly one position.
    pub fn merge(&self, other: &Implicant) -> Option<Implicant> {
        if self.mask != other.mask {
            return None;
        }
        let diff = (self.value ^ other.value) & !self.mask;
        if !diff.is_power_of_two() {
            return None;
        }
        Some(Implicant {
            value: self.value & !diff,
            mask: self.mask | diff,
            covered: self.covered.union(&other.covered).copied().collect(),
        })
    }

    /// Adds the points of an equal cube found along another merge path.
    pub(crate) fn absorb(&mut self, other: Implicant) {
        debug_assert_eq!(self.key(), other.key());
        self.covered.extend(other.covered);
    }
}

// Getters
impl Implicant {
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// Points (minterms and don't-cares) this implicant was built from.
    pub fn covered(&self) -> &BTreeSet<u32> {
        &self.covered
    }

    /// Identity of the cube, `(mask, value)`, in sort order.
    pub fn key(&self) -> (u32, u32) {
        (self.mask, self.value)
    }

    /// Number of positive literals.
    pub fn ones(&self) -> u32 {
        (self.value & !self.mask).count_ones()
    }

    /// Number of literals in a `variable_count`-input product.
    pub fn literal_count(&self, variable_count: usize) -> usize {
        variable_count - (self.mask & low_bits(variable_count)).count_ones() as usize
    }

    /// True if every variable is a don't-care.
    pub fn is_tautology(&self, variable_count: usize) -> bool {
        self.literal_count(variable_count) == 0
    }

    /// True if `point` lies inside the cube.
    pub fn contains(&self, point: u32) -> bool {
        (point & !self.mask) == self.value
    }

    /// Literals of the product as `(variable, positive)`, in ascending variable position.
    pub fn literals(&self, variable_count: usize) -> impl Iterator<Item = (Var, bool)> + '_ {
        Var::all(variable_count).filter_map(move |var| {
            let bit = var.bit(variable_count);
            if (self.mask >> bit) & 1 != 0 {
                None
            } else {
                Some((var, (self.value >> bit) & 1 != 0))
            }
        })
    }
}

// Views
impl Implicant {
    /// Pattern string, most significant variable first: `1`, `0` or `-` per variable.
    pub fn to_pattern(&self, variable_count: usize) -> String {
        (0..variable_count)
            .rev()
            .map(|bit| {
                if (self.mask >> bit) & 1 != 0 {
                    '-'
                } else if (self.value >> bit) & 1 != 0 {
                    '1'
                } else {
                    '0'
                }
            })
            .collect()
    }

    /// Product-term text such as `AB'D`; a tautology prints as `1`.
    pub fn to_expression(&self, variable_count: usize) -> String {
        let mut s = String::new();
        for (var, positive) in self.literals(variable_count) {
            s.push(var.name());
            if !positive {
                s.push('\'');
            }
        }
        if s.is_empty() {
            s.push('1');
        }
        s
    }
}

impl PartialEq for Implicant {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Implicant {}

impl Hash for Implicant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Implicant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Implicant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(value={:#b}, mask={:#b})", self.value, self.mask)
    }
}

/// Sum-of-products text for a cover, e.g. `AB' + C`; an empty cover prints as `0`.
pub fn format_sum_of_products(cover: &[Implicant], variable_count: usize) -> String {
    if cover.is_empty() {
        return "0".to_string();
    }
    cover
        .iter()
        .map(|term| term.to_expression(variable_count))
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Value of the sum-of-products `cover` at `point`.
pub fn evaluate_cover(cover: &[Implicant], point: u32) -> bool {
    cover.iter().any(|term| term.contains(point))
}

fn low_bits(variable_count: usize) -> u32 {
    ((1u64 << variable_count) - 1) as u32
}
