//! Type-safe wrapper for input variable positions.
//!
//! Minterms are plain integers whose bit `i` is the value of the variable at
//! position `variable_count - 1 - i`. Position 0 is therefore the most
//! significant bit and is printed as `A`, position 1 as `B`, and so on.
//! [`Var`] keeps that mapping in one place so the expression printer and the
//! netlist builder cannot disagree about it.
use std::fmt;

/// Largest number of input variables supported by the minimizer.
pub const MAX_VARIABLES: usize = 20;

/// A variable position (0-indexed, `A` = 0).
///
/// # Invariants
///
/// - Position is below [`MAX_VARIABLES`]
/// - The bit a variable occupies depends on the variable count of the function
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(u8);

impl Var {
    /// Creates a variable at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `index >= MAX_VARIABLES`.
    pub fn new(index: usize) -> Self {
        assert!(index < MAX_VARIABLES, "Variable position must be < {}", MAX_VARIABLES);
        Var(index as u8)
    }

    /// Returns the raw position.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Bit position of this variable inside a minterm of a `variable_count`-input function.
    pub fn bit(self, variable_count: usize) -> usize {
        debug_assert!(self.index() < variable_count);
        variable_count - 1 - self.index()
    }

    /// All variables of a `variable_count`-input function, in ascending position.
    pub fn all(variable_count: usize) -> impl Iterator<Item = Var> {
        (0..variable_count).map(Var::new)
    }

    /// Letter used for this variable in expressions and ports.
    pub fn name(self) -> char {
        (b'A' + self.0) as char
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<Var> for usize {
    fn from(var: Var) -> Self {
        var.index()
    }
}
