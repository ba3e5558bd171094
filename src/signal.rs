use std::fmt::{Display, Formatter};

use crate::types::Var;

/// A named signal in a synthesized netlist.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Net {
    /// Primary input port
    Input(Var),
    /// Output of the inverter on an input
    Inverted(Var),
    /// Intermediate wire carrying product term `i`
    Term(usize),
    /// The single output port
    Output,
    /// Constant driver
    Const(bool),
}

// Constructors
impl Net {
    pub const fn zero() -> Self {
        Net::Const(false)
    }

    pub const fn one() -> Self {
        Net::Const(true)
    }

    /// The input wire for a literal of the given polarity.
    pub const fn literal(var: Var, positive: bool) -> Self {
        if positive {
            Net::Input(var)
        } else {
            Net::Inverted(var)
        }
    }
}

// Checks
impl Net {
    pub const fn is_const(&self) -> bool {
        matches!(self, Net::Const(_))
    }

    /// True for nets that need a `wire` declaration.
    pub const fn is_wire(&self) -> bool {
        matches!(self, Net::Inverted(_) | Net::Term(_))
    }
}

impl Display for Net {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Net::Input(var) => write!(f, "{}", var),
            Net::Inverted(var) => write!(f, "{}_n", var),
            Net::Term(i) => write!(f, "p{}", i),
            Net::Output => write!(f, "F"),
            Net::Const(false) => write!(f, "1'b0"),
            Net::Const(true) => write!(f, "1'b1"),
        }
    }
}
