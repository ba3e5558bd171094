use std::fmt::{Display, Formatter};

use crate::signal::Net;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GateKind {
    Not,
    And,
    Or,
}

impl GateKind {
    /// Verilog primitive keyword.
    pub const fn keyword(self) -> &'static str {
        match self {
            GateKind::Not => "not",
            GateKind::And => "and",
            GateKind::Or => "or",
        }
    }
}

/// A primitive gate instance `g<id>`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Gate {
    pub id: usize,
    pub kind: GateKind,
    pub output: Net,
    inputs: Box<[Net]>,
}

// Constructors
impl Gate {
    pub fn not(id: usize, output: Net, input: Net) -> Gate {
        Gate {
            id,
            kind: GateKind::Not,
            output,
            inputs: Box::new([input]),
        }
    }

    pub fn andn(id: usize, output: Net, inputs: &[Net]) -> Gate {
        assert!(inputs.len() >= 2, "AND gate needs at least two inputs");
        Gate {
            id,
            kind: GateKind::And,
            output,
            inputs: inputs.into(),
        }
    }

    pub fn orn(id: usize, output: Net, inputs: &[Net]) -> Gate {
        assert!(inputs.len() >= 2, "OR gate needs at least two inputs");
        Gate {
            id,
            kind: GateKind::Or,
            output,
            inputs: inputs.into(),
        }
    }
}

// Getters
impl Gate {
    pub fn inputs(&self) -> &[Net] {
        &self.inputs
    }

    pub fn name(&self) -> String {
        format!("g{}", self.id)
    }
}

/// Verilog instantiation, e.g. `and g3 (p0, A, B_n);`.
impl Display for Gate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} g{} ({}", self.kind.keyword(), self.id, self.output)?;
        for input in self.inputs.iter() {
            write!(f, ", {}", input)?;
        }
        write!(f, ");")
    }
}
