//! Structural two-level netlists built from a sum-of-products cover.
//!
//! A cover maps onto three layers of primitives:
//!
//! 1. one NOT gate per variable that appears complemented in any term,
//! 2. one driver per product term: an AND gate for two or more literals, a
//!    plain assignment for a single literal, a constant 1 for a tautology,
//! 3. one OR gate joining the product-term wires `p0, p1, ...` when the cover
//!    has more than one term. A single-term cover drives `F` directly.
//!
//! Gate instances are numbered `g0, g1, ...` in exactly that order, so the same
//! cover always yields the same netlist. An empty cover is the constant-0
//! function and contains no gates at all.
//!
//! # Examples
//!
//! ```
//! use qmc_rs::function::BooleanFunction;
//! use qmc_rs::minimize::Minimizer;
//! use qmc_rs::netlist::synthesize;
//!
//! let f = BooleanFunction::new(2, [1, 2], []).unwrap();
//! let result = Minimizer::default().minimize(&f);
//! let verilog = synthesize(result.best().unwrap(), 2, "xor2");
//!
//! assert!(verilog.starts_with("module xor2 ("));
//! assert!(verilog.contains("or g4 (F, p0, p1);"));
//! ```

use log::debug;

use crate::gate::Gate;
use crate::implicant::Implicant;
use crate::signal::Net;
use crate::types::Var;

/// How a product term is driven.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Driver {
    /// AND gate over two or more literals
    Gate(Gate),
    /// Continuous assignment from a literal or a constant
    Assign { target: Net, source: Net },
}

impl Driver {
    pub fn target(&self) -> Net {
        match self {
            Driver::Gate(gate) => gate.output,
            Driver::Assign { target, .. } => *target,
        }
    }
}

/// One product term of the cover and its driver.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ProductTerm {
    /// Literal nets in ascending variable position; empty for a tautology.
    pub literals: Vec<Net>,
    pub driver: Driver,
}

/// A synthesized module: ports, wires and gate instances.
///
/// `Net::Input` of the sixth variable and `Net::Output` are distinct nets here
/// but both print as `F`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Netlist {
    pub module_name: String,
    pub variable_count: usize,
    /// NOT gates, ascending by variable position.
    pub inverters: Vec<Gate>,
    /// Product terms in cover order.
    pub terms: Vec<ProductTerm>,
    /// Final OR gate; present only for two or more terms.
    pub sum: Option<Gate>,
}

impl Netlist {
    /// Builds the netlist of `cover` over `variable_count` inputs.
    ///
    /// `module_name` is used verbatim as the module identifier.
    pub fn from_cover(cover: &[Implicant], variable_count: usize, module_name: &str) -> Self {
        debug!(
            "from_cover(terms = {}, variables = {}, module = {})",
            cover.len(),
            variable_count,
            module_name
        );

        let mut next_id = 0;
        let mut fresh_id = || {
            let id = next_id;
            next_id += 1;
            id
        };

        let inverters: Vec<Gate> = complemented_variables(cover, variable_count)
            .into_iter()
            .map(|var| Gate::not(fresh_id(), Net::Inverted(var), Net::Input(var)))
            .collect();

        let single = cover.len() == 1;
        let terms: Vec<ProductTerm> = cover
            .iter()
            .enumerate()
            .map(|(i, implicant)| {
                let target = if single { Net::Output } else { Net::Term(i) };
                let literals: Vec<Net> = implicant
                    .literals(variable_count)
                    .map(|(var, positive)| Net::literal(var, positive))
                    .collect();
                let driver = match literals.as_slice() {
                    [] => Driver::Assign {
                        target,
                        source: Net::one(),
                    },
                    [literal] => Driver::Assign {
                        target,
                        source: *literal,
                    },
                    _ => Driver::Gate(Gate::andn(fresh_id(), target, &literals)),
                };
                ProductTerm { literals, driver }
            })
            .collect();

        let sum = if terms.len() >= 2 {
            let inputs: Vec<Net> = (0..terms.len()).map(Net::Term).collect();
            Some(Gate::orn(fresh_id(), Net::Output, &inputs))
        } else {
            None
        };

        Netlist {
            module_name: module_name.to_string(),
            variable_count,
            inverters,
            terms,
            sum,
        }
    }

    /// True for the constant-0 function (empty cover).
    pub fn is_constant_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Input ports in declaration order.
    pub fn inputs(&self) -> impl Iterator<Item = Net> {
        Var::all(self.variable_count).map(Net::Input)
    }

    /// Declared wires: inverter outputs, then product-term wires.
    pub fn wires(&self) -> Vec<Net> {
        let mut wires: Vec<Net> = self.inverters.iter().map(|g| g.output).collect();
        wires.extend(self.terms.iter().map(|t| t.driver.target()).filter(Net::is_wire));
        wires
    }

    /// All gate instances in numbering order.
    pub fn gates(&self) -> impl Iterator<Item = &Gate> {
        let and_gates = self.terms.iter().filter_map(|t| match &t.driver {
            Driver::Gate(gate) => Some(gate),
            Driver::Assign { .. } => None,
        });
        self.inverters.iter().chain(and_gates).chain(self.sum.iter())
    }

    /// Evaluates the output for an input point (bit layout as for minterms).
    pub fn evaluate(&self, point: u32) -> bool {
        let input = |var: Var| (point >> var.bit(self.variable_count)) & 1 != 0;
        let net = |n: Net, terms: &[bool]| match n {
            Net::Input(var) => input(var),
            Net::Inverted(var) => !input(var),
            Net::Term(i) => terms[i],
            Net::Const(value) => value,
            Net::Output => unreachable!("output is never read"),
        };

        let mut values = Vec::with_capacity(self.terms.len());
        for term in &self.terms {
            let value = match &term.driver {
                Driver::Gate(gate) => gate.inputs().iter().all(|&n| net(n, &[])),
                Driver::Assign { source, .. } => net(*source, &[]),
            };
            values.push(value);
        }

        match &self.sum {
            Some(gate) => gate.inputs().iter().any(|&n| net(n, &values)),
            None => values.first().copied().unwrap_or(false),
        }
    }
}

/// Synthesizes `cover` into structural Verilog.
///
/// Total and deterministic: the same arguments always give byte-identical text.
/// With six or more variables the sixth input is named `F`, like the output
/// port, and the module text is ambiguous (see [`crate::verilog`]).
pub fn synthesize(cover: &[Implicant], variable_count: usize, module_name: &str) -> String {
    Netlist::from_cover(cover, variable_count, module_name).to_verilog()
}

/// Variables that appear complemented in at least one term, ascending.
fn complemented_variables(cover: &[Implicant], variable_count: usize) -> Vec<Var> {
    let mut needed = vec![false; variable_count];
    for implicant in cover {
        for (var, positive) in implicant.literals(variable_count) {
            if !positive {
                needed[var.index()] = true;
            }
        }
    }
    Var::all(variable_count).filter(|v| needed[v.index()]).collect()
}
