//! Structural Verilog emission for [`Netlist`].
//!
//! The layout is fixed so that output can be compared byte for byte:
//!
//! ```text
//! module <name> (
//!     input A, B, ...,
//!     output F
//! );
//!
//!     // Inverted input signals
//!     // Product term outputs
//!     // NOT gates for complemented inputs
//!     // AND gates for product terms
//!     // OR gate for sum of products
//! endmodule
//! ```
//!
//! The constant-0 function skips every section and emits `assign F = 1'b0;`.
//!
//! Inputs are named by letter and the output is always `F`, so a module over
//! six or more variables declares `F` both as an input and as the output. Such
//! text is not accepted by Verilog tools; rename the ports downstream if needed.

use std::fmt::{self, Display, Formatter};

use crate::netlist::{Driver, Netlist, ProductTerm};
use crate::signal::Net;

const INDENT: &str = "    ";

impl Netlist {
    /// The complete module text.
    pub fn to_verilog(&self) -> String {
        self.to_string()
    }

    /// Only the gate sections (NOT, AND/assign, OR), without header or wires.
    pub fn gate_logic(&self) -> String {
        GateLogic(self).to_string()
    }

    fn write_header(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "module {} (", self.module_name)?;
        let inputs: Vec<String> = self.inputs().map(|n| n.to_string()).collect();
        writeln!(f, "{}input {},", INDENT, inputs.join(", "))?;
        writeln!(f, "{}output {}", INDENT, Net::Output)?;
        writeln!(f, ");")?;
        writeln!(f)
    }

    fn write_wires(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}// Inverted input signals", INDENT)?;
        if self.inverters.is_empty() {
            writeln!(f, "{}// (no inverted inputs needed)", INDENT)?;
        }
        for gate in &self.inverters {
            writeln!(f, "{}wire {};", INDENT, gate.output)?;
        }
        writeln!(f)?;

        writeln!(f, "{}// Product term outputs", INDENT)?;
        if self.terms.len() == 1 {
            writeln!(f, "{}// (single product term - direct connection to output)", INDENT)?;
        } else {
            for term in &self.terms {
                writeln!(f, "{}wire {};", INDENT, term.driver.target())?;
            }
        }
        writeln!(f)
    }

    fn write_inverters(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}// NOT gates for complemented inputs", INDENT)?;
        if self.inverters.is_empty() {
            writeln!(f, "{}// (no NOT gates needed)", INDENT)?;
        }
        for gate in &self.inverters {
            writeln!(f, "{}{}", INDENT, gate)?;
        }
        writeln!(f)
    }

    fn write_products(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}// AND gates for product terms", INDENT)?;
        for (i, term) in self.terms.iter().enumerate() {
            writeln!(f, "{}// Product term {}: {}", INDENT, i, term_comment(term))?;
            match &term.driver {
                Driver::Gate(gate) => writeln!(f, "{}{}", INDENT, gate)?,
                Driver::Assign { target, source } => writeln!(f, "{}assign {} = {};", INDENT, target, source)?,
            }
        }
        writeln!(f)
    }

    fn write_sum(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(gate) = &self.sum {
            writeln!(f, "{}// OR gate for sum of products", INDENT)?;
            writeln!(f, "{}{}", INDENT, gate)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

fn term_comment(term: &ProductTerm) -> String {
    if term.literals.is_empty() {
        return "constant 1 (tautology)".to_string();
    }
    let names: Vec<String> = term.literals.iter().map(|n| n.to_string()).collect();
    names.join(" & ")
}

impl Display for Netlist {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        if self.is_constant_zero() {
            writeln!(f, "{}// Function is always 0 (no minterms)", INDENT)?;
            writeln!(f, "{}assign {} = {};", INDENT, Net::Output, Net::zero())?;
            writeln!(f)?;
        } else {
            self.write_wires(f)?;
            self.write_inverters(f)?;
            self.write_products(f)?;
            self.write_sum(f)?;
        }
        writeln!(f, "endmodule")
    }
}

struct GateLogic<'a>(&'a Netlist);

impl Display for GateLogic<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.write_inverters(f)?;
        self.0.write_products(f)?;
        self.0.write_sum(f)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use test_log::test;

    use super::*;
    use crate::implicant::Implicant;
    use crate::netlist::synthesize;

    fn term(value: u32, mask: u32) -> Implicant {
        Implicant::from_parts(value, mask, BTreeSet::new())
    }

    #[test]
    fn test_constant_zero_module() {
        let expected = "\
module zero (
    input A, B,
    output F
);

    // Function is always 0 (no minterms)
    assign F = 1'b0;

endmodule
";
        assert_eq!(synthesize(&[], 2, "zero"), expected);
    }

    #[test]
    fn test_constant_one_module() {
        let expected = "\
module one (
    input A,
    output F
);

    // Inverted input signals
    // (no inverted inputs needed)

    // Product term outputs
    // (single product term - direct connection to output)

    // NOT gates for complemented inputs
    // (no NOT gates needed)

    // AND gates for product terms
    // Product term 0: constant 1 (tautology)
    assign F = 1'b1;

endmodule
";
        assert_eq!(synthesize(&[term(0, 0b1)], 1, "one"), expected);
    }

    #[test]
    fn test_single_literal_module() {
        let expected = "\
module even (
    input A, B, C, D,
    output F
);

    // Inverted input signals
    wire D_n;

    // Product term outputs
    // (single product term - direct connection to output)

    // NOT gates for complemented inputs
    not g0 (D_n, D);

    // AND gates for product terms
    // Product term 0: D_n
    assign F = D_n;

endmodule
";
        assert_eq!(synthesize(&[term(0, 0b1110)], 4, "even"), expected);
    }

    #[test]
    fn test_sum_of_products_module() {
        // A'B + AC
        let expected = "\
module mux (
    input A, B, C,
    output F
);

    // Inverted input signals
    wire A_n;

    // Product term outputs
    wire p0;
    wire p1;

    // NOT gates for complemented inputs
    not g0 (A_n, A);

    // AND gates for product terms
    // Product term 0: A_n & B
    and g1 (p0, A_n, B);
    // Product term 1: A & C
    and g2 (p1, A, C);

    // OR gate for sum of products
    or g3 (F, p0, p1);

endmodule
";
        let cover = [term(0b010, 0b001), term(0b101, 0b010)];
        assert_eq!(synthesize(&cover, 3, "mux"), expected);
    }

    #[test]
    fn test_assigned_terms_feed_the_or_gate() {
        // AB + C' + 1
        let expected = "\
module mixed (
    input A, B, C,
    output F
);

    // Inverted input signals
    wire C_n;

    // Product term outputs
    wire p0;
    wire p1;
    wire p2;

    // NOT gates for complemented inputs
    not g0 (C_n, C);

    // AND gates for product terms
    // Product term 0: A & B
    and g1 (p0, A, B);
    // Product term 1: C_n
    assign p1 = C_n;
    // Product term 2: constant 1 (tautology)
    assign p2 = 1'b1;

    // OR gate for sum of products
    or g2 (F, p0, p1, p2);

endmodule
";
        let cover = [term(0b110, 0b001), term(0b000, 0b110), term(0, 0b111)];
        assert_eq!(synthesize(&cover, 3, "mixed"), expected);
    }

    #[test]
    fn test_sixth_input_shares_output_name() {
        // Variable F is both an input port and the output port name
        let verilog = synthesize(&[term(0, 0b111110)], 6, "wide");
        assert!(verilog.contains("    input A, B, C, D, E, F,\n    output F\n"));
        assert!(verilog.contains("not g0 (F_n, F);"));
        assert!(verilog.contains("assign F = F_n;"));
    }

    #[test]
    fn test_gate_logic_only() {
        let cover = [term(0b010, 0b001), term(0b101, 0b010)];
        let netlist = Netlist::from_cover(&cover, 3, "mux");
        let logic = netlist.gate_logic();
        assert!(logic.starts_with("    // NOT gates for complemented inputs\n"));
        assert!(!logic.contains("module"));
        assert!(!logic.contains("wire"));
        assert!(logic.ends_with("    or g3 (F, p0, p1);\n\n"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let cover = [term(0b000, 0b011), term(0b110, 0b000), term(0b001, 0b100)];
        let first = synthesize(&cover, 3, "f");
        let second = synthesize(&cover, 3, "f");
        assert_eq!(first, second);
    }
}
