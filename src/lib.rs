//! # qmc-rs: exact two-level logic minimization
//!
//! **`qmc-rs`** minimizes Boolean functions of up to 20 variables, given as
//! true points (minterms) and don't-care points, into every minimum-size
//! sum-of-products form, and turns a chosen form into a structural Verilog
//! module built from `not`, `and` and `or` primitives.
//!
//! ## How it works
//!
//! 1. **Prime implicants** are found by Quine's tabulation: cubes that differ
//!    in a single bit are merged rank by rank until nothing merges
//!    ([`primes`]).
//! 2. **Essential** primes are those that are the only cover of some minterm
//!    ([`cover`]).
//! 3. The remaining minterms are covered by an **exact search** over
//!    combinations of the other primes, smallest first, up to a configurable
//!    cap ([`minimize::Minimizer`]).
//! 4. A chosen cover is mapped to a **netlist** of primitive gates and printed
//!    as Verilog ([`netlist`], [`verilog`]).
//!
//! Bit `i` of a minterm is the value of the variable at position
//! `variable_count - 1 - i`; position 0 is named `A`.
//!
//! ## Basic Usage
//!
//! ```rust
//! use qmc_rs::function::BooleanFunction;
//! use qmc_rs::implicant::format_sum_of_products;
//! use qmc_rs::minimize::Minimizer;
//! use qmc_rs::netlist::synthesize;
//!
//! // f(A, B, C) = sum m(0, 1, 3, 7)
//! let f = BooleanFunction::new(3, [0, 1, 3, 7], []).unwrap();
//! let result = Minimizer::default().minimize(&f);
//!
//! let best = result.best().unwrap();
//! assert_eq!(format_sum_of_products(best, 3), "A'B' + BC");
//!
//! let verilog = synthesize(best, 3, "example");
//! assert!(verilog.contains("and g2 (p0, A_n, B_n);"));
//! ```

pub mod bitset;
pub mod combinations;
pub mod cover;
pub mod function;
pub mod gate;
pub mod implicant;
pub mod minimize;
pub mod netlist;
pub mod primes;
pub mod signal;
pub mod types;
pub mod verilog;
