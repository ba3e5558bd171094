use std::collections::BTreeSet;

use test_log::test;

use qmc_rs::combinations::Combinations;
use qmc_rs::cover::CoverageChart;
use qmc_rs::function::BooleanFunction;
use qmc_rs::implicant::{evaluate_cover, Implicant};
use qmc_rs::minimize::{CoverOutcome, MinimizationResult, Minimizer};
use qmc_rs::netlist::{synthesize, Netlist};
use qmc_rs::primes::prime_implicants;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Generate reproducible random functions: about half of the points are true,
/// one in eight is a don't-care.
fn random_functions(count: usize, max_variables: usize) -> Vec<BooleanFunction> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    (0..count)
        .map(|_| {
            let n = rng.random_range(1..=max_variables);
            let mut minterms = Vec::new();
            let mut dont_cares = Vec::new();
            for p in 0..(1u32 << n) {
                if rng.random_bool(0.5) {
                    minterms.push(p);
                } else if rng.random_bool(0.25) {
                    dont_cares.push(p);
                }
            }
            BooleanFunction::new(n, minterms, dont_cares).unwrap()
        })
        .collect()
}

// An upper bound on minimal SOP size for up to 4 variables, so the search never gives up.
fn minimize(f: &BooleanFunction) -> MinimizationResult {
    Minimizer::new().with_max_cover_size(8).minimize(f)
}

fn covers_all(cover: &[Implicant], minterms: &BTreeSet<u32>) -> bool {
    minterms.iter().all(|m| cover.iter().any(|t| t.covered().contains(m)))
}

#[test]
fn test_coverage_completeness() {
    for f in random_functions(60, 4) {
        let result = minimize(&f);
        assert_eq!(result.outcome, CoverOutcome::Found);
        for solution in &result.minimal_solutions {
            assert!(covers_all(solution, f.minterms()), "incomplete cover for {:?}", f);
        }
    }
}

#[test]
fn test_solutions_share_minimal_size() {
    for f in random_functions(40, 4) {
        let result = minimize(&f);
        let size = result.term_count().unwrap();
        assert!(result.minimal_solutions.iter().all(|s| s.len() == size));

        // No smaller set of primes covers the function
        let primes = &result.prime_implicants;
        for k in 0..size {
            for combo in Combinations::new(primes.len(), k) {
                let cover: Vec<Implicant> = combo.iter().map(|&i| primes[i].clone()).collect();
                assert!(!covers_all(&cover, f.minterms()), "smaller cover of size {} for {:?}", k, f);
            }
        }
    }
}

#[test]
fn test_essentiality() {
    for f in random_functions(60, 4) {
        let result = minimize(&f);
        let chart = CoverageChart::new(&result.prime_implicants, f.minterms());
        for essential in &result.essential_implicants {
            let index = result.prime_implicants.iter().position(|p| p == essential).unwrap();
            assert!(chart.rows().any(|(_, coverers)| coverers == [index]));

            for solution in &result.minimal_solutions {
                assert!(solution.contains(essential));
                let without: Vec<Implicant> = solution.iter().filter(|t| *t != essential).cloned().collect();
                assert!(!covers_all(&without, f.minterms()));
            }
        }
    }
}

#[test]
fn test_generation_is_idempotent() {
    for f in random_functions(30, 5) {
        let first: Vec<_> = prime_implicants(&f).iter().map(Implicant::key).collect();
        let second: Vec<_> = prime_implicants(&f).iter().map(Implicant::key).collect();
        assert_eq!(first, second);

        let reversed = BooleanFunction::new(
            f.variable_count(),
            f.minterms().iter().rev().copied(),
            f.dont_cares().iter().rev().copied(),
        )
        .unwrap();
        let third: Vec<_> = prime_implicants(&reversed).iter().map(Implicant::key).collect();
        assert_eq!(first, third);
    }
}

#[test]
fn test_round_trip() {
    for f in random_functions(60, 4) {
        let result = minimize(&f);
        for solution in &result.minimal_solutions {
            for point in 0..(1u32 << f.variable_count()) {
                let value = evaluate_cover(solution, point);
                if f.is_minterm(point) {
                    assert!(value, "minterm {} lost in {:?}", point, f);
                } else if !f.is_dont_care(point) {
                    assert!(!value, "point {} wrongly true in {:?}", point, f);
                }
            }
        }
    }
}

#[test]
fn test_netlist_round_trip() {
    for f in random_functions(40, 4) {
        let result = minimize(&f);
        let netlist = Netlist::from_cover(result.best().unwrap(), f.variable_count(), "f");
        for point in 0..(1u32 << f.variable_count()) {
            if f.is_minterm(point) {
                assert!(netlist.evaluate(point));
            } else if !f.is_dont_care(point) {
                assert!(!netlist.evaluate(point));
            }
        }
    }
}

#[test]
fn test_synthesis_is_deterministic() {
    for f in random_functions(20, 5) {
        let result = Minimizer::default().minimize(&f);
        if let Some(cover) = result.best() {
            assert_eq!(synthesize(cover, f.variable_count(), "f"), synthesize(cover, f.variable_count(), "f"));
        }
    }
}

#[test]
fn test_scenario_three_variables() {
    let f = BooleanFunction::new(3, [0, 1, 2, 5, 6, 7], []).unwrap();
    let result = Minimizer::default().minimize(&f);
    assert_eq!(result.prime_implicants.len(), 6);
    assert!(result.essential_implicants.is_empty());
    assert_eq!(result.term_count(), Some(3));
    assert_eq!(result.minimal_solutions.len(), 2);
    for solution in &result.minimal_solutions {
        for point in 0..8 {
            assert_eq!(evaluate_cover(solution, point), f.is_minterm(point));
        }
    }
}

#[test]
fn test_scenario_empty_function() {
    let f = BooleanFunction::new(2, [], []).unwrap();
    let result = Minimizer::default().minimize(&f);
    assert!(result.prime_implicants.is_empty());
    assert!(result.essential_implicants.is_empty());
    assert_eq!(result.minimal_solutions, vec![Vec::<Implicant>::new()]);

    let verilog = synthesize(result.best().unwrap(), 2, "zero");
    assert!(verilog.contains("assign F = 1'b0;"));
    assert!(!verilog.contains("wire"));
    assert!(!verilog.contains(" g0 "));
}

#[test]
fn test_scenario_tautology() {
    let f = BooleanFunction::new(1, [0, 1], []).unwrap();
    let result = Minimizer::default().minimize(&f);
    assert_eq!(result.prime_implicants.len(), 1);
    assert_eq!(result.minimal_solutions.len(), 1);
    let cover = result.best().unwrap();
    assert_eq!(cover.len(), 1);
    assert_eq!(cover[0].literal_count(1), 0);

    let verilog = synthesize(cover, 1, "one");
    assert!(verilog.contains("assign F = 1'b1;"));
    assert!(!verilog.contains("not g"));
}

#[test]
fn test_scenario_all_even() {
    let f = BooleanFunction::new(4, [0, 2, 4, 6, 8, 10, 12, 14], []).unwrap();
    let result = Minimizer::default().minimize(&f);
    assert_eq!(result.prime_implicants.len(), 1);
    assert_eq!(result.prime_implicants[0].covered().len(), 8);
    assert_eq!(result.minimal_solutions.len(), 1);

    let netlist = Netlist::from_cover(result.best().unwrap(), 4, "even");
    assert_eq!(netlist.inverters.len(), 1);
    assert_eq!(netlist.gates().count(), 1);
    assert!(netlist.sum.is_none());

    let verilog = netlist.to_verilog();
    assert!(verilog.contains("not g0 (D_n, D);"));
    assert!(verilog.contains("assign F = D_n;"));
    assert!(!verilog.contains("and g"));
    assert!(!verilog.contains("or g"));
}

#[test]
fn test_cap_exceeded_is_distinct_from_found() {
    let f = BooleanFunction::new(3, [0, 1, 2, 5, 6, 7], []).unwrap();
    let capped = Minimizer::new().with_max_cover_size(2).minimize(&f);
    assert_eq!(capped.outcome, CoverOutcome::CapExceeded { cap: 2 });
    assert!(capped.minimal_solutions.is_empty());

    let full = Minimizer::new().with_max_cover_size(3).minimize(&f);
    assert_eq!(full.outcome, CoverOutcome::Found);
}
