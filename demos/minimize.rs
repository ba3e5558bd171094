use std::path::PathBuf;

use clap::Parser;

use qmc_rs::function::BooleanFunction;
use qmc_rs::implicant::{format_sum_of_products, Implicant};
use qmc_rs::minimize::{CoverOutcome, Minimizer};
use qmc_rs::netlist::synthesize;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Number of input variables (1..=20).
    #[arg(value_name = "INT")]
    variables: usize,

    /// True points, comma-separated.
    #[arg(short, long, value_delimiter = ',', conflicts_with = "maxterms")]
    minterms: Vec<u32>,

    /// False points, comma-separated (every other point that is not a don't-care is true).
    #[arg(short = 'M', long, value_delimiter = ',')]
    maxterms: Option<Vec<u32>>,

    /// Don't-care points, comma-separated.
    #[arg(short, long, value_delimiter = ',')]
    dont_cares: Vec<u32>,

    /// Largest number of non-essential terms tried by the cover search.
    #[arg(long, value_name = "INT", default_value_t = Minimizer::DEFAULT_MAX_COVER_SIZE)]
    max_cover_size: usize,

    /// Solution to synthesize (1-based).
    #[arg(long, value_name = "INT", default_value = "1")]
    solution: usize,

    /// Name of the generated Verilog module.
    #[arg(long, default_value = "boolean_function")]
    module: String,

    /// Write the Verilog module to this file instead of printing it.
    #[arg(long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long)]
    verbose: bool,
}

fn print_terms(title: &str, terms: &[Implicant], variables: usize) {
    println!("\n{} ({})", title, terms.len());
    for term in terms {
        let covered: Vec<String> = term.covered().iter().map(|m| m.to_string()).collect();
        println!(
            "  {:<12} {:<20} {{{}}}",
            term.to_pattern(variables),
            term.to_expression(variables),
            covered.join(", ")
        );
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let dont_cares = args.dont_cares.iter().copied();
    let function = match &args.maxterms {
        Some(maxterms) => BooleanFunction::from_maxterms(args.variables, maxterms.iter().copied(), dont_cares)?,
        None => BooleanFunction::new(args.variables, args.minterms.iter().copied(), dont_cares)?,
    };
    let n = function.variable_count();
    println!("variables = {}", n);
    println!("minterms = {:?}", function.minterms());
    println!("dont_cares = {:?}", function.dont_cares());

    let time_minimize = std::time::Instant::now();
    let result = Minimizer::new()
        .with_max_cover_size(args.max_cover_size)
        .minimize(&function);
    let time_minimize = time_minimize.elapsed();

    print_terms("Prime implicants", &result.prime_implicants, n);
    print_terms("Essential prime implicants", &result.essential_implicants, n);
    println!("\nUncovered after essentials: {:?}", result.uncovered_minterms);

    match result.outcome {
        CoverOutcome::Found => {
            println!("\nMinimal solutions ({}):", result.minimal_solutions.len());
            for (i, solution) in result.minimal_solutions.iter().enumerate() {
                println!("  {}: F = {}  ({} terms)", i + 1, format_sum_of_products(solution, n), solution.len());
            }
        }
        CoverOutcome::CapExceeded { cap } => {
            println!("\nNo cover found with at most {} non-essential terms", cap);
            println!("Try a larger --max-cover-size");
            return Ok(());
        }
    }
    println!("\nminimized in {:.3} s", time_minimize.as_secs_f64());

    let index = args.solution.clamp(1, result.minimal_solutions.len()) - 1;
    let verilog = synthesize(&result.minimal_solutions[index], n, &args.module);
    match &args.output {
        Some(path) => {
            std::fs::write(path, &verilog)?;
            println!("Verilog module written to {}", path.display());
        }
        None => println!("\n{}", verilog),
    }

    Ok(())
}
