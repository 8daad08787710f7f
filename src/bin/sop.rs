//! SOP Logic - Command Line Interface
//!
//! Generates and simplifies sum-of-products expressions from the shell.

use clap::{Parser, ValueEnum};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use sop_logic::{
    minimize_truth_table, Expression, SimplifyConfig, Simplification, SopError, TruthTable,
};
use std::process;

#[derive(Debug, Clone, ValueEnum)]
enum Command {
    /// Generate the SOP of a truth table and simplify it (default)
    Run,
    /// Generate the canonical SOP of a truth table only
    Generate,
    /// Simplify a wire-notation expression
    Simplify,
}

#[derive(Parser, Debug)]
#[command(name = "sop")]
#[command(about = "Sum-of-products generator and simplifier", long_about = None)]
#[command(version)]
struct Args {
    /// Output column bit string (e.g. 0110), packed rows with --packed, or a
    /// wire-notation expression for -D simplify
    #[arg(value_name = "INPUT")]
    input: String,

    /// Subcommand to execute
    #[arg(short = 'D', long = "do", value_enum, default_value = "run")]
    command: Command,

    /// Read INPUT as packed rows of WIDTH bits (inputs then output)
    #[arg(long = "packed", value_name = "WIDTH")]
    packed: Option<usize>,

    /// Stop simplifying after N passes
    #[arg(long = "max-passes", value_name = "N")]
    max_passes: Option<usize>,

    /// Use only the four core identities
    #[arg(long = "minimal-catalog")]
    minimal_catalog: bool,

    /// Print results as JSON
    #[arg(long = "json")]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> SimplifyConfig {
        SimplifyConfig {
            max_passes: self.max_passes,
            extended_catalog: !self.minimal_catalog,
        }
    }

    fn table(&self) -> Result<TruthTable, SopError> {
        let table = match self.packed {
            Some(width) => TruthTable::from_packed(&self.input, width)?,
            None => TruthTable::from_output_str(&self.input)?,
        };
        Ok(table)
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn print_simplification(result: &Simplification) {
    for line in result.log_lines() {
        println!("  {}", line);
    }
    println!("Passes:  {}", result.passes());
    if !result.reached_fixed_point() {
        println!("Stopped at the pass cap before a fixed point");
    }
    println!("Reduced: {}", result.reduced());
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.config();
    match args.command {
        Command::Run => {
            let table = args.table()?;
            let result = minimize_truth_table(&table, &config);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("SOP:     {}", result.sop());
                print_simplification(result.simplification());
            }
        }
        Command::Generate => {
            let sop = args.table()?.to_sop();
            if args.json {
                println!("{}", serde_json::to_string(&sop)?);
            } else {
                println!("{}", sop);
            }
        }
        Command::Simplify => {
            let expr = Expression::parse(&args.input).map_err(SopError::from)?;
            let result = expr.simplify_with_config(&config);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_simplification(&result);
            }
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = TermLogger::init(
        log_level(args.verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Could not install logger: {}", e);
    }

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
