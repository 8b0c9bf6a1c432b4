use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use closedform::{
    Program,
    kernel::arithmetic::Operation,
    run,
    session::source::{IterSource, LineSource, ReaderLines},
};
use tracing_subscriber::EnvFilter;

/// closedform is a set of small calculators for areas, arithmetic, linear
/// systems and quadratic equations.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
struct Args {
    /// Do not print prompts, only results.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Area of a square, rectangle or triangle.
    Area,
    /// Add, subtract, divide and multiply two numbers.
    Arith {
        /// Only perform this operation (add, sub, mul or div).
        #[arg(short, long)]
        op: Option<Operation>,
    },
    /// Solve two linear equations such as `5x + 6y = 10` with Cramer's rule.
    Cramer {
        /// The two equations. Read from standard input if omitted.
        #[arg(num_args = 0..=2)]
        equations: Vec<String>,
    },
    /// Solve a quadratic equation such as `2x^2 + 5x - 10`.
    Quadratic {
        /// The equation. Read from standard input if omitted.
        equation: Option<String>,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();

    let (program, arguments) = match args.command {
        Command::Area => (Program::Area, Vec::new()),
        Command::Arith { op } => (Program::Arithmetic(op), Vec::new()),
        Command::Cramer { equations } => (Program::Cramer, equations),
        Command::Quadratic { equation } => (Program::Quadratic, equation.into_iter().collect()),
    };

    let prompts = !args.quiet && arguments.is_empty() && io::stdin().is_terminal();
    let source: Box<dyn LineSource> = if arguments.is_empty() {
        Box::new(ReaderLines::new(io::stdin().lock()))
    } else {
        Box::new(IterSource::new(arguments))
    };

    if let Err(e) = run(program, source, io::stdout().lock(), prompts) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
