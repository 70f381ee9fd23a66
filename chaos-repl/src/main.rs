mod document;
mod error;
mod exercise;

use chaos_rewrite::{RewriteOptionsBuilder, Rewriter, RuleSet};
use clap::Parser;
use error::Error;
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{io, process::ExitCode};

/// Generates practice exercises for the laws of logarithms.
///
/// Each exercise is a randomly rewritten `log_b(b^k)`, printed as LaTeX display math along with
/// its answer `k`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of exercises to generate.
    #[arg(long, default_value_t = 500)]
    count: usize,

    /// Maximum recursion depth of each rewrite pass.
    #[arg(long, default_value_t = 3)]
    depth: usize,

    /// Number of times each answer is rewritten.
    #[arg(long, default_value_t = 2)]
    passes: usize,

    /// Number of exercises to drop from the start of the batch, after sorting it from shortest to
    /// longest.
    #[arg(long, default_value_t = 400)]
    skip: usize,

    /// Number of exercises to print after the skipped ones. Prints all remaining by default.
    #[arg(long)]
    take: Option<usize>,

    /// Upper bound on the number of nodes in a rewritten expression.
    #[arg(long)]
    max_nodes: Option<usize>,

    /// Seed for the random number generator. A random seed is used by default.
    #[arg(long)]
    seed: Option<u64>,

    /// Only use the basic rewrite rules.
    #[arg(long)]
    simple: bool,

    /// Wrap the output in a standalone LaTeX document.
    #[arg(long)]
    document: bool,

    /// Read `BASE EXPONENT` requests from the terminal instead of generating a batch.
    #[arg(short, long)]
    interactive: bool,
}

impl Args {
    fn rewriter(&self) -> Rewriter {
        Rewriter::new(RewriteOptionsBuilder::new()
            .max_depth(self.depth)
            .rule_set(if self.simple { RuleSet::Simple } else { RuleSet::Rich })
            .max_nodes(self.max_nodes)
            .build())
    }
}

/// Generates a batch of exercises and prints the requested slice of it.
fn run_batch(args: &Args, rewriter: &Rewriter, rng: &mut StdRng) -> Result<(), Error> {
    let lines = exercise::batch(rewriter, args.count, args.passes, rng);
    let lines = exercise::window(&lines, args.skip, args.take);
    info!("printing {} exercises", lines.len());
    document::write_lines(&mut io::stdout().lock(), lines, args.document)?;
    Ok(())
}

/// Handles a single line typed in interactive mode.
fn respond(line: &str, args: &Args, rewriter: &Rewriter, rng: &mut StdRng) -> Result<String, Error> {
    let request = match exercise::parse_request(line)? {
        Some(request) => request,
        None => exercise::random_request(rng),
    };
    let exercise = exercise::generate(rewriter, request, args.passes, rng)?;
    Ok(exercise.line())
}

/// Reads requests from the terminal until it is closed.
fn run_interactive(args: &Args, rewriter: &Rewriter, rng: &mut StdRng) -> Result<(), Error> {
    let mut rl = DefaultEditor::new()?;

    loop {
        let input = match rl.readline("> ") {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err.into()),
        };

        if !input.trim().is_empty() {
            rl.add_history_entry(&input)?;
        }

        match respond(&input, args, rewriter, rng) {
            Ok(line) => println!("{}", line),
            Err(err) => err.report_to_stderr(),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("seed: {}", seed);

    let rewriter = args.rewriter();
    let mut rng = StdRng::seed_from_u64(seed);

    let result = if args.interactive {
        run_interactive(&args, &rewriter, &mut rng)
    } else {
        run_batch(&args, &rewriter, &mut rng)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report_to_stderr();
            ExitCode::FAILURE
        },
    }
}
