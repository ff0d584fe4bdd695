//! Codebreaker - CLI
//!
//! Solves, checks and generates digit-lock puzzles.

use anyhow::Result;
use clap::{Parser, Subcommand};
use codebreaker::{
    commands::{
        GenerateOptions, SolveConfig, analyze_probe, check_partial, explain_code, run_generate,
        run_play, run_solve,
    },
    output::{
        print_analysis_result, print_check_result, print_explanation, print_generated,
        print_solve_report,
    },
    puzzles::{Puzzle, default_puzzle, load_from_file},
    solver::{DigitPolicy, GeneratorConfig, SolutionSet},
};
use log::info;

#[derive(Parser)]
#[command(
    name = "codebreaker",
    about = "Constraint-based code breaker for digit-lock puzzles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Clue file to use instead of the built-in puzzle
    #[arg(short, long, global = true)]
    puzzle: Option<String>,

    /// Only allow codes that use each digit at most once
    #[arg(short, long, global = true)]
    distinct: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the puzzle interactively (default)
    Play,

    /// List every code consistent with the clues
    Solve {
        /// Scan on a single thread
        #[arg(long)]
        sequential: bool,

        /// Maximum number of codes to list
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show per-clue verdicts for a partial code such as 3_1_7
    Check {
        /// Code with '_' for unset positions
        code: String,
    },

    /// Show digit and position counts of a full code against each clue
    Explain {
        /// Full code
        code: String,
    },

    /// Measure how well a further guess would split the remaining codes
    Analyze {
        /// Probe guess
        guess: String,
    },

    /// Generate new puzzles with a unique solution
    Generate {
        /// Digits per code
        #[arg(short = 'L', long, default_value = "5")]
        length: usize,

        /// Random seed for reproducible puzzles
        #[arg(short, long)]
        seed: Option<u64>,

        /// Maximum clues per puzzle
        #[arg(short = 'm', long, default_value = "8")]
        max_clues: usize,

        /// Random guesses considered per clue
        #[arg(long, default_value = "64")]
        samples: usize,

        /// Number of puzzles
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },
}

/// Load the puzzle selected by the -p flag
fn load_puzzle(path: Option<&str>) -> Result<Puzzle> {
    let puzzle = match path {
        Some(path) => load_from_file(path)?,
        None => default_puzzle()?,
    };
    info!(
        "Puzzle has {} clues over {}-digit codes",
        puzzle.clues().len(),
        puzzle.code_length()
    );
    Ok(puzzle)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let policy = if cli.distinct {
        DigitPolicy::Distinct
    } else {
        DigitPolicy::Any
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let puzzle_path = cli.puzzle.as_deref();

    match command {
        Commands::Play => {
            let puzzle = load_puzzle(puzzle_path)?;
            let solutions = solve_puzzle(&puzzle)?;
            run_play(&puzzle, &solutions, policy)
        }
        Commands::Solve { sequential, limit } => {
            let puzzle = load_puzzle(puzzle_path)?;
            let report = run_solve(&puzzle, SolveConfig { sequential, policy })?;
            print_solve_report(&report, limit);
            Ok(())
        }
        Commands::Check { code } => {
            let puzzle = load_puzzle(puzzle_path)?;
            let solutions = solve_puzzle(&puzzle)?;
            print_check_result(&check_partial(&puzzle, &solutions, &code, policy)?);
            Ok(())
        }
        Commands::Explain { code } => {
            let puzzle = load_puzzle(puzzle_path)?;
            print_explanation(&explain_code(&puzzle, &code)?);
            Ok(())
        }
        Commands::Analyze { guess } => {
            let puzzle = load_puzzle(puzzle_path)?;
            let solutions = solve_puzzle(&puzzle)?.filter_by(policy);
            print_analysis_result(&analyze_probe(&solutions, &guess)?);
            Ok(())
        }
        Commands::Generate {
            length,
            seed,
            max_clues,
            samples,
            count,
        } => {
            let options = GenerateOptions {
                config: GeneratorConfig {
                    length,
                    max_clues,
                    samples,
                    distinct_digits: cli.distinct,
                },
                seed,
                count,
            };
            print_generated(&run_generate(&options)?);
            Ok(())
        }
    }
}

fn solve_puzzle(puzzle: &Puzzle) -> Result<SolutionSet> {
    Ok(puzzle.solver()?.solve())
}
