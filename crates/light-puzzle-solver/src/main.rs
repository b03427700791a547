//! CLI entry point for the light puzzle solver.
//!
//! Usage:
//!   light-puzzle-solver solve <puzzle.json> [options]
//!   light-puzzle-solver solve --preset medium
//!   light-puzzle-solver validate <puzzle.json> --presses 1,2,0
//!   light-puzzle-solver play --preset medium --sequence 0,1,1
//!   light-puzzle-solver generate --lights 6 --buttons 4 --seed 7
//!   light-puzzle-solver presets
//!
//! Results are printed as JSON. Set `RUST_LOG=debug` to see search progress.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use thiserror::Error;

use light_puzzle_solver::puzzle::lights_to_string;
use light_puzzle_solver::{
    check, generate, presets, solve_with_config, AdmissionError, AdmissionPolicy, GameSession,
    GeneratorConfig, InvalidInstance, LightColor, LoadError, PressError, PuzzleInstance, Score,
    SolveOutcome, SolverConfig, ValidationStatus,
};

#[derive(Parser)]
#[command(name = "light-puzzle-solver")]
#[command(about = "Minimum-press solver for the light-cycling button puzzle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where to read a puzzle from
#[derive(Args)]
struct PuzzleSource {
    /// Path to puzzle JSON file
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Read puzzle from stdin instead of file
    #[arg(long, conflicts_with = "file")]
    stdin: bool,

    /// Use a built-in puzzle (simple, medium, complex)
    #[arg(long, conflicts_with_all = ["file", "stdin"])]
    preset: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the fewest presses that turn every light to the target color
    Solve {
        #[command(flatten)]
        source: PuzzleSource,

        /// Stop searching after this many milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        /// Refuse puzzles with more lights than this
        #[arg(long, default_value = "20")]
        max_lights: usize,

        /// Refuse puzzles whose search could visit more states than this
        #[arg(long, default_value = "10000000")]
        max_search_states: u128,
    },

    /// Check a press-count vector against a puzzle
    Validate {
        #[command(flatten)]
        source: PuzzleSource,

        /// Presses per button, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        presses: Vec<u32>,
    },

    /// Replay a player's presses and score the attempt
    Play {
        #[command(flatten)]
        source: PuzzleSource,

        /// Buttons pressed, in order, comma separated
        #[arg(long, value_delimiter = ',')]
        sequence: Vec<usize>,

        /// Give up after the sequence instead of finishing
        #[arg(long)]
        give_up: bool,
    },

    /// Print a random puzzle
    Generate {
        #[arg(long, default_value = "5")]
        lights: usize,

        #[arg(long, default_value = "3")]
        buttons: usize,

        #[arg(long, default_value = "1")]
        min_presses: u32,

        #[arg(long, default_value = "3")]
        max_presses: u32,

        /// Chance that a button controls any given light
        #[arg(long, default_value = "0.5")]
        coverage: f64,

        #[arg(long, default_value = "R")]
        target: LightColor,

        /// Seed for a reproducible puzzle
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the built-in puzzles
    Presets,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("invalid puzzle: {0}")]
    Invalid(#[from] InvalidInstance),

    #[error("puzzle refused: {0}")]
    Admission(#[from] AdmissionError),

    #[error("press rejected: {0}")]
    Press(#[from] PressError),

    #[error("unknown preset '{name}' (known: {known})")]
    UnknownPreset { name: String, known: String },

    #[error("must provide a file path, --stdin or --preset")]
    NoInput,

    #[error("failed to write JSON: {0}")]
    Output(#[from] serde_json::Error),
}

/// Output format for a solve
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    possible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    button_presses: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_presses: Option<u32>,
    timed_out: bool,
    states_explored: usize,
    time_elapsed_ms: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidateOutput {
    valid: bool,
    status: String,
    final_lights: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlayOutput {
    #[serde(flatten)]
    score: Score,
    solved: bool,
    lights: String,
    /// Revealed only when the player gives up
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<Vec<u32>>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}

/// Run a command, returning the process exit code
fn run(cli: Cli) -> Result<i32, CliError> {
    match cli.command {
        Commands::Solve {
            source,
            timeout_ms,
            max_lights,
            max_search_states,
        } => {
            let puzzle = load_puzzle(&source)?;
            let policy = AdmissionPolicy {
                max_lights,
                max_search_states,
            };
            policy.admit(&puzzle)?;

            let config = SolverConfig {
                timeout: timeout_ms.map(Duration::from_millis),
            };
            let result = solve_with_config(&puzzle, &config)?;

            let timed_out = result.outcome == SolveOutcome::TimedOut;
            let solution = result.outcome.solution();
            let output = SolveOutput {
                possible: solution.as_ref().is_some_and(|s| s.possible),
                button_presses: solution.as_ref().and_then(|s| s.button_presses.clone()),
                total_presses: solution.as_ref().and_then(|s| s.total_presses),
                timed_out,
                states_explored: result.states_explored,
                time_elapsed_ms: result.time_elapsed_ms,
            };
            print_json(&output)?;

            Ok(if output.possible { 0 } else { 1 })
        }

        Commands::Validate { source, presses } => {
            let puzzle = load_puzzle(&source)?;
            let result = check(&puzzle, &presses);
            let output = ValidateOutput {
                valid: result.is_valid(),
                status: describe_status(result.status),
                final_lights: lights_to_string(&result.final_lights),
            };
            print_json(&output)?;

            Ok(if output.valid { 0 } else { 1 })
        }

        Commands::Play {
            source,
            sequence,
            give_up,
        } => {
            let puzzle = load_puzzle(&source)?;
            let mut session = GameSession::new(puzzle)?;
            for button in sequence {
                if session.is_over() {
                    warn!("ignoring press of button {} after the game ended", button);
                    break;
                }
                session.press(button)?;
            }

            let score = if give_up {
                session.give_up()
            } else {
                session.finish()
            };
            let output = PlayOutput {
                score,
                solved: session.is_solved(),
                lights: lights_to_string(session.lights()),
                solution: if give_up {
                    session.optimal().button_presses.clone()
                } else {
                    None
                },
            };
            print_json(&output)?;

            Ok(0)
        }

        Commands::Generate {
            lights,
            buttons,
            min_presses,
            max_presses,
            coverage,
            target,
            seed,
        } => {
            let config = GeneratorConfig {
                lights,
                buttons,
                min_presses,
                max_presses,
                coverage,
                target_color: target,
            };
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            print_json(&generate(&config, &mut rng))?;

            Ok(0)
        }

        Commands::Presets => {
            print_json(&presets::all())?;
            Ok(0)
        }
    }
}

fn load_puzzle(source: &PuzzleSource) -> Result<PuzzleInstance, CliError> {
    if let Some(name) = &source.preset {
        return presets::find(name).ok_or_else(|| CliError::UnknownPreset {
            name: name.clone(),
            known: presets::names().join(", "),
        });
    }

    if source.stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(LoadError::from)?;
        Ok(PuzzleInstance::from_json(&buffer)?)
    } else if let Some(path) = &source.file {
        Ok(PuzzleInstance::load(path)?)
    } else {
        Err(CliError::NoInput)
    }
}

fn describe_status(status: ValidationStatus) -> String {
    match status {
        ValidationStatus::Reached => "reached".to_string(),
        ValidationStatus::WrongColors => "wrong_colors".to_string(),
        ValidationStatus::OverLimit { button } => format!("over_limit: button {}", button),
        ValidationStatus::WrongLength { expected, actual } => {
            format!("wrong_length: expected {}, got {}", expected, actual)
        }
        ValidationStatus::Malformed(invalid) => format!("malformed: {}", invalid),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
