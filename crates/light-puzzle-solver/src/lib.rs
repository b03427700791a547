//! Exact solver for the light-cycling button puzzle.
//!
//! Each button advances a fixed set of lights one step through
//! Red -> Green -> Blue, up to a per-button press limit. The solver finds
//! the fewest presses that turn every light to the target color, or proves
//! that no combination within the limits does.

pub mod admission;
pub mod encoder;
pub mod error;
pub mod generate;
pub mod presets;
pub mod pruning;
pub mod puzzle;
pub mod score;
pub mod session;
pub mod solver;
pub mod validator;

// Re-export main types
pub use admission::{search_bound, state_space_bound, AdmissionPolicy};
pub use encoder::{StateEncoder, StateKey};
pub use error::{AdmissionError, InvalidInstance, LoadError, PressError};
pub use generate::{generate, GeneratorConfig};
pub use puzzle::{LightColor, PuzzleInstance};
pub use score::{finish_accuracy, give_up_accuracy, Score};
pub use session::{GameSession, PressOutcome};
pub use solver::{solve, solve_with_config, Solution, SolveOutcome, SolverConfig, SolverResult};
pub use validator::{apply_presses, apply_sequence, check, validate, ValidationResult, ValidationStatus};
