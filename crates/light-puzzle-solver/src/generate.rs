//! Random puzzle generation for custom games.

use rand::Rng;

use crate::puzzle::{LightColor, PuzzleInstance};

const DEFAULT_COVERAGE: f64 = 0.5;

/// Parameters for a random puzzle
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub lights: usize,
    pub buttons: usize,
    /// Press limits are drawn uniformly from `min_presses..=max_presses`
    pub min_presses: u32,
    pub max_presses: u32,
    /// Chance that a button controls any given light. Values outside 0..=1
    /// are clamped; NaN and infinities fall back to the default.
    pub coverage: f64,
    pub target_color: LightColor,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            lights: 5,
            buttons: 3,
            min_presses: 1,
            max_presses: 3,
            coverage: DEFAULT_COVERAGE,
            target_color: LightColor::Red,
        }
    }
}

/// Build a random puzzle. Counts of zero are raised to one, and every
/// button controls at least one light.
pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> PuzzleInstance {
    let num_lights = config.lights.max(1);
    let num_buttons = config.buttons.max(1);
    let min_presses = config.min_presses.min(config.max_presses);
    let coverage = if config.coverage.is_finite() {
        config.coverage.clamp(0.0, 1.0)
    } else {
        DEFAULT_COVERAGE
    };

    let lights = (0..num_lights)
        .map(|_| LightColor::from_index(rng.random_range(0..3)))
        .collect();

    let buttons = (0..num_buttons)
        .map(|_| {
            let mut controlled: Vec<usize> = (0..num_lights)
                .filter(|_| rng.random_bool(coverage))
                .collect();
            if controlled.is_empty() {
                controlled.push(rng.random_range(0..num_lights));
            }
            controlled
        })
        .collect();

    let max_presses = (0..num_buttons)
        .map(|_| {
            let limit = rng.random_range(min_presses..=config.max_presses);
            i32::try_from(limit).unwrap_or(i32::MAX)
        })
        .collect();

    PuzzleInstance::new(lights, buttons, max_presses, config.target_color)
}
