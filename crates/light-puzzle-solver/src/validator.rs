//! Press simulation and solution checking.
//!
//! Nothing here calls the solver: it only applies presses
//! to the initial lights and compares the result with the target.

use crate::error::InvalidInstance;
use crate::puzzle::{LightColor, PuzzleInstance};

/// Outcome of checking a press vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Every light ends on the target color
    Reached,
    /// Presses are legal but some light ends on another color
    WrongColors,
    /// A button is pressed more often than its limit allows
    OverLimit { button: usize },
    /// The vector does not have one entry per button
    WrongLength { expected: usize, actual: usize },
    /// The puzzle itself is malformed, so no press vector can solve it
    Malformed(InvalidInstance),
}

/// Result of checking a press vector
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub status: ValidationStatus,
    /// Lights after applying the presses (initial lights on a length
    /// mismatch or a malformed puzzle)
    pub final_lights: Vec<LightColor>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.status == ValidationStatus::Reached
    }
}

/// Lights after pressing button `i` exactly `presses[i]` times, in any order
pub fn apply_presses(instance: &PuzzleInstance, presses: &[u32]) -> Vec<LightColor> {
    let mut lights = instance.lights.clone();
    for (button, &count) in instance.buttons.iter().zip(presses) {
        for &light in button {
            if let Some(color) = lights.get_mut(light) {
                *color = color.advance(count);
            }
        }
    }
    lights
}

/// Lights after pressing buttons one at a time in the given order.
///
/// Returns `None` if the sequence names a button that does not exist.
pub fn apply_sequence(instance: &PuzzleInstance, sequence: &[usize]) -> Option<Vec<LightColor>> {
    let mut lights = instance.lights.clone();
    for &button in sequence {
        for &light in instance.buttons.get(button)? {
            if let Some(color) = lights.get_mut(light) {
                *color = color.next();
            }
        }
    }
    Some(lights)
}

/// Check a press vector against the limits and the target color
pub fn check(instance: &PuzzleInstance, presses: &[u32]) -> ValidationResult {
    if let Err(invalid) = instance.validate() {
        return ValidationResult {
            status: ValidationStatus::Malformed(invalid),
            final_lights: instance.lights.clone(),
        };
    }
    if presses.len() != instance.num_buttons() {
        return ValidationResult {
            status: ValidationStatus::WrongLength {
                expected: instance.num_buttons(),
                actual: presses.len(),
            },
            final_lights: instance.lights.clone(),
        };
    }

    let final_lights = apply_presses(instance, presses);

    let over_limit = presses
        .iter()
        .enumerate()
        .find(|&(button, &count)| count > instance.press_limit(button));
    let status = if let Some((button, _)) = over_limit {
        ValidationStatus::OverLimit { button }
    } else if instance.is_goal(&final_lights) {
        ValidationStatus::Reached
    } else {
        ValidationStatus::WrongColors
    };

    ValidationResult {
        status,
        final_lights,
    }
}

/// Simple verification: does the press vector solve the puzzle?
pub fn validate(instance: &PuzzleInstance, presses: &[u32]) -> bool {
    check(instance, presses).is_valid()
}
