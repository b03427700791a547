//! Caller-side limits on what gets handed to the solver.
//!
//! The solver has no internal budget and runs in time proportional to the
//! states it visits, so front ends check an instance here first.

use crate::error::AdmissionError;
use crate::pruning::effective_limits;
use crate::puzzle::PuzzleInstance;

/// Nominal state-space size, `3^L * prod(maxPresses[i] + 1)`.
/// `None` if it does not fit in a `u128`.
pub fn state_space_bound(instance: &PuzzleInstance) -> Option<u128> {
    let lights = (0..instance.num_lights()).try_fold(1u128, |acc, _| acc.checked_mul(3))?;
    (0..instance.num_buttons()).try_fold(lights, |acc, button| {
        acc.checked_mul(instance.press_limit(button) as u128 + 1)
    })
}

/// Most states one search can visit: lights follow from the press counts,
/// and counts never exceed the effective limits.
pub fn search_bound(instance: &PuzzleInstance) -> Option<u128> {
    effective_limits(instance)
        .into_iter()
        .try_fold(1u128, |acc, limit| acc.checked_mul(limit as u128 + 1))
}

#[derive(Debug, Clone)]
pub struct AdmissionPolicy {
    pub max_lights: usize,
    pub max_search_states: u128,
}

impl Default for AdmissionPolicy {
    fn default() -> Self {
        Self {
            max_lights: 20,
            max_search_states: 10_000_000,
        }
    }
}

impl AdmissionPolicy {
    pub fn admit(&self, instance: &PuzzleInstance) -> Result<(), AdmissionError> {
        if instance.num_lights() > self.max_lights {
            return Err(AdmissionError::TooManyLights {
                lights: instance.num_lights(),
                max: self.max_lights,
            });
        }
        let states = search_bound(instance).ok_or(AdmissionError::SearchUnbounded)?;
        if states > self.max_search_states {
            return Err(AdmissionError::SearchTooLarge {
                states,
                max: self.max_search_states,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::LightColor::{Green as G, Red as R};

    fn puzzle(lights: usize, limits: Vec<i32>) -> PuzzleInstance {
        let buttons = (0..limits.len()).map(|b| vec![b % lights]).collect();
        PuzzleInstance::new(vec![G; lights], buttons, limits, R)
    }

    #[test]
    fn test_bounds() {
        let instance = puzzle(3, vec![2, 5, 0]);
        assert_eq!(state_space_bound(&instance), Some(27 * 3 * 6));
        assert_eq!(search_bound(&instance), Some(3 * 3));
    }

    #[test]
    fn test_state_space_overflow() {
        assert_eq!(state_space_bound(&puzzle(90, vec![1])), None);
    }

    #[test]
    fn test_admit() {
        let policy = AdmissionPolicy::default();
        assert_eq!(policy.admit(&puzzle(5, vec![2, 2, 2])), Ok(()));
        assert_eq!(
            policy.admit(&puzzle(21, vec![1])),
            Err(AdmissionError::TooManyLights { lights: 21, max: 20 })
        );

        let strict = AdmissionPolicy {
            max_lights: 20,
            max_search_states: 8,
        };
        assert_eq!(
            strict.admit(&puzzle(4, vec![2, 2])),
            Err(AdmissionError::SearchTooLarge { states: 9, max: 8 })
        );
    }
}
