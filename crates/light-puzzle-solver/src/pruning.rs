//! Search space reductions for the solver.
//!
//! These rules shrink the state space without changing the optimum: they
//! only drop press counts no minimal solution uses, and reject instances
//! where some light can never reach the target.

use crate::puzzle::PuzzleInstance;

/// Presses after which a button has returned every light it controls to
/// its starting color.
pub const CYCLE_LENGTH: u32 = 3;

/// Largest press count a minimal solution can use for a button with the
/// given limit. Three presses are the identity, so any solution pressing a
/// button 3+ times has a strictly cheaper one with three fewer presses.
pub fn effective_limit(limit: u32) -> u32 {
    limit.min(CYCLE_LENGTH - 1)
}

/// Effective limit of every button, in button order
pub fn effective_limits(instance: &PuzzleInstance) -> Vec<u32> {
    (0..instance.num_buttons())
        .map(|button| effective_limit(instance.press_limit(button)))
        .collect()
}

/// Find a light that cannot reach the target color under `limits`.
///
/// A light needing `d` advances must receive a total press count congruent
/// to `d` modulo 3 from the buttons covering it, and the smallest such total
/// is `d` itself.
pub fn find_unreachable_light(instance: &PuzzleInstance, limits: &[u32]) -> Option<usize> {
    instance
        .lights
        .iter()
        .enumerate()
        .find(|&(light, color)| {
            let needed = color.steps_to(instance.target_color) as u32;
            if needed == 0 {
                return false;
            }
            let capacity: u32 = instance
                .buttons_for_light(light)
                .map(|button| limits.get(button).copied().unwrap_or(0))
                .sum();
            capacity < needed
        })
        .map(|(light, _)| light)
}
