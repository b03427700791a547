//! A player's game on one puzzle.
//!
//! The session solves the puzzle when it starts, then tallies the player's
//! presses until the lights reach the target or the player gives up.

use log::debug;

use crate::error::{InvalidInstance, PressError};
use crate::puzzle::{LightColor, PuzzleInstance};
use crate::score::{score_finish, score_give_up, Score};
use crate::solver::{solve, Solution};

/// Effect of one accepted press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// The press was applied and the puzzle is not solved yet
    Pressed,
    /// The press brought every light to the target; the game is over
    Solved,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    instance: PuzzleInstance,
    solution: Solution,
    lights: Vec<LightColor>,
    presses: Vec<u32>,
    over: bool,
}

impl GameSession {
    pub fn new(instance: PuzzleInstance) -> Result<Self, InvalidInstance> {
        let solution = solve(&instance)?;
        debug!(
            "session started for {:?}, optimal {:?}",
            instance.name, solution.total_presses
        );
        Ok(Self {
            lights: instance.lights.clone(),
            presses: vec![0; instance.num_buttons()],
            instance,
            solution,
            over: false,
        })
    }

    pub fn instance(&self) -> &PuzzleInstance {
        &self.instance
    }

    /// The solver's answer for this puzzle
    pub fn optimal(&self) -> &Solution {
        &self.solution
    }

    pub fn lights(&self) -> &[LightColor] {
        &self.lights
    }

    /// Presses made so far, per button
    pub fn presses(&self) -> &[u32] {
        &self.presses
    }

    pub fn total_presses(&self) -> u32 {
        self.presses.iter().sum()
    }

    pub fn is_solved(&self) -> bool {
        self.instance.is_goal(&self.lights)
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Presses left on a button, `None` for an unknown button
    pub fn remaining(&self, button: usize) -> Option<u32> {
        let used = *self.presses.get(button)?;
        Some(self.instance.press_limit(button).saturating_sub(used))
    }

    pub fn press(&mut self, button: usize) -> Result<PressOutcome, PressError> {
        if self.over {
            return Err(PressError::GameOver);
        }
        let remaining = self
            .remaining(button)
            .ok_or(PressError::UnknownButton { button })?;
        if remaining == 0 {
            return Err(PressError::LimitReached {
                button,
                limit: self.instance.press_limit(button),
            });
        }

        for &light in &self.instance.buttons[button] {
            self.lights[light] = self.lights[light].next();
        }
        self.presses[button] += 1;

        if self.is_solved() {
            self.over = true;
            Ok(PressOutcome::Solved)
        } else {
            Ok(PressOutcome::Pressed)
        }
    }

    /// End the game and score it
    pub fn finish(&mut self) -> Score {
        self.over = true;
        score_finish(&self.solution, self.total_presses())
    }

    /// End the game early and score the progress so far
    pub fn give_up(&mut self) -> Score {
        self.over = true;
        let on_target = self
            .lights
            .iter()
            .filter(|&&light| light == self.instance.target_color)
            .count();
        score_give_up(
            &self.solution,
            self.total_presses(),
            on_target,
            self.lights.len(),
        )
    }

    /// Back to the initial lights with no presses made
    pub fn restart(&mut self) {
        self.lights = self.instance.lights.clone();
        self.presses.iter_mut().for_each(|count| *count = 0);
        self.over = false;
    }
}
