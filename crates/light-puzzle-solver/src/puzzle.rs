//! Puzzle representation types.
//!
//! These types deserialize directly from the JSON puzzle format used by the
//! game front end: colors are single letters and fields are camelCase.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidInstance, LoadError};

/// Light color. A press advances Red -> Green -> Blue -> Red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightColor {
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
    #[serde(rename = "B")]
    Blue,
}

impl LightColor {
    pub const ALL: [LightColor; 3] = [LightColor::Red, LightColor::Green, LightColor::Blue];

    /// Position in the cycle (0, 1 or 2)
    pub fn index(self) -> u8 {
        match self {
            LightColor::Red => 0,
            LightColor::Green => 1,
            LightColor::Blue => 2,
        }
    }

    /// Color at a cycle position, taken modulo 3
    pub fn from_index(index: u8) -> LightColor {
        Self::ALL[(index % 3) as usize]
    }

    /// The color after one press
    pub fn next(self) -> LightColor {
        match self {
            LightColor::Red => LightColor::Green,
            LightColor::Green => LightColor::Blue,
            LightColor::Blue => LightColor::Red,
        }
    }

    /// The color after `presses` presses
    pub fn advance(self, presses: u32) -> LightColor {
        Self::from_index(((self.index() as u32 + presses % 3) % 3) as u8)
    }

    /// Number of presses (0..=2) that turn this color into `target`
    pub fn steps_to(self, target: LightColor) -> u8 {
        (target.index() + 3 - self.index()) % 3
    }

    pub fn to_char(self) -> char {
        match self {
            LightColor::Red => 'R',
            LightColor::Green => 'G',
            LightColor::Blue => 'B',
        }
    }

    pub fn from_char(c: char) -> Option<LightColor> {
        match c.to_ascii_uppercase() {
            'R' => Some(LightColor::Red),
            'G' => Some(LightColor::Green),
            'B' => Some(LightColor::Blue),
            _ => None,
        }
    }
}

impl fmt::Display for LightColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for LightColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                LightColor::from_char(c).ok_or_else(|| format!("unknown color '{}'", s))
            }
            _ => match s.to_ascii_lowercase().as_str() {
                "red" => Ok(LightColor::Red),
                "green" => Ok(LightColor::Green),
                "blue" => Ok(LightColor::Blue),
                _ => Err(format!("unknown color '{}'", s)),
            },
        }
    }
}

/// Render a light vector as a compact string such as `RGBGR`
pub fn lights_to_string(lights: &[LightColor]) -> String {
    lights.iter().map(|l| l.to_char()).collect()
}

/// A puzzle instance: initial lights, buttons with their press limits, and
/// the color every light must reach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleInstance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub lights: Vec<LightColor>,
    /// Light indices (0-based) advanced by each button
    pub buttons: Vec<Vec<usize>>,
    /// Maximum presses per button. Signed so a negative limit in the input
    /// surfaces as [`InvalidInstance::NegativePressLimit`].
    pub max_presses: Vec<i32>,
    pub target_color: LightColor,
}

impl PuzzleInstance {
    pub fn new(
        lights: Vec<LightColor>,
        buttons: Vec<Vec<usize>>,
        max_presses: Vec<i32>,
        target_color: LightColor,
    ) -> Self {
        Self {
            name: None,
            lights,
            buttons,
            max_presses,
            target_color,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parse and validate a puzzle from JSON
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let instance: PuzzleInstance = serde_json::from_str(json)?;
        instance.validate()?;
        Ok(instance)
    }

    /// Read, parse and validate a puzzle file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn num_lights(&self) -> usize {
        self.lights.len()
    }

    pub fn num_buttons(&self) -> usize {
        self.buttons.len()
    }

    /// Check the structural rules every instance must satisfy before it can
    /// be solved or played.
    pub fn validate(&self) -> Result<(), InvalidInstance> {
        if self.lights.is_empty() {
            return Err(InvalidInstance::NoLights);
        }
        if self.buttons.is_empty() {
            return Err(InvalidInstance::NoButtons);
        }
        if self.max_presses.len() != self.buttons.len() {
            return Err(InvalidInstance::PressLimitCount {
                buttons: self.buttons.len(),
                limits: self.max_presses.len(),
            });
        }

        let num_lights = self.lights.len();
        for (button, lights) in self.buttons.iter().enumerate() {
            if lights.is_empty() {
                return Err(InvalidInstance::EmptyButton { button });
            }
            let mut seen = vec![false; num_lights];
            for &light in lights {
                if light >= num_lights {
                    return Err(InvalidInstance::LightOutOfRange {
                        button,
                        light,
                        lights: num_lights,
                    });
                }
                if seen[light] {
                    return Err(InvalidInstance::DuplicateLight { button, light });
                }
                seen[light] = true;
            }
        }

        for (button, &limit) in self.max_presses.iter().enumerate() {
            if limit < 0 {
                return Err(InvalidInstance::NegativePressLimit { button, limit });
            }
        }

        Ok(())
    }

    /// Press limit of a button; negative limits read as zero
    pub fn press_limit(&self, button: usize) -> u32 {
        self.max_presses
            .get(button)
            .map(|&limit| limit.max(0) as u32)
            .unwrap_or(0)
    }

    /// Whether every light in `lights` shows the target color
    pub fn is_goal(&self, lights: &[LightColor]) -> bool {
        lights.iter().all(|&l| l == self.target_color)
    }

    /// Buttons that control the given light
    pub fn buttons_for_light(&self, light: usize) -> impl Iterator<Item = usize> + '_ {
        self.buttons
            .iter()
            .enumerate()
            .filter(move |(_, lights)| lights.contains(&light))
            .map(|(button, _)| button)
    }
}
