//! Error types for puzzle definitions and the layers around the solver.
//!
//! An infeasible puzzle is not an error: it is reported as a solution with
//! `possible: false`.

use std::io;

use thiserror::Error;

/// A malformed puzzle definition, rejected before any search starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInstance {
    #[error("puzzle has no lights")]
    NoLights,

    #[error("puzzle has no buttons")]
    NoButtons,

    #[error("{buttons} buttons but {limits} press limits")]
    PressLimitCount { buttons: usize, limits: usize },

    #[error("button {button} controls no lights")]
    EmptyButton { button: usize },

    #[error("button {button} controls light {light}, but there are only {lights} lights")]
    LightOutOfRange {
        button: usize,
        light: usize,
        lights: usize,
    },

    #[error("button {button} lists light {light} more than once")]
    DuplicateLight { button: usize, light: usize },

    #[error("button {button} has negative press limit {limit}")]
    NegativePressLimit { button: usize, limit: i32 },
}

/// Failure to read a puzzle from a file or a JSON string.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read puzzle: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse puzzle JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] InvalidInstance),
}

/// A puzzle refused by the caller-side admission policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmissionError {
    #[error("{lights} lights exceeds the limit of {max}")]
    TooManyLights { lights: usize, max: usize },

    #[error("search could visit {states} states, limit is {max}")]
    SearchTooLarge { states: u128, max: u128 },

    #[error("search state count overflows")]
    SearchUnbounded,
}

/// A player press rejected by a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PressError {
    #[error("there is no button {button}")]
    UnknownButton { button: usize },

    #[error("button {button} has already been pressed {limit} times")]
    LimitReached { button: usize, limit: u32 },

    #[error("the game is over")]
    GameOver,
}
