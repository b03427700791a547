//! Built-in puzzles offered alongside custom games.

use crate::puzzle::LightColor::{Blue as B, Green as G, Red as R};
use crate::puzzle::PuzzleInstance;

/// Every preset, easiest first
pub fn all() -> Vec<PuzzleInstance> {
    vec![
        PuzzleInstance::new(
            vec![R, G, B, G, R],
            vec![vec![0, 1, 2], vec![1, 3, 4], vec![0, 2, 4]],
            vec![2, 2, 2],
            R,
        )
        .named("Simple Test"),
        PuzzleInstance::new(
            vec![B, G, B, G, R, B],
            vec![vec![0, 2, 5], vec![1, 3], vec![2, 4, 5]],
            vec![3, 2, 2],
            R,
        )
        .named("Medium Test"),
        PuzzleInstance::new(
            vec![G, G, B, R, B, G, R],
            vec![vec![0, 1, 2], vec![2, 3, 4], vec![4, 5, 6], vec![0, 3, 6]],
            vec![3, 3, 2, 2],
            R,
        )
        .named("Complex Test"),
    ]
}

/// Look a preset up by full name or first word, ignoring case
/// (`"Medium Test"`, `"medium"`).
pub fn find(name: &str) -> Option<PuzzleInstance> {
    let wanted = name.trim().to_ascii_lowercase();
    all().into_iter().find(|preset| {
        let preset_name = preset.name.as_deref().unwrap_or_default().to_ascii_lowercase();
        preset_name == wanted || preset_name.split_whitespace().next() == Some(wanted.as_str())
    })
}

/// Names accepted by [`find`]
pub fn names() -> Vec<String> {
    all().into_iter().filter_map(|preset| preset.name).collect()
}
