use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use light_puzzle_solver::{
    apply_presses, apply_sequence, generate, presets, solve, validate, GeneratorConfig,
    LightColor, PuzzleInstance, Solution,
};

/// Smallest total over every press vector within the limits, if any
fn brute_force_minimum(puzzle: &PuzzleInstance) -> Option<u32> {
    let limits: Vec<u32> = (0..puzzle.num_buttons())
        .map(|b| puzzle.press_limit(b))
        .collect();
    let mut presses = vec![0u32; limits.len()];
    let mut best: Option<u32> = None;

    loop {
        if validate(puzzle, &presses) {
            let total = presses.iter().sum();
            best = Some(best.map_or(total, |b: u32| b.min(total)));
        }

        // Next vector in mixed-radix order
        let mut pos = 0;
        while pos < limits.len() && presses[pos] == limits[pos] {
            presses[pos] = 0;
            pos += 1;
        }
        if pos == limits.len() {
            return best;
        }
        presses[pos] += 1;
    }
}

fn small_puzzles(count: usize, seed: u64) -> Vec<PuzzleInstance> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let config = GeneratorConfig {
                lights: rng.random_range(1..=4),
                buttons: rng.random_range(1..=3),
                min_presses: 0,
                max_presses: 4,
                coverage: 0.5,
                target_color: LightColor::from_index(rng.random_range(0..3)),
            };
            generate(&config, &mut rng)
        })
        .collect()
}

#[test]
fn matches_brute_force_minimum() {
    for puzzle in small_puzzles(300, 2024) {
        let solution = solve(&puzzle).unwrap();
        assert_eq!(
            solution.total_presses,
            brute_force_minimum(&puzzle),
            "{:?}",
            puzzle
        );
        assert_eq!(solution.possible, solution.total_presses.is_some());
    }
}

#[test]
fn solutions_validate_and_respect_limits() {
    for puzzle in small_puzzles(200, 99) {
        let solution = solve(&puzzle).unwrap();
        if let Some(presses) = &solution.button_presses {
            assert!(validate(&puzzle, presses), "{:?}", puzzle);
            for (button, &count) in presses.iter().enumerate() {
                assert!(count <= puzzle.press_limit(button));
            }
            assert_eq!(solution.total_presses, Some(presses.iter().sum()));
        }
    }
}

#[test]
fn repeated_solves_agree() {
    for puzzle in small_puzzles(50, 5) {
        assert_eq!(solve(&puzzle).unwrap(), solve(&puzzle).unwrap());
    }
}

#[test]
fn press_order_is_irrelevant() {
    let mut rng = StdRng::seed_from_u64(11);
    for puzzle in small_puzzles(50, 12) {
        let presses: Vec<u32> = (0..puzzle.num_buttons())
            .map(|_| rng.random_range(0..5))
            .collect();
        let mut sequence: Vec<usize> = presses
            .iter()
            .enumerate()
            .flat_map(|(button, &count)| std::iter::repeat(button).take(count as usize))
            .collect();
        sequence.shuffle(&mut rng);

        assert_eq!(
            apply_sequence(&puzzle, &sequence),
            Some(apply_presses(&puzzle, &presses))
        );
    }
}

#[test]
fn uniform_start_needs_no_presses() {
    for color in LightColor::ALL {
        let puzzle = PuzzleInstance::new(vec![color; 4], vec![vec![0, 2], vec![1]], vec![2, 2], color);
        assert_eq!(solve(&puzzle).unwrap(), Solution::found(vec![0, 0]));
    }
}

#[test]
fn zero_limits_are_infeasible() {
    let puzzle = PuzzleInstance::new(
        vec![LightColor::Green, LightColor::Red],
        vec![vec![0, 1], vec![0]],
        vec![0, 0],
        LightColor::Red,
    );
    assert_eq!(solve(&puzzle).unwrap(), Solution::impossible());
}

#[test]
fn preset_answers() {
    let simple = presets::find("simple").unwrap();
    assert_eq!(solve(&simple).unwrap(), Solution::impossible());

    let medium = presets::find("medium").unwrap();
    assert_eq!(solve(&medium).unwrap(), Solution::found(vec![1, 2, 0]));

    let complex = presets::find("complex").unwrap();
    assert_eq!(solve(&complex).unwrap(), Solution::impossible());
}
