//! Breadth-first solver for minimum-press solutions.
//!
//! The search runs over states made of the current light colors and the
//! per-button press counts, starting from the initial lights with every
//! count at zero. Each edge is one press, so states leave the queue in
//! non-decreasing order of total presses and the first goal state dequeued
//! is a minimum.

use std::collections::{HashSet, VecDeque};
use std::time::{Duration, Instant};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::encoder::{StateEncoder, StateKey};
use crate::error::InvalidInstance;
use crate::pruning::{effective_limits, find_unreachable_light};
use crate::puzzle::{LightColor, PuzzleInstance};

/// How many dequeued states pass between deadline checks
const DEADLINE_CHECK_INTERVAL: usize = 1024;

/// Configuration for the solver
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Give up after this long and report [`SolveOutcome::TimedOut`].
    /// `None` searches until the state space is exhausted.
    pub timeout: Option<Duration>,
}

impl SolverConfig {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }
}

/// A minimum-press answer for a puzzle, or the statement that none exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub possible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_presses: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_presses: Option<u32>,
}

impl Solution {
    pub fn found(button_presses: Vec<u32>) -> Self {
        let total = button_presses.iter().sum();
        Self {
            possible: true,
            button_presses: Some(button_presses),
            total_presses: Some(total),
        }
    }

    pub fn impossible() -> Self {
        Self {
            possible: false,
            button_presses: None,
            total_presses: None,
        }
    }
}

/// How a search ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A minimum-press solution was found
    Solved(Solution),
    /// The state space holds no goal state
    Infeasible,
    /// The configured timeout passed first; nothing is known about feasibility
    TimedOut,
}

impl SolveOutcome {
    /// The solution for a finished search, `None` after a timeout
    pub fn solution(&self) -> Option<Solution> {
        match self {
            SolveOutcome::Solved(solution) => Some(solution.clone()),
            SolveOutcome::Infeasible => Some(Solution::impossible()),
            SolveOutcome::TimedOut => None,
        }
    }
}

/// Result of the solver search
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub outcome: SolveOutcome,
    /// Number of states taken off the queue
    pub states_explored: usize,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
}

/// A node in the search tree. Each node records the button pressed to reach
/// it from its parent, so the press vector can be rebuilt from a goal.
#[derive(Debug, Clone)]
struct SearchNode {
    lights: SmallVec<[LightColor; 32]>,
    presses: SmallVec<[u32; 16]>,
    parent: Option<usize>,
    button: usize,
    depth: u32,
}

impl SearchNode {
    fn root(instance: &PuzzleInstance) -> Self {
        Self {
            lights: instance.lights.iter().copied().collect(),
            presses: SmallVec::from_elem(0, instance.num_buttons()),
            parent: None,
            button: 0,
            depth: 0,
        }
    }

    fn key(&self, encoder: &StateEncoder) -> StateKey {
        encoder.encode(&self.lights, &self.presses)
    }

    /// The state reached by pressing `button` once more
    fn child(&self, index: usize, button: usize, instance: &PuzzleInstance) -> Self {
        let mut lights = self.lights.clone();
        for &light in &instance.buttons[button] {
            lights[light] = lights[light].next();
        }
        let mut presses = self.presses.clone();
        presses[button] += 1;

        Self {
            lights,
            presses,
            parent: Some(index),
            button,
            depth: self.depth + 1,
        }
    }
}

/// Tally presses along the back-pointers from `goal` to the root
fn reconstruct_presses(nodes: &[SearchNode], goal: usize, num_buttons: usize) -> Vec<u32> {
    let mut presses = vec![0; num_buttons];
    let mut current = goal;
    while let Some(parent) = nodes[current].parent {
        presses[nodes[current].button] += 1;
        current = parent;
    }
    presses
}

/// Find a minimum-press solution.
///
/// Returns `Solution { possible: false, .. }` when no assignment within the
/// press limits reaches the target.
pub fn solve(instance: &PuzzleInstance) -> Result<Solution, InvalidInstance> {
    let result = solve_with_config(instance, &SolverConfig::default())?;
    Ok(result.outcome.solution().unwrap_or_else(Solution::impossible))
}

/// Find a minimum-press solution, honouring the configured timeout.
pub fn solve_with_config(
    instance: &PuzzleInstance,
    config: &SolverConfig,
) -> Result<SolverResult, InvalidInstance> {
    instance.validate()?;

    let start_time = Instant::now();
    let deadline = config.timeout.map(|timeout| start_time + timeout);
    let finish = |outcome: SolveOutcome, states_explored: usize| SolverResult {
        outcome,
        states_explored,
        time_elapsed_ms: start_time.elapsed().as_millis() as u64,
    };

    let limits = effective_limits(instance);
    if let Some(light) = find_unreachable_light(instance, &limits) {
        info!("light {} can never reach {}; puzzle is infeasible", light, instance.target_color);
        return Ok(finish(SolveOutcome::Infeasible, 0));
    }

    let encoder = StateEncoder::new(instance.num_lights(), &limits);
    debug!(
        "searching {} lights, {} buttons, effective limits {:?}",
        instance.num_lights(),
        instance.num_buttons(),
        limits
    );

    let root = SearchNode::root(instance);
    let mut visited: HashSet<StateKey> = HashSet::new();
    visited.insert(root.key(&encoder));
    let mut nodes = vec![root];
    let mut queue: VecDeque<usize> = VecDeque::from([0]);
    let mut states_explored: usize = 0;

    while let Some(index) = queue.pop_front() {
        if let Some(deadline) = deadline {
            if states_explored % DEADLINE_CHECK_INTERVAL == 0 && Instant::now() >= deadline {
                info!("search timed out after {} states", states_explored);
                return Ok(finish(SolveOutcome::TimedOut, states_explored));
            }
        }
        states_explored += 1;

        if instance.is_goal(&nodes[index].lights) {
            let presses = reconstruct_presses(&nodes, index, instance.num_buttons());
            debug_assert_eq!(presses.as_slice(), nodes[index].presses.as_slice());
            debug_assert_eq!(presses.iter().sum::<u32>(), nodes[index].depth);
            info!(
                "solved with {} presses after {} states",
                nodes[index].depth, states_explored
            );
            return Ok(finish(
                SolveOutcome::Solved(Solution::found(presses)),
                states_explored,
            ));
        }

        for button in 0..instance.num_buttons() {
            if nodes[index].presses[button] >= limits[button] {
                continue;
            }
            let child = nodes[index].child(index, button, instance);
            if visited.insert(child.key(&encoder)) {
                nodes.push(child);
                queue.push_back(nodes.len() - 1);
            }
        }
    }

    info!("search exhausted after {} states; puzzle is infeasible", states_explored);
    Ok(finish(SolveOutcome::Infeasible, states_explored))
}
