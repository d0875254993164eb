//! Uninformed search over the implicit graph of jug states.
//!
//! Two strategies are provided:
//!
//! - [`breadth_first`] expands states layer by layer from a FIFO queue and
//!   keeps a backpointer for every discovered state. The first goal taken off
//!   the queue is reached with the fewest possible moves.
//! - [`depth_first`] follows one branch to the end before backtracking, using
//!   an explicit stack of frames. Only states already on the current branch
//!   are skipped, so the same state may be visited again from another branch.
//!   The first goal found is returned, which is not necessarily the shortest.
//!
//! Running out of states is a regular outcome (`solution == None`), never an
//! error.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::puzzle::{Children, JugConfig, State};
use crate::solution::Solution;

/// Search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::DepthFirst => write!(f, "depth-first"),
            Algorithm::BreadthFirst => write!(f, "breadth-first"),
        }
    }
}

/// Counters collected while searching
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// States whose children were generated
    pub states_expanded: usize,
    /// Children produced, duplicates included
    pub states_generated: usize,
    /// Largest queue length (breadth-first) or branch depth (depth-first)
    pub max_frontier: usize,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
}

/// Outcome of a search
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub algorithm: Algorithm,
    /// `None` when every reachable state was tried without meeting the goal
    pub solution: Option<Solution>,
    pub stats: SearchStats,
}

impl SolverResult {
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// Run the selected strategy from `start`
pub fn solve(start: State, config: &JugConfig, algorithm: Algorithm) -> SolverResult {
    match algorithm {
        Algorithm::DepthFirst => depth_first(start, config),
        Algorithm::BreadthFirst => breadth_first(start, config),
    }
}

/// Breadth-first search returning a solution with the minimum number of moves
pub fn breadth_first(start: State, config: &JugConfig) -> SolverResult {
    let start_time = Instant::now();
    let mut stats = SearchStats::default();

    // Every discovered state maps to the state it was first reached from.
    // Recording states when they are enqueued keeps duplicates out of the
    // queue; the first discovery of a state is always along a shortest path.
    let mut parents: HashMap<State, Option<State>> = HashMap::new();
    parents.insert(start, None);

    let mut queue: VecDeque<State> = VecDeque::new();
    queue.push_back(start);
    stats.max_frontier = 1;

    while let Some(current) = queue.pop_front() {
        if current.is_goal(config) {
            let solution = rebuild_path(current, &parents);
            debug!(
                expanded = stats.states_expanded,
                moves = solution.moves(),
                "breadth-first search reached a goal"
            );
            return finish(Algorithm::BreadthFirst, Some(solution), stats, start_time);
        }

        stats.states_expanded += 1;
        for child in current.children(config) {
            stats.states_generated += 1;
            if let Entry::Vacant(entry) = parents.entry(child) {
                entry.insert(Some(current));
                queue.push_back(child);
            }
        }
        stats.max_frontier = stats.max_frontier.max(queue.len());
    }

    debug!(
        expanded = stats.states_expanded,
        "breadth-first search exhausted the state space"
    );
    finish(Algorithm::BreadthFirst, None, stats, start_time)
}

/// Walk the backpointers from `goal` back to the start
fn rebuild_path(goal: State, parents: &HashMap<State, Option<State>>) -> Solution {
    let mut states = vec![goal];
    let mut cursor = goal;
    while let Some(&Some(parent)) = parents.get(&cursor) {
        states.push(parent);
        cursor = parent;
    }
    states.reverse();
    Solution::from_path(states)
}

/// Children of a state on the current depth-first branch, and how many were tried
struct DfsFrame {
    children: Children,
    next_child: usize,
}

impl DfsFrame {
    fn expand(state: State, config: &JugConfig, stats: &mut SearchStats) -> Self {
        let children = state.children(config);
        stats.states_expanded += 1;
        stats.states_generated += children.len();
        Self {
            children,
            next_child: 0,
        }
    }
}

/// Depth-first search returning the first solution found.
///
/// Children are explored in generation order, leftmost first. A child is
/// skipped only if it already appears on the path walked from the start,
/// which does not include the start itself.
pub fn depth_first(start: State, config: &JugConfig) -> SolverResult {
    let start_time = Instant::now();
    let mut stats = SearchStats::default();

    if start.is_goal(config) {
        debug!("start state is already a goal");
        return finish(
            Algorithm::DepthFirst,
            Some(Solution::from_path(vec![start])),
            stats,
            start_time,
        );
    }

    // `branch[i]` is the state whose children `stack[i]` iterates over. The
    // start heads every solution but is not part of the path walked so far,
    // so a branch may come back to it once.
    let mut branch: Vec<State> = vec![start];
    let mut on_branch: HashSet<State> = HashSet::new();
    let mut stack: Vec<DfsFrame> = vec![DfsFrame::expand(start, config, &mut stats)];
    stats.max_frontier = 1;

    while let Some(frame) = stack.last_mut() {
        let Some(&child) = frame.children.get(frame.next_child) else {
            // Every child tried: backtrack
            stack.pop();
            if branch.len() > 1 {
                if let Some(state) = branch.pop() {
                    on_branch.remove(&state);
                }
            }
            continue;
        };
        frame.next_child += 1;

        if on_branch.contains(&child) {
            continue;
        }

        branch.push(child);
        if child.is_goal(config) {
            debug!(
                expanded = stats.states_expanded,
                moves = branch.len() - 1,
                "depth-first search reached a goal"
            );
            return finish(
                Algorithm::DepthFirst,
                Some(Solution::from_path(branch)),
                stats,
                start_time,
            );
        }

        on_branch.insert(child);
        stack.push(DfsFrame::expand(child, config, &mut stats));
        stats.max_frontier = stats.max_frontier.max(branch.len());
    }

    debug!(
        expanded = stats.states_expanded,
        "depth-first search exhausted every branch"
    );
    finish(Algorithm::DepthFirst, None, stats, start_time)
}

fn finish(
    algorithm: Algorithm,
    solution: Option<Solution>,
    mut stats: SearchStats,
    start_time: Instant,
) -> SolverResult {
    stats.time_elapsed_ms = start_time.elapsed().as_millis() as u64;
    SolverResult {
        algorithm,
        solution,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::verify_solution;

    fn path(pairs: &[(i64, i64)], config: &JugConfig) -> Vec<State> {
        pairs
            .iter()
            .map(|&(s, l)| State::new(s, l, config).unwrap())
            .collect()
    }

    #[test]
    fn test_breadth_first_classic_instance() {
        let config = JugConfig::default();
        let result = breadth_first(State::empty(), &config);
        let solution = result.solution.expect("instance is solvable");

        assert_eq!(
            solution.states(),
            path(&[(0, 0), (0, 5), (3, 2), (0, 2), (2, 0), (2, 5), (3, 4)], &config).as_slice()
        );
        assert_eq!(solution.moves(), 6);
        assert!(verify_solution(&solution, &config, State::empty()));
        assert_eq!(result.stats.states_expanded, 13);
    }

    #[test]
    fn test_depth_first_classic_instance() {
        let config = JugConfig::default();
        let result = depth_first(State::empty(), &config);
        let solution = result.solution.expect("instance is solvable");

        assert!(verify_solution(&solution, &config, State::empty()));
        assert_eq!(
            solution.states(),
            path(
                &[(0, 0), (3, 0), (0, 0), (0, 5), (3, 2), (0, 2), (2, 0), (2, 5), (3, 4)],
                &config
            )
            .as_slice()
        );
        assert_eq!(result.stats.states_expanded, 10);

        let shortest = breadth_first(State::empty(), &config).solution.unwrap();
        assert!(solution.len() >= shortest.len());
    }

    #[test]
    fn test_depth_first_only_suppresses_repeats_after_the_start() {
        for target in 1..=5 {
            let config = JugConfig::new(3, 5, target).unwrap();
            let solution = depth_first(State::empty(), &config).solution.unwrap();
            let walked = &solution.states()[1..];
            let unique: HashSet<State> = walked.iter().copied().collect();
            assert_eq!(unique.len(), walked.len());
        }
    }

    #[test]
    fn test_depth_first_may_return_to_the_start() {
        // (3, 0) is expanded first and leads straight back to (0, 0)
        let config = JugConfig::new(3, 5, 2).unwrap();
        let solution = depth_first(State::empty(), &config).solution.unwrap();
        assert_eq!(
            solution.states(),
            path(&[(0, 0), (3, 0), (0, 0), (0, 5), (3, 2)], &config).as_slice()
        );

        let config = JugConfig::default();
        let start = State::new(3, 0, &config).unwrap();
        let solution = depth_first(start, &config).solution.unwrap();
        assert_eq!(
            solution.states(),
            path(
                &[(3, 0), (0, 0), (3, 0), (3, 5), (0, 5), (3, 2), (0, 2), (2, 0), (2, 5), (3, 4)],
                &config
            )
            .as_slice()
        );
    }

    #[test]
    fn test_start_already_goal() {
        let config = JugConfig::default();
        let start = State::new(0, 4, &config).unwrap();
        for algorithm in [Algorithm::BreadthFirst, Algorithm::DepthFirst] {
            let solution = solve(start, &config, algorithm).solution.unwrap();
            assert_eq!(solution.states(), &[start]);
        }
    }

    #[test]
    fn test_unsatisfiable_target_exhausts() {
        let config = JugConfig::new(3, 5, 9).unwrap();
        let bfs = breadth_first(State::empty(), &config);
        assert!(!bfs.is_solved());
        // every state with an empty or full jug is reachable from (0, 0)
        assert_eq!(bfs.stats.states_expanded, 16);

        let dfs = depth_first(State::empty(), &config);
        assert!(!dfs.is_solved());
    }

    #[test]
    fn test_unreachable_target_within_capacity() {
        // Only even volumes can be measured with jugs of 2 and 4
        let config = JugConfig::new(2, 4, 3).unwrap();
        assert!(solve(State::empty(), &config, Algorithm::BreadthFirst)
            .solution
            .is_none());
        assert!(solve(State::empty(), &config, Algorithm::DepthFirst)
            .solution
            .is_none());
    }

    #[test]
    fn test_breadth_first_is_never_longer_than_depth_first() {
        for (small, large) in [(3, 5), (4, 7), (2, 9), (5, 6)] {
            for target in 0..=large {
                let config = JugConfig::new(small, large, target).unwrap();
                let bfs = breadth_first(State::empty(), &config).solution;
                let dfs = depth_first(State::empty(), &config).solution;
                assert_eq!(bfs.is_some(), dfs.is_some());
                if let (Some(bfs), Some(dfs)) = (bfs, dfs) {
                    assert!(bfs.len() <= dfs.len());
                    assert!(verify_solution(&bfs, &config, State::empty()));
                    assert!(verify_solution(&dfs, &config, State::empty()));
                }
            }
        }
    }

    #[test]
    fn test_algorithm_display() {
        assert_eq!(Algorithm::DepthFirst.to_string(), "depth-first");
        assert_eq!(
            serde_json::to_value(Algorithm::BreadthFirst).unwrap(),
            serde_json::json!("breadth-first")
        );
    }
}
