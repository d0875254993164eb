//! Replay of a solution against a configuration.
//!
//! Searches hand back bare states; replaying recovers which operator was
//! applied at every step and checks that the whole chain is legal.

use crate::error::{JugError, Result};
use crate::puzzle::{JugConfig, Operator, State};
use crate::solution::Solution;

/// One move of a replayed solution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub from: State,
    pub operator: Operator,
    pub to: State,
}

/// The operator leading from `from` to `to`, if any.
///
/// When several operators produce the same state, the first one in
/// generation order is reported.
pub fn find_operator(from: State, to: State, config: &JugConfig) -> Option<Operator> {
    from.successors(config)
        .find(|&(_, child)| child == to)
        .map(|(operator, _)| operator)
}

/// Recover the operator applied between every pair of consecutive states
pub fn replay(solution: &Solution, config: &JugConfig) -> Result<Vec<Step>> {
    solution
        .states()
        .windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            find_operator(from, to, config)
                .map(|operator| Step { from, operator, to })
                .ok_or(JugError::IllegalMove { from, to })
        })
        .collect()
}

/// Does the solution start at `start`, only make legal moves and end in a
/// goal state?
pub fn verify_solution(solution: &Solution, config: &JugConfig, start: State) -> bool {
    solution.start() == start
        && solution.goal().is_goal(config)
        && replay(solution, config).is_ok()
}
