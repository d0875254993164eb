//! A solution: the states visited from the start to a goal, inclusive.

use std::fmt;

use serde::Serialize;

use crate::error::{JugError, Result};
use crate::puzzle::State;

/// Ordered sequence of states from the start state to a goal state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Solution {
    states: Vec<State>,
}

impl Solution {
    /// Wrap a path. Even a start that is already a goal yields one state, so
    /// an empty path is rejected.
    pub fn new(states: Vec<State>) -> Result<Self> {
        if states.is_empty() {
            return Err(JugError::EmptySolution);
        }
        Ok(Self { states })
    }

    /// Wrap a path built by a search, which always holds at least the start
    pub(crate) fn from_path(states: Vec<State>) -> Self {
        debug_assert!(!states.is_empty());
        Self { states }
    }

    /// Number of states, i.e. the number of moves plus one
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false; kept alongside `len` for the usual container API
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn moves(&self) -> usize {
        self.states.len() - 1
    }

    pub fn start(&self) -> State {
        self.states[0]
    }

    pub fn goal(&self) -> State {
        self.states[self.states.len() - 1]
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn iter(&self) -> std::slice::Iter<'_, State> {
        self.states.iter()
    }

    pub fn into_states(self) -> Vec<State> {
        self.states
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a State;
    type IntoIter = std::slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

impl IntoIterator for Solution {
    type Item = State;
    type IntoIter = std::vec::IntoIter<State>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.into_iter()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, state) in self.states.iter().enumerate() {
            if index > 0 {
                write!(f, " -- ")?;
            }
            write!(f, "{state}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::JugConfig;

    fn states(pairs: &[(i64, i64)]) -> Vec<State> {
        let config = JugConfig::default();
        pairs
            .iter()
            .map(|&(s, l)| State::new(s, l, &config).unwrap())
            .collect()
    }

    #[test]
    fn test_empty_solution_rejected() {
        assert_eq!(Solution::new(Vec::new()), Err(JugError::EmptySolution));
    }

    #[test]
    fn test_single_state_solution() {
        let solution = Solution::new(states(&[(0, 4)])).unwrap();
        assert_eq!(solution.len(), 1);
        assert_eq!(solution.moves(), 0);
        assert_eq!(solution.start(), solution.goal());
        assert_eq!(solution.to_string(), "(0, 4)");
    }

    #[test]
    fn test_display_and_iteration() {
        let solution = Solution::new(states(&[(0, 0), (0, 5), (3, 2)])).unwrap();
        assert_eq!(solution.to_string(), "(0, 0) -- (0, 5) -- (3, 2)");
        assert_eq!(solution.iter().count(), 3);
        assert_eq!((&solution).into_iter().last(), Some(&solution.goal()));
        assert!(!solution.is_empty());
    }

    #[test]
    fn test_serializes_as_list_of_states() {
        let solution = Solution::new(states(&[(0, 0), (3, 0)])).unwrap();
        let json = serde_json::to_value(&solution).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"smaller": 0, "larger": 0},
                {"smaller": 3, "larger": 0}
            ])
        );
    }
}
