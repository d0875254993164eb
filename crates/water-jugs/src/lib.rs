//! Solving the water jugs problem with uninformed search.
//!
//! Given two jugs of fixed capacities, some initial volumes and a target
//! volume, find a sequence of fill, empty and pour moves that leaves the
//! target volume in either jug.

pub mod error;
pub mod executor;
pub mod puzzle;
pub mod solution;
pub mod solver;

// Re-export main types
pub use error::{JugError, Result};
pub use executor::{find_operator, replay, verify_solution, Step};
pub use puzzle::{Children, Jug, JugConfig, Operator, State, Volume};
pub use solution::Solution;
pub use solver::{breadth_first, depth_first, solve, Algorithm, SearchStats, SolverResult};
