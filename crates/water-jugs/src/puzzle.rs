//! Problem representation: jug capacities, the six operators and the
//! states they move between.
//!
//! Capacities and the target volume live in an explicit [`JugConfig`] that
//! every state operation receives by reference. A [`State`] is just the pair
//! of current volumes, so equality and hashing only ever look at those two
//! numbers.

use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use crate::error::{JugError, Result};

/// Volume of liquid, in whole units
pub type Volume = u32;

/// Successors of a state; there are never more than six
pub type Children = SmallVec<[State; 6]>;

/// One of the two jugs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Jug {
    Smaller,
    Larger,
}

impl fmt::Display for Jug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jug::Smaller => write!(f, "smaller"),
            Jug::Larger => write!(f, "larger"),
        }
    }
}

/// Capacities of both jugs and the volume to measure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JugConfig {
    smaller_capacity: Volume,
    larger_capacity: Volume,
    target: Volume,
}

impl Default for JugConfig {
    fn default() -> Self {
        Self {
            smaller_capacity: 3,
            larger_capacity: 5,
            target: 4,
        }
    }
}

impl JugConfig {
    /// Validate and build a configuration.
    ///
    /// Capacities must be strictly positive and the target non-negative. A
    /// target exceeding both capacities is accepted: it simply has no
    /// solution.
    pub fn new(smaller_capacity: i64, larger_capacity: i64, target: i64) -> Result<Self> {
        Ok(Self {
            smaller_capacity: positive_capacity(Jug::Smaller, smaller_capacity)?,
            larger_capacity: positive_capacity(Jug::Larger, larger_capacity)?,
            target: Volume::try_from(target).map_err(|_| {
                JugError::InvalidConfiguration(format!(
                    "the target volume must be a non-negative integer, got {target}"
                ))
            })?,
        })
    }

    pub fn smaller_capacity(&self) -> Volume {
        self.smaller_capacity
    }

    pub fn larger_capacity(&self) -> Volume {
        self.larger_capacity
    }

    pub fn target(&self) -> Volume {
        self.target
    }

    /// Capacity of the given jug
    pub fn capacity(&self, jug: Jug) -> Volume {
        match jug {
            Jug::Smaller => self.smaller_capacity,
            Jug::Larger => self.larger_capacity,
        }
    }

    /// Upper bound on the number of distinct states under this configuration
    pub fn state_count(&self) -> u64 {
        (u64::from(self.smaller_capacity) + 1) * (u64::from(self.larger_capacity) + 1)
    }

    /// Build the start state of a search.
    ///
    /// Same checks as [`State::new`], but reported as a configuration error
    /// since initial volumes come from the user.
    pub fn start(&self, smaller: i64, larger: i64) -> Result<State> {
        State::new(smaller, larger, self).map_err(|err| match err {
            JugError::InvalidVolume {
                jug,
                volume,
                capacity,
            } => JugError::InvalidConfiguration(format!(
                "the initial volume of the {jug} jug ({volume}) must be between 0 and its capacity ({capacity})"
            )),
            other => other,
        })
    }
}

fn positive_capacity(jug: Jug, capacity: i64) -> Result<Volume> {
    match Volume::try_from(capacity) {
        Ok(capacity) if capacity > 0 => Ok(capacity),
        _ => Err(JugError::InvalidConfiguration(format!(
            "the capacity of the {jug} jug must be strictly positive, got {capacity}"
        ))),
    }
}

/// A single fill, empty or pour action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    EmptySmaller,
    EmptyLarger,
    FillSmaller,
    FillLarger,
    PourSmallerIntoLarger,
    PourLargerIntoSmaller,
}

impl Operator {
    /// All operators, in the order successors are generated
    pub const ALL: [Operator; 6] = [
        Operator::EmptySmaller,
        Operator::EmptyLarger,
        Operator::FillSmaller,
        Operator::FillLarger,
        Operator::PourSmallerIntoLarger,
        Operator::PourLargerIntoSmaller,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Operator::EmptySmaller => "empty smaller",
            Operator::EmptyLarger => "empty larger",
            Operator::FillSmaller => "fill smaller",
            Operator::FillLarger => "fill larger",
            Operator::PourSmallerIntoLarger => "pour smaller into larger",
            Operator::PourLargerIntoSmaller => "pour larger into smaller",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Volumes currently held by the smaller and the larger jug
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct State {
    smaller: Volume,
    larger: Volume,
}

impl State {
    /// Create a state, checking both volumes against their capacities.
    ///
    /// Out-of-range volumes are rejected, never clamped.
    pub fn new(smaller: i64, larger: i64, config: &JugConfig) -> Result<Self> {
        Ok(Self {
            smaller: checked_volume(Jug::Smaller, smaller, config)?,
            larger: checked_volume(Jug::Larger, larger, config)?,
        })
    }

    /// Both jugs empty
    pub fn empty() -> Self {
        Self {
            smaller: 0,
            larger: 0,
        }
    }

    pub fn smaller(&self) -> Volume {
        self.smaller
    }

    pub fn larger(&self) -> Volume {
        self.larger
    }

    /// Either jug holds exactly the target volume
    pub fn is_goal(&self, config: &JugConfig) -> bool {
        self.smaller == config.target || self.larger == config.target
    }

    /// Apply an operator, returning the resulting state if it is applicable
    pub fn apply(self, operator: Operator, config: &JugConfig) -> Option<State> {
        let (smaller, larger) = (self.smaller, self.larger);
        let (smaller_capacity, larger_capacity) = (config.smaller_capacity, config.larger_capacity);

        match operator {
            Operator::EmptySmaller => (smaller > 0).then_some(State { smaller: 0, larger }),
            Operator::EmptyLarger => (larger > 0).then_some(State { smaller, larger: 0 }),
            Operator::FillSmaller => (smaller < smaller_capacity).then_some(State {
                smaller: smaller_capacity,
                larger,
            }),
            Operator::FillLarger => (larger < larger_capacity).then_some(State {
                smaller,
                larger: larger_capacity,
            }),
            Operator::PourSmallerIntoLarger => {
                let amount = smaller.min(larger_capacity.saturating_sub(larger));
                (amount > 0).then_some(State {
                    smaller: smaller - amount,
                    larger: larger + amount,
                })
            }
            Operator::PourLargerIntoSmaller => {
                let amount = larger.min(smaller_capacity.saturating_sub(smaller));
                (amount > 0).then_some(State {
                    smaller: smaller + amount,
                    larger: larger - amount,
                })
            }
        }
    }

    /// Applicable operators paired with the state each one leads to
    pub fn successors(self, config: &JugConfig) -> impl Iterator<Item = (Operator, State)> + '_ {
        Operator::ALL
            .into_iter()
            .filter_map(move |op| self.apply(op, config).map(|child| (op, child)))
    }

    /// All states reachable by exactly one operator, in generation order
    pub fn children(self, config: &JugConfig) -> Children {
        self.successors(config).map(|(_, child)| child).collect()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.smaller, self.larger)
    }
}

fn checked_volume(jug: Jug, volume: i64, config: &JugConfig) -> Result<Volume> {
    let capacity = config.capacity(jug);
    match Volume::try_from(volume) {
        Ok(v) if v <= capacity => Ok(v),
        _ => Err(JugError::InvalidVolume {
            jug,
            volume,
            capacity,
        }),
    }
}
