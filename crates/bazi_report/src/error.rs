//! Error types for user context validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::context::{Avoidance, MAX_AVOIDANCES};

/// Errors from building a [`UserContext`](crate::UserContext).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContextError {
    /// The situation descriptor is empty or whitespace.
    EmptySituation,
    /// Fewer than one or more than three avoidances were selected.
    AvoidanceCount(usize),
    /// The same avoidance was selected twice.
    DuplicateAvoidance(Avoidance),
}

impl Display for ContextError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySituation => f.write_str("situation must not be empty"),
            Self::AvoidanceCount(n) => {
                write!(f, "select between 1 and {MAX_AVOIDANCES} avoidances, got {n}")
            }
            Self::DuplicateAvoidance(a) => write!(f, "avoidance selected twice: {}", a.name()),
        }
    }
}

impl Error for ContextError {}
