//! Errors for fallible scene construction and body insertion.

use core::fmt;

/// Errors returned by fallible [`Scene`](crate::scene::Scene) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// The fixed-capacity body storage is full.
    CapacityExceeded { capacity: usize },
    /// A scenario descriptor has a negative or non-finite inverse mass.
    InvalidInverseMass { index: usize },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::CapacityExceeded { capacity } => {
                write!(f, "scene is full (capacity {} bodies)", capacity)
            }
            SceneError::InvalidInverseMass { index } => {
                write!(f, "scenario body {} has a negative or non-finite inverse mass", index)
            }
        }
    }
}
