//! Core types shared by the generator, the store and the session.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// TaskId: 0-based position of a task in generation order
pub type TaskId = u64;

/// Which side of a pair the rater preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
}

impl Choice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::A => "A",
            Choice::B => "B",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Choice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Choice::A),
            "B" | "b" => Ok(Choice::B),
            other => Err(format!("Invalid choice: {} (must be 'A' or 'B')", other)),
        }
    }
}
