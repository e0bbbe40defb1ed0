//! Pipeline step domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four fixed launchpad stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    Analyze,
    Deploy,
    Mint,
    Announce,
}

impl StepId {
    /// All steps in pipeline order
    pub const ALL: [StepId; 4] = [
        StepId::Analyze,
        StepId::Deploy,
        StepId::Mint,
        StepId::Announce,
    ];

    /// The first step of every run
    pub fn first() -> Self {
        StepId::Analyze
    }

    /// The step following this one, or `None` for the last step
    pub fn next(self) -> Option<Self> {
        match self {
            StepId::Analyze => Some(StepId::Deploy),
            StepId::Deploy => Some(StepId::Mint),
            StepId::Mint => Some(StepId::Announce),
            StepId::Announce => None,
        }
    }

    /// Display title
    pub fn label(self) -> &'static str {
        match self {
            StepId::Analyze => "Market Analysis",
            StepId::Deploy => "Contract Deployment",
            StepId::Mint => "Token Minting",
            StepId::Announce => "Social Announcement",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StepId::Analyze => "analyze",
            StepId::Deploy => "deploy",
            StepId::Mint => "mint",
            StepId::Announce => "announce",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived status of a step within the current run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Pending,
    Current,
    Completed,
}

/// Point-in-time view of pipeline progress
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub current: Option<StepId>,
    /// Completed steps in the order they were completed
    pub completed: Vec<StepId>,
}

impl ProgressSnapshot {
    pub fn status(&self, step: StepId) -> StepStatus {
        if self.completed.contains(&step) {
            StepStatus::Completed
        } else if self.current == Some(step) {
            StepStatus::Current
        } else {
            StepStatus::Pending
        }
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_follows_fixed_order() {
        let mut walked = vec![StepId::first()];
        while let Some(next) = walked.last().and_then(|s| s.next()) {
            walked.push(next);
        }
        assert_eq!(walked, StepId::ALL.to_vec());
    }

    #[test]
    fn test_snapshot_status() {
        let snapshot = ProgressSnapshot {
            current: Some(StepId::Mint),
            completed: vec![StepId::Analyze, StepId::Deploy],
        };
        assert_eq!(snapshot.status(StepId::Analyze), StepStatus::Completed);
        assert_eq!(snapshot.status(StepId::Mint), StepStatus::Current);
        assert_eq!(snapshot.status(StepId::Announce), StepStatus::Pending);
    }

    #[test]
    fn test_step_serializes_snake_case() {
        let json = serde_json::to_string(&StepId::Announce).unwrap();
        assert_eq!(json, "\"announce\"");
    }
}
