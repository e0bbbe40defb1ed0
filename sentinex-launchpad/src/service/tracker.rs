//! Step tracker
//!
//! Finite-state progress over the fixed pipeline steps:
//! `Idle` → `Active(analyze)` → ... → `Active(announce)` → `Idle`.
//!
//! The completed set only grows during a run and is cleared by the next
//! `begin()`. The current step is never part of the completed set.

use sentinex_core::domain::step::{ProgressSnapshot, StepId, StepStatus};

#[derive(Debug, Clone, Default)]
pub struct StepTracker {
    current: Option<StepId>,
    completed: Vec<StepId>,
}

impl StepTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new run: clears completed steps and makes the first step current
    pub fn begin(&mut self) {
        self.completed.clear();
        self.current = Some(StepId::first());
    }

    /// Marks `step` completed
    ///
    /// When `step` is the current one, the current pointer moves to the next
    /// step in order (or to none after the last step).
    ///
    /// # Returns
    /// `false` if the step was already completed (no change)
    pub fn advance(&mut self, step: StepId) -> bool {
        if self.completed.contains(&step) {
            return false;
        }
        self.completed.push(step);
        if self.current == Some(step) {
            self.current = step.next();
        }
        true
    }

    /// Ends the run; completed steps stay visible until the next `begin()`
    pub fn end(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<StepId> {
        self.current
    }

    pub fn completed(&self) -> &[StepId] {
        &self.completed
    }

    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    pub fn status(&self, step: StepId) -> StepStatus {
        self.snapshot().status(step)
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            current: self.current,
            completed: self.completed.clone(),
        }
    }
}
