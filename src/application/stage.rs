//! Install/diff stage tracking
//!
//! `Idle → Resolving → Fetching → Transforming → {Writing | Diffing} → Done`,
//! with `Failed` reachable from any stage.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallStage {
    #[default]
    Idle,
    Resolving,
    Fetching,
    Transforming,
    Writing,
    Diffing,
    Done,
    Failed,
}

impl InstallStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstallStage::Idle => "idle",
            InstallStage::Resolving => "resolving",
            InstallStage::Fetching => "fetching",
            InstallStage::Transforming => "transforming",
            InstallStage::Writing => "writing",
            InstallStage::Diffing => "diffing",
            InstallStage::Done => "done",
            InstallStage::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, InstallStage::Done | InstallStage::Failed)
    }

    /// Whether `next` may follow `self`.
    pub fn can_advance_to(&self, next: InstallStage) -> bool {
        use InstallStage::*;
        match (self, next) {
            (Done | Failed, _) => false,
            (_, Failed) => true,
            (Idle, Resolving)
            | (Resolving, Fetching)
            | (Fetching, Transforming)
            | (Transforming, Writing | Diffing | Done)
            | (Writing | Diffing, Done) => true,
            _ => false,
        }
    }
}

impl fmt::Display for InstallStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current stage of one run, logging every transition.
#[derive(Debug)]
pub struct StageTracker {
    stage: InstallStage,
    history: Vec<InstallStage>,
}

impl Default for StageTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StageTracker {
    pub fn new() -> Self {
        Self {
            stage: InstallStage::Idle,
            history: vec![InstallStage::Idle],
        }
    }

    pub fn stage(&self) -> InstallStage {
        self.stage
    }

    pub fn history(&self) -> &[InstallStage] {
        &self.history
    }

    pub fn advance(&mut self, next: InstallStage) {
        if !self.stage.can_advance_to(next) {
            tracing::debug!(from = %self.stage, to = %next, "ignoring out-of-order stage");
            return;
        }
        tracing::info!(from = %self.stage, to = %next, "stage");
        self.stage = next;
        self.history.push(next);
    }

    pub fn fail(&mut self) {
        self.advance(InstallStage::Failed);
    }
}
