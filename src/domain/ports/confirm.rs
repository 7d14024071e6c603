//! Confirm Port
//!
//! Asks whether a pending install should be written. Implementations can be
//! interactive (prompting the user) or automatic.

/// Summary shown before writing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingWrite {
    pub create: usize,
    pub update: usize,
    pub stylesheet: bool,
}

impl PendingWrite {
    pub fn is_empty(&self) -> bool {
        self.create == 0 && self.update == 0 && !self.stylesheet
    }
}

/// Trait for confirming an install.
///
/// Implementations:
/// - `InteractiveConfirm`: prompts via dialoguer
/// - `AutoConfirm`: always proceeds (`--yes`, non-TTY)
/// - `Decline`: never proceeds
pub trait Confirm: Send + Sync {
    fn confirm(&self, pending: &PendingWrite) -> bool;
}

/// Always proceeds.
pub struct AutoConfirm;

impl Confirm for AutoConfirm {
    fn confirm(&self, _pending: &PendingWrite) -> bool {
        true
    }
}

/// Never proceeds.
pub struct Decline;

impl Confirm for Decline {
    fn confirm(&self, _pending: &PendingWrite) -> bool {
        false
    }
}
