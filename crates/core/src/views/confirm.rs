//! Two-step delete confirmation
//!
//! The first press arms, the second executes. While a request is in flight
//! further presses are ignored.

use std::fmt;

/// Where a delete button is in its confirm-then-execute sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteConfirmation {
    #[default]
    Idle,
    /// Waiting for the confirming press
    Armed,
    /// DELETE request in flight
    Executing,
}

/// What the caller must do after a press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmStep {
    /// Show the confirmation prompt; issue nothing.
    Arm,
    /// Issue the DELETE now.
    Execute,
    /// A request is already in flight.
    Ignore,
}

impl DeleteConfirmation {
    /// Advance on a press of the delete button.
    pub const fn press(&mut self) -> ConfirmStep {
        match *self {
            Self::Idle => {
                *self = Self::Armed;
                ConfirmStep::Arm
            }
            Self::Armed => {
                *self = Self::Executing;
                ConfirmStep::Execute
            }
            Self::Executing => ConfirmStep::Ignore,
        }
    }

    /// Back out of an armed confirmation. No effect otherwise.
    pub const fn cancel(&mut self) {
        if matches!(*self, Self::Armed) {
            *self = Self::Idle;
        }
    }

    /// The in-flight request finished, successfully or not.
    pub const fn settle(&mut self) {
        if matches!(*self, Self::Executing) {
            *self = Self::Idle;
        }
    }

    pub const fn is_armed(self) -> bool {
        matches!(self, Self::Armed)
    }

    pub const fn is_executing(self) -> bool {
        matches!(self, Self::Executing)
    }

    /// Text for the delete button in this state
    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Delete",
            Self::Armed => "Confirm Delete",
            Self::Executing => "Deleting...",
        }
    }
}

impl fmt::Display for DeleteConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Armed => write!(f, "armed"),
            Self::Executing => write!(f, "executing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_sequence() {
        let mut state = DeleteConfirmation::default();
        assert_eq!(state.press(), ConfirmStep::Arm);
        assert!(state.is_armed());
        assert_eq!(state.press(), ConfirmStep::Execute);
        assert!(state.is_executing());
        assert_eq!(state.press(), ConfirmStep::Ignore);
        state.settle();
        assert_eq!(state, DeleteConfirmation::Idle);
    }

    #[test]
    fn test_cancel_only_disarms() {
        let mut state = DeleteConfirmation::Armed;
        state.cancel();
        assert_eq!(state, DeleteConfirmation::Idle);

        let mut executing = DeleteConfirmation::Executing;
        executing.cancel();
        assert_eq!(executing, DeleteConfirmation::Executing);
    }

    #[test]
    fn test_settle_ignores_non_executing_states() {
        let mut state = DeleteConfirmation::Armed;
        state.settle();
        assert_eq!(state, DeleteConfirmation::Armed);
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(DeleteConfirmation::Idle.button_label(), "Delete");
        assert_eq!(DeleteConfirmation::Armed.button_label(), "Confirm Delete");
        assert_eq!(DeleteConfirmation::Executing.to_string(), "executing");
    }
}
