//! Close-Confirmation Flow
//!
//! Finite-state machine deciding whether a window-close request may proceed
//! immediately, must be prompted, or is suppressed while a save is running.

use super::{DomainError, DomainResult};

/// State of the close-confirmation flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloseFlow {
    /// No close request in flight
    #[default]
    Idle,
    /// Prompt is on screen, waiting for the user's choice
    PromptShown,
    /// Save is running, interaction is disabled
    Saving,
    /// Close has been confirmed and must be allowed through
    ConfirmedClose,
}

/// Outcome of a window-close request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    /// Let the window close
    Allow,
    /// Suppress the close and show the prompt
    Prompt,
    /// Suppress the close; a prompt or save is already in flight
    Deny,
}

impl CloseFlow {
    /// Handle a window-close request
    ///
    /// At most one prompt is ever shown: repeat requests while the prompt is
    /// open or a save is running are denied without a new prompt.
    pub fn request_close(&mut self) -> CloseDecision {
        match self {
            CloseFlow::Idle => {
                *self = CloseFlow::PromptShown;
                CloseDecision::Prompt
            }
            CloseFlow::PromptShown | CloseFlow::Saving => CloseDecision::Deny,
            CloseFlow::ConfirmedClose => CloseDecision::Allow,
        }
    }

    /// User chose to save before closing
    pub fn choose_save(&mut self) -> DomainResult<()> {
        self.transition(CloseFlow::PromptShown, CloseFlow::Saving, "start saving")
    }

    /// User chose to close without saving
    pub fn choose_discard(&mut self) -> DomainResult<()> {
        self.transition(CloseFlow::PromptShown, CloseFlow::ConfirmedClose, "discard")
    }

    /// User dismissed the prompt; the window stays open
    pub fn choose_cancel(&mut self) -> DomainResult<()> {
        self.transition(CloseFlow::PromptShown, CloseFlow::Idle, "cancel")
    }

    /// Save completed; the pending close may now proceed
    pub fn save_finished(&mut self) -> DomainResult<()> {
        self.transition(CloseFlow::Saving, CloseFlow::ConfirmedClose, "finish saving")
    }

    /// Save failed; the window must become interactive again
    pub fn save_failed(&mut self) -> DomainResult<()> {
        self.transition(CloseFlow::Saving, CloseFlow::Idle, "abort saving")
    }

    fn transition(&mut self, from: CloseFlow, to: CloseFlow, action: &str) -> DomainResult<()> {
        if *self == from {
            *self = to;
            Ok(())
        } else {
            Err(DomainError::InvalidState(format!(
                "cannot {} from {:?}",
                action, self
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_close_request_prompts() {
        let mut flow = CloseFlow::default();
        assert_eq!(flow.request_close(), CloseDecision::Prompt);
        assert_eq!(flow, CloseFlow::PromptShown);
    }

    #[test]
    fn test_repeat_request_while_prompting_is_denied() {
        let mut flow = CloseFlow::default();
        flow.request_close();
        assert_eq!(flow.request_close(), CloseDecision::Deny);
        assert_eq!(flow, CloseFlow::PromptShown);
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut flow = CloseFlow::default();
        flow.request_close();
        flow.choose_cancel().unwrap();
        assert_eq!(flow, CloseFlow::Idle);
        // A later close request prompts again
        assert_eq!(flow.request_close(), CloseDecision::Prompt);
    }

    #[test]
    fn test_discard_confirms_immediately() {
        let mut flow = CloseFlow::default();
        flow.request_close();
        flow.choose_discard().unwrap();
        assert_eq!(flow.request_close(), CloseDecision::Allow);
    }

    #[test]
    fn test_save_path_blocks_until_finished() {
        let mut flow = CloseFlow::default();
        flow.request_close();
        flow.choose_save().unwrap();
        assert_eq!(flow.request_close(), CloseDecision::Deny);
        flow.save_finished().unwrap();
        assert_eq!(flow.request_close(), CloseDecision::Allow);
    }

    #[test]
    fn test_failed_save_restores_interactivity() {
        let mut flow = CloseFlow::default();
        flow.request_close();
        flow.choose_save().unwrap();
        flow.save_failed().unwrap();
        assert_eq!(flow, CloseFlow::Idle);
        assert_eq!(flow.request_close(), CloseDecision::Prompt);
    }

    #[test]
    fn test_choices_require_open_prompt() {
        let mut flow = CloseFlow::default();
        assert!(flow.choose_save().is_err());
        assert!(flow.choose_discard().is_err());
        assert!(flow.choose_cancel().is_err());
        assert_eq!(flow, CloseFlow::Idle);
    }

    #[test]
    fn test_save_events_require_saving_state() {
        let mut flow = CloseFlow::default();
        assert!(flow.save_finished().is_err());
        flow.request_close();
        assert!(flow.save_failed().is_err());
    }
}
