use crate::error::{PaymentError, Result};
use serde::Serialize;
use std::fmt;

pub const REJECTED_MESSAGE: &str = "Please fix validation errors before proceeding";
pub const DECLINED_MESSAGE: &str = "Payment declined";
pub const FAILED_MESSAGE: &str = "Payment processing failed";

/// The terminal result of one submission attempt.
///
/// Exactly one of a transaction id (on success) or an error reason (on any
/// failure) is carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded { transaction_id: String },
    /// The record did not pass validation; the gateway was never contacted.
    Rejected { reason: String },
    Declined { reason: String },
    /// An unexpected fault inside the processor or gateway.
    Failed { reason: String },
}

impl SubmissionOutcome {
    pub fn rejected() -> Self {
        SubmissionOutcome::Rejected {
            reason: REJECTED_MESSAGE.to_string(),
        }
    }

    pub fn declined() -> Self {
        SubmissionOutcome::Declined {
            reason: DECLINED_MESSAGE.to_string(),
        }
    }

    pub fn failed() -> Self {
        SubmissionOutcome::Failed {
            reason: FAILED_MESSAGE.to_string(),
        }
    }

    pub fn success(&self) -> bool {
        matches!(self, SubmissionOutcome::Succeeded { .. })
    }

    pub fn transaction_id(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Succeeded { transaction_id } => Some(transaction_id),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionOutcome::Succeeded { .. } => None,
            SubmissionOutcome::Rejected { reason }
            | SubmissionOutcome::Declined { reason }
            | SubmissionOutcome::Failed { reason } => Some(reason),
        }
    }

    /// The terminal state this outcome corresponds to.
    pub fn state(&self) -> SubmissionState {
        match self {
            SubmissionOutcome::Succeeded { .. } => SubmissionState::Succeeded,
            SubmissionOutcome::Rejected { .. } => SubmissionState::Rejected,
            SubmissionOutcome::Declined { .. } => SubmissionState::Declined,
            SubmissionOutcome::Failed { .. } => SubmissionState::Failed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    Idle,
    Validating,
    Rejected,
    Submitting,
    Succeeded,
    Declined,
    Failed,
}

impl SubmissionState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionState::Rejected
                | SubmissionState::Succeeded
                | SubmissionState::Declined
                | SubmissionState::Failed
        )
    }

    fn can_advance_to(&self, next: SubmissionState) -> bool {
        use SubmissionState::*;
        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Rejected)
                | (Validating, Submitting)
                | (Submitting, Succeeded)
                | (Submitting, Declined)
                | (Submitting, Failed)
        )
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Validating => "validating",
            SubmissionState::Rejected => "rejected",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Declined => "declined",
            SubmissionState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Tracks one submission attempt through its state machine.
#[derive(Debug)]
pub struct SubmissionAttempt {
    state: SubmissionState,
}

impl Default for SubmissionAttempt {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionAttempt {
    pub fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn advance(&mut self, next: SubmissionState) -> Result<()> {
        if !self.state.can_advance_to(next) {
            return Err(PaymentError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        tracing::debug!(from = %self.state, to = %next, "submission state change");
        self.state = next;
        Ok(())
    }
}
