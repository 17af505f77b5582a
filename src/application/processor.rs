use crate::domain::outcome::{SubmissionAttempt, SubmissionOutcome, SubmissionState};
use crate::domain::ports::{GatewayDecision, PaymentGatewayBox, SharedClock};
use crate::domain::record::PaymentRecord;
use crate::domain::validators;
use crate::error::Result;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Submits validated payment records to a gateway.
///
/// The processor re-validates every record itself before contacting the
/// gateway, and always answers with a [`SubmissionOutcome`]: declines and
/// faults are reported as data, never as errors. It keeps no state between
/// calls, so one processor can serve many form sessions.
pub struct SubmissionProcessor {
    gateway: PaymentGatewayBox,
    clock: SharedClock,
    delay: Duration,
}

impl SubmissionProcessor {
    pub fn new(gateway: PaymentGatewayBox, clock: SharedClock, delay: Duration) -> Self {
        Self {
            gateway,
            clock,
            delay,
        }
    }

    /// Runs one submission attempt for a snapshot of the form record.
    ///
    /// Gateway errors and gateway panics both end in
    /// [`SubmissionOutcome::Failed`]. Dropping the returned future abandons
    /// the attempt.
    pub async fn submit(&self, record: PaymentRecord) -> SubmissionOutcome {
        let mut attempt = SubmissionAttempt::new();
        let result = AssertUnwindSafe(self.run(&mut attempt, &record))
            .catch_unwind()
            .await;
        match result {
            Ok(Ok(outcome)) => {
                info!(state = %outcome.state(), "submission finished");
                outcome
            }
            Ok(Err(e)) => {
                warn!(state = %attempt.state(), error = %e, "submission failed unexpectedly");
                SubmissionOutcome::failed()
            }
            Err(_) => {
                warn!(state = %attempt.state(), "submission panicked");
                SubmissionOutcome::failed()
            }
        }
    }

    async fn run(
        &self,
        attempt: &mut SubmissionAttempt,
        record: &PaymentRecord,
    ) -> Result<SubmissionOutcome> {
        attempt.advance(SubmissionState::Validating)?;
        let errors = validators::validate_record(record, self.clock.today());
        if !errors.is_empty() {
            debug!(failing = ?errors.keys().collect::<Vec<_>>(), "record failed validation");
            attempt.advance(SubmissionState::Rejected)?;
            return Ok(SubmissionOutcome::rejected());
        }

        attempt.advance(SubmissionState::Submitting)?;
        tokio::time::sleep(self.delay).await;

        let decision = match self.gateway.authorize(record).await {
            Ok(decision) => decision,
            Err(e) => {
                attempt.advance(SubmissionState::Failed)?;
                return Err(e);
            }
        };

        match decision {
            GatewayDecision::Approved { transaction_id } => {
                attempt.advance(SubmissionState::Succeeded)?;
                Ok(SubmissionOutcome::Succeeded { transaction_id })
            }
            GatewayDecision::Declined => {
                attempt.advance(SubmissionState::Declined)?;
                Ok(SubmissionOutcome::declined())
            }
        }
    }
}
