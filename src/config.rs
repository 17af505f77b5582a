use crate::error::{PaymentError, Result};
use std::time::Duration;

pub const DEFAULT_SUCCESS_RATE: f64 = 0.9;
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Settings for the submission processor and its simulated gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessorConfig {
    /// Probability in `[0, 1]` that a simulated authorization is approved.
    pub success_rate: f64,
    /// Artificial latency before the gateway is contacted.
    pub delay: Duration,
    /// Seed for the outcome draw. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            success_rate: DEFAULT_SUCCESS_RATE,
            delay: DEFAULT_DELAY,
            seed: None,
        }
    }
}

impl ProcessorConfig {
    pub fn validate(&self) -> Result<()> {
        check_success_rate(self.success_rate)
    }
}

/// Rejects probabilities outside `[0, 1]`, including NaN.
pub fn check_success_rate(success_rate: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&success_rate) {
        return Err(PaymentError::ConfigError(format!(
            "success rate must be between 0 and 1, got {success_rate}"
        )));
    }
    Ok(())
}
