use crate::config::{self, ProcessorConfig};
use crate::domain::ports::{
    GatewayDecision, OutcomeSource, OutcomeSourceBox, PaymentGateway, SharedClock,
};
use crate::domain::record::PaymentRecord;
use crate::error::Result;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

/// Bernoulli draw with a fixed approval probability.
pub struct RandomOutcome {
    success_rate: f64,
    rng: Mutex<StdRng>,
}

impl RandomOutcome {
    pub fn new(success_rate: f64, seed: Option<u64>) -> Result<Self> {
        config::check_success_rate(success_rate)?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            success_rate,
            rng: Mutex::new(rng),
        })
    }

    pub fn from_config(config: &ProcessorConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.success_rate, config.seed)
    }
}

impl OutcomeSource for RandomOutcome {
    fn approve(&self) -> bool {
        // A poisoned lock only means another draw panicked; the rng is still usable.
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.gen_bool(self.success_rate)
    }
}

/// Always approves or always declines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedOutcome {
    Approve,
    Decline,
}

impl OutcomeSource for FixedOutcome {
    fn approve(&self) -> bool {
        matches!(self, FixedOutcome::Approve)
    }
}

/// Stands in for a real payment gateway: approval is drawn from an
/// [`OutcomeSource`] and approved records get a time-based transaction id.
pub struct SimulatedGateway {
    outcomes: OutcomeSourceBox,
    clock: SharedClock,
}

impl SimulatedGateway {
    pub fn new(outcomes: OutcomeSourceBox, clock: SharedClock) -> Self {
        Self { outcomes, clock }
    }

    /// A gateway approving at the configured rate.
    pub fn from_config(config: &ProcessorConfig, clock: SharedClock) -> Result<Self> {
        let outcomes = RandomOutcome::from_config(config)?;
        Ok(Self::new(Box::new(outcomes), clock))
    }

    fn next_transaction_id(&self) -> String {
        let millis = self.clock.now().timestamp_millis();
        let sequence = NEXT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        format!("txn_{millis}_{sequence}")
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn authorize(&self, _record: &PaymentRecord) -> Result<GatewayDecision> {
        if self.outcomes.approve() {
            Ok(GatewayDecision::Approved {
                transaction_id: self.next_transaction_id(),
            })
        } else {
            Ok(GatewayDecision::Declined)
        }
    }
}
