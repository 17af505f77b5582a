use super::record::PaymentRecord;
use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate, Utc};
use std::sync::Arc;

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The calendar date expiry checks run against, in the local timezone.
    fn today(&self) -> NaiveDate {
        self.now().with_timezone(&Local).date_naive()
    }
}

/// What a gateway said about a submitted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayDecision {
    Approved { transaction_id: String },
    Declined,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn authorize(&self, record: &PaymentRecord) -> Result<GatewayDecision>;
}

/// Decides whether a simulated authorization is approved.
pub trait OutcomeSource: Send + Sync {
    fn approve(&self) -> bool;
}

pub type SharedClock = Arc<dyn Clock>;
pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
pub type OutcomeSourceBox = Box<dyn OutcomeSource>;
