//! Application layer orchestrating the payment form.
//!
//! [`aggregator::FormSession`] tracks field edits and the per-field error map;
//! [`processor::SubmissionProcessor`] performs the asynchronous submission of a
//! finished record.

pub mod aggregator;
pub mod processor;
