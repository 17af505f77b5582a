//! Domain layer: the payment form record, its field validators and the ports
//! the application layer depends on.

pub mod luhn;
pub mod outcome;
pub mod ports;
pub mod record;
pub mod validation;
pub mod validators;
