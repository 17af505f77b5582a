use crate::domain::record::{AddressField, FieldUpdate};
use crate::error::{PaymentError, Result};

/// Where a raw form input lands in the payment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTarget {
    CardNumber,
    ExpiryDate,
    Cvv,
    CardholderName,
    Address(AddressField),
}

impl FieldTarget {
    pub fn update(&self, value: impl Into<String>) -> FieldUpdate {
        let value = value.into();
        match self {
            FieldTarget::CardNumber => FieldUpdate::CardNumber(value),
            FieldTarget::ExpiryDate => FieldUpdate::ExpiryDate(value),
            FieldTarget::Cvv => FieldUpdate::Cvv(value),
            FieldTarget::CardholderName => FieldUpdate::CardholderName(value),
            FieldTarget::Address(field) => FieldUpdate::address(*field, value),
        }
    }
}

/// Input names of the payment form and the record member each one writes.
pub const FIELD_BINDINGS: &[(&str, FieldTarget)] = &[
    ("cardNumber", FieldTarget::CardNumber),
    ("expiryDate", FieldTarget::ExpiryDate),
    ("cvv", FieldTarget::Cvv),
    ("cardholderName", FieldTarget::CardholderName),
    ("billingStreet", FieldTarget::Address(AddressField::Street)),
    ("billingCity", FieldTarget::Address(AddressField::City)),
    ("billingState", FieldTarget::Address(AddressField::State)),
    ("billingZipCode", FieldTarget::Address(AddressField::PostalCode)),
    ("billingCountry", FieldTarget::Address(AddressField::Country)),
];

pub fn resolve(input_name: &str) -> Result<FieldTarget> {
    FIELD_BINDINGS
        .iter()
        .find(|(name, _)| *name == input_name)
        .map(|(_, target)| *target)
        .ok_or_else(|| PaymentError::UnknownField(input_name.to_string()))
}
