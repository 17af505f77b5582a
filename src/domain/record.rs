use serde::Serialize;
use std::fmt;

/// The fields of a payment form, as tracked by the error map.
///
/// The billing address is a single field: all of its errors are reported
/// together under `billingAddress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    CardNumber,
    ExpiryDate,
    Cvv,
    CardholderName,
    BillingAddress,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::CardNumber,
        FormField::ExpiryDate,
        FormField::Cvv,
        FormField::CardholderName,
        FormField::BillingAddress,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::CardNumber => "cardNumber",
            FormField::ExpiryDate => "expiryDate",
            FormField::Cvv => "cvv",
            FormField::CardholderName => "cardholderName",
            FormField::BillingAddress => "billingAddress",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    Street,
    City,
    State,
    PostalCode,
    Country,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

impl BillingAddress {
    /// Overwrites only the members the patch carries.
    pub fn merge(&mut self, patch: AddressPatch) {
        if let Some(street) = patch.street {
            self.street = street;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(state) = patch.state {
            self.state = state;
        }
        if let Some(postal_code) = patch.postal_code {
            self.postal_code = postal_code;
        }
        if let Some(country) = patch.country {
            self.country = country;
        }
    }
}

/// A partial billing address update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressPatch {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl AddressPatch {
    pub fn single(field: AddressField, value: impl Into<String>) -> Self {
        let mut patch = Self::default();
        let value = Some(value.into());
        match field {
            AddressField::Street => patch.street = value,
            AddressField::City => patch.city = value,
            AddressField::State => patch.state = value,
            AddressField::PostalCode => patch.postal_code = value,
            AddressField::Country => patch.country = value,
        }
        patch
    }
}

/// A new value for one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    CardNumber(String),
    ExpiryDate(String),
    Cvv(String),
    CardholderName(String),
    BillingAddress(AddressPatch),
}

impl FieldUpdate {
    pub fn address(field: AddressField, value: impl Into<String>) -> Self {
        FieldUpdate::BillingAddress(AddressPatch::single(field, value))
    }

    pub fn field(&self) -> FormField {
        match self {
            FieldUpdate::CardNumber(_) => FormField::CardNumber,
            FieldUpdate::ExpiryDate(_) => FormField::ExpiryDate,
            FieldUpdate::Cvv(_) => FormField::Cvv,
            FieldUpdate::CardholderName(_) => FormField::CardholderName,
            FieldUpdate::BillingAddress(_) => FormField::BillingAddress,
        }
    }
}

/// The raw contents of a payment form.
///
/// Values are stored exactly as entered; normalization (such as stripping
/// spaces from the card number) happens at validation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentRecord {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub cardholder_name: String,
    pub billing_address: BillingAddress,
}

impl PaymentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an update and returns the field it touched.
    pub fn apply(&mut self, update: FieldUpdate) -> FormField {
        let field = update.field();
        match update {
            FieldUpdate::CardNumber(value) => self.card_number = value,
            FieldUpdate::ExpiryDate(value) => self.expiry_date = value,
            FieldUpdate::Cvv(value) => self.cvv = value,
            FieldUpdate::CardholderName(value) => self.cardholder_name = value,
            FieldUpdate::BillingAddress(patch) => self.billing_address.merge(patch),
        }
        field
    }
}
