#![allow(dead_code)]

use payform::domain::ports::SharedClock;
use payform::domain::record::{AddressField, FieldUpdate};
use payform::infrastructure::clock::FixedClock;
use std::fs::File;
use std::io::Error;
use std::path::Path;
use std::sync::Arc;

pub const HEADERS: [&str; 9] = [
    "cardNumber",
    "expiryDate",
    "cvv",
    "cardholderName",
    "billingStreet",
    "billingCity",
    "billingState",
    "billingZipCode",
    "billingCountry",
];

/// A valid submission that stays unexpired until 2099.
pub const VALID_ROW: [&str; 9] = [
    "4532015112830366",
    "12/99",
    "123",
    "John Doe",
    "123 Main St",
    "New York",
    "NY",
    "10001",
    "US",
];

/// 15 June 2024.
pub fn clock() -> SharedClock {
    Arc::new(FixedClock::on(2024, 6, 15).unwrap())
}

/// Field updates for a complete, valid form with the given expiry.
pub fn valid_updates(expiry: &str) -> Vec<FieldUpdate> {
    vec![
        FieldUpdate::CardNumber("4532015112830366".to_string()),
        FieldUpdate::ExpiryDate(expiry.to_string()),
        FieldUpdate::Cvv("123".to_string()),
        FieldUpdate::CardholderName("John Doe".to_string()),
        FieldUpdate::address(AddressField::Street, "123 Main St"),
        FieldUpdate::address(AddressField::City, "New York"),
        FieldUpdate::address(AddressField::State, "NY"),
        FieldUpdate::address(AddressField::PostalCode, "10001"),
        FieldUpdate::address(AddressField::Country, "US"),
    ]
}

pub fn write_submissions(path: &Path, rows: &[[&str; 9]]) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(HEADERS)?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes `rows` submissions, every third one with a malformed CVV.
pub fn generate_submissions(path: &Path, rows: usize) -> Result<(), Error> {
    let mut invalid = VALID_ROW;
    invalid[2] = "12";

    let rows: Vec<[&str; 9]> = (0..rows)
        .map(|i| if i % 3 == 2 { invalid } else { VALID_ROW })
        .collect();
    write_submissions(path, &rows)
}
