//! Field validators.
//!
//! Every validator is a pure function from a raw field value to a
//! [`ValidationResult`]. The expiry check is the only one that depends on the
//! calendar; the caller passes the current date in.

use super::luhn::luhn_check;
use super::record::{BillingAddress, FormField, PaymentRecord};
use super::validation::{Findings, ValidationResult};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Field name to its outstanding (non-empty) error list.
pub type ErrorMap = BTreeMap<FormField, Vec<String>>;

static CARD_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{13,19}$").expect("Valid regex pattern"));
static EXPIRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2])/([0-9]{2})$").expect("Valid regex pattern")
});
static CVV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,4}$").expect("Valid regex pattern"));
static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("Valid regex pattern"));
static ZIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("Valid regex pattern"));

pub fn validate_card_number(card_number: &str) -> ValidationResult {
    let mut findings = Findings::default();
    let digits: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();

    if digits.is_empty() {
        findings.error("Card number is required");
    } else if !CARD_DIGITS.is_match(&digits) {
        findings.error_with_hint(
            "Card number must be 13-19 digits",
            "Enter a valid card number with 13-19 digits",
        );
    } else if !luhn_check(&digits) {
        findings.error_with_hint("Invalid card number", "Check your card number for typos");
    }

    findings.finish()
}

/// Validates an `MM/YY` expiry against `today`.
///
/// Years compare on their last two digits; a card expiring in the current
/// month is still valid.
pub fn validate_expiry_date(expiry_date: &str, today: NaiveDate) -> ValidationResult {
    let mut findings = Findings::default();

    if expiry_date.is_empty() {
        findings.error("Expiry date is required");
    } else if let Some(captures) = EXPIRY.captures(expiry_date) {
        let month: u32 = captures[1].parse().unwrap_or_default();
        let year: i32 = captures[2].parse().unwrap_or_default();
        let current_year = today.year().rem_euclid(100);
        let current_month = today.month();

        if year < current_year || (year == current_year && month < current_month) {
            findings.error_with_hint("Card has expired", "Use a card with a future expiry date");
        }
    } else {
        findings.error_with_hint(
            "Expiry date must be in MM/YY format",
            "Use format MM/YY (e.g., 12/25)",
        );
    }

    findings.finish()
}

pub fn validate_cvv(cvv: &str) -> ValidationResult {
    let mut findings = Findings::default();

    if cvv.is_empty() {
        findings.error("CVV is required");
    } else if !CVV.is_match(cvv) {
        findings.error_with_hint(
            "CVV must be 3 or 4 digits",
            "Find the 3-4 digit security code on the back of your card",
        );
    }

    findings.finish()
}

pub fn validate_cardholder_name(name: &str) -> ValidationResult {
    let mut findings = Findings::default();
    let trimmed = name.trim();

    if trimmed.is_empty() {
        findings.error("Cardholder name is required");
    } else if trimmed.chars().count() < 2 {
        findings.error_with_hint(
            "Cardholder name must be at least 2 characters",
            "Enter the full name as shown on the card",
        );
    } else if !NAME.is_match(name) {
        findings.error_with_hint(
            "Cardholder name can only contain letters and spaces",
            "Remove numbers and special characters",
        );
    }

    findings.finish()
}

/// Checks every address member; errors accumulate rather than stopping at
/// the first blank member.
pub fn validate_billing_address(address: &BillingAddress) -> ValidationResult {
    let mut findings = Findings::default();

    let required = [
        (&address.street, "Street address is required"),
        (&address.city, "City is required"),
        (&address.state, "State is required"),
        (&address.postal_code, "ZIP code is required"),
        (&address.country, "Country is required"),
    ];
    for (value, message) in required {
        if value.trim().is_empty() {
            findings.error(message);
        }
    }

    // A present but blank postal code is reported as both missing and malformed.
    if !address.postal_code.is_empty() && !ZIP.is_match(&address.postal_code) {
        findings.error_with_hint(
            "Invalid ZIP code format",
            "Use 5-digit ZIP code format (e.g., 12345 or 12345-6789)",
        );
    }

    findings.finish()
}

/// Runs the validator registered for `field` against the record.
pub fn validate_field(
    field: FormField,
    record: &PaymentRecord,
    today: NaiveDate,
) -> ValidationResult {
    match field {
        FormField::CardNumber => validate_card_number(&record.card_number),
        FormField::ExpiryDate => validate_expiry_date(&record.expiry_date, today),
        FormField::Cvv => validate_cvv(&record.cvv),
        FormField::CardholderName => validate_cardholder_name(&record.cardholder_name),
        FormField::BillingAddress => validate_billing_address(&record.billing_address),
    }
}

/// Validates every field and returns the errors of the failing ones.
pub fn validate_record(record: &PaymentRecord, today: NaiveDate) -> ErrorMap {
    FormField::ALL
        .into_iter()
        .filter_map(|field| {
            let result = validate_field(field, record, today);
            (!result.is_valid).then_some((field, result.errors))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn complete_address() -> BillingAddress {
        BillingAddress {
            street: "123 Main St".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            postal_code: "10001".to_string(),
            country: "US".to_string(),
        }
    }

    #[test]
    fn test_card_number_valid_with_spaces() {
        let result = validate_card_number("4532 0151 1283 0366");
        assert!(result.is_valid);
        assert_eq!(result.score, 100);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_card_number_required() {
        let result = validate_card_number("   ");
        assert_eq!(result.errors, vec!["Card number is required"]);
        assert!(result.suggestions.is_empty());
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_card_number_length_boundaries() {
        // Luhn-valid at 13 and 19 digits.
        assert!(validate_card_number("4222222222222").is_valid);
        assert!(validate_card_number("4000000000000000006").is_valid);

        // 12 and 20 digits fail on length even with a valid checksum.
        for number in ["000000000000", "00000000000000000000"] {
            let result = validate_card_number(number);
            assert_eq!(result.errors, vec!["Card number must be 13-19 digits"]);
            assert_eq!(
                result.suggestions,
                vec!["Enter a valid card number with 13-19 digits"]
            );
        }
    }

    #[test]
    fn test_card_number_rejects_separators() {
        let result = validate_card_number("4532-0151-1283-0366");
        assert_eq!(result.errors, vec!["Card number must be 13-19 digits"]);
    }

    #[test]
    fn test_card_number_checksum_failure() {
        let result = validate_card_number("4532015112830367");
        assert_eq!(result.errors, vec!["Invalid card number"]);
        assert_eq!(result.suggestions, vec!["Check your card number for typos"]);
    }

    #[test]
    fn test_expiry_rejects_out_of_range_months() {
        let today = date(2024, 6, 15);
        for value in ["13/25", "00/25", "1/25", "01/2025", "01-25", " 01/25"] {
            let result = validate_expiry_date(value, today);
            assert_eq!(
                result.errors,
                vec!["Expiry date must be in MM/YY format"],
                "{value}"
            );
            assert_eq!(result.suggestions, vec!["Use format MM/YY (e.g., 12/25)"]);
        }
    }

    #[test]
    fn test_expiry_current_month_is_valid() {
        assert!(validate_expiry_date("06/24", date(2024, 6, 30)).is_valid);
    }

    #[test]
    fn test_expiry_previous_month_is_expired() {
        let result = validate_expiry_date("05/24", date(2024, 6, 1));
        assert_eq!(result.errors, vec!["Card has expired"]);
        assert_eq!(
            result.suggestions,
            vec!["Use a card with a future expiry date"]
        );
    }

    #[test]
    fn test_expiry_previous_year_is_expired() {
        let result = validate_expiry_date("12/23", date(2024, 1, 1));
        assert_eq!(result.errors, vec!["Card has expired"]);
    }

    #[test]
    fn test_expiry_future_year_with_earlier_month_is_valid() {
        assert!(validate_expiry_date("01/25", date(2024, 12, 31)).is_valid);
    }

    #[test]
    fn test_expiry_required() {
        let result = validate_expiry_date("", date(2024, 1, 1));
        assert_eq!(result.errors, vec!["Expiry date is required"]);
    }

    #[test]
    fn test_cvv() {
        assert!(validate_cvv("123").is_valid);
        assert!(validate_cvv("1234").is_valid);
        assert_eq!(validate_cvv("").errors, vec!["CVV is required"]);

        for value in ["12", "12345", "12a", " 123"] {
            let result = validate_cvv(value);
            assert_eq!(result.errors, vec!["CVV must be 3 or 4 digits"], "{value}");
            assert_eq!(
                result.suggestions,
                vec!["Find the 3-4 digit security code on the back of your card"]
            );
        }
    }

    #[test]
    fn test_cardholder_name() {
        assert!(validate_cardholder_name("John Doe").is_valid);
        assert!(validate_cardholder_name("  Jo  ").is_valid);
        assert_eq!(
            validate_cardholder_name(" \t ").errors,
            vec!["Cardholder name is required"]
        );
        assert_eq!(
            validate_cardholder_name(" J ").errors,
            vec!["Cardholder name must be at least 2 characters"]
        );

        let result = validate_cardholder_name("John Doe 3rd");
        assert_eq!(
            result.errors,
            vec!["Cardholder name can only contain letters and spaces"]
        );
        assert_eq!(
            result.suggestions,
            vec!["Remove numbers and special characters"]
        );
        assert!(!validate_cardholder_name("O'Brien").is_valid);
    }

    #[test]
    fn test_address_complete_is_valid() {
        assert!(validate_billing_address(&complete_address()).is_valid);

        let mut plus_four = complete_address();
        plus_four.postal_code = "10001-1234".to_string();
        assert!(validate_billing_address(&plus_four).is_valid);
    }

    #[test]
    fn test_address_errors_are_cumulative() {
        let result = validate_billing_address(&BillingAddress::default());
        assert_eq!(
            result.errors,
            vec![
                "Street address is required",
                "City is required",
                "State is required",
                "ZIP code is required",
                "Country is required",
            ]
        );
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_address_malformed_zip() {
        let mut address = complete_address();
        address.postal_code = "1234".to_string();
        let result = validate_billing_address(&address);
        assert_eq!(result.errors, vec!["Invalid ZIP code format"]);
        assert_eq!(
            result.suggestions,
            vec!["Use 5-digit ZIP code format (e.g., 12345 or 12345-6789)"]
        );
    }

    #[test]
    fn test_address_blank_zip_is_required_and_malformed() {
        let mut address = complete_address();
        address.postal_code = "  ".to_string();
        let result = validate_billing_address(&address);
        assert_eq!(
            result.errors,
            vec!["ZIP code is required", "Invalid ZIP code format"]
        );
    }

    #[test]
    fn test_validate_record_collects_failing_fields_only() {
        let record = PaymentRecord {
            card_number: "4532015112830366".to_string(),
            expiry_date: "12/30".to_string(),
            cvv: "12".to_string(),
            cardholder_name: "John Doe".to_string(),
            billing_address: complete_address(),
        };
        let errors = validate_record(&record, date(2024, 1, 1));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&FormField::Cvv], vec!["CVV must be 3 or 4 digits"]);
    }
}
