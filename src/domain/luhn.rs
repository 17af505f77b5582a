/// Runs the Luhn checksum over a string of ASCII digits.
///
/// Digits are indexed from the right starting at 0; every digit at an odd
/// index is doubled (minus 9 when the product exceeds 9). The number is valid
/// when the sum of all resulting digits is divisible by 10.
///
/// Returns `false` for empty input or any non-digit character.
pub fn luhn_check(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }

    let mut sum = 0;
    for (index, c) in digits.chars().rev().enumerate() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };
        if index % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }

    sum % 10 == 0
}
