use crate::domain::record::FieldUpdate;
use crate::error::Result;
use crate::interfaces::form_fields::{self, FieldTarget};
use std::io::Read;

/// Reads payment form submissions from a CSV source.
///
/// The header row names form inputs (see [`form_fields::FIELD_BINDINGS`]) in
/// any order; each following record is one submission. Values are passed
/// through untrimmed so the validators see exactly what was entered, and
/// short records simply leave the missing inputs unset.
pub struct SubmissionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> SubmissionReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Resolves the header row, then lazily yields the field updates of each
    /// submission.
    ///
    /// Fails up front if a header is not a known form input.
    pub fn submissions(mut self) -> Result<impl Iterator<Item = Result<Vec<FieldUpdate>>>> {
        let targets = self
            .reader
            .headers()?
            .iter()
            .map(form_fields::resolve)
            .collect::<Result<Vec<FieldTarget>>>()?;

        Ok(self
            .reader
            .into_records()
            .map(move |record| -> Result<Vec<FieldUpdate>> {
                let record = record?;
                Ok(targets
                    .iter()
                    .zip(record.iter())
                    .map(|(target, value)| target.update(value))
                    .collect())
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::{AddressField, PaymentRecord};
    use crate::error::PaymentError;

    #[test]
    fn test_reader_valid_stream() {
        let data = "cardNumber, cvv, billingZipCode\n\
                    4532015112830366,123,10001\n\
                    4111111111111111,99,";
        let reader = SubmissionReader::new(data.as_bytes());
        let results: Vec<Result<Vec<FieldUpdate>>> = reader.submissions().unwrap().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(
            first,
            &vec![
                FieldUpdate::CardNumber("4532015112830366".to_string()),
                FieldUpdate::Cvv("123".to_string()),
                FieldUpdate::address(AddressField::PostalCode, "10001"),
            ]
        );
    }

    #[test]
    fn test_reader_keeps_values_untrimmed() {
        let data = "cardholderName\n  Jane Roe ";
        let reader = SubmissionReader::new(data.as_bytes());
        let updates = reader.submissions().unwrap().next().unwrap().unwrap();

        let mut record = PaymentRecord::new();
        for update in updates {
            record.apply(update);
        }
        assert_eq!(record.cardholder_name, "  Jane Roe ");
    }

    #[test]
    fn test_reader_short_record_leaves_inputs_unset() {
        let data = "cvv,cardNumber\n123";
        let reader = SubmissionReader::new(data.as_bytes());
        let updates = reader.submissions().unwrap().next().unwrap().unwrap();
        assert_eq!(updates, vec![FieldUpdate::Cvv("123".to_string())]);
    }

    #[test]
    fn test_reader_unknown_header() {
        let data = "cardNumber,zipCode\n4532015112830366,10001";
        let reader = SubmissionReader::new(data.as_bytes());
        assert!(matches!(
            reader.submissions(),
            Err(PaymentError::UnknownField(name)) if name == "zipCode"
        ));
    }

    #[test]
    fn test_reader_malformed_record() {
        let mut data = b"cvv\n123\n".to_vec();
        data.extend_from_slice(&[0xff, 0xfe, b'\n']);
        data.extend_from_slice(b"456\n");
        let reader = SubmissionReader::new(data.as_slice());
        let results: Vec<Result<Vec<FieldUpdate>>> = reader.submissions().unwrap().collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }
}
