use crate::domain::ports::SharedClock;
use crate::domain::record::{FieldUpdate, FormField, PaymentRecord};
use crate::domain::validation::ValidationResult;
use crate::domain::validators::{self, ErrorMap};
use tracing::{debug, trace};

/// One payment form being filled in.
///
/// `FormSession` owns the record and the error map. A field appears in the
/// error map only while its latest validation failed, and every write to the
/// map goes through [`update_field`](Self::update_field),
/// [`validate_all_fields`](Self::validate_all_fields) or [`reset`](Self::reset).
pub struct FormSession {
    record: PaymentRecord,
    errors: ErrorMap,
    clock: SharedClock,
}

impl FormSession {
    /// Creates an empty form. The clock decides which expiry dates count as expired.
    pub fn new(clock: SharedClock) -> Self {
        Self {
            record: PaymentRecord::new(),
            errors: ErrorMap::new(),
            clock,
        }
    }

    /// Writes a new value and re-validates only the touched field.
    ///
    /// Billing address updates are merged into the current address. Entries
    /// of other fields in the error map are left untouched.
    pub fn update_field(&mut self, update: FieldUpdate) -> ValidationResult {
        let field = self.record.apply(update);
        trace!(%field, "field updated");
        self.revalidate(field)
    }

    /// Re-validates every field and reports whether the whole form is valid.
    pub fn validate_all_fields(&mut self) -> bool {
        let mut all_valid = true;
        for field in FormField::ALL {
            all_valid &= self.revalidate(field).is_valid;
        }
        debug!(
            valid = all_valid,
            failing = self.errors.len(),
            "validated all fields"
        );
        all_valid
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn errors_for(&self, field: FormField) -> Option<&[String]> {
        self.errors.get(&field).map(Vec::as_slice)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn record(&self) -> &PaymentRecord {
        &self.record
    }

    /// A copy of the record to hand to the submission processor.
    pub fn snapshot(&self) -> PaymentRecord {
        self.record.clone()
    }

    /// Clears the record and all errors, starting a fresh form.
    pub fn reset(&mut self) {
        self.record = PaymentRecord::new();
        self.errors.clear();
    }

    fn revalidate(&mut self, field: FormField) -> ValidationResult {
        let result = validators::validate_field(field, &self.record, self.clock.today());
        if result.is_valid {
            self.errors.remove(&field);
        } else {
            self.errors.insert(field, result.errors.clone());
        }
        result
    }
}
