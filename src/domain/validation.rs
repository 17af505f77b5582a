use serde::Serialize;

/// The outcome of validating a single field.
///
/// Score is binary for payment fields: 100 when there are no errors, 0 otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub score: u8,
    pub suggestions: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self::from_findings(Vec::new(), Vec::new())
    }

    pub fn from_findings(errors: Vec<String>, suggestions: Vec<String>) -> Self {
        let is_valid = errors.is_empty();
        Self {
            is_valid,
            errors,
            score: if is_valid { 100 } else { 0 },
            suggestions,
        }
    }
}

/// Collects errors and suggestions while a validator runs.
#[derive(Debug, Default)]
pub(crate) struct Findings {
    errors: Vec<String>,
    suggestions: Vec<String>,
}

impl Findings {
    pub(crate) fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    pub(crate) fn error_with_hint(&mut self, message: &str, suggestion: &str) {
        self.errors.push(message.to_string());
        self.suggestions.push(suggestion.to_string());
    }

    pub(crate) fn finish(self) -> ValidationResult {
        ValidationResult::from_findings(self.errors, self.suggestions)
    }
}
