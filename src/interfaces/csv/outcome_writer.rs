use crate::domain::outcome::SubmissionOutcome;
use crate::domain::validators::ErrorMap;
use crate::error::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    /// One JSON object per line.
    Json,
}

/// The reported result of one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeRecord {
    pub row: usize,
    pub success: bool,
    pub transaction_id: Option<String>,
    pub error: Option<String>,
    pub field_errors: ErrorMap,
}

impl OutcomeRecord {
    pub fn new(row: usize, outcome: &SubmissionOutcome, field_errors: ErrorMap) -> Self {
        Self {
            row,
            success: outcome.success(),
            transaction_id: outcome.transaction_id().map(str::to_string),
            error: outcome.error().map(str::to_string),
            field_errors,
        }
    }
}

/// CSV cannot hold nested maps, so field errors are flattened to
/// `field: message; field: message`.
#[derive(Serialize)]
struct CsvRow<'a> {
    row: usize,
    success: bool,
    transaction_id: Option<&'a str>,
    error: Option<&'a str>,
    field_errors: String,
}

impl<'a> From<&'a OutcomeRecord> for CsvRow<'a> {
    fn from(record: &'a OutcomeRecord) -> Self {
        let field_errors = record
            .field_errors
            .iter()
            .flat_map(|(field, messages)| {
                messages.iter().map(move |message| format!("{field}: {message}"))
            })
            .collect::<Vec<_>>()
            .join("; ");
        Self {
            row: record.row,
            success: record.success,
            transaction_id: record.transaction_id.as_deref(),
            error: record.error.as_deref(),
            field_errors,
        }
    }
}

enum Sink<W: Write> {
    Csv(csv::Writer<W>),
    Json(W),
}

/// Writes outcome records as CSV (with a header row) or JSON lines.
pub struct OutcomeWriter<W: Write> {
    sink: Sink<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(target: W, format: OutputFormat) -> Self {
        let sink = match format {
            OutputFormat::Csv => Sink::Csv(csv::Writer::from_writer(target)),
            OutputFormat::Json => Sink::Json(target),
        };
        Self { sink }
    }

    pub fn write(&mut self, record: &OutcomeRecord) -> Result<()> {
        match &mut self.sink {
            Sink::Csv(writer) => writer.serialize(CsvRow::from(record))?,
            Sink::Json(writer) => {
                serde_json::to_writer(&mut *writer, record)?;
                writer.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        match &mut self.sink {
            Sink::Csv(writer) => writer.flush()?,
            Sink::Json(writer) => writer.flush()?,
        }
        Ok(())
    }
}
