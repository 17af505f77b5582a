use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payform::application::aggregator::FormSession;
use payform::application::processor::SubmissionProcessor;
use payform::config::{DEFAULT_SUCCESS_RATE, ProcessorConfig};
use payform::domain::ports::SharedClock;
use payform::infrastructure::clock::SystemClock;
use payform::infrastructure::simulated_gateway::SimulatedGateway;
use payform::interfaces::csv::outcome_writer::{OutcomeRecord, OutcomeWriter, OutputFormat};
use payform::interfaces::csv::submission_reader::SubmissionReader;
use payform::logging::init_tracing;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Payment submissions CSV file, one form per row
    input: PathBuf,

    /// Probability in [0, 1] that the simulated gateway approves a payment
    #[arg(long, env = "PAYFORM_SUCCESS_RATE", default_value_t = DEFAULT_SUCCESS_RATE)]
    success_rate: f64,

    /// Simulated gateway latency in milliseconds
    #[arg(long, env = "PAYFORM_DELAY_MS", default_value_t = 2000)]
    delay_ms: u64,

    /// Seed for reproducible approve/decline draws
    #[arg(long, env = "PAYFORM_SEED")]
    seed: Option<u64>,

    /// Output format for submission outcomes
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn processor_config(&self) -> ProcessorConfig {
        ProcessorConfig {
            success_rate: self.success_rate,
            delay: Duration::from_millis(self.delay_ms),
            seed: self.seed,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.processor_config();
    config.validate().into_diagnostic()?;

    let clock: SharedClock = Arc::new(SystemClock);
    let gateway = SimulatedGateway::from_config(&config, clock.clone()).into_diagnostic()?;
    let processor = SubmissionProcessor::new(Box::new(gateway), clock.clone(), config.delay);

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = SubmissionReader::new(file);
    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock(), cli.format);

    for (index, submission) in reader.submissions().into_diagnostic()?.enumerate() {
        let row = index + 1;
        let updates = match submission {
            Ok(updates) => updates,
            Err(e) => {
                warn!(row, error = %e, "skipping unreadable submission");
                continue;
            }
        };

        // Each row is its own form session, filled in field by field like the UI would.
        let mut session = FormSession::new(clock.clone());
        for update in updates {
            session.update_field(update);
        }
        let ready = session.validate_all_fields();
        debug!(row, ready, "form validated");

        let outcome = processor.submit(session.snapshot()).await;
        let record = OutcomeRecord::new(row, &outcome, session.errors().clone());
        writer.write(&record).into_diagnostic()?;
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
