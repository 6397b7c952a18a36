use clap::Parser;
use debt_settlement::application::pipeline::Pipeline;
use debt_settlement::domain::ports::RecordSourceBox;
use debt_settlement::infrastructure::http::{DEFAULT_BASE_URL, HttpRecordSource};
use debt_settlement::infrastructure::json_file::JsonFileSource;
use debt_settlement::interfaces::jsonl::record_writer::RecordWriter;
use debt_settlement::telemetry;
use miette::{IntoDiagnostic, Result};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the debts API
    #[arg(long, env = "DEBT_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Directory holding debts.json, payment_plans.json and payments.json.
    /// If provided, records are read from there instead of the API.
    #[arg(long)]
    fixtures: Option<PathBuf>,

    /// Per-request timeout in seconds for the API
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Also print the payment plans after payments are applied
    #[arg(long)]
    show_plans: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_logging("warn");

    let source: RecordSourceBox = if let Some(dir) = cli.fixtures {
        tracing::info!(dir = %dir.display(), "Reading records from fixture files");
        Box::new(JsonFileSource::new(dir))
    } else if let Some(secs) = cli.timeout_secs {
        let source = HttpRecordSource::with_timeout(cli.base_url, Duration::from_secs(secs))
            .into_diagnostic()?;
        Box::new(source)
    } else {
        Box::new(HttpRecordSource::new(cli.base_url))
    };

    let pipeline = Pipeline::new(source).with_plans(cli.show_plans);

    let stdout = io::stdout();
    let mut report = RecordWriter::new(stdout.lock());
    pipeline.run(&mut report).await.into_diagnostic()?;

    Ok(())
}
