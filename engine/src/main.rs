// Engine main entry point: terminal consumer of the statement service.
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use engine::config::settings::EngineSettings;
use engine::services::statement_service::StatementService;
use shared::models::{FilterMode, FilterParams};
use shared::utils::brazilian_format;

#[derive(Parser, Debug)]
#[command(name = "extrato", version, about = "Bank statement (extrato) filter and aggregation engine")]
struct Cli {
    /// Semicolon-delimited statement file to load
    file: PathBuf,

    /// Category filter: all, credits, debits, pix, pix-debits
    #[arg(long)]
    filter: Option<String>,

    /// Inclusive start date, YYYY-MM-DD
    #[arg(long)]
    start: Option<String>,

    /// Inclusive end date, YYYY-MM-DD
    #[arg(long)]
    end: Option<String>,

    /// Write the filtered statement to the configured export file
    #[arg(long)]
    export: bool,

    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = match &cli.config {
        Some(path) => EngineSettings::load_from_file(path)?,
        None => EngineSettings::default(),
    };

    let mode: FilterMode = cli
        .filter
        .as_deref()
        .unwrap_or(&settings.default_filter)
        .parse()
        .map_err(anyhow::Error::msg)?;
    info!(mode = mode.as_str(), "Starting extrato engine...");

    let mut service = StatementService::new();
    service.load_file(&cli.file)?;
    service.set_params(FilterParams {
        mode,
        start_date: cli.start.clone(),
        end_date: cli.end.clone(),
    });

    let filtered = service.filtered();
    let totals = service.totals();

    for m in &filtered {
        println!(
            "{}  {:<10}  {:<34}  {:>14}  {}",
            brazilian_format::format_date_br(&m.posting_date),
            m.doc_number,
            m.description,
            brazilian_format::format_currency(m.amount),
            m.direction.code()
        );
    }
    println!();
    println!("Creditos:     {}", brazilian_format::format_currency(totals.credits));
    println!("Debitos:      {}", brazilian_format::format_currency(totals.debits));
    println!("Saldo:        {}", brazilian_format::format_currency(totals.net));
    println!("PIX + Debito: {}", brazilian_format::format_currency(totals.pix_debits));

    let diagnostics = service.diagnostics();
    if diagnostics.skipped_rows > 0 || diagnostics.zeroed_amounts > 0 {
        info!(
            skipped = diagnostics.skipped_rows,
            zeroed = diagnostics.zeroed_amounts,
            "statement had recoverable problems"
        );
    }

    if cli.export {
        let out = std::fs::File::create(&settings.export_file)?;
        let written = service.export_filtered(out)?;
        info!(rows = written, path = %settings.export_file, "filtered statement exported");
    }

    Ok(())
}
