//! disguisetool CLI entry point

use clap::Parser;
use disguisetool::cancel::CancellationToken;
use disguisetool::config::{AuditArgs, AuditRequest, Cli, Command, CueListArgs};
use disguisetool::cue::{self, CueListFormat, CueTable};
use disguisetool::{audit, export};
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(&cli);

    match cli.command {
        Command::Audit(ref args) => run_audit(args, cli.quiet),
        Command::CueList(ref args) => run_cue_list(args),
    }
}

fn init_logging(cli: &Cli) {
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = if cli.quiet { "error" } else { filter };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

fn run_audit(args: &AuditArgs, quiet: bool) -> ExitCode {
    let request = match AuditRequest::from_args(args, quiet) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Ctrl+C cancels the run; in-flight probes abort, completed records
    // are still reported.
    let cancel = CancellationToken::new();
    let handler_token = cancel.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        warn!("Cancellation requested, finishing in-flight work...");
        handler_token.cancel();
    }) {
        warn!("Could not install Ctrl+C handler: {e}");
    }

    let outcome = match audit::run(&request, &cancel) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Fatal error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if outcome.cancelled && outcome.records.is_empty() {
        println!("Audit cancelled before any files were read; no report written");
        return ExitCode::FAILURE;
    }

    let report_path =
        std::path::PathBuf::from(export::report_file_name(&request.output_stem, chrono::Local::now()));
    if let Err(e) = export::write_report(&outcome.records, &report_path) {
        eprintln!("Fatal error: {e}");
        return ExitCode::FAILURE;
    }

    println!(
        "Wrote {} records to {}",
        outcome.records.len(),
        report_path.display()
    );
    println!(
        "Summary: {} files audited, {} failed, {} projects skipped",
        outcome.files_audited, outcome.files_failed, outcome.projects_skipped
    );
    if outcome.cancelled {
        println!("Run was cancelled: the report is truncated");
    }

    // Per-item failures were surfaced as warnings; a partial audit is
    // still a successful run.
    ExitCode::SUCCESS
}

fn run_cue_list(args: &CueListArgs) -> ExitCode {
    let table = match CueTable::read(&args.path) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let cues = cue::extract_cues(&table, args.select);
    if cues.is_empty() {
        warn!("No cue tags found in {}", args.path.display());
    }

    let output_path = args.output.clone().unwrap_or_else(|| {
        let stem = args
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "cue_table".to_string());
        std::path::PathBuf::from(format!("{stem}_cues.csv"))
    });

    let result = match args.format {
        CueListFormat::EosCsv => cue::write_eos_csv(&cues, &output_path),
    };

    match result {
        Ok(()) => {
            println!("Wrote {} cues to {}", cues.len(), output_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Fatal error: {e}");
            ExitCode::FAILURE
        }
    }
}
