use std::process::ExitCode;

use revamp_core::services::batch::ThreadPacer;
use revamp_core::services::pipeline;
use revamp_core::{cli, telemetry, RevampError, CATALOG};

fn run() -> Result<(), RevampError> {
    let (settings, client) = cli::bootstrap(cli::env_lookup)?;
    telemetry::init(settings.log_json);

    let report = pipeline::run_missing(&client, &settings, CATALOG, &mut ThreadPacer)?;
    println!(
        "Done! {} of {} generated, {} failed",
        report.summary.success_count,
        report.summary.total(),
        report.summary.failure_count
    );
    for line in cli::failure_lines(&report) {
        println!("  {line}");
    }
    Ok(())
}

fn main() -> ExitCode {
    let result = run();
    if let Err(e) = &result {
        eprintln!("Error: {e}");
    }
    ExitCode::from(cli::exit_code(&result))
}
