use std::process::ExitCode;

use revamp_core::services::batch::ThreadPacer;
use revamp_core::services::pipeline::{self, PipelineReport};
use revamp_core::{cli, telemetry, RevampError, CATALOG};

fn banner(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {title}");
    println!("{}", "=".repeat(60));
}

fn print_summary(report: &PipelineReport) {
    let summary = report.batch.summary;
    println!("\nIcon Generation Complete!");
    println!("  Successful: {}", summary.success_count);
    println!("  Failed: {}", summary.failure_count);
    for line in cli::failure_lines(&report.batch) {
        println!("    {line}");
    }

    banner("UI REVAMP COMPLETE!");
    println!("\nNext steps:");
    match &report.advisory_saved {
        Some(p) => println!("1. Review UI suggestions in: {}", p.display()),
        None => println!("1. No UI suggestions were saved this run"),
    }
    println!("2. Icons generated in: {}", report.icons_dir.display());
    println!("3. Icon component created: {}", report.component_path.display());
    println!("\nTo use the new icons, import PokerIcon:");
    println!("  import {{ PokerIcon }} from './components/PokerIcon';");
    println!("\nThen replace emojis like:");
    println!("  Before: <button>📚 Tutorial</button>");
    println!("  After:  <button><PokerIcon name=\"tutorial\" size={{20}} /> Tutorial</button>");
}

fn run() -> Result<(), RevampError> {
    let (settings, client) = cli::bootstrap(cli::env_lookup)?;
    telemetry::init(settings.log_json);

    banner("POKER TRAINER UI REVAMP");
    let report = pipeline::run(&client, &settings, CATALOG, &mut ThreadPacer)?;
    print_summary(&report);
    Ok(())
}

fn main() -> ExitCode {
    let result = run();
    if let Err(e) = &result {
        eprintln!("Error: {e}");
    }
    ExitCode::from(cli::exit_code(&result))
}
