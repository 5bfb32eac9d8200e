//! tcover - render a title cover from the command line

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tcover_cli::Cli;

fn init_logging(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        },
    };

    init_logging(cli.log_level());

    match render(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        },
    }
}

fn render(cli: &Cli) -> anyhow::Result<()> {
    let report = tcover_cli::run(cli)
        .with_context(|| format!("failed to create cover at {}", cli.output.display()))?;
    println!("✅ Cover: {} ({} lines)", report.output.display(), report.lines);
    Ok(())
}
