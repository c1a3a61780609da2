use std::process::ExitCode;

use simp_cli::config::{self, OutputFormat, RunConfig};
use simp_cli::{output, programs, runner, CliError};

fn main() -> ExitCode {
    init_tracing();
    let matches = config::command().get_matches();
    let result = RunConfig::from_matches(&matches).and_then(|config| run(&config));
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("simp: {e}");
            ExitCode::from(2)
        }
    }
}

/// Install a stderr subscriber, only when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(EnvFilter::from_default_env())
            .init();
    }
}

/// Run the selected programs. Returns whether every one of them passed.
fn run(config: &RunConfig) -> Result<bool, CliError> {
    let catalog = programs::catalog();
    if config.list {
        print!("{}", output::render_catalog(&catalog));
        return Ok(true);
    }

    let selected = if config.scenarios.is_empty() {
        catalog
    } else {
        config
            .scenarios
            .iter()
            .map(|name| programs::find(name).ok_or_else(|| CliError::UnknownScenario(name.clone())))
            .collect::<Result<Vec<_>, _>>()?
    };

    let mut all_passed = true;
    for program in &selected {
        let report = runner::run_program(program, config);
        all_passed &= report.passed();
        match config.format {
            OutputFormat::Text => print!("{}", output::render_text(&report, config.trace)),
            OutputFormat::Json => println!("{}", output::render_json(&report)?),
        }
    }
    Ok(all_passed)
}
