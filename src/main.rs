use anyhow::Result;
use clap::Parser;
use serde_json::json;

use status_reporter::{
    cli::{init_logging, Cli},
    factories::{ComponentConfig, ComponentFactory, StatusReporterFactory},
    report_error, report_print, report_stdout, report_verbose, report_verbose2,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbosity = cli.verbosity.to_verbosity()?;

    // RUST_LOG が無ければ -v の回数でレベルを決める
    init_logging(verbosity);

    let config = ComponentConfig::new(
        cli.reporter.implementation(),
        json!({
            "quiet": verbosity.is_quiet(),
            "verbose": verbosity.level(),
        }),
    );
    let reporter = StatusReporterFactory::new().create(&config)?;

    let message = cli.message.as_str();
    report_error!(reporter, "{message}");
    report_stdout!(reporter, "{message}");
    report_print!(reporter, "{message}");
    report_verbose!(reporter, "{message}");
    report_verbose2!(reporter, "{message}");

    match reporter.new_counter(message) {
        Some(counter) => {
            counter.increment();
            report_verbose!(reporter, "counter {:?}: {}", counter.description(), counter.value());
        }
        None => report_verbose!(reporter, "progress counters are not supported"),
    }

    Ok(())
}
