use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use version_check::cli;
use version_check::config::{CheckConfig, LogFormat};
use version_check::version::sources::{BindingSource, ManifestSource};

#[derive(Parser)]
#[command(name = "version-check")]
#[command(
    version,
    about = "Check that a manifest's declared version matches the version its binding reports",
    long_about = "Check that a manifest's declared version matches the version its binding reports.\n\n\
        Exits 0 when the versions match, 1 on mismatch and 2 when a version cannot be \
        obtained or is not a valid semantic version.\n\n\
        Environment: VERSION_CHECK_MANIFEST, VERSION_CHECK_FIELD, VERSION_CHECK_BINDING, \
        VERSION_CHECK_TIMEOUT_MS, VERSION_CHECK_LOG_FORMAT, RUST_LOG"
)]
struct Cli {}

/// Logs go to stderr; stdout carries only the report
fn init_logging(format: LogFormat) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

fn main() -> anyhow::Result<ExitCode> {
    let _cli = Cli::parse();

    init_logging(LogFormat::from_env())?;

    let config = CheckConfig::from_env();
    debug!("Using {:?}", config);

    let declared = ManifestSource::new(&config.manifest_path, &config.version_field);
    let actual = BindingSource::new(
        config.version_field.as_str(),
        config.binding_command.as_str(),
        config.binding_timeout,
    );

    let outcome = cli::run(
        &declared,
        &actual,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    Ok(ExitCode::from(outcome.exit_code()))
}
