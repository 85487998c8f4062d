use anyhow::{anyhow, Result};
use clap::Parser;
use hushmark_app::cli::Cli;
use hushmark_app::report::ReportWriter;
use hushmark_app::scan::scan;
use hushmark_app::wav::WavFrameSource;
use hushmark_silence::{SilenceConfig, SilenceDetector};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = SilenceConfig::new(cli.threshold);
    config.validate().map_err(|e| anyhow!(e))?;

    tracing::info!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        threshold = config.energy_threshold,
        "starting silence scan"
    );

    let mut source = WavFrameSource::open(&cli.input)?;
    let mut detector = SilenceDetector::new(config);
    let mut report = ReportWriter::create(&cli.output, cli.format)?;

    let interval_count = scan(&mut source, &mut detector, &mut report)?;
    report.finish()?;

    tracing::info!(
        intervals = interval_count,
        "silent times have been saved to {}",
        cli.output.display()
    );
    Ok(())
}
