use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nordot::cli::{self, Cli};
use nordot::report;

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nordot=warn,nord_pixel=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if args.input.is_none() {
        eprintln!("{}", Cli::command().render_help());
        std::process::exit(1);
    }

    let config = args.load_config()?;
    let settings = args
        .resolve(&config)
        .context("No input image given")?;

    let summary = cli::run(&settings).with_context(|| {
        format!(
            "Failed to convert {} to {}",
            settings.input.display(),
            settings.output.display()
        )
    })?;

    print!("{}", report::render(args.report, &settings.output, &summary)?);
    Ok(())
}
