//! `whiteout` CLI - Make near-white image backgrounds transparent.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use whiteout::{BackgroundRemover, Config, DEFAULT_THRESHOLD};

/// Make the near-white background of an image transparent and save it as PNG.
#[derive(Parser, Debug)]
#[command(name = "whiteout")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input image path (PNG, JPEG or BMP).
    #[arg(value_name = "INPUT", env = "WHITEOUT_INPUT")]
    input: PathBuf,

    /// Output PNG path. An existing file is replaced.
    #[arg(value_name = "OUTPUT", env = "WHITEOUT_OUTPUT")]
    output: PathBuf,

    /// Pixels with red, green and blue all above this value become transparent.
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD, value_name = "0-255")]
    threshold: u8,

    /// Log failures but always exit with status 0.
    #[arg(long)]
    lenient: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("whiteout={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run(&args) {
        tracing::error!("{err:#}");
        if !args.lenient {
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<()> {
    let remover = BackgroundRemover::new(Config {
        threshold: args.threshold,
    });

    let report = remover
        .process(&args.input, &args.output)
        .context("Failed to remove background")?;

    tracing::debug!(
        "{}x{} image, {} pixels made transparent",
        report.width,
        report.height,
        report.cleared
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["whiteout", "in.jpg", "out.png"]).unwrap();

        assert_eq!(args.input, PathBuf::from("in.jpg"));
        assert_eq!(args.output, PathBuf::from("out.png"));
        assert_eq!(args.threshold, 200);
        assert!(!args.lenient);
        assert!(!args.verbose);
    }

    #[test]
    fn test_threshold_range() {
        let args = Args::try_parse_from(["whiteout", "-t", "240", "a", "b"]).unwrap();
        assert_eq!(args.threshold, 240);

        assert!(Args::try_parse_from(["whiteout", "-t", "256", "a", "b"]).is_err());
    }
}
