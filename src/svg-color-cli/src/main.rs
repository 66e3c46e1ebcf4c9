//! svg-color - convert SVG colour attribute text from the command line.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use svg_color::config::CONFIG_ENV;
use svg_color::{ColorConverter, ConverterConfig};

/// SVG colour converter
#[derive(Debug, Parser)]
#[command(name = "svg-color")]
#[command(about = "Convert SVG colour attribute text to RGBA and back")]
#[command(version)]
struct Args {
    /// Configuration file with system colour overrides
    #[arg(short, long, global = true, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Log level, used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Parse colour text and print its canonical form.
    Parse(ParseArgs),

    /// Print the canonical text for packed ARGB values.
    Serialize(SerializeArgs),

    /// List system colour keywords with their effective values.
    System,
}

#[derive(Debug, clap::Args)]
struct ParseArgs {
    /// Colour values, e.g. "rgb(255,0,0)" or "LightGrey".
    #[arg(required = true, allow_negative_numbers = true)]
    values: Vec<String>,

    /// Output one JSON object per value.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, clap::Args)]
struct SerializeArgs {
    /// AARRGGBB or RRGGBB hex, with an optional '#' or '0x' prefix.
    #[arg(required = true)]
    values: Vec<String>,
}

fn setup_logging(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        subscriber
            .with(
                tracing_subscriber::fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn build_converter(config: Option<&PathBuf>) -> anyhow::Result<ColorConverter> {
    let Some(path) = config else {
        return Ok(ColorConverter::new());
    };
    let config = ConverterConfig::load(path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    ColorConverter::from_config(&config)
        .with_context(|| format!("invalid config in {}", path.display()))
}

fn run(args: Args) -> anyhow::Result<bool> {
    let converter = build_converter(args.config.as_ref())?;
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr();

    match args.command {
        Command::Parse(parse) => {
            debug!(count = parse.values.len(), json = parse.json, "parsing values");
            if parse.json {
                commands::parse_json(&converter, &parse.values, &mut stdout)
            } else {
                commands::parse_text(&converter, &parse.values, &mut stdout, &mut stderr)
            }
        }
        Command::Serialize(serialize) => {
            commands::serialize(&converter, &serialize.values, &mut stdout, &mut stderr)
        }
        Command::System => commands::system(&converter, &mut stdout).map(|()| true),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    setup_logging(&args.log_level, args.json_logs);

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
