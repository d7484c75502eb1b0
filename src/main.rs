use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use decant::config::{parse_triple, PuzzleConfig};
use decant::validation::ViolationStrategy;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Find the fewest pours that leave one bucket holding the target volume.
#[derive(Debug, Parser)]
#[command(name = "decant", version, about)]
struct Cli {
    /// Bucket capacities as `A,B,C`
    #[arg(long, env = "DECANT_CAPACITIES", value_parser = parse_triple)]
    capacities: Option<[u32; 3]>,

    /// Volume some bucket must end up holding
    #[arg(long, env = "DECANT_TARGET")]
    target: Option<u32>,

    /// Starting fill levels as `A,B,C`
    #[arg(long, env = "DECANT_INITIAL", value_parser = parse_triple)]
    initial: Option<[u32; 3]>,

    /// TOML file with `capacities`, `target` and `initial`
    #[arg(long, env = "DECANT_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Annotate each step with the pour that produced it (text output)
    #[arg(long)]
    show_pours: bool,

    /// Log validation problems instead of refusing to run
    #[arg(long)]
    lenient: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => PuzzleConfig::load(path)
            .with_context(|| format!("loading puzzle config from {}", path.display()))?,
        None => PuzzleConfig::default(),
    }
    .with_overrides(cli.capacities, cli.target, cli.initial);

    let strategy = if cli.lenient {
        ViolationStrategy::WarnAndContinue
    } else {
        ViolationStrategy::Reject
    };

    let report = config.solve(strategy).context("invalid puzzle")?;

    match cli.format {
        OutputFormat::Text => println!("{}", report.render_text(cli.show_pours)),
        OutputFormat::Json => println!("{}", report.to_json_pretty()?),
    }

    Ok(())
}
