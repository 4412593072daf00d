// SoccerRank - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading (explicit --config or platform default)
// 3. Logging initialisation (debug mode support)
// 4. Argument validation and the ranking pipeline
// 5. Exit status

use soccerrank::app;
use soccerrank::core::model::OutputFormat;
use soccerrank::platform;
use soccerrank::platform::config::AppConfig;
use soccerrank::util;

use clap::Parser;
use std::path::PathBuf;

/// SoccerRank - league table calculator.
///
/// Reads match results ("Lions 3, Snakes 3" one per line) and writes the
/// ranked standings, 3 points for a win and 1 for a draw.
#[derive(Parser, Debug)]
#[command(name = "soccerrank", version, about)]
struct Cli {
    /// Results file to read.
    input: Option<PathBuf>,

    /// File to write the standings to (overwritten if it exists).
    output: Option<PathBuf>,

    /// Output format: text, csv or json [default: text, or config value].
    #[arg(short = 'f', long = "format")]
    format: Option<String>,

    /// Abort on the first malformed line instead of skipping it.
    #[arg(short = 's', long = "strict")]
    strict: bool,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn fail(err: &dyn std::error::Error) -> ! {
    // Shown to the user once via stderr; the event is for --debug traces.
    tracing::debug!(error = %err, "Run failed");
    eprintln!("{err}");
    std::process::exit(1);
}

fn main() {
    let cli = Cli::parse();

    // Config is needed before logging can be set up, so its warnings are
    // held and emitted once the subscriber exists.
    let loaded = match cli.config {
        Some(ref path) => platform::config::load_config_file(path),
        None => Ok(platform::config::load_config(
            &platform::config::PlatformPaths::resolve().config_file,
        )),
    };

    let (config, config_warnings, config_error) = match loaded {
        Ok((config, warnings)) => (config, warnings, None),
        Err(e) => (AppConfig::default(), Vec::new(), Some(e)),
    };

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::debug!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "SoccerRank starting"
    );

    if let Some(e) = config_error {
        fail(&util::error::SoccerRankError::from(e));
    }
    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    let format = match cli.format.as_deref() {
        Some(name) => OutputFormat::from_name(name).unwrap_or_else(|| {
            eprintln!("Unknown output format '{name}'. Expected text, csv or json.");
            std::process::exit(2);
        }),
        None => config.format,
    };
    let policy = app::pipeline::MalformedLinePolicy::from_strict(cli.strict || config.strict);

    let paths = match app::args::validate_arguments(cli.input.as_deref(), cli.output.as_deref()) {
        Ok(paths) => paths,
        Err(e) => fail(&e),
    };

    if let Err(e) = app::pipeline::run(&paths, format, policy) {
        fail(&e);
    }
}
