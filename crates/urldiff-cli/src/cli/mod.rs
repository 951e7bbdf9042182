//! CLI for the urldiff tool.

use anyhow::Result;
use clap::Parser;
use urldiff_core::config::{self, UrldiffConfig};
use urldiff_core::diff::{DiffOptions, MarkerStyle, UrlDiffer};

/// Top-level CLI for urldiff.
#[derive(Debug, Parser)]
#[command(name = "urldiff")]
#[command(
    about = "Show the difference between two URLs, in the spirit of diff(1)",
    long_about = None
)]
pub struct Cli {
    /// Also diff the URL hostnames.
    #[arg(long = "hostname")]
    pub diff_hostname: bool,

    /// Only print the names of differing parameters.
    #[arg(long, short = 'n')]
    pub names: bool,

    /// Use unified +/- markers instead of </>.
    #[arg(long, short = 'u')]
    pub unified: bool,

    /// URL treated as the left side of the diff.
    #[arg(value_name = "left URL")]
    pub left_url: String,

    /// URL treated as the right side of the diff.
    #[arg(value_name = "right URL")]
    pub right_url: String,
}

/// Parses arguments, runs the diff, prints it, and reports whether the two
/// URLs differ (drives the exit code).
pub fn run_from_args() -> Result<bool> {
    let cli = Cli::parse();
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let (options, names_only) = resolve_options(&cli, &cfg);
    let differ = UrlDiffer::new(&cli.left_url, &cli.right_url, options)?;

    println!("{}", differ.render(names_only));

    Ok(differ.are_different())
}

/// Merges command-line flags with configured defaults. A flag given on the
/// command line always enables its option; the config only changes the
/// default. Returns the construction options and the names-only switch.
fn resolve_options(cli: &Cli, cfg: &UrldiffConfig) -> (DiffOptions, bool) {
    let style = if cli.unified || cfg.unified {
        MarkerStyle::Unified
    } else {
        MarkerStyle::Classic
    };
    let options = DiffOptions {
        diff_hostname: cli.diff_hostname || cfg.diff_hostname,
        style,
    };
    (options, cli.names || cfg.names_only)
}
