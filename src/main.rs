use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use verscout::cli::{handle_latest, handle_next, LatestArgs, NextArgs, Outcome};
use verscout::config::resolve_config_path;
use verscout::domain::SemanticVersion;
use verscout::git::Git2Repository;
use verscout::ui;

#[derive(Parser)]
#[command(
    name = "verscout",
    version,
    about = "Find the latest version tag and calculate the next version",
    long_about = "Find the latest version tag and calculate the next version based on conventional commits"
)]
struct Cli {
    #[arg(
        short,
        long,
        global = true,
        default_value = ".",
        help = "Directory path to the git repository"
    )]
    dir: PathBuf,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scout the latest version tag in the format MAJOR.MINOR.PATCH
    Latest {
        #[arg(short, long, help = "The exit code to use when no latest version is found")]
        exit_code: Option<i32>,
    },

    /// Calculate the next version in the format MAJOR.MINOR.PATCH
    Next {
        #[arg(short, long, help = "The exit code to use when no next version is found")]
        exit_code: Option<i32>,

        #[arg(
            short,
            long,
            help = "Bump pattern configuration file [default: .verscout.toml in the repository root]"
        )]
        config: Option<PathBuf>,

        #[arg(
            long,
            default_value = "1.0.0",
            help = "The version to report when no version tag exists"
        )]
        default_version: SemanticVersion,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(io::stderr),
        )
        .init();
}

fn run(cli: &Cli) -> Result<Outcome> {
    let repo = Git2Repository::open(&cli.dir).context("failed to open repository")?;
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Command::Latest { exit_code } => {
            let args = LatestArgs {
                exit_code: *exit_code,
            };
            handle_latest(&mut stdout, &repo, &args).context("error while running latest command")
        }
        Command::Next {
            exit_code,
            config,
            default_version,
        } => {
            let args = NextArgs {
                exit_code: *exit_code,
                config_path: resolve_config_path(
                    config.as_deref(),
                    repo.workdir().unwrap_or(cli.dir.as_path()),
                ),
                default_version: *default_version,
            };
            handle_next(&mut stdout, &repo, &args).context("error while running next command")
        }
    }
}
