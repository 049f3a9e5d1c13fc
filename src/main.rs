use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;

use winver_gate::config::{self, Config};
use winver_gate::logging;
use winver_gate::version::catalog::{self, Release};
use winver_gate::version::checker::VersionSupportChecker;

#[derive(Parser)]
#[command(name = "winver-gate")]
#[command(version, about = "Check the running Windows release against supported ranges")]
struct Cli {
    /// Path to the JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the current operating system version
    Current,
    /// List the release catalog
    List,
    /// Check whether the current version is within a release range
    Check {
        /// Minimum supported release (inclusive)
        #[arg(value_parser = parse_release)]
        min: Release,
        /// Maximum supported release (inclusive)
        #[arg(long, value_parser = parse_release, default_value = "none")]
        max: Release,
        /// Evaluate against the configured cosmetic version
        #[arg(long)]
        cosmetic: bool,
    },
}

fn parse_release(s: &str) -> Result<Release, String> {
    s.parse().map_err(|_| {
        let names: Vec<&str> = Release::ALL.iter().map(Release::as_str).collect();
        format!("unknown release {s:?}, expected one of: {}", names.join(", "))
    })
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _guard = logging::init(&config::data_dir(), config::LOG_FILE_NAME);

    let config_path = cli.config.unwrap_or_else(config::config_path);
    let config = Config::load(&config_path)?;
    info!("Loaded config from {:?}", config_path);

    let checker = VersionSupportChecker::from_config(&config);

    match cli.command {
        Command::Current => {
            println!("{}", checker.current_version()?);
            Ok(ExitCode::SUCCESS)
        }
        Command::List => {
            for (release, version) in catalog::entries() {
                println!(
                    "{:>2}  {:<22} {:<12} {}",
                    release.index(),
                    release.as_str(),
                    version.to_string(),
                    release
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { min, max, cosmetic } => {
            let supported = if cosmetic {
                checker.is_supported_cosmetic(min, max)?
            } else {
                checker.is_supported(min, max)?
            };
            info!(
                "Support check {}..={} (cosmetic: {}): {}",
                min.as_str(),
                max.as_str(),
                cosmetic,
                supported
            );

            if supported {
                println!("supported");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("unsupported");
                Ok(ExitCode::from(1))
            }
        }
    }
}
