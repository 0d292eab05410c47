use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};
use stride_cli::config::{self, LogFormat, StrideConfig};
use stride_cli::report;
use stride_core::models::{ProstheticRecord, RecordId, Roster};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stride")]
#[command(about = "Prosthetic slot allocation diagnostics", version)]
struct Cli {
    /// Config file to use instead of the platform default
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the slot availability map of a roster snapshot
    Availability {
        /// Roster JSON file
        #[arg(long)]
        roster: PathBuf,
        /// Record id to leave out, as when editing it
        #[arg(long)]
        exclude: Option<RecordId>,
    },
    /// Replay a draft record through the editor and report what it refuses
    Check {
        /// Roster JSON file
        #[arg(long)]
        roster: PathBuf,
        /// Draft record JSON file
        #[arg(long)]
        draft: PathBuf,
    },
    /// Show or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective config
    Show,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let config = config::load_or_default(&config_path)?;
    init_tracing(config.log_format);

    match cli.command {
        Commands::Availability { roster, exclude } => {
            let roster = read_roster(&roster)?;
            print_json(&report::availability(&roster, exclude))?;
        }
        Commands::Check { roster, draft } => {
            let roster = read_roster(&roster)?;
            let draft: ProstheticRecord = read_json(&draft)?;
            let report = report::check_draft(roster, &draft, config.limits.clone()).await?;
            print_json(&report)?;
            if !report.is_clean() {
                std::process::exit(1);
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => print_json(&config)?,
            ConfigAction::Init { force } => {
                if config_path.exists() && !force {
                    return Err(eyre::eyre!(
                        "config already exists at {} (use --force to overwrite)",
                        config_path.display()
                    ));
                }
                config::save_config(&config_path, &StrideConfig::default())?;
                println!("Wrote config to {}", config_path.display());
            }
        },
    }

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).wrap_err_with(|| format!("invalid JSON in {}", path.display()))
}

fn read_roster(path: &Path) -> Result<Roster> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    Roster::from_json(&contents).wrap_err_with(|| format!("invalid roster in {}", path.display()))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
