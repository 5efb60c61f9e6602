//! adminui - Entry Point

use adminui::config::{CliOverrides, ResolvedConfig};
use adminui::model::AppError;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// adminui - terminal table for managing user records
#[derive(Parser, Debug)]
#[command(name = "adminui")]
#[command(version)]
#[command(about = "Browse, search, edit and delete user records in the terminal")]
pub struct Args {
    /// Endpoint returning the JSON array of records
    #[arg(short, long, conflicts_with = "file")]
    pub url: Option<String>,

    /// Read records from a local JSON file instead of the endpoint
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Rows per page (must be positive)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Re-run the active search after edits and deletes instead of showing every record
    #[arg(long)]
    pub reapply_filter: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// The flags that take part in config precedence.
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            endpoint: self.url.clone(),
            records_file: self.file.clone(),
            items_per_page: self.page_size.map(|n| n as usize),
            reapply_filter: self.reapply_filter,
        }
    }
}

/// Resolve configuration with the full precedence chain:
/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, AppError> {
    let config_file = adminui::config::load_config_with_precedence(args.config.clone())?;
    let merged = adminui::config::merge_config(config_file)?;
    let with_env = adminui::config::apply_env_overrides(merged)?;
    Ok(adminui::config::apply_cli_overrides(with_env, args.overrides()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = resolve_config(&args)?;

    // Flushes buffered log lines when dropped at exit
    let _log_guard = adminui::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let colors = adminui::view::ColorConfig::from_env_and_args(args.no_color);
    adminui::view::run_with_config(&config, colors)?;

    Ok(())
}
