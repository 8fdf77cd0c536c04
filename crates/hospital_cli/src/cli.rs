//! Command-line configuration and top-level wiring.

use crate::export::{export_table, ExportTable};
use crate::tui;
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use hospital_core::{
    default_log_level, init_logging, InteractionController, LogLevel, StorageGateway,
};
use log::info;
use std::path::{Path, PathBuf};

const DEFAULT_DB_FILE_NAME: &str = "hospital.db";
const DEFAULT_LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Parser)]
#[command(
    name = "hospital",
    version,
    about = "Keep doctors, patients and appointments in a local database"
)]
pub struct Cli {
    /// SQLite database file, created on first run.
    #[arg(long, env = "HOSPITAL_DB_PATH", default_value = DEFAULT_DB_FILE_NAME)]
    pub db: PathBuf,

    /// Directory for rolling log files [default: ./logs]
    #[arg(long, env = "HOSPITAL_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error [default: debug in debug builds, info otherwise]
    #[arg(long, env = "HOSPITAL_LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every row of one table as JSON and exit
    Export {
        #[arg(value_enum)]
        table: ExportTable,
    },
}

pub fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read working directory")?;
    let log_dir = resolve_log_dir(&cwd, cli.log_dir.as_deref());
    let level = match cli.log_level.as_deref() {
        Some(raw) => raw.parse::<LogLevel>().map_err(|err| anyhow!("{err}"))?,
        None => default_log_level(),
    };
    init_logging(level, &log_dir).map_err(|err| anyhow!("logging setup failed: {err}"))?;

    let mut gateway = StorageGateway::open(&cli.db)
        .with_context(|| format!("failed to open database `{}`", cli.db.display()))?;
    info!("event=cli_start module=cli status=ok db={}", cli.db.display());

    match cli.command {
        Some(Command::Export { table }) => {
            let result = export_table(&gateway, table, &mut std::io::stdout().lock());
            gateway.close()?;
            result
        }
        None => tui::run(InteractionController::new(gateway)),
    }
}

fn resolve_log_dir(cwd: &Path, configured: Option<&Path>) -> PathBuf {
    match configured {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => cwd.join(dir),
        None => cwd.join(DEFAULT_LOG_DIR_NAME),
    }
}
