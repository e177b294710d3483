use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use resync::config::ClientConfig;

mod cli_exec;

#[derive(Parser)]
#[command(name = "resync")]
#[command(about = "Admin console for withdrawn members, deleted boards and board statistics", long_about = None)]
struct Cli {
    /// Server base URL (overrides the config file)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Bearer token (overrides the config file)
    #[arg(long, global = true)]
    token: Option<String>,

    /// JSON config file (defaults to ./resync.json when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write console logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List withdrawn members
    Members {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Restore a withdrawn member
    Restore {
        member_no: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// List deleted boards
    Boards {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Restore a deleted board
    RestoreBoard {
        board_no: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show the most read, liked and commented boards
    Stats {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = ClientConfig::resolve(cli.config.as_deref(), cli.url, cli.token)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("build tokio runtime")?;

    match cli.command {
        None => {
            resync::tui::run_with_options(
                runtime.handle().clone(),
                resync::tui::TuiRunOptions {
                    config,
                    log_file: cli.log_file,
                    verbosity: cli.verbose,
                },
            )?;
        }
        Some(command) => {
            if cli.log_file.is_some() {
                anyhow::bail!("`--log-file` is only supported when running the console (no subcommand)");
            }
            resync::telemetry::init_stderr(cli.verbose);
            runtime.block_on(cli_exec::handle_command(&config, command))?;
        }
    }

    Ok(())
}
