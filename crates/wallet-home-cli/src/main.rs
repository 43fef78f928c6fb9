use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use wallet_home_core::config::default_data_dir;
use wallet_home_core::tracing_setup::init_tracing;
use wallet_home_core::StatusPreferences;

mod cli;

use cli::{commands::load_config, run, Command};

#[derive(Parser)]
#[command(name = "wallet-home")]
#[command(about = "Drive the wallet home screen logic from the command line")]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, short, global = true)]
    pretty: bool,

    /// Path to JSON home config (initialTab, minRefreshMs, onboardingDelayMs, ...)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Directory holding home_status.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let prefs = Arc::new(StatusPreferences::new(&data_dir));

    let report = match run(cli.command, &config, prefs).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let output = if cli.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };
    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
