use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

mod commands;
mod config;
mod output;
mod prompt;

use commands::*;
use config::Config;

#[derive(Parser)]
#[command(name = "fleet-cli")]
#[command(about = "Mining rig fleet dashboard CLI")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<String>,

    /// REST API base URL (overrides config)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Push channel WebSocket URL (overrides config)
    #[arg(long, global = true)]
    ws_url: Option<String>,

    /// Environment file path
    #[arg(long, global = true, default_value = ".env")]
    env_file: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// GPU operations (flat view)
    Gpu {
        #[command(subcommand)]
        command: GpuCommands,
    },
    /// Farm operations
    Farm {
        #[command(subcommand)]
        command: FarmCommands,
    },
    /// Rig operations
    Rig {
        #[command(subcommand)]
        command: RigCommands,
    },
    /// Fire a system command token
    Cmd {
        /// Command token, e.g. start_ergo or reboot_rig
        token: String,

        /// Send as a raw socket frame instead of POST /send-command
        #[arg(long)]
        via_socket: bool,
    },
    /// Activate a dashboard control by its identifier
    Control {
        /// Control identifier, e.g. createFarm or rebootGPU
        id: String,
    },
    /// Follow the push channel and re-render on every push
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    let config = Config::load(&cli.config, &cli.env_file)?;
    let config = if let Some(url) = cli.api_url {
        config.with_api_url(url)
    } else {
        config
    };
    let config = if let Some(url) = cli.ws_url {
        config.with_ws_url(url)
    } else {
        config
    };

    match cli.command {
        Commands::Gpu { command } => handle_gpu_command(command, &config).await,
        Commands::Farm { command } => handle_farm_command(command, &config).await,
        Commands::Rig { command } => handle_rig_command(command, &config).await,
        Commands::Cmd { token, via_socket } => handle_cmd(token, via_socket, &config).await,
        Commands::Control { id } => handle_control(id, &config).await,
        Commands::Watch => handle_watch(&config).await,
    }
}
