use anyhow::Result;
use clap::Subcommand;
use dashboard::{dispatch, Dashboard, FleetApiClient};

use crate::config::Config;
use crate::output::print_panel;
use crate::prompt::StdinPrompter;

#[derive(Subcommand)]
pub enum GpuCommands {
    /// List all GPUs
    List,
    /// Add a GPU (prompts for name, temperature, wattage)
    Add,
    /// Delete a GPU by id
    Remove {
        /// GPU id
        id: i64,
    },
}

pub async fn handle_command(command: GpuCommands, config: &Config) -> Result<()> {
    let mut dash = Dashboard::new(FleetApiClient::new(&config.api_url()));

    match command {
        GpuCommands::List => {
            dash.refresh_gpus().await?;
        }
        GpuCommands::Add => {
            dispatch::create_gpu(&mut dash, &StdinPrompter).await;
        }
        GpuCommands::Remove { id } => {
            dispatch::delete_gpu(&mut dash, &StdinPrompter, id).await;
        }
    }

    print_panel(dash.panel());
    Ok(())
}
