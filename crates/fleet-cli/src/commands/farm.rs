use anyhow::Result;
use clap::Subcommand;
use dashboard::{dispatch, Dashboard, FleetApiClient};

use crate::config::Config;
use crate::output::print_panel;
use crate::prompt::StdinPrompter;

#[derive(Subcommand)]
pub enum FarmCommands {
    /// List all farms with their rigs and GPUs
    List,
    /// Create a farm (prompts for name and location)
    Create,
    /// Rename a farm (prompts for the new name)
    Rename {
        /// Farm id
        id: i64,
    },
    /// Delete a farm
    Remove {
        /// Farm id
        id: i64,
    },
    /// Show one farm with its rigs and GPUs
    Show {
        /// Farm id
        id: i64,
    },
}

pub async fn handle_command(command: FarmCommands, config: &Config) -> Result<()> {
    let mut dash = Dashboard::new(FleetApiClient::new(&config.api_url()));

    match command {
        FarmCommands::List => {
            dash.refresh_farms().await?;
        }
        FarmCommands::Create => {
            dispatch::create_farm(&mut dash, &StdinPrompter).await;
        }
        FarmCommands::Rename { id } => {
            dispatch::edit_farm_by_id(&mut dash, &StdinPrompter, id).await;
        }
        FarmCommands::Remove { id } => {
            dispatch::delete_farm_by_id(&mut dash, &StdinPrompter, id).await;
        }
        FarmCommands::Show { id } => {
            dash.show_farm(id).await?;
        }
    }

    print_panel(dash.panel());
    Ok(())
}
