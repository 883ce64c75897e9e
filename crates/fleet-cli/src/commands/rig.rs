use anyhow::Result;
use clap::Subcommand;
use dashboard::{Dashboard, FleetApiClient};

use crate::config::Config;
use crate::output::{print_panel, Console};

#[derive(Subcommand)]
pub enum RigCommands {
    /// List all rigs with their GPUs
    List,
    /// List the rigs of one farm
    Of {
        /// Farm id
        farm: i64,
    },
    /// Move rigs to another farm
    Move {
        /// Rig ids, comma-separated
        #[arg(long, value_delimiter = ',', required = true)]
        rigs: Vec<i64>,

        /// Target farm id
        #[arg(long)]
        farm: i64,
    },
}

pub async fn handle_command(command: RigCommands, config: &Config) -> Result<()> {
    let mut dash = Dashboard::new(FleetApiClient::new(&config.api_url()));

    match command {
        RigCommands::List => {
            dash.refresh_rigs().await?;
            print_panel(dash.panel());
        }
        RigCommands::Of { farm } => {
            let rigs = dash.api().farm_rigs(farm).await?;
            for rig in &rigs {
                println!("{} ({} GPUs)", rig.name, rig.gpus.len());
            }
        }
        RigCommands::Move { rigs, farm } => {
            if rigs.len() == 1 {
                dash.api().move_rig(rigs[0], farm).await?;
            } else {
                dash.api().move_rigs(&rigs, farm).await?;
            }
            Console::success(&format!("moved {} rig(s) to farm {farm}", rigs.len()));
            dash.refresh_farms().await?;
            print_panel(dash.panel());
        }
    }

    Ok(())
}
