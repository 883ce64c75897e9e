use crate::config::Config;
use anyhow::Result;

pub mod farm;
pub mod gpu;
pub mod rig;
pub mod system;

pub use farm::FarmCommands;
pub use gpu::GpuCommands;
pub use rig::RigCommands;

pub async fn handle_gpu_command(command: GpuCommands, config: &Config) -> Result<()> {
    gpu::handle_command(command, config).await
}

pub async fn handle_farm_command(command: FarmCommands, config: &Config) -> Result<()> {
    farm::handle_command(command, config).await
}

pub async fn handle_rig_command(command: RigCommands, config: &Config) -> Result<()> {
    rig::handle_command(command, config).await
}

pub async fn handle_cmd(token: String, via_socket: bool, config: &Config) -> Result<()> {
    system::handle_cmd(token, via_socket, config).await
}

pub async fn handle_control(id: String, config: &Config) -> Result<()> {
    system::handle_control(id, config).await
}

pub async fn handle_watch(config: &Config) -> Result<()> {
    system::handle_watch(config).await
}
