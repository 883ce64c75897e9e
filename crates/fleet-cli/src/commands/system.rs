use anyhow::Result;
use async_trait::async_trait;
use dashboard::push::{PushChannel, PushHandler};
use dashboard::{dispatch, Dashboard, FleetApiClient};
use shared::commands::SystemCommand;
use shared::ws::ServerPush;

use crate::config::Config;
use crate::output::{print_panel, Console};
use crate::prompt::StdinPrompter;

pub async fn handle_cmd(token: String, via_socket: bool, config: &Config) -> Result<()> {
    let command: SystemCommand = token.parse().map_err(anyhow::Error::new)?;

    if via_socket {
        let mut channel = PushChannel::connect(&config.ws_url()).await?;
        channel.send_token(command).await?;
    } else {
        let api = FleetApiClient::new(&config.api_url());
        api.send_command(command).await?;
    }

    Console::success(&format!("sent {command}"));
    Ok(())
}

pub async fn handle_control(id: String, config: &Config) -> Result<()> {
    let mut dash = Dashboard::new(FleetApiClient::new(&config.api_url()));
    if !dispatch::activate(&mut dash, &StdinPrompter, &id).await {
        Console::error(&format!("unknown control: {id}"));
        return Ok(());
    }
    print_panel(dash.panel());
    Ok(())
}

struct PrintingHandler {
    dash: Dashboard,
}

#[async_trait]
impl PushHandler for PrintingHandler {
    async fn on_push(&mut self, push: ServerPush) {
        self.dash.on_push(push).await;
        print_panel(self.dash.panel());
    }
}

pub async fn handle_watch(config: &Config) -> Result<()> {
    let mut dash = Dashboard::new(FleetApiClient::new(&config.api_url()));
    if let Err(e) = dash.refresh_farms().await {
        log::error!("initial farm load failed: {e}");
    }
    print_panel(dash.panel());

    let mut channel = PushChannel::connect(&config.ws_url()).await?;
    Console::info("watch", "connected, waiting for pushes");

    let mut handler = PrintingHandler { dash };
    channel.run(&mut handler).await?;
    Console::info("watch", "push channel closed");
    Ok(())
}
