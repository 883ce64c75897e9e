use async_trait::async_trait;
use shared::models::FarmSummary;
use shared::ws::ServerPush;

use crate::api::FleetApiClient;
use crate::error::Result;
use crate::push::PushHandler;
use crate::view::{self, Panel, Selector};

/// The client context: the API handle, the render container, and the farm
/// selector, owned together instead of living in module globals. All
/// refresh entry points re-fetch from the server and rebuild the panel;
/// the panel never predicts the outcome of a mutation.
pub struct Dashboard {
    api: FleetApiClient,
    panel: Panel,
    selector: Selector,
}

impl Dashboard {
    pub fn new(api: FleetApiClient) -> Self {
        Self {
            api,
            panel: Panel::new(),
            selector: Selector::new(),
        }
    }

    pub fn api(&self) -> &FleetApiClient {
        &self.api
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub async fn refresh_gpus(&mut self) -> Result<()> {
        let gpus = self.api.list_gpus().await?;
        self.panel.replace_with(&view::gpu_schema(), &gpus);
        Ok(())
    }

    pub async fn refresh_rigs(&mut self) -> Result<()> {
        let rigs = self.api.list_rigs().await?;
        self.panel.replace_lines(view::rigs_tree(&rigs));
        Ok(())
    }

    pub async fn refresh_farms(&mut self) -> Result<()> {
        let farms = self.api.list_farms().await?;
        self.panel.replace_lines(view::farms_tree(&farms));
        Ok(())
    }

    /// Hierarchical render of a single farm with its rigs and GPUs.
    pub async fn show_farm(&mut self, id: i64) -> Result<()> {
        let farm = self.api.get_farm(id).await?;
        self.panel.replace_lines(view::farm_tree(&farm));
        Ok(())
    }

    /// Reload the farm selector options from the server.
    pub async fn refresh_selector(&mut self) -> Result<()> {
        let farms = self.api.list_farms().await?;
        let summaries: Vec<FarmSummary> = farms
            .iter()
            .map(|farm| FarmSummary {
                id: farm.id,
                name: farm.name.clone(),
            })
            .collect();
        self.selector.replace_with(&summaries);
        Ok(())
    }
}

#[async_trait]
impl PushHandler for Dashboard {
    async fn on_push(&mut self, push: ServerPush) {
        match push {
            ServerPush::Refresh => {
                if let Err(e) = self.refresh_farms().await {
                    log::error!("failed to refresh farms after push: {e}");
                }
            }
            ServerPush::ShowRigsResponse(farms) => {
                self.selector.replace_with(&farms);
            }
        }
    }
}
