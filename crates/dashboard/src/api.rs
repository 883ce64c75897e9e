use reqwest::{Client, Response};
use shared::commands::SystemCommand;
use shared::models::{Farm, Gpu, MoveRigRequest, MoveRigsRequest, NewFarm, NewGpu, Rig};

use crate::error::{DashboardError, Result};

/// Thin client over the fleet backend's REST surface. One method per
/// endpoint; bodies are serde JSON; no timeouts and no retries, matching
/// the behavior the backend was written against.
#[derive(Debug, Clone)]
pub struct FleetApiClient {
    base_url: String,
    client: Client,
}

impl FleetApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "no error message".to_string());
        Err(DashboardError::Status { status, body })
    }

    pub async fn list_gpus(&self) -> Result<Vec<Gpu>> {
        let response = self.client.get(self.url("/gpus")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    /// The backend echoes the created GPU back, but callers re-fetch the
    /// full list anyway; the echo is returned for logging.
    pub async fn create_gpu(&self, gpu: &NewGpu) -> Result<Gpu> {
        let response = self.client.post(self.url("/gpus")).json(gpu).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn delete_gpu(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/gpus/{id}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn list_rigs(&self) -> Result<Vec<Rig>> {
        let response = self.client.get(self.url("/rigs")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn list_farms(&self) -> Result<Vec<Farm>> {
        let response = self.client.get(self.url("/farms")).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn get_farm(&self, id: i64) -> Result<Farm> {
        let response = self
            .client
            .get(self.url(&format!("/farms/{id}")))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn create_farm(&self, farm: &NewFarm) -> Result<()> {
        let response = self
            .client
            .post(self.url("/farms"))
            .json(farm)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn update_farm(&self, id: i64, farm: &NewFarm) -> Result<()> {
        let response = self
            .client
            .put(self.url(&format!("/farms/{id}")))
            .json(farm)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn delete_farm(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/farms/{id}")))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn farm_rigs(&self, farm_id: i64) -> Result<Vec<Rig>> {
        let response = self
            .client
            .get(self.url(&format!("/farms/{farm_id}/rigs")))
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn move_rig(&self, rig_id: i64, farm_id: i64) -> Result<()> {
        let response = self
            .client
            .put(self.url(&format!("/rigs/{rig_id}/move")))
            .json(&MoveRigRequest { farm_id })
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn move_rigs(&self, rig_ids: &[i64], farm_id: i64) -> Result<()> {
        let response = self
            .client
            .put(self.url("/rigs/move"))
            .json(&MoveRigsRequest::new(rig_ids, farm_id))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    pub async fn send_command(&self, command: SystemCommand) -> Result<()> {
        let response = self
            .client
            .post(self.url(&format!("/send-command/{}", command.as_token())))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}
