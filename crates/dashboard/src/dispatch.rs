//! Mutating actions and the control table. Every action follows the same
//! protocol: collect parameters through the [`Prompter`], gate on required
//! fields, issue the request, re-fetch and re-render on success, log on
//! failure. Errors never propagate out of an action and nothing retries.

use async_trait::async_trait;
use shared::commands::SystemCommand;
use shared::models::{NewFarm, NewGpu};

use crate::context::Dashboard;

/// Asynchronous replacement for the blocking modal prompts of the original
/// UI. `None` means the user cancelled, which aborts the action before any
/// request is sent.
#[async_trait]
pub trait Prompter: Send + Sync {
    async fn input(&self, label: &str) -> Option<String>;

    /// Prompt prefilled with the current value; an empty reply keeps it.
    async fn input_with_default(&self, label: &str, default: &str) -> Option<String> {
        let value = self.input(&format!("{label} [{default}]")).await?;
        if value.trim().is_empty() {
            Some(default.to_string())
        } else {
            Some(value)
        }
    }

    async fn confirm(&self, question: &str) -> bool;
    async fn select(&self, label: &str, options: &[(i64, String)]) -> Option<i64>;
    async fn multi_select(&self, label: &str, options: &[(i64, String)]) -> Option<Vec<i64>>;
}

/// Required-field gate: cancelled or empty input aborts the action.
fn required(value: Option<String>) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

async fn refresh_gpus(dash: &mut Dashboard) {
    if let Err(e) = dash.refresh_gpus().await {
        log::error!("failed to reload gpus: {e}");
    }
}

async fn refresh_farms(dash: &mut Dashboard) {
    if let Err(e) = dash.refresh_farms().await {
        log::error!("failed to reload farms: {e}");
    }
}

/// Pick a farm from the selector, reloading its options first when empty.
async fn select_farm(dash: &mut Dashboard, prompter: &dyn Prompter) -> Option<i64> {
    if dash.selector().is_empty() {
        if let Err(e) = dash.refresh_selector().await {
            log::error!("failed to load farms into selector: {e}");
            return None;
        }
    }
    prompter.select("Select farm", dash.selector().options()).await
}

pub async fn create_gpu(dash: &mut Dashboard, prompter: &dyn Prompter) {
    let Some(name) = required(prompter.input("Enter GPU name").await) else {
        return;
    };
    let Some(temp) = required(prompter.input("Enter GPU temperature").await) else {
        return;
    };
    let Some(watt) = required(prompter.input("Enter GPU wattage").await) else {
        return;
    };
    let Ok(temp) = temp.parse::<f64>() else {
        log::error!("invalid temperature input: {temp}");
        return;
    };
    let Ok(watt) = watt.parse::<f64>() else {
        log::error!("invalid wattage input: {watt}");
        return;
    };

    match dash.api().create_gpu(&NewGpu { name, temp, watt }).await {
        Ok(created) => {
            log::debug!("created gpu {}", created.id);
            refresh_gpus(dash).await;
        }
        Err(e) => log::error!("failed to create gpu: {e}"),
    }
}

pub async fn delete_gpu(dash: &mut Dashboard, prompter: &dyn Prompter, id: i64) {
    if !prompter
        .confirm("Are you sure you want to delete this GPU?")
        .await
    {
        return;
    }
    match dash.api().delete_gpu(id).await {
        Ok(()) => refresh_gpus(dash).await,
        Err(e) => log::error!("failed to delete gpu {id}: {e}"),
    }
}

pub async fn create_farm(dash: &mut Dashboard, prompter: &dyn Prompter) {
    let Some(name) = required(prompter.input("Enter Farm name").await) else {
        return;
    };
    let Some(location) = required(prompter.input("Enter Farm location").await) else {
        return;
    };

    let farm = NewFarm {
        name,
        location: Some(location),
    };
    match dash.api().create_farm(&farm).await {
        Ok(()) => refresh_farms(dash).await,
        Err(e) => log::error!("failed to create farm: {e}"),
    }
}

pub async fn edit_farm(dash: &mut Dashboard, prompter: &dyn Prompter) {
    let Some(id) = select_farm(dash, prompter).await else {
        return;
    };
    edit_farm_by_id(dash, prompter, id).await;
}

pub async fn edit_farm_by_id(dash: &mut Dashboard, prompter: &dyn Prompter, id: i64) {
    let current = match dash.api().get_farm(id).await {
        Ok(farm) => farm.name,
        Err(e) => {
            log::error!("failed to load farm {id}: {e}");
            return;
        }
    };
    let Some(name) = required(
        prompter
            .input_with_default("Enter new Farm name", &current)
            .await,
    ) else {
        return;
    };
    let farm = NewFarm {
        name,
        location: None,
    };
    match dash.api().update_farm(id, &farm).await {
        Ok(()) => refresh_farms(dash).await,
        Err(e) => log::error!("failed to edit farm {id}: {e}"),
    }
}

pub async fn delete_farm(dash: &mut Dashboard, prompter: &dyn Prompter) {
    let Some(id) = select_farm(dash, prompter).await else {
        return;
    };
    delete_farm_by_id(dash, prompter, id).await;
}

pub async fn delete_farm_by_id(dash: &mut Dashboard, prompter: &dyn Prompter, id: i64) {
    if !prompter
        .confirm("Are you sure you want to delete this farm?")
        .await
    {
        return;
    }
    match dash.api().delete_farm(id).await {
        Ok(()) => refresh_farms(dash).await,
        Err(e) => log::error!("failed to delete farm {id}: {e}"),
    }
}

/// Render one farm with its rigs and GPUs.
pub async fn show_rigs(dash: &mut Dashboard, prompter: &dyn Prompter) {
    let Some(id) = select_farm(dash, prompter).await else {
        return;
    };
    if let Err(e) = dash.show_farm(id).await {
        log::error!("failed to show farm {id}: {e}");
    }
}

/// Multi-select counterpart of the rig checkboxes: pick a target farm,
/// pick the rigs, move them in one request.
pub async fn move_rigs(dash: &mut Dashboard, prompter: &dyn Prompter) {
    let Some(farm_id) = select_farm(dash, prompter).await else {
        return;
    };
    let rigs = match dash.api().list_rigs().await {
        Ok(rigs) => rigs,
        Err(e) => {
            log::error!("failed to load rigs: {e}");
            return;
        }
    };
    let options: Vec<(i64, String)> = rigs.iter().map(|rig| (rig.id, rig.name.clone())).collect();
    let Some(rig_ids) = prompter.multi_select("Select rigs to move", &options).await else {
        return;
    };
    if rig_ids.is_empty() {
        return;
    }

    match dash.api().move_rigs(&rig_ids, farm_id).await {
        Ok(()) => refresh_farms(dash).await,
        Err(e) => log::error!("failed to move rigs to farm {farm_id}: {e}"),
    }
}

/// Fire-and-forget command: no response is consumed and no refresh runs.
pub async fn fire(dash: &mut Dashboard, command: SystemCommand) {
    log::info!("sending command: {command}");
    if let Err(e) = dash.api().send_command(command).await {
        log::error!("failed to send command {command}: {e}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptedAction {
    CreateGpu,
    CreateFarm,
    EditFarm,
    DeleteFarm,
    ShowRigs,
    MoveRigs,
}

/// A control-table entry: either an interactive action or a bare command
/// token, dispatched explicitly instead of the original duck-typed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Prompted(PromptedAction),
    FireAndForget(SystemCommand),
}

pub const CONTROLS: &[(&str, Control)] = &[
    ("createGpu", Control::Prompted(PromptedAction::CreateGpu)),
    ("createFarm", Control::Prompted(PromptedAction::CreateFarm)),
    ("editFarm", Control::Prompted(PromptedAction::EditFarm)),
    ("deleteFarm", Control::Prompted(PromptedAction::DeleteFarm)),
    ("showRigs", Control::Prompted(PromptedAction::ShowRigs)),
    ("moveRig", Control::Prompted(PromptedAction::MoveRigs)),
    ("startErgo", Control::FireAndForget(SystemCommand::StartErgo)),
    ("startXel", Control::FireAndForget(SystemCommand::StartXel)),
    ("startRVN", Control::FireAndForget(SystemCommand::StartRvn)),
    ("startFish", Control::FireAndForget(SystemCommand::StartFish)),
    ("startFlux", Control::FireAndForget(SystemCommand::StartFlux)),
    ("startBeam", Control::FireAndForget(SystemCommand::StartBeam)),
    ("stopMining", Control::FireAndForget(SystemCommand::StopMining)),
    (
        "adjustOverclock",
        Control::FireAndForget(SystemCommand::AdjustOverclock),
    ),
    ("rebootGPU", Control::FireAndForget(SystemCommand::RebootGpu)),
    ("rebootRig", Control::FireAndForget(SystemCommand::RebootRig)),
    (
        "rebootAllRigs",
        Control::FireAndForget(SystemCommand::RebootAllRigs),
    ),
    (
        "updateSoftware",
        Control::FireAndForget(SystemCommand::UpdateSoftware),
    ),
];

pub fn lookup(control_id: &str) -> Option<Control> {
    CONTROLS
        .iter()
        .find(|(id, _)| *id == control_id)
        .map(|(_, control)| *control)
}

/// Run the control behind `control_id`, returning whether the id was known.
pub async fn activate(dash: &mut Dashboard, prompter: &dyn Prompter, control_id: &str) -> bool {
    match lookup(control_id) {
        Some(Control::Prompted(action)) => match action {
            PromptedAction::CreateGpu => create_gpu(dash, prompter).await,
            PromptedAction::CreateFarm => create_farm(dash, prompter).await,
            PromptedAction::EditFarm => edit_farm(dash, prompter).await,
            PromptedAction::DeleteFarm => delete_farm(dash, prompter).await,
            PromptedAction::ShowRigs => show_rigs(dash, prompter).await,
            PromptedAction::MoveRigs => move_rigs(dash, prompter).await,
        },
        Some(Control::FireAndForget(command)) => fire(dash, command).await,
        None => return false,
    }
    true
}
