use serde::{Deserialize, Serialize};

use crate::models::rig::Rig;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Farm {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub rigs: Vec<Rig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewFarm {
    pub name: String,
    pub location: Option<String>,
}

/// The id/name pair carried in `SHOW_RIGS_RESPONSE` payloads, used to
/// populate the farm selector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FarmSummary {
    pub id: i64,
    pub name: String,
}
