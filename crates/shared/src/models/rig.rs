use serde::{Deserialize, Serialize};

use crate::models::gpu::Gpu;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rig {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub mac_address: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub farm_id: Option<i64>,
    #[serde(default)]
    pub gpus: Vec<Gpu>,
}

/// Body of `PUT /rigs/{id}/move`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoveRigRequest {
    pub farm_id: i64,
}

/// Body of `PUT /rigs/move`. Ids go over the wire string-typed with
/// camelCase keys; the backend expects the exact shape the original UI
/// controls produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoveRigsRequest {
    #[serde(rename = "rigIds")]
    pub rig_ids: Vec<String>,
    #[serde(rename = "farmId")]
    pub farm_id: String,
}

impl MoveRigsRequest {
    pub fn new(rig_ids: &[i64], farm_id: i64) -> Self {
        Self {
            rig_ids: rig_ids.iter().map(|id| id.to_string()).collect(),
            farm_id: farm_id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_rigs_request_is_string_typed() {
        let body = serde_json::to_string(&MoveRigsRequest::new(&[3, 5], 2)).unwrap();
        assert_eq!(body, r#"{"rigIds":["3","5"],"farmId":"2"}"#);
    }

    #[test]
    fn rig_deserializes_with_defaults() {
        let rig: Rig = serde_json::from_str(r#"{"id":7,"name":"rack-a"}"#).unwrap();
        assert_eq!(rig.mac_address, "");
        assert!(rig.gpus.is_empty());
        assert_eq!(rig.farm_id, None);
    }
}
