use serde::{Deserialize, Serialize};

/// A GPU as reported by the backend. `rig_id` is absent in the flat view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Gpu {
    pub id: i64,
    pub name: String,
    pub temp: f64,
    pub watt: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rig_id: Option<i64>,
}

/// Creation payload for `POST /gpus`. The backend assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewGpu {
    pub name: String,
    pub temp: f64,
    pub watt: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpu_deserializes_without_rig_id() {
        let gpu: Gpu =
            serde_json::from_str(r#"{"id":1,"name":"A","temp":60.0,"watt":200.0}"#).unwrap();
        assert_eq!(gpu.id, 1);
        assert_eq!(gpu.rig_id, None);
    }

    #[test]
    fn new_gpu_serializes_flat() {
        let body = serde_json::to_value(NewGpu {
            name: "RTX 3080".to_string(),
            temp: 61.5,
            watt: 220.0,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"name": "RTX 3080", "temp": 61.5, "watt": 220.0})
        );
    }
}
