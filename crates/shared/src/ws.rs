use serde::{Deserialize, Serialize};

use crate::models::farm::FarmSummary;

/// Outbound envelopes on the frontend socket, tagged by `type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum FrontendMessage {
    #[serde(rename = "CREATE_FARM")]
    CreateFarm { name: String, location: String },
    #[serde(rename = "EDIT_FARM")]
    EditFarm { id: i64, name: String },
    #[serde(rename = "DELETE_FARM")]
    DeleteFarm { id: i64 },
    #[serde(rename = "SHOW_RIGS")]
    ShowRigs { id: i64 },
}

/// Inbound frame, already classified. Anything that is not a well-formed
/// `SHOW_RIGS_RESPONSE` envelope counts as a bare refresh signal.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerPush {
    Refresh,
    ShowRigsResponse(Vec<FarmSummary>),
}

#[derive(Deserialize)]
struct PushEnvelope {
    #[serde(rename = "type")]
    kind: String,
    // The payload is itself a JSON-encoded string, doubly serialized by
    // the backend.
    data: Option<String>,
}

#[derive(Deserialize)]
struct ShowRigsPayload {
    farms: Vec<FarmSummary>,
}

impl ServerPush {
    pub fn classify(text: &str) -> ServerPush {
        let Ok(envelope) = serde_json::from_str::<PushEnvelope>(text) else {
            return ServerPush::Refresh;
        };
        if envelope.kind != "SHOW_RIGS_RESPONSE" {
            return ServerPush::Refresh;
        }
        let Some(data) = envelope.data else {
            return ServerPush::Refresh;
        };
        match serde_json::from_str::<ShowRigsPayload>(&data) {
            Ok(payload) => ServerPush::ShowRigsResponse(payload.farms),
            Err(_) => ServerPush::Refresh,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontend_messages_are_type_tagged() {
        let msg = serde_json::to_value(FrontendMessage::CreateFarm {
            name: "north".to_string(),
            location: "halle".to_string(),
        })
        .unwrap();
        assert_eq!(
            msg,
            serde_json::json!({"type": "CREATE_FARM", "name": "north", "location": "halle"})
        );

        let msg = serde_json::to_value(FrontendMessage::EditFarm {
            id: 2,
            name: "renamed".to_string(),
        })
        .unwrap();
        assert_eq!(
            msg,
            serde_json::json!({"type": "EDIT_FARM", "id": 2, "name": "renamed"})
        );

        let msg = serde_json::to_value(FrontendMessage::DeleteFarm { id: 2 }).unwrap();
        assert_eq!(msg, serde_json::json!({"type": "DELETE_FARM", "id": 2}));

        let msg = serde_json::to_value(FrontendMessage::ShowRigs { id: 4 }).unwrap();
        assert_eq!(msg, serde_json::json!({"type": "SHOW_RIGS", "id": 4}));
    }

    #[test]
    fn arbitrary_frames_classify_as_refresh() {
        assert_eq!(ServerPush::classify("farms changed"), ServerPush::Refresh);
        assert_eq!(
            ServerPush::classify(r#"{"type":"CREATE_FARM_RESPONSE","data":"ok"}"#),
            ServerPush::Refresh
        );
    }

    #[test]
    fn show_rigs_response_is_parsed() {
        let frame =
            r#"{"type":"SHOW_RIGS_RESPONSE","data":"{\"farms\":[{\"id\":2,\"name\":\"north\"}]}"}"#;
        assert_eq!(
            ServerPush::classify(frame),
            ServerPush::ShowRigsResponse(vec![FarmSummary {
                id: 2,
                name: "north".to_string()
            }])
        );
    }

    #[test]
    fn malformed_payload_falls_back_to_refresh() {
        let frame = r#"{"type":"SHOW_RIGS_RESPONSE","data":"not json"}"#;
        assert_eq!(ServerPush::classify(frame), ServerPush::Refresh);
    }
}
