//! The WebSocket push channel: a long-lived connection whose inbound
//! frames trigger re-renders, and which carries the farm envelopes and raw
//! command tokens outbound. There is no reconnect policy; when the server
//! closes the connection the listen loop ends.

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use shared::commands::SystemCommand;
use shared::ws::{FrontendMessage, ServerPush};

use crate::error::Result;

/// Reacts to classified inbound frames. Decoupled from the channel so the
/// refresh side effect can be tested without a socket.
#[async_trait]
pub trait PushHandler: Send {
    async fn on_push(&mut self, push: ServerPush);
}

pub struct PushChannel {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl PushChannel {
    pub async fn connect(ws_url: &str) -> Result<Self> {
        let (stream, _) = connect_async(ws_url).await?;
        log::info!("connected to push channel at {ws_url}");
        Ok(Self { stream })
    }

    pub async fn send(&mut self, message: &FrontendMessage) -> Result<()> {
        let text = serde_json::to_string(message)?;
        self.stream.send(Message::text(text)).await?;
        Ok(())
    }

    /// Raw command token, the non-envelope half of the outbound protocol.
    pub async fn send_token(&mut self, command: SystemCommand) -> Result<()> {
        self.stream.send(Message::text(command.as_token())).await?;
        Ok(())
    }

    /// Drive the handler until the connection closes. Each text frame is
    /// classified and handed over exactly once.
    pub async fn run<H: PushHandler>(&mut self, handler: &mut H) -> Result<()> {
        while let Some(frame) = self.stream.next().await {
            match frame? {
                Message::Text(text) => handler.on_push(ServerPush::classify(&text)).await,
                Message::Close(_) => break,
                _ => {}
            }
        }
        log::info!("push channel closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FleetApiClient;
    use crate::context::Dashboard;
    use mockito::Server;
    use tokio::sync::oneshot;

    /// One-shot loopback server: accepts a single connection, sends the
    /// given frames, then closes.
    async fn spawn_push_server(frames: Vec<String>) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            let mut ws = tokio_tungstenite::accept_async(socket).await.unwrap();
            for frame in frames {
                ws.send(Message::text(frame)).await.unwrap();
            }
            ws.close(None).await.ok();
        });
        format!("ws://{addr}")
    }

    struct CountingHandler {
        refreshes: usize,
        selector_updates: usize,
    }

    #[async_trait]
    impl PushHandler for CountingHandler {
        async fn on_push(&mut self, push: ServerPush) {
            match push {
                ServerPush::Refresh => self.refreshes += 1,
                ServerPush::ShowRigsResponse(_) => self.selector_updates += 1,
            }
        }
    }

    #[tokio::test]
    async fn frames_are_classified_and_handed_over_once() {
        let url = spawn_push_server(vec![
            "farms changed".to_string(),
            r#"{"type":"SHOW_RIGS_RESPONSE","data":"{\"farms\":[{\"id\":2,\"name\":\"north\"}]}"}"#
                .to_string(),
        ])
        .await;

        let mut channel = PushChannel::connect(&url).await.unwrap();
        let mut handler = CountingHandler {
            refreshes: 0,
            selector_updates: 0,
        };
        channel.run(&mut handler).await.unwrap();

        assert_eq!(handler.refreshes, 1);
        assert_eq!(handler.selector_updates, 1);
    }

    #[tokio::test]
    async fn any_push_triggers_exactly_one_farm_fetch() {
        let mut server = Server::new_async().await;
        let farms = server
            .mock("GET", "/farms")
            .with_status(200)
            .with_body(r#"[{"id":1,"name":"north","rigs":[]}]"#)
            .expect(1)
            .create_async()
            .await;

        let url = spawn_push_server(vec!["refresh".to_string()]).await;
        let mut dash = Dashboard::new(FleetApiClient::new(&server.url()));
        let mut channel = PushChannel::connect(&url).await.unwrap();
        channel.run(&mut dash).await.unwrap();

        farms.assert_async().await;
        assert_eq!(dash.panel().lines(), ["Farm: north | Location: Unknown"]);
    }

    #[tokio::test]
    async fn show_rigs_response_repopulates_selector() {
        let url = spawn_push_server(vec![
            r#"{"type":"SHOW_RIGS_RESPONSE","data":"{\"farms\":[{\"id\":2,\"name\":\"north\"},{\"id\":3,\"name\":\"south\"}]}"}"#
                .to_string(),
        ])
        .await;

        let mut server = Server::new_async().await;
        let farms = server.mock("GET", "/farms").expect(0).create_async().await;

        let mut dash = Dashboard::new(FleetApiClient::new(&server.url()));
        let mut channel = PushChannel::connect(&url).await.unwrap();
        channel.run(&mut dash).await.unwrap();

        // Selector update only, no REST round trip.
        farms.assert_async().await;
        assert_eq!(
            dash.selector().options(),
            [(2, "north".to_string()), (3, "south".to_string())]
        );
    }

    #[tokio::test]
    async fn outbound_envelopes_and_tokens_reach_the_server() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            let mut ws = tokio_tungstenite::accept_async(socket).await.unwrap();
            let mut received = Vec::new();
            while received.len() < 2 {
                match ws.next().await {
                    Some(Ok(Message::Text(text))) => received.push(text.to_string()),
                    Some(Ok(_)) => {}
                    _ => break,
                }
            }
            tx.send(received).ok();
        });

        let mut channel = PushChannel::connect(&format!("ws://{addr}")).await.unwrap();
        channel
            .send(&FrontendMessage::ShowRigs { id: 4 })
            .await
            .unwrap();
        channel
            .send_token(SystemCommand::StopMining)
            .await
            .unwrap();

        let received = rx.await.unwrap();
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&received[0]).unwrap(),
            serde_json::json!({"type": "SHOW_RIGS", "id": 4})
        );
        assert_eq!(received[1], "stop_mining");
    }
}
