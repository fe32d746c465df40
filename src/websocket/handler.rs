//! WebSocket Handler
//!
//! Handles WebSocket upgrade requests and runs the per-connection dispatch
//! loop. Each connection owns its input state; messages are processed one at
//! a time in arrival order.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;

use super::hub::ConnectionHub;
use super::messages::{ClientMessage, ServerMessage};
use crate::api::AppState;
use crate::reactive::{Dashboard, InputState};

/// WebSocket upgrade handler
///
/// This is the entry point for WebSocket connections.
/// It upgrades the HTTP connection to WebSocket and starts message handling.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    let hub = Arc::clone(&state.ws_hub);
    let dashboard = Arc::clone(&state.dashboard);
    ws.on_upgrade(move |socket| handle_socket(socket, hub, dashboard))
}

/// Handle an established WebSocket connection
async fn handle_socket(socket: WebSocket, hub: Arc<ConnectionHub>, dashboard: Arc<Dashboard>) {
    let (mut sender, mut receiver) = socket.split();

    // Create channel for sending messages to this connection
    let (tx, mut rx) = mpsc::unbounded_channel::<ServerMessage>();

    // Register with hub
    let connection_id = match hub.register(tx).await {
        Ok(id) => id,
        Err(e) => {
            tracing::error!(error = %e, "Failed to register WebSocket connection");
            // Send error message before closing
            if let Ok(text) = serde_json::to_string(&ServerMessage::error(e.to_string())) {
                let _ = sender.send(Message::Text(text)).await;
            }
            return;
        }
    };

    let mut inputs = greet(&hub, &dashboard, &connection_id).await;

    let conn_id_for_send = connection_id.clone();

    // Task to forward messages from channel to WebSocket
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(text) => {
                    if sender.send(Message::Text(text)).await.is_err() {
                        tracing::debug!(
                            connection_id = %conn_id_for_send,
                            "WebSocket send failed, closing connection"
                        );
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to serialize message");
                }
            }
        }
    });

    let hub_for_recv = Arc::clone(&hub);
    let conn_id_for_recv = connection_id.clone();

    // Dispatch loop: receive input changes and push recomputed figures
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(msg) => {
                    if !handle_ws_message(
                        &hub_for_recv,
                        &dashboard,
                        &mut inputs,
                        &conn_id_for_recv,
                        msg,
                    )
                    .await
                    {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!(
                        connection_id = %conn_id_for_recv,
                        error = %e,
                        "WebSocket receive error"
                    );
                    break;
                }
            }
        }
    });

    // Wait for either task to complete
    tokio::select! {
        _ = &mut send_task => {
            recv_task.abort();
        }
        _ = &mut recv_task => {
            send_task.abort();
        }
    }

    // Cleanup: unregister from hub
    hub.unregister(&connection_id).await;
}

/// Send `connected` followed by the first paint of every output
///
/// Returns the input state the connection starts from.
async fn greet(hub: &ConnectionHub, dashboard: &Dashboard, connection_id: &str) -> InputState {
    let _ = hub
        .send_to(
            connection_id,
            ServerMessage::Connected {
                connection_id: connection_id.to_string(),
            },
        )
        .await;

    let inputs = dashboard.initial_state();
    match dashboard.render_all(&inputs) {
        Ok(updates) => {
            for update in updates {
                let _ = hub.send_to(connection_id, update.into()).await;
            }
        }
        Err(e) => {
            tracing::error!(connection_id = %connection_id, error = %e, "Initial render failed");
            let _ = hub.send_to(connection_id, ServerMessage::error(e.to_string())).await;
        }
    }

    inputs
}

/// Handle a received WebSocket message
///
/// Returns false if the connection should be closed.
async fn handle_ws_message(
    hub: &ConnectionHub,
    dashboard: &Dashboard,
    inputs: &mut InputState,
    connection_id: &str,
    message: Message,
) -> bool {
    match message {
        Message::Text(text) => {
            match serde_json::from_str::<ClientMessage>(&text) {
                Ok(client_msg) => {
                    for reply in handle_client_message(dashboard, inputs, client_msg) {
                        let _ = hub.send_to(connection_id, reply).await;
                    }
                }
                Err(e) => {
                    tracing::debug!(
                        connection_id = %connection_id,
                        error = %e,
                        text = %text,
                        "Invalid client message"
                    );
                    // Send error but keep connection open
                    let error_msg = ServerMessage::error(format!("Invalid message format: {}", e));
                    let _ = hub.send_to(connection_id, error_msg).await;
                }
            }
            true
        }
        Message::Binary(_) => {
            let error_msg = ServerMessage::error("Binary messages not supported");
            let _ = hub.send_to(connection_id, error_msg).await;
            true
        }
        // Axum answers pings itself
        Message::Ping(_) | Message::Pong(_) => true,
        Message::Close(_) => {
            tracing::debug!(connection_id = %connection_id, "Client requested close");
            false
        }
    }
}

/// Apply a parsed client message and return the replies to send
fn handle_client_message(
    dashboard: &Dashboard,
    inputs: &mut InputState,
    message: ClientMessage,
) -> Vec<ServerMessage> {
    match message {
        ClientMessage::InputChanged {
            component_id,
            value,
        } => match dashboard.on_input_change(inputs, &component_id, value) {
            Ok(updates) => updates.into_iter().map(ServerMessage::from).collect(),
            Err(e) => {
                tracing::debug!(component = %component_id, error = %e, "Input change rejected");
                vec![ServerMessage::error(e.to_string())]
            }
        },
        ClientMessage::Ping => vec![ServerMessage::Pong],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchRecord, LaunchTable};
    use crate::reactive::{
        InputValue, LayoutConfig, PAYLOAD_SLIDER, PIE_CHART, SCATTER_CHART, SITE_DROPDOWN,
    };

    fn dashboard() -> Dashboard {
        let table = LaunchTable::new(vec![
            LaunchRecord::new("KSC LC-39A", 2000.0, 1, "FT"),
            LaunchRecord::new("CCAFS LC-40", 7000.0, 0, "v1.1"),
        ]);
        Dashboard::launch_records(Arc::new(table), &LayoutConfig::default()).unwrap()
    }

    #[test]
    fn test_slider_change_replies_with_scatter_figure() {
        let dashboard = dashboard();
        let mut inputs = dashboard.initial_state();

        let replies = handle_client_message(
            &dashboard,
            &mut inputs,
            ClientMessage::InputChanged {
                component_id: PAYLOAD_SLIDER.to_string(),
                value: InputValue::range(0.0, 5000.0),
            },
        );

        assert_eq!(replies.len(), 1);
        match &replies[0] {
            ServerMessage::Figure { output, figure, .. } => {
                assert_eq!(output, SCATTER_CHART);
                assert_eq!(figure["data"].as_array().unwrap().len(), 1);
            }
            other => panic!("Expected Figure, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_value_replies_with_error() {
        let dashboard = dashboard();
        let mut inputs = dashboard.initial_state();

        let replies = handle_client_message(
            &dashboard,
            &mut inputs,
            ClientMessage::InputChanged {
                component_id: SITE_DROPDOWN.to_string(),
                value: InputValue::range(0.0, 1.0),
            },
        );

        assert_eq!(replies.len(), 1);
        assert!(matches!(replies[0], ServerMessage::Error { .. }));
    }

    #[test]
    fn test_ping() {
        let dashboard = dashboard();
        let mut inputs = dashboard.initial_state();

        let replies = handle_client_message(&dashboard, &mut inputs, ClientMessage::Ping);
        assert!(matches!(replies.as_slice(), [ServerMessage::Pong]));
    }

    #[tokio::test]
    async fn test_greet_sends_connected_then_first_paint() {
        let dashboard = dashboard();
        let hub = ConnectionHub::new(crate::websocket::HubConfig::default());
        let (tx, mut rx) = mpsc::unbounded_channel();
        let id = hub.register(tx).await.unwrap();

        let inputs = greet(&hub, &dashboard, &id).await;
        assert_eq!(inputs, dashboard.initial_state());

        match rx.try_recv().unwrap() {
            ServerMessage::Connected { connection_id } => assert_eq!(connection_id, id),
            other => panic!("Expected Connected, got {:?}", other),
        }

        let mut outputs = Vec::new();
        while let Ok(msg) = rx.try_recv() {
            match msg {
                ServerMessage::Figure { output, .. } => outputs.push(output),
                other => panic!("Expected Figure, got {:?}", other),
            }
        }
        assert_eq!(outputs, vec![PIE_CHART.to_string(), SCATTER_CHART.to_string()]);

        hub.unregister(&id).await;
    }

    #[tokio::test]
    async fn test_replayed_inputs_restore_site_after_reconnect() {
        let dashboard = dashboard();
        let hub = ConnectionHub::new(crate::websocket::HubConfig::default());
        let (tx, _rx) = mpsc::unbounded_channel();
        let id = hub.register(tx).await.unwrap();

        // A fresh connection starts at ALL; the page replays what it shows
        let mut inputs = greet(&hub, &dashboard, &id).await;
        let replies = handle_client_message(
            &dashboard,
            &mut inputs,
            ClientMessage::InputChanged {
                component_id: SITE_DROPDOWN.to_string(),
                value: InputValue::text("KSC LC-39A"),
            },
        );

        let titles: Vec<String> = replies
            .iter()
            .map(|reply| match reply {
                ServerMessage::Figure { chart, .. } => chart.title().to_string(),
                other => panic!("Expected Figure, got {:?}", other),
            })
            .collect();
        assert_eq!(
            titles,
            vec![
                "Launch Success vs. Failed for KSC LC-39A",
                "Payload vs. Launch Success (KSC LC-39A)",
            ]
        );

        // Replaying the unchanged slider costs nothing
        let slider = inputs.get(PAYLOAD_SLIDER).cloned().unwrap();
        let replies = handle_client_message(
            &dashboard,
            &mut inputs,
            ClientMessage::InputChanged {
                component_id: PAYLOAD_SLIDER.to_string(),
                value: slider,
            },
        );
        assert!(replies.is_empty());

        hub.unregister(&id).await;
    }
}
