//! WebSocket Message Types
//!
//! Defines all message types exchanged between the dashboard page and the
//! server.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::charts::ChartSpec;
use crate::reactive::{InputValue, OutputUpdate};

/// Messages sent from client to server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// An input component changed value
    InputChanged {
        /// Component id (e.g., "site-dropdown")
        component_id: String,
        /// New value: a string for dropdowns, `[low, high]` for range sliders
        value: InputValue,
    },
    /// Ping for keepalive
    Ping,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection established
    Connected {
        /// Unique connection identifier
        connection_id: String,
    },
    /// New content for an output graph
    Figure {
        /// Output graph id (e.g., "success-pie-chart")
        output: String,
        /// Declarative chart description
        chart: ChartSpec,
        /// Plotly figure rendered from `chart`
        figure: Value,
    },
    /// Pong response to ping
    Pong,
    /// Error message
    Error {
        /// Error description
        message: String,
    },
}

impl From<OutputUpdate> for ServerMessage {
    fn from(update: OutputUpdate) -> Self {
        let figure = update.chart.to_plotly();
        ServerMessage::Figure {
            output: update.output,
            chart: update.chart,
            figure,
        }
    }
}

impl ServerMessage {
    pub fn error(message: impl Into<String>) -> Self {
        ServerMessage::Error {
            message: message.into(),
        }
    }
}
