//! WebSocket Reactive Channel
//!
//! Carries input changes from the dashboard page to the server and pushes
//! recomputed chart figures back.
//!
//! ## Architecture
//!
//! - **ConnectionHub**: Tracks active connections and routes messages
//! - **Handler**: Handles WebSocket upgrade and the per-connection dispatch loop
//! - **Messages**: Defines client and server message formats
//!
//! ## Example
//!
//! ```javascript
//! // Browser
//! const ws = new WebSocket('ws://localhost:8050/ws');
//!
//! ws.onopen = () => {
//!   ws.send(JSON.stringify({
//!     type: 'input_changed',
//!     component_id: 'payload-slider',
//!     value: [0, 5000],
//!   }));
//! };
//!
//! ws.onmessage = (event) => {
//!   const msg = JSON.parse(event.data);
//!   if (msg.type === 'figure') Plotly.react(msg.output, msg.figure.data, msg.figure.layout);
//! };
//! ```

mod handler;
mod hub;
mod messages;

pub use handler::websocket_handler;
pub use hub::{ConnectionHub, ConnectionId, HubConfig, HubError};
pub use messages::{ClientMessage, ServerMessage};
