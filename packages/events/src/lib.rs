//! Chatbot Event Payloads
//!
//! Helpers that shape the events stored and dispatched by the serverless
//! messaging backend. Every event carries the channel it came from; most
//! also carry a generated id, a creation timestamp and the user it belongs
//! to.
//!
//! # Example
//!
//! ```rust
//! use chatbot_events::{create_connection_event, ConnectionStatus, User};
//!
//! let user = User::new("user-1", "webchat");
//! let event = create_connection_event(&user, ConnectionStatus::Connected).unwrap();
//!
//! let json = serde_json::to_value(&event).unwrap();
//! assert_eq!(json["eventType"], "connection");
//! assert_eq!(json["status"], "connected");
//! assert_eq!(json["idFromChannel"], "1234");
//! ```
pub mod creators;
pub mod error;
pub mod models;

// Re-export main types
pub use creators::{
    create_connection_event, create_integration_event, create_message_event,
    create_webchat_action_event,
};
pub use error::{EventError, Result};
pub use models::{
    BaseEvent, ChannelInformation, ConnectionStatus, Event, EventType, User, ID_FROM_CHANNEL,
};
