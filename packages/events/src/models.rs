//! Event Data Structures
//!
//! Events serialize to flat camelCase JSON objects: the base fields
//! (`userId`, `eventId`, `createdAt`, `eventType`, `idFromChannel`,
//! `channel`) side by side with the event-specific payload.

use crate::error::{EventError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Channel-side id used until channels report their own
pub const ID_FROM_CHANNEL: &str = "1234";

/// JSON keys owned by [`BaseEvent`]
pub(crate) const BASE_EVENT_FIELDS: [&str; 6] = [
    "userId",
    "eventId",
    "createdAt",
    "eventType",
    "idFromChannel",
    "channel",
];

/// User an event belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,

    /// Id of the user as known by the channel (may be empty)
    #[serde(default)]
    pub id_from_channel: String,

    /// Channel the user talks through (e.g. "webchat", "whatsapp")
    pub channel: String,
}

impl User {
    pub fn new(id: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            id_from_channel: String::new(),
            channel: channel.into(),
        }
    }

    pub fn with_id_from_channel(mut self, id_from_channel: impl Into<String>) -> Self {
        self.id_from_channel = id_from_channel.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Connection,
    Message,
    NewUser,
    BotAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
}

/// Where an event comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelInformation {
    pub id_from_channel: String,
    pub channel: String,
}

impl ChannelInformation {
    /// An empty `id_from_channel` falls back to [`ID_FROM_CHANNEL`]
    pub fn new(id_from_channel: &str, channel: impl Into<String>) -> Self {
        let id_from_channel = if id_from_channel.is_empty() {
            ID_FROM_CHANNEL
        } else {
            id_from_channel
        };
        Self {
            id_from_channel: id_from_channel.to_string(),
            channel: channel.into(),
        }
    }

    pub fn from_user(user: &User) -> Self {
        Self::new(&user.id_from_channel, user.channel.clone())
    }
}

/// Fields shared by every stored event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseEvent {
    pub user_id: String,
    pub event_id: String,
    pub created_at: DateTime<Utc>,
    pub event_type: EventType,
    #[serde(flatten)]
    pub channel: ChannelInformation,
}

impl BaseEvent {
    /// Create base fields with a fresh event id and the current time
    ///
    /// # Errors
    ///
    /// Returns `EventError::InvalidUser` if the user has no id.
    pub fn new(user: &User, event_type: EventType) -> Result<Self> {
        if user.id.trim().is_empty() {
            return Err(EventError::InvalidUser("user id cannot be empty".to_string()));
        }

        Ok(Self {
            user_id: user.id.clone(),
            event_id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            event_type,
            channel: ChannelInformation::from_user(user),
        })
    }
}

/// A base event plus its type-specific payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    #[serde(flatten)]
    base: BaseEvent,

    #[serde(flatten)]
    payload: Map<String, Value>,
}

impl Event {
    /// Payload keys colliding with base fields are dropped; base fields win
    pub(crate) fn new(base: BaseEvent, mut payload: Map<String, Value>) -> Self {
        for field in BASE_EVENT_FIELDS {
            if payload.remove(field).is_some() {
                tracing::debug!("Dropping payload field '{}' overridden by base event", field);
            }
        }
        Self { base, payload }
    }

    pub fn base(&self) -> &BaseEvent {
        &self.base
    }

    pub fn event_type(&self) -> EventType {
        self.base.event_type
    }

    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// Payload value by JSON key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }
}
