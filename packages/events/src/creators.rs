//! Event Creators
//!
//! One function per event shape. All of them derive the channel information
//! from the user; all but the webchat action also stamp a [`BaseEvent`].

use crate::error::{EventError, Result};
use crate::models::{BaseEvent, ChannelInformation, ConnectionStatus, Event, EventType, User};
use serde_json::{json, Map, Value};

/// User connected to or disconnected from a channel
pub fn create_connection_event(user: &User, status: ConnectionStatus) -> Result<Event> {
    let base = BaseEvent::new(user, EventType::Connection)?;
    let mut payload = Map::new();
    payload.insert("status".to_string(), json!(status));

    tracing::debug!("Created connection event {} for user {}", base.event_id, user.id);
    Ok(Event::new(base, payload))
}

/// Message sent by the user or the bot
///
/// `properties` must be a JSON object. Base event fields always override
/// properties of the same name.
pub fn create_message_event(user: &User, properties: Value) -> Result<Event> {
    let payload = into_object(properties)?;
    let base = BaseEvent::new(user, EventType::Message)?;

    tracing::debug!("Created message event {} for user {}", base.event_id, user.id);
    Ok(Event::new(base, payload))
}

/// Event raised by an external integration, carrying opaque `details`
pub fn create_integration_event(event_type: EventType, user: &User, details: Value) -> Result<Event> {
    let base = BaseEvent::new(user, event_type)?;
    let mut payload = Map::new();
    payload.insert("details".to_string(), details);

    tracing::debug!(
        "Created {:?} integration event {} for user {}",
        event_type,
        base.event_id,
        user.id
    );
    Ok(Event::new(base, payload))
}

/// Action triggered from the webchat
///
/// Not a stored event: only the channel information, the caller's
/// properties and the action. Properties may override the channel
/// information; `action` always wins.
pub fn create_webchat_action_event(user: &User, action: &str, properties: Value) -> Result<Value> {
    let properties = into_object(properties)?;
    let channel = ChannelInformation::from_user(user);

    let mut event = Map::new();
    event.insert("idFromChannel".to_string(), Value::String(channel.id_from_channel));
    event.insert("channel".to_string(), Value::String(channel.channel));
    event.extend(properties);
    event.insert("action".to_string(), Value::String(action.to_string()));

    Ok(Value::Object(event))
}

fn into_object(properties: Value) -> Result<Map<String, Value>> {
    match properties {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(EventError::InvalidProperties(json_type_name(&other).to_string())),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
