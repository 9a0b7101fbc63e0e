//! Cross-window messaging: envelopes, validation and fan-out.
//!
//! The login popup posts a JSON payload when re-authentication finishes. The
//! window message stream carries arbitrary untrusted traffic, so every message
//! passes an origin check before its payload is even decoded.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Message tag posted by the login popup on a finished login attempt.
pub const LOGIN_MESSAGE_TYPE: &str = "login";

/// Raw cross-window message envelope.
#[derive(Debug, Clone)]
pub struct WindowMessage {
    /// Origin of the posting window.
    pub origin: String,
    /// JSON payload.
    pub data: Value,
}

impl WindowMessage {
    /// Creates a message envelope.
    pub fn new(origin: impl Into<String>, data: Value) -> Self {
        Self {
            origin: origin.into(),
            data,
        }
    }
}

/// Payload of a login notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginMessage {
    /// Message tag; only [LOGIN_MESSAGE_TYPE] is acted upon.
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether the login attempt succeeded.
    pub success: bool,
}

impl LoginMessage {
    /// Decodes a login message from a raw payload.
    ///
    /// Returns `None` for payloads of any other shape, so unrelated
    /// cross-window traffic is never misinterpreted as a login signal.
    pub fn decode(data: &Value) -> Option<Self> {
        serde_json::from_value(data.clone()).ok()
    }

    /// Whether this is a successful login notification.
    pub fn is_successful_login(&self) -> bool {
        self.kind == LOGIN_MESSAGE_TYPE && self.success
    }
}

/// Decides whether a window message originated from a trusted source.
pub trait MessageValidator: Send + Sync {
    /// Returns `true` when the message may be acted upon.
    fn is_valid(&self, message: &WindowMessage) -> bool;
}

/// Validates messages against an allow list of origins.
///
/// Origins are compared case-insensitively with trailing slashes stripped.
#[derive(Debug, Clone, Default)]
pub struct OriginValidator {
    trusted: Vec<String>,
}

impl OriginValidator {
    /// Creates a validator trusting exactly the given origins.
    pub fn new<I, T>(origins: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            trusted: origins
                .into_iter()
                .map(|origin| normalize_origin(&origin.into()))
                .collect(),
        }
    }

    /// Adds an origin to the allow list.
    pub fn allow(mut self, origin: impl Into<String>) -> Self {
        self.trusted.push(normalize_origin(&origin.into()));
        self
    }
}

fn normalize_origin(origin: &str) -> String {
    origin.trim_end_matches('/').to_ascii_lowercase()
}

impl MessageValidator for OriginValidator {
    fn is_valid(&self, message: &WindowMessage) -> bool {
        let origin = normalize_origin(&message.origin);
        self.trusted.iter().any(|trusted| *trusted == origin)
    }
}

/// Fan-out hub for window messages.
///
/// Mirrors a window's message stream: anything can post, any number of
/// components can subscribe. Posting with no subscribers drops the message.
#[derive(Debug, Clone)]
pub struct MessageHub {
    tx: broadcast::Sender<WindowMessage>,
}

impl MessageHub {
    /// Creates a hub with a bounded per-subscriber backlog.
    pub fn new() -> Self {
        Self {
            tx: broadcast::channel(64).0,
        }
    }

    /// Posts a message to all current subscribers.
    pub fn post(&self, message: WindowMessage) {
        // Err here only means there are no subscribers right now.
        let _ = self.tx.send(message);
    }

    /// Subscribes to all messages posted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<WindowMessage> {
        self.tx.subscribe()
    }
}

impl Default for MessageHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a spawned message listener task.
///
/// The subscription owns the task; dropping it or calling
/// [unsubscribe](Self::unsubscribe) stops message handling.
#[derive(Debug)]
pub struct MessageSubscription {
    task: JoinHandle<()>,
}

impl MessageSubscription {
    /// Wraps a listener task.
    pub fn new(task: JoinHandle<()>) -> Self {
        Self { task }
    }

    /// Stops the listener.
    pub fn unsubscribe(self) {
        self.task.abort();
    }
}

impl Drop for MessageSubscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}
