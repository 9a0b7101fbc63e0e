//! Access tokens and token providers.

use crate::error::MenuError;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Claim under which the user's display name is stored.
pub const NAME_CLAIM: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name";

/// An opaque bag of authentication claims.
///
/// The token itself is never interpreted beyond claim lookup; absence of a
/// token (`None` in provider results) denotes the anonymous state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessToken {
    claims: Map<String, Value>,
}

impl AccessToken {
    /// Creates a token from a claim map.
    pub fn new(claims: Map<String, Value>) -> Self {
        Self { claims }
    }

    /// Returns the raw value of a claim, if present.
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }

    /// Returns a claim as a string slice, if present and a string.
    pub fn string_claim(&self, name: &str) -> Option<&str> {
        self.claim(name).and_then(Value::as_str)
    }

    /// Adds a claim, replacing any previous value.
    pub fn with_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.claims.insert(name.into(), value.into());
        self
    }
}

/// Supplies the current access token.
///
/// The acquisition and refresh mechanics behind this are opaque to the menu
/// component.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns the current access token, or `None` when unauthenticated.
    async fn access_token(&self) -> Result<Option<AccessToken>, MenuError>;
}

/// A token provider backed by a shared, replaceable slot.
///
/// Clones share the slot, so an embedder can keep one handle to store new
/// tokens while the controller reads through another.
#[derive(Debug, Clone, Default)]
pub struct StoredTokenProvider {
    slot: Arc<RwLock<Option<AccessToken>>>,
}

impl StoredTokenProvider {
    /// Creates a provider holding the given token.
    pub fn new(token: Option<AccessToken>) -> Self {
        Self {
            slot: Arc::new(RwLock::new(token)),
        }
    }

    /// Replaces the stored token.
    pub async fn store(&self, token: Option<AccessToken>) {
        *self.slot.write().await = token;
    }
}

#[async_trait]
impl TokenProvider for StoredTokenProvider {
    async fn access_token(&self) -> Result<Option<AccessToken>, MenuError> {
        Ok(self.slot.read().await.clone())
    }
}
