//! Entry points: the authenticated context the menu is derived from.

use appmenu_core::MenuError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single navigation menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Label shown to the user.
    pub text: String,
    /// Target address.
    pub href: String,
}

impl MenuItem {
    /// Creates a menu item.
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}

/// User identity displayed alongside the menu.
///
/// Derived from the access token on every render, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Display name of the signed-in user.
    pub user_name: String,
}

/// Handle to the current authenticated context.
///
/// Entry points are replaced, never mutated in place: [refresh](Self::refresh)
/// produces the successor value and the caller discards the previous one.
#[async_trait]
pub trait EntryPoint: Send + Sync + Sized {
    /// Whether a refresh is currently meaningful.
    fn can_refresh(&self) -> bool;

    /// Fetches a replacement entry point.
    async fn refresh(&self) -> Result<Self, MenuError>;
}
