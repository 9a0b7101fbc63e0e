//! Component configuration.
//!
//! Configuration is loaded from `config.toml` in the XDG config directory for
//! the `appmenu` prefix (typically `~/.config/appmenu/config.toml`). A missing
//! file yields the defaults; a present but malformed file is an error.

use crate::error::MenuError;
use crate::message::OriginValidator;
use crate::token::NAME_CLAIM;
use serde::Deserialize;
use std::path::Path;
use xdg::BaseDirectories;

/// Binding keys the controller resolves at construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BindingKeys {
    /// Key of the user-info data view.
    pub user_info: String,
    /// Key of the menu-items data view.
    pub menu_items: String,
    /// Key of the logged-in toggle.
    pub logged_in_area: String,
}

impl Default for BindingKeys {
    fn default() -> Self {
        Self {
            user_info: "userInfo".to_string(),
            menu_items: "menuItems".to_string(),
            logged_in_area: "loggedInArea".to_string(),
        }
    }
}

/// Configuration for the menu component.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Origins the login popup is allowed to post from.
    pub trusted_origins: Vec<String>,
    /// Claim the default identity derivation reads the display name from.
    ///
    /// Falls back to the standard display-name claim when unset.
    pub name_claim: Option<String>,
    /// Binding keys.
    pub bindings: BindingKeys,
}

impl MenuConfig {
    /// Loads configuration from the XDG config directory.
    pub async fn load() -> Result<Self, MenuError> {
        let dirs = BaseDirectories::with_prefix("appmenu")?;
        match dirs.find_config_file("config.toml") {
            Some(path) => Self::from_path(&path).await,
            None => {
                log::debug!("no appmenu config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a specific TOML file.
    pub async fn from_path(path: &Path) -> Result<Self, MenuError> {
        let raw = tokio::fs::read_to_string(path).await?;
        Ok(toml::from_str(&raw)?)
    }

    /// Claim the display name is read from.
    pub fn name_claim(&self) -> &str {
        self.name_claim.as_deref().unwrap_or(NAME_CLAIM)
    }

    /// Builds an origin validator from the configured allow list.
    pub fn origin_validator(&self) -> OriginValidator {
        OriginValidator::new(self.trusted_origins.iter().cloned())
    }
}
