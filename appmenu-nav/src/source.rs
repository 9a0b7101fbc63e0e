//! The pluggable backend that projects an entry point into menu content.

use crate::entry::{EntryPoint, MenuItem, UserInfo};
use appmenu_core::{AccessToken, AuthError, MenuError, NAME_CLAIM};
use async_trait::async_trait;

/// Backend abstraction turning an entry point into user info and menu items.
///
/// Implementations are polymorphic over the authentication backend; the
/// controller only ever talks to this trait.
#[async_trait]
pub trait MenuSource: Send + Sync {
    /// Concrete authenticated-context type of this backend.
    type Entry: EntryPoint;

    /// Fetches the initial entry point.
    ///
    /// The caller does not retry on failure.
    async fn entry_point(&self) -> Result<Self::Entry, MenuError>;

    /// Projects an entry point into menu items.
    ///
    /// Pure and synchronous; a fresh, finite iterator is produced per call.
    fn create_menu<'a>(
        &'a self,
        entry: &'a Self::Entry,
    ) -> Box<dyn Iterator<Item = MenuItem> + Send + 'a>;

    /// Derives user display info for the given token.
    ///
    /// The default reads the display-name claim from the token; backends may
    /// override this to fetch richer profile data and can still fall back to
    /// [default_user_data].
    async fn user_data(&self, token: Option<&AccessToken>) -> Result<UserInfo, MenuError> {
        default_user_data(token)
    }
}

/// Default identity derivation: extract the standard display-name claim.
pub fn default_user_data(token: Option<&AccessToken>) -> Result<UserInfo, MenuError> {
    user_data_from_claim(token, NAME_CLAIM)
}

/// Identity derivation from an arbitrary claim.
///
/// A missing token and a missing claim are distinct, explicit error kinds.
pub fn user_data_from_claim(
    token: Option<&AccessToken>,
    claim: &str,
) -> Result<UserInfo, MenuError> {
    let token = token.ok_or(AuthError::NotAuthenticated)?;
    let user_name = token
        .string_claim(claim)
        .ok_or_else(|| AuthError::MissingClaim(claim.to_string()))?
        .to_string();
    Ok(UserInfo { user_name })
}
