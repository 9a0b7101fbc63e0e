#![warn(missing_docs)]

//! Auth-aware application menu component.
//!
//! The menu derives its contents from a pluggable [MenuSource](nav::MenuSource)
//! and the current access token, and re-synchronizes itself when a login popup
//! window posts a validated "login succeeded" message.

pub use appmenu_core as core;
pub use appmenu_nav as nav;

/// A "prelude" for embedders of the appmenu component.
///
/// Importing this module brings into scope the types needed to wire the
/// controller into an application.
///
/// ```rust
/// use appmenu::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::{
        AccessToken, AuthError, BindingCollection, BindingKeys, DataView, LoginMessage,
        MenuConfig, MenuError, MessageHub, MessageSubscription, MessageValidator,
        OriginValidator, ServiceCollection, StoredTokenProvider, TokenProvider, ViewToggle,
        WindowMessage, LOGIN_MESSAGE_TYPE, NAME_CLAIM,
    };
    pub use crate::nav::{
        add_services, default_user_data, AppMenu, EntryPoint, MenuItem, MenuSource, UserInfo,
    };
}
