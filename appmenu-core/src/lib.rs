//! Infrastructure for the appmenu component: access tokens, cross-window
//! messaging, view bindings, shared services and configuration.

pub mod config;
pub mod error;
pub mod message;
pub mod services;
pub mod token;
pub mod view;

pub use config::{BindingKeys, MenuConfig};
pub use error::{AuthError, MenuError};
pub use message::{
    LoginMessage, MessageHub, MessageSubscription, MessageValidator, OriginValidator,
    WindowMessage, LOGIN_MESSAGE_TYPE,
};
pub use services::ServiceCollection;
pub use token::{AccessToken, StoredTokenProvider, TokenProvider, NAME_CLAIM};
pub use view::{BindingCollection, DataView, ViewToggle};
