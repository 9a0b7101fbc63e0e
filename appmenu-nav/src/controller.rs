//! The menu controller: orchestrates tokens, menu sources and
//! message-driven refresh.

use crate::entry::{EntryPoint, MenuItem, UserInfo};
use crate::source::MenuSource;
use appmenu_core::{
    BindingCollection, BindingKeys, DataView, LoginMessage, MenuError, MessageHub,
    MessageSubscription, MessageValidator, ServiceCollection, TokenProvider, ViewToggle,
    WindowMessage,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::Mutex;

/// Auth-aware navigation menu controller.
///
/// Owns the current [EntryPoint] and pushes derived state through three view
/// bindings: a user-info view, a menu-items view and a logged-in toggle. A
/// validated login-success message from the popup window triggers an entry
/// point refresh followed by a full re-render.
///
/// Lifecycle: `Uninitialized` until [initialize](Self::initialize) completes
/// its first render, `Loaded` afterwards. A failed initialization leaves the
/// controller uninitialized with no retry; refresh cycles keep it loaded.
pub struct AppMenu<S: MenuSource> {
    user_info_view: Arc<dyn DataView<UserInfo>>,
    menu_items_view: Arc<dyn DataView<Vec<MenuItem>>>,
    logged_in_toggle: Arc<dyn ViewToggle>,
    validator: Arc<dyn MessageValidator>,
    source: Arc<S>,
    tokens: Arc<dyn TokenProvider>,
    entry: Mutex<Option<S::Entry>>,
    // Render passes stamp themselves here; only the newest pass commits.
    generation: AtomicU64,
}

impl<S: MenuSource + 'static> AppMenu<S> {
    /// Creates the controller with the default binding keys.
    ///
    /// Fails only when a binding cannot be resolved.
    pub fn new(
        bindings: &BindingCollection,
        validator: Arc<dyn MessageValidator>,
        source: Arc<S>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, MenuError> {
        Self::with_keys(bindings, &BindingKeys::default(), validator, source, tokens)
    }

    /// Creates the controller, resolving views under the given binding keys.
    pub fn with_keys(
        bindings: &BindingCollection,
        keys: &BindingKeys,
        validator: Arc<dyn MessageValidator>,
        source: Arc<S>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, MenuError> {
        Ok(Self {
            user_info_view: bindings.view::<UserInfo>(&keys.user_info)?,
            menu_items_view: bindings.view::<Vec<MenuItem>>(&keys.menu_items)?,
            logged_in_toggle: bindings.toggle(&keys.logged_in_area)?,
            validator,
            source,
            tokens,
            entry: Mutex::new(None),
            generation: AtomicU64::new(0),
        })
    }

    /// Resolves the controller's collaborators from a service collection.
    ///
    /// Requires a [BindingCollection], a `dyn` [MessageValidator], a `dyn`
    /// [TokenProvider] and the concrete menu source to be registered.
    pub fn from_services(services: &ServiceCollection) -> Result<Arc<Self>, MenuError> {
        let bindings = services
            .get_shared::<BindingCollection>()
            .ok_or(MenuError::MissingService("BindingCollection"))?;
        let validator = services
            .get_shared::<dyn MessageValidator>()
            .ok_or(MenuError::MissingService("MessageValidator"))?;
        let tokens = services
            .get_shared::<dyn TokenProvider>()
            .ok_or(MenuError::MissingService("TokenProvider"))?;
        let source = services
            .get_shared::<S>()
            .ok_or(MenuError::MissingService("MenuSource"))?;
        Ok(Arc::new(Self::new(&bindings, validator, source, tokens)?))
    }

    /// One-shot initial load: fetch the entry point, then render.
    ///
    /// A failure leaves the controller unrendered; there is no retry.
    pub async fn initialize(&self) {
        match self.source.entry_point().await {
            Ok(entry) => {
                *self.entry.lock().await = Some(entry);
                if let Err(err) = self.render().await {
                    log::warn!("initial menu render failed: {err}");
                }
            }
            Err(err) => log::warn!("menu entry point fetch failed: {err}"),
        }
    }

    /// Whether the initial entry point has been loaded.
    pub async fn is_loaded(&self) -> bool {
        self.entry.lock().await.is_some()
    }

    /// Re-derives and re-displays user info, menu items and the logged-in
    /// state.
    ///
    /// The token fetch strictly precedes the identity derivation, which
    /// precedes the menu projection; the three display updates are then
    /// committed together with no suspension point between them. When render
    /// passes overlap, only the most recently initiated pass commits.
    pub async fn render(&self) -> Result<(), MenuError> {
        let pass = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let token = self.tokens.access_token().await?;
        let user_data = self.source.user_data(token.as_ref()).await?;

        let entry = self.entry.lock().await;
        let items: Vec<MenuItem> = match entry.as_ref() {
            Some(entry) => self.source.create_menu(entry).collect(),
            None => Vec::new(),
        };

        if self.generation.load(Ordering::SeqCst) != pass {
            log::debug!("menu render pass {pass} superseded, not committing");
            return Ok(());
        }
        self.user_info_view.set_data(user_data);
        self.menu_items_view.set_data(items);
        self.logged_in_toggle.set_mode(token.is_some());
        Ok(())
    }

    /// Handles one raw window message.
    ///
    /// Messages failing origin validation, messages that do not decode as a
    /// login payload and login payloads without the login tag or without
    /// `success` are all discarded.
    pub async fn handle_message(&self, message: WindowMessage) {
        if !self.validator.is_valid(&message) {
            log::trace!(
                "discarding window message from untrusted origin '{}'",
                message.origin
            );
            return;
        }
        match LoginMessage::decode(&message.data) {
            Some(login) if login.is_successful_login() => self.reload_menu().await,
            Some(_) | None => {}
        }
    }

    /// Replaces the entry point and re-renders after a successful login.
    ///
    /// Does nothing while uninitialized or when the current entry point
    /// reports that a refresh is not meaningful. A failed refresh keeps the
    /// previous entry point and performs no render; the stale menu stays
    /// visible.
    async fn reload_menu(&self) {
        {
            let mut entry = self.entry.lock().await;
            let Some(current) = entry.as_ref() else {
                return;
            };
            if !current.can_refresh() {
                return;
            }
            let refreshed = current.refresh().await;
            match refreshed {
                Ok(next) => *entry = Some(next),
                Err(err) => {
                    log::warn!("menu refresh failed, keeping previous state: {err}");
                    return;
                }
            }
        }
        if let Err(err) = self.render().await {
            log::warn!("menu render after refresh failed: {err}");
        }
    }

    /// Subscribes this controller to a message hub.
    ///
    /// The returned subscription owns the listener task; dropping it stops
    /// message handling. The task holds only a weak reference to the
    /// controller and exits on its own once the controller is gone.
    pub fn listen(self: &Arc<Self>, hub: &MessageHub) -> MessageSubscription {
        let mut rx = hub.subscribe();
        let menu = Arc::downgrade(self);
        let task = tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(message) => {
                        let Some(menu) = menu.upgrade() else { break };
                        menu.handle_message(message).await;
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        log::warn!("menu message listener lagged, skipped {skipped} messages");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });
        MessageSubscription::new(task)
    }
}

/// Registers the menu source and controller as shared services.
///
/// The source is registered first, then a controller resolved from the
/// collection and registered too. Existing registrations are kept, so calling
/// this twice yields the same controller.
pub fn add_services<S: MenuSource + 'static>(
    services: &mut ServiceCollection,
    source: Arc<S>,
) -> Result<Arc<AppMenu<S>>, MenuError> {
    services.try_add_shared(source);
    match services.get_shared::<AppMenu<S>>() {
        Some(menu) => Ok(menu),
        None => {
            let menu = AppMenu::<S>::from_services(services)?;
            services.try_add_shared(menu.clone());
            Ok(menu)
        }
    }
}
