//! Example: wire up the auth-aware app menu
//!
//! This example runs the controller against an in-memory backend, prints every
//! display update, and simulates a login popup posting its success message.

use appmenu_core::{
    AccessToken, BindingCollection, DataView, MenuError, MessageHub, OriginValidator,
    StoredTokenProvider, ViewToggle, WindowMessage, NAME_CLAIM,
};
use appmenu_nav::{AppMenu, EntryPoint, MenuItem, MenuSource, UserInfo};
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
struct DemoEntry {
    signed_in: bool,
}

#[async_trait]
impl EntryPoint for DemoEntry {
    fn can_refresh(&self) -> bool {
        true
    }

    async fn refresh(&self) -> Result<Self, MenuError> {
        Ok(Self { signed_in: true })
    }
}

struct DemoSource;

#[async_trait]
impl MenuSource for DemoSource {
    type Entry = DemoEntry;

    async fn entry_point(&self) -> Result<DemoEntry, MenuError> {
        Ok(DemoEntry { signed_in: false })
    }

    fn create_menu<'a>(
        &'a self,
        entry: &'a DemoEntry,
    ) -> Box<dyn Iterator<Item = MenuItem> + Send + 'a> {
        let mut items = vec![MenuItem::new("Home", "/")];
        if entry.signed_in {
            items.push(MenuItem::new("Account", "/account"));
            items.push(MenuItem::new("Sign out", "/logout"));
        }
        Box::new(items.into_iter())
    }
}

struct PrintView(&'static str);

impl DataView<UserInfo> for PrintView {
    fn set_data(&self, value: UserInfo) {
        println!("{}: {}", self.0, value.user_name);
    }
}

impl DataView<Vec<MenuItem>> for PrintView {
    fn set_data(&self, value: Vec<MenuItem>) {
        println!("{}:", self.0);
        for item in value {
            println!("  {} -> {}", item.text, item.href);
        }
    }
}

impl ViewToggle for PrintView {
    fn set_mode(&self, on: bool) {
        println!("{}: {}", self.0, if on { "shown" } else { "hidden" });
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut bindings = BindingCollection::new();
    bindings.add_view::<UserInfo>("userInfo", Arc::new(PrintView("user info")));
    bindings.add_view::<Vec<MenuItem>>("menuItems", Arc::new(PrintView("menu")));
    bindings.add_toggle("loggedInArea", Arc::new(PrintView("logged-in area")));

    let tokens = StoredTokenProvider::new(Some(
        AccessToken::default().with_claim(NAME_CLAIM, "alice"),
    ));
    let menu = Arc::new(AppMenu::new(
        &bindings,
        Arc::new(OriginValidator::new(["https://login.example.com"])),
        Arc::new(DemoSource),
        Arc::new(tokens),
    )?);

    menu.initialize().await;

    let hub = MessageHub::new();
    let _subscription = menu.listen(&hub);

    println!("\n-- popup reports a successful login --\n");
    hub.post(WindowMessage::new(
        "https://login.example.com",
        json!({ "type": "login", "success": true }),
    ));

    // Give the listener a moment to process the refresh.
    tokio::time::sleep(Duration::from_millis(100)).await;

    Ok(())
}
