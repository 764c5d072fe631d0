//! CatalogDesk WASM frontend.
//!
//! Browser client for the catalog management pages. Pure decision
//! logic (validation, pagination, error routing) lives in the
//! `catalog-core` crate; this crate binds it to the DOM.

pub mod api;
pub mod auth;
pub mod catalog_ops;
pub mod dom;
pub mod events;
pub mod feedback;
pub mod state;
pub mod table;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init().await
}

/// Main initialisation sequence. The catalog listing auto-loads only
/// on `/home`; any other page is probed for a login form.
async fn init() -> Result<(), JsValue> {
    let path = dom::window().location().pathname().unwrap_or_default();

    if path == "/home" {
        let els = dom::Elements::bind()?;
        auth::update_auth_ui();
        events::bind_events(&els);
        catalog_ops::load_catalogs(&els).await;
    } else if let Some(login) = dom::LoginElements::bind() {
        events::bind_login_events(&login);
    }

    Ok(())
}
