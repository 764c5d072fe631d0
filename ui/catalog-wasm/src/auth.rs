//! Login/logout flows and auth-dependent UI.
//!
//! The stored username is a presentation hint only; every real
//! authorization decision happens server-side against the JWT cookie.

use wasm_bindgen::JsCast;

use catalog_core::error::SESSION_EXPIRED;
use catalog_core::model::LoginUser;

use crate::api;
use crate::dom::{self, LoginElements};
use crate::feedback::{self, MessageKind};
use crate::state;

/// POST /api/login.
pub async fn on_login(els: &LoginElements) {
    dom::set_text(&els.login_error, "");

    let username_or_email = dom::get_input_value(&els.username_or_email);
    let password = els.password.value();
    if username_or_email.is_empty() || password.is_empty() {
        dom::set_text(
            &els.login_error,
            "Username/Email and password are required.",
        );
        return;
    }

    let body = serde_json::json!({
        "username_or_email": username_or_email,
        "password": password,
    });

    match api::request("/api/login", "POST", Some(body.to_string())).await {
        Ok(result) => {
            let user = result
                .get("data")
                .cloned()
                .and_then(|v| serde_json::from_value::<LoginUser>(v).ok())
                .unwrap_or_default();
            if !user.username.is_empty() {
                state::set_username(&user.username);
            }
            let redirect = result
                .get("redirect_to")
                .and_then(|v| v.as_str())
                .unwrap_or("/home")
                .to_string();
            navigate(&redirect);
        }
        Err(e) => dom::set_text(&els.login_error, &e.to_string()),
    }
}

/// POST /api/logout.
pub async fn on_logout() {
    match api::request("/api/logout", "POST", None).await {
        Ok(result) => {
            state::clear_username();
            let redirect = result
                .get("redirect_to")
                .and_then(|v| v.as_str())
                .unwrap_or("/login")
                .to_string();
            navigate(&redirect);
        }
        Err(_) => {} // banner already shown; a 401 has redirected anyway
    }
}

/// Show/hide authenticated-only controls from the stored username.
/// Safe to call on any page; missing elements are skipped.
pub fn update_auth_ui() {
    let username = state::username();

    if let Some(btn) = dom::by_id_typed::<web_sys::HtmlElement>("logoutBtn") {
        dom::set_displayed(&btn, username.is_some());
    }
    if let Some(btn) = dom::by_id_typed::<web_sys::HtmlElement>("createCatalogBtn") {
        dom::set_displayed(&btn, username.is_some());
    }
    if let Some(label) = dom::by_id("welcomeUser") {
        match &username {
            Some(name) => dom::set_text(&label, &format!("Welcome, {name}")),
            None => dom::set_text(&label, ""),
        }
        if let Ok(label) = label.dyn_into::<web_sys::HtmlElement>() {
            dom::set_displayed(&label, username.is_some());
        }
    }
}

/// Shared 401/403 path: drop local auth state and return to the login
/// page. Runs exactly once per failing call, from the api client.
pub fn force_logout() {
    feedback::show_message(SESSION_EXPIRED, MessageKind::Error);
    state::clear_username();
    update_auth_ui();
    navigate("/login");
}

fn navigate(path: &str) {
    let _ = dom::window().location().set_href(path);
}
