//! Page-level application state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is
//! single-threaded). Nothing outside this module touches the fields
//! directly; event handlers go through the accessor functions.

use std::cell::RefCell;

use catalog_core::pagination::Pager;

/// localStorage key marking the logged-in user. Absence means "not
/// authenticated" as far as this page is concerned.
pub const USERNAME_KEY: &str = "username";

/// Central application state for the catalog page.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub pager: Pager,
    pub search: String,
    pub status_filter: String,
    pub pending_delete: Option<u32>,
}

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

// ── Convenience accessors ──

pub fn pager() -> Pager {
    with(|s| s.pager)
}

pub fn update_pager<F: FnOnce(&mut Pager)>(f: F) {
    with_mut(|s| f(&mut s.pager));
}

pub fn search() -> String {
    with(|s| s.search.clone())
}

pub fn set_search(term: &str) {
    with_mut(|s| s.search = term.to_string());
}

pub fn status_filter() -> String {
    with(|s| s.status_filter.clone())
}

pub fn set_status_filter(status: &str) {
    with_mut(|s| s.status_filter = status.to_string());
}

pub fn pending_delete() -> Option<u32> {
    with(|s| s.pending_delete)
}

pub fn set_pending_delete(id: Option<u32>) {
    with_mut(|s| s.pending_delete = id);
}

// ── localStorage helpers ──

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn local_get(key: &str) -> Option<String> {
    storage()?.get_item(key).ok()?
}

pub fn local_set(key: &str, value: &str) {
    if let Some(s) = storage() {
        let _ = s.set_item(key, value);
    }
}

pub fn local_remove(key: &str) {
    if let Some(s) = storage() {
        let _ = s.remove_item(key);
    }
}

/// The stored username, if any non-empty value is present.
pub fn username() -> Option<String> {
    local_get(USERNAME_KEY).filter(|u| !u.is_empty())
}

pub fn set_username(name: &str) {
    local_set(USERNAME_KEY, name);
}

pub fn clear_username() {
    local_remove(USERNAME_KEY);
}
