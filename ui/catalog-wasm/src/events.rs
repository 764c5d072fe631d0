//! Event binding.
//!
//! Wires all UI event listeners and dispatches to the flow modules.
//! To add new events, add closures here and (if async) spawn via
//! `wasm_bindgen_futures::spawn_local`.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::auth;
use crate::catalog_ops;
use crate::dom::{self, Elements, LoginElements};
use crate::feedback;
use crate::state;

/// Helper: attach async click handler to an element.
macro_rules! on_click_async {
    ($el:expr, $els:expr, $handler:expr) => {{
        let els = $els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let els2 = els.clone();
            wasm_bindgen_futures::spawn_local(async move {
                $handler(&els2).await;
            });
        }) as Box<dyn FnMut(_)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }};
}

/// Helper: attach sync click handler.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        let cb = Closure::wrap(Box::new($cb) as Box<dyn FnMut(web_sys::MouseEvent)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }};
}

/// Bind all catalog-page listeners. Call once after init.
pub fn bind_events(els: &Elements) {
    // ── Toolbar ──
    {
        let els2 = els.clone();
        on_click!(els.create_catalog_btn, move |_: web_sys::MouseEvent| {
            feedback::reset_catalog_form(&els2);
            feedback::show_modal(&els2.catalog_modal);
        });
    }

    on_click!(els.logout_btn, move |_: web_sys::MouseEvent| {
        wasm_bindgen_futures::spawn_local(async move {
            auth::on_logout().await;
        });
    });

    // ── Search and status filter: both restart from page 1 ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            state::set_search(&dom::get_input_value(&els2.search_input));
            state::update_pager(|p| p.reset());
            let els3 = els2.clone();
            wasm_bindgen_futures::spawn_local(async move {
                catalog_ops::load_catalogs(&els3).await;
            });
        }) as Box<dyn FnMut(_)>);
        els.search_input
            .add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            state::set_status_filter(&dom::get_select_value(&els2.status_filter));
            state::update_pager(|p| p.reset());
            let els3 = els2.clone();
            wasm_bindgen_futures::spawn_local(async move {
                catalog_ops::load_catalogs(&els3).await;
            });
        }) as Box<dyn FnMut(_)>);
        els.status_filter
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    // ── Pagination ──
    {
        let els2 = els.clone();
        on_click!(els.prev_page_btn, move |_: web_sys::MouseEvent| {
            state::update_pager(|p| p.back());
            let els3 = els2.clone();
            wasm_bindgen_futures::spawn_local(async move {
                catalog_ops::load_catalogs(&els3).await;
            });
        });
    }
    {
        let els2 = els.clone();
        on_click!(els.next_page_btn, move |_: web_sys::MouseEvent| {
            state::update_pager(|p| p.forward());
            let els3 = els2.clone();
            wasm_bindgen_futures::spawn_local(async move {
                catalog_ops::load_catalogs(&els3).await;
            });
        });
    }

    // ── Catalog editor ──
    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
            e.prevent_default();
            let els3 = els2.clone();
            wasm_bindgen_futures::spawn_local(async move {
                catalog_ops::on_submit(&els3).await;
            });
        }) as Box<dyn FnMut(_)>);
        els.catalog_form
            .add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
    {
        let els2 = els.clone();
        on_click!(els.close_modal_btn, move |_: web_sys::MouseEvent| {
            feedback::hide_modal(&els2.catalog_modal);
        });
    }

    // ── Delete confirmation ──
    on_click_async!(els.confirm_delete_btn, els, catalog_ops::on_confirm_delete);
    {
        let els2 = els.clone();
        on_click!(els.cancel_delete_btn, move |_: web_sys::MouseEvent| {
            feedback::hide_modal(&els2.confirm_modal);
            state::set_pending_delete(None);
            dom::set_text(&els2.confirm_message, "");
        });
    }
    {
        let els2 = els.clone();
        on_click!(els.close_confirm_modal_btn, move |_: web_sys::MouseEvent| {
            feedback::hide_modal(&els2.confirm_modal);
        });
    }

    // ── Close either modal by clicking its backdrop ──
    for modal in [&els.catalog_modal, &els.confirm_modal] {
        let modal2 = modal.clone();
        let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok());
            if let Some(target) = target {
                if target.is_same_node(Some(modal2.unchecked_ref())) {
                    feedback::hide_modal(&modal2);
                }
            }
        }) as Box<dyn FnMut(_)>);
        modal
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
}

/// Bind the login form. Call once on the login page.
pub fn bind_login_events(els: &LoginElements) {
    let els2 = els.clone();
    let cb = Closure::wrap(Box::new(move |e: web_sys::Event| {
        e.prevent_default();
        let els3 = els2.clone();
        wasm_bindgen_futures::spawn_local(async move {
            auth::on_login(&els3).await;
        });
    }) as Box<dyn FnMut(_)>);
    els.login_form
        .add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())
        .unwrap();
    cb.forget();
}
