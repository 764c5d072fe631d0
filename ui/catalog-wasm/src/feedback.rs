//! User feedback: modals, banners, spinner, field errors.

use gloo_timers::future::TimeoutFuture;
use web_sys::Element;

use catalog_core::validate::{FieldErrors, FieldKey};

use crate::dom::{self, Elements};

/// Banners auto-dismiss after this long.
const MESSAGE_TTL_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    fn class_suffix(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

// ── Modals ──

pub fn show_modal(modal: &Element) {
    dom::add_class(modal, "show");
    let _ = modal.set_attribute("aria-hidden", "false");
}

pub fn hide_modal(modal: &Element) {
    dom::remove_class(modal, "show");
    let _ = modal.set_attribute("aria-hidden", "true");
}

// ── Banners ──

/// Render a transient banner into `#message-container`, replacing any
/// banner already there. No-op on pages without the container.
pub fn show_message(text: &str, kind: MessageKind) {
    let Some(container) = dom::by_id("message-container") else {
        return;
    };

    let alert = dom::create_element("div");
    let _ = alert.set_attribute("class", &format!("alert alert-{}", kind.class_suffix()));
    dom::set_text(&alert, text);
    dom::set_inner_html(&container, "");
    let _ = container.append_child(&alert);

    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(MESSAGE_TTL_MS).await;
        alert.remove();
    });
}

// ── Spinner ──

pub fn show_spinner() {
    if let Some(spinner) = dom::by_id("loadingSpinner") {
        dom::add_class(&spinner, "show");
    }
}

pub fn hide_spinner() {
    if let Some(spinner) = dom::by_id("loadingSpinner") {
        dom::remove_class(&spinner, "show");
    }
}

// ── Form errors ──

fn error_slot<'a>(els: &'a Elements, field: FieldKey) -> &'a Element {
    match field {
        FieldKey::Name => &els.catalog_name_error,
        FieldKey::Description => &els.catalog_description_error,
        FieldKey::StartDate => &els.start_date_error,
        FieldKey::EndDate => &els.end_date_error,
        FieldKey::Status => &els.status_error,
    }
}

pub fn set_field_error(els: &Elements, field: FieldKey, message: &str) {
    dom::set_text(error_slot(els, field), message);
}

pub fn clear_form_errors(els: &Elements) {
    for field in [
        FieldKey::Name,
        FieldKey::Description,
        FieldKey::StartDate,
        FieldKey::EndDate,
        FieldKey::Status,
    ] {
        dom::set_text(error_slot(els, field), "");
    }
}

pub fn render_field_errors(els: &Elements, errors: &FieldErrors) {
    for (field, message) in errors.iter() {
        set_field_error(els, field, message);
    }
}

// ── Catalog form ──

/// Return the editor to its pristine create-mode state.
pub fn reset_catalog_form(els: &Elements) {
    els.catalog_form.reset();
    els.catalog_id.set_value("");
    dom::set_text(&els.submit_catalog_btn, "Create Catalog");
    dom::set_text(&els.catalog_modal_title, "Create New Catalog");
    clear_form_errors(els);
}

/// Switch the editor into edit mode for an existing record.
pub fn set_edit_mode(els: &Elements) {
    dom::set_text(&els.submit_catalog_btn, "Update Catalog");
    dom::set_text(&els.catalog_modal_title, "Edit Catalog");
}
