//! Catalog CRUD flows.
//!
//! Each function corresponds to one user action against the backend.
//! Wiring lives in `events.rs`; rendering in `table.rs`.

use chrono::NaiveDate;
use gloo_console::debug;

use catalog_core::error::ApiError;
use catalog_core::model::{Catalog, CatalogPayload, ListResponse};
use catalog_core::query::ListQuery;
use catalog_core::validate::{self, FormInput};

use crate::api;
use crate::dom::{self, Elements};
use crate::feedback::{self, MessageKind};
use crate::state;
use crate::table;

/// GET /api/catalogs: fetch the current page with the active search
/// and status filter, then re-render the table and pagination.
pub async fn load_catalogs(els: &Elements) {
    // At most two fetches: a second one only when the current page fell
    // off the end of a shrunken result set and the pager was clamped.
    for _ in 0..2 {
        let pager = state::pager();
        let query = ListQuery {
            search: state::search(),
            status: state::status_filter(),
            page: pager.page,
            per_page: pager.per_page,
        };
        let path = format!("/api/catalogs{}", query.to_query_string());
        debug!("loading catalogs", path.clone());

        match api::request(&path, "GET", None).await {
            Ok(result) => {
                let resp: ListResponse = serde_json::from_value(result).unwrap_or_default();
                state::update_pager(|p| p.set_total(resp.total_catalogs));
                if resp.data.is_empty() && state::pager().page != pager.page {
                    continue;
                }
                table::render_catalogs(els, &resp.data);
            }
            Err(_) => {
                // Banner already shown; leave the table in the explicit
                // empty state so rows never contradict the pager.
                state::update_pager(|p| p.set_total(0));
                table::render_empty(els);
            }
        }
        break;
    }

    table::update_pagination(els);
}

/// GET /api/catalogs/{id}: populate the editor and open it.
pub async fn on_edit(els: &Elements, id: u32) {
    match api::request(&format!("/api/catalogs/{id}"), "GET", None).await {
        Ok(result) => {
            let catalog = result
                .get("data")
                .cloned()
                .and_then(|v| serde_json::from_value::<Catalog>(v).ok());
            match catalog {
                Some(catalog) => {
                    fill_form(els, &catalog);
                    feedback::clear_form_errors(els);
                    feedback::set_edit_mode(els);
                    feedback::show_modal(&els.catalog_modal);
                }
                None => feedback::show_message(
                    &format!("Catalog ID {id} not found."),
                    MessageKind::Error,
                ),
            }
        }
        Err(_) => {} // banner already shown by the api client
    }
}

/// POST /api/catalogs (create) or PUT /api/catalogs/{id} (edit).
pub async fn on_submit(els: &Elements) {
    feedback::clear_form_errors(els);

    let input = read_form(els);
    let errors = validate::validate(&input, local_today());
    if !errors.is_empty() {
        feedback::render_field_errors(els, &errors);
        return;
    }

    let payload = CatalogPayload {
        name: input.name.trim().to_string(),
        description: input.description.trim().to_string(),
        start_date: input.start_date.clone(),
        end_date: input.end_date.clone(),
        status: input.status.to_lowercase(),
    };
    let Ok(body) = serde_json::to_string(&payload) else {
        return;
    };

    let id: Option<u32> = dom::get_input_value(&els.catalog_id).parse().ok();
    let (path, method) = match id {
        Some(id) => (format!("/api/catalogs/{id}"), "PUT"),
        None => ("/api/catalogs".to_string(), "POST"),
    };

    match api::request(&path, method, Some(body)).await {
        Ok(result) => {
            let message = result
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("Catalog saved successfully.")
                .to_string();
            feedback::show_message(&message, MessageKind::Success);
            feedback::hide_modal(&els.catalog_modal);
            feedback::reset_catalog_form(els);
            state::update_pager(|p| p.reset());
            load_catalogs(els).await;
        }
        Err(ApiError::Api {
            detail,
            field: Some(field),
            ..
        }) => {
            // The banner carries the message too; the slot pins it to
            // the offending field while the modal stays open.
            feedback::set_field_error(els, field, &detail);
        }
        Err(_) => {} // banner already shown by the api client
    }
}

/// Open the confirmation modal for a pending delete.
pub fn prompt_delete(els: &Elements, id: u32) {
    state::set_pending_delete(Some(id));
    dom::set_text(
        &els.confirm_message,
        &format!("Are you sure you want to delete catalog ID {id}? This action cannot be undone."),
    );
    feedback::show_modal(&els.confirm_modal);
}

/// DELETE /api/catalogs/{id}. The confirmation modal closes and the
/// pending id clears regardless of the outcome.
pub async fn on_confirm_delete(els: &Elements) {
    let Some(id) = state::pending_delete() else {
        return;
    };

    let result = api::request(&format!("/api/catalogs/{id}"), "DELETE", None).await;

    feedback::hide_modal(&els.confirm_modal);
    state::set_pending_delete(None);
    dom::set_text(&els.confirm_message, "");

    if let Ok(value) = result {
        let message = value
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("Catalog deleted successfully.")
            .to_string();
        feedback::show_message(&message, MessageKind::Success);
        state::update_pager(|p| p.reset());
        load_catalogs(els).await;
    }
}

// ── Form plumbing ──

fn read_form(els: &Elements) -> FormInput {
    FormInput {
        name: dom::get_input_value(&els.catalog_name),
        description: dom::get_input_value(&els.catalog_description),
        start_date: els.start_date.value(),
        end_date: els.end_date.value(),
        status: dom::get_select_value(&els.status),
    }
}

fn fill_form(els: &Elements, catalog: &Catalog) {
    els.catalog_id.set_value(&catalog.catalog_id.to_string());
    els.catalog_name.set_value(&catalog.catalog_name);
    els.catalog_description
        .set_value(&catalog.catalog_description);
    els.start_date.set_value(&catalog.start_date);
    els.end_date.set_value(&catalog.end_date);
    els.status.set_value(&catalog.status.to_lowercase());
}

/// Today in the browser's local time zone, date only.
fn local_today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() as u32 + 1,
        now.get_date() as u32,
    )
    .unwrap_or_default()
}
