//! Catalog table rendering and pagination controls.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use catalog_core::model::Catalog;

use crate::catalog_ops;
use crate::dom::{self, Elements};
use crate::state;

/// Render the listing. Edit/Delete action buttons appear only when a
/// user is logged in; the server still enforces authorization.
pub fn render_catalogs(els: &Elements, catalogs: &[Catalog]) {
    let body = &els.catalog_table_body;
    dom::set_inner_html(body, "");

    if catalogs.is_empty() {
        dom::set_displayed(&els.no_catalogs_message, true);
        return;
    }
    dom::set_displayed(&els.no_catalogs_message, false);

    let authenticated = state::username().is_some();

    for catalog in catalogs {
        let row = dom::create_element("tr");
        let _ = row.set_attribute("data-id", &catalog.catalog_id.to_string());

        let actions = if authenticated {
            format!(
                r#"<td class="actions">
                    <button class="btn-small btn-edit" data-id="{id}">Edit</button>
                    <button class="btn-small btn-delete" data-id="{id}">Delete</button>
                </td>"#,
                id = catalog.catalog_id,
            )
        } else {
            r#"<td class="actions"></td>"#.to_string()
        };

        let html = format!(
            r#"
            <td data-label="ID">{}</td>
            <td data-label="Name">{}</td>
            <td data-label="Description">{}</td>
            <td data-label="Start Date">{}</td>
            <td data-label="End Date">{}</td>
            <td data-label="Status">{}</td>
            {}
            "#,
            catalog.catalog_id,
            escape(&catalog.catalog_name),
            escape(&catalog.catalog_description),
            escape(&catalog.start_date),
            escape(&catalog.end_date),
            escape(&catalog.status),
            actions,
        );

        dom::set_inner_html(&row, &html);
        let _ = body.append_child(&row);
    }

    wire_row_buttons(els);
}

/// Clear the table and show the placeholder (empty result or failed
/// fetch both land here).
pub fn render_empty(els: &Elements) {
    dom::set_inner_html(&els.catalog_table_body, "");
    dom::set_displayed(&els.no_catalogs_message, true);
}

/// Sync the prev/next buttons and page label with the pager.
pub fn update_pagination(els: &Elements) {
    let pager = state::pager();
    els.prev_page_btn.set_disabled(!pager.has_prev());
    els.next_page_btn.set_disabled(!pager.has_next());
    dom::set_text(&els.page_info, &pager.label());
}

/// Wire click events on the freshly rendered row buttons.
fn wire_row_buttons(els: &Elements) {
    let body = &els.catalog_table_body;

    for btn in dom::query_all_within(body, ".btn-edit") {
        let Some(id) = row_id(&btn) else { continue };
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let els3 = els2.clone();
            wasm_bindgen_futures::spawn_local(async move {
                catalog_ops::on_edit(&els3, id).await;
            });
        }) as Box<dyn FnMut(_)>);
        btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }

    for btn in dom::query_all_within(body, ".btn-delete") {
        let Some(id) = row_id(&btn) else { continue };
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            catalog_ops::prompt_delete(&els2, id);
        }) as Box<dyn FnMut(_)>);
        btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
}

fn row_id(btn: &web_sys::Element) -> Option<u32> {
    btn.get_attribute("data-id")?.parse().ok()
}

/// Minimal HTML escaping for user-entered text interpolated into rows.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[cfg(not(target_arch = "wasm32"))]
mod tests {
    use super::escape;

    #[test]
    fn escape_neutralizes_markup() {
        assert_eq!(
            escape(r#"<b>"spring" & 'summer'</b>"#),
            "&lt;b&gt;&quot;spring&quot; &amp; &#39;summer&#39;&lt;/b&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }
}
